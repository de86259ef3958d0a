//! The reports page: inflow and outflow broken down by category.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    charts::{ReportChart, category_label, category_pie_chart, charts_script, charts_view},
    currency::format_amount,
    endpoints,
    html::{
        HeadElement, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        amount_class, base,
    },
    navigation::Header,
    selectors::{TransactionSummary, format_as_percentage, sort_transactions},
};

/// One side of the report, e.g. all outflow grouped by category.
struct FlowReport {
    id: &'static str,
    chart_id: &'static str,
    title: &'static str,
    /// Per-category totals, largest first.
    summaries: Vec<TransactionSummary>,
    /// The sum of the summaries' magnitudes.
    total: f64,
    /// Whether the amounts are money going out.
    is_outflow: bool,
}

impl FlowReport {
    fn new(
        id: &'static str,
        title: &'static str,
        summaries: &[TransactionSummary],
        balance: f64,
        is_outflow: bool,
    ) -> Self {
        Self {
            id,
            chart_id: if is_outflow {
                "outflow-chart"
            } else {
                "inflow-chart"
            },
            title,
            summaries: sort_transactions(summaries),
            total: balance.abs(),
            is_outflow,
        }
    }
}

/// Display the inflow and outflow totals per category.
pub async fn get_reports_page(State(state): State<AppState>) -> Result<Response, Error> {
    let reports = state
        .select(|selectors, budget| {
            let inflow_balance = selectors.get_inflow_balance(budget);
            let outflow_balance = selectors.get_outflow_balance(budget);

            [
                FlowReport::new(
                    "inflow",
                    "Inflow",
                    &selectors.get_inflow_by_category_name(budget),
                    inflow_balance,
                    false,
                ),
                FlowReport::new(
                    "outflow",
                    "Outflow",
                    &selectors.get_outflow_by_category_name(budget),
                    outflow_balance,
                    true,
                ),
            ]
        })?;

    Ok(reports_view(&reports).into_response())
}

fn reports_view(reports: &[FlowReport; 2]) -> Markup {
    let header = Header::new(endpoints::REPORTS_VIEW).into_html();

    let charts: Vec<ReportChart> = reports
        .iter()
        .filter(|report| !report.summaries.is_empty())
        .map(|report| ReportChart {
            id: report.chart_id,
            options: category_pie_chart(report.title, &report.summaries).to_string(),
        })
        .collect();

    let content = html!(
        (header)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-5xl space-y-8"
            {
                h1 class="text-xl font-bold" { "Reports" }

                (charts_view(&charts))

                @for report in reports {
                    (report_table(report))
                }
            }
        }
    );

    let scripts = if charts.is_empty() {
        Vec::new()
    } else {
        vec![
            HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
            charts_script(&charts),
        ]
    };

    base("Reports", &scripts, &content)
}

fn report_table(report: &FlowReport) -> Markup {
    let value_class = amount_class(if report.is_outflow { -1.0 } else { 1.0 });

    html!(
        section id=(report.id)
        {
            h2 class="text-lg font-semibold mb-2" { (report.title) " by category" }

            table class="w-full text-sm text-left rtl:text-right
                text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Total" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Share" }
                    }
                }

                tbody
                {
                    @for summary in &report.summaries {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) { (category_label(summary)) }
                            td class={ (TABLE_CELL_STYLE) " " (value_class) }
                            {
                                (format_amount(summary.value, report.is_outflow))
                            }
                            td class=(TABLE_CELL_STYLE)
                            {
                                (format_as_percentage(summary.value / report.total))
                            }
                        }
                    }

                    @if report.summaries.is_empty() {
                        tr
                        {
                            td
                                colspan="3"
                                class="px-6 py-4 text-center
                                    text-gray-500 dark:text-gray-400"
                            {
                                "No " (report.title.to_lowercase()) " yet."
                            }
                        }
                    }
                }
            }
        }
    )
}
