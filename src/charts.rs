//! Chart generation and rendering for the reports page.
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with a matching HTML container and JavaScript initialization code.

use charming::{
    Chart,
    component::{Legend, Title},
    element::{JsFunction, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};

use crate::{html::HeadElement, selectors::TransactionSummary};

/// A chart with its HTML container ID and ECharts configuration.
pub(crate) struct ReportChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for the charts.
pub(crate) fn charts_view(charts: &[ReportChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for the charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(crate) fn charts_script(charts: &[ReportChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// A pie chart with one slice per category.
///
/// Slices are labelled with the category name, or the category ID if the
/// category has no name.
pub(crate) fn category_pie_chart(title: &str, summaries: &[TransactionSummary]) -> Chart {
    let data: Vec<(f64, String)> = summaries
        .iter()
        .map(|summary| (summary.value, category_label(summary).to_owned()))
        .collect();

    Chart::new()
        .title(Title::new().text(title).left("center"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().bottom("0"))
        .series(Pie::new().name(title).radius("60%").data(data))
}

/// The text to show for a summary's category.
pub(crate) fn category_label(summary: &TransactionSummary) -> &str {
    summary
        .category
        .as_deref()
        .unwrap_or(summary.category_id.as_str())
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

#[cfg(test)]
mod tests {
    use crate::{
        category::CategoryId,
        charts::{category_label, category_pie_chart},
        selectors::TransactionSummary,
    };

    fn summary(category_id: &str, value: f64, category: Option<&str>) -> TransactionSummary {
        TransactionSummary {
            category_id: CategoryId::new(category_id),
            value,
            category: category.map(str::to_owned),
        }
    }

    #[test]
    fn labels_fall_back_to_category_id() {
        assert_eq!(category_label(&summary("food", 1.0, Some("Food"))), "Food");
        assert_eq!(category_label(&summary("misc", 1.0, None)), "misc");
    }

    #[test]
    fn pie_chart_contains_every_category() {
        let options = category_pie_chart(
            "Outflow",
            &[
                summary("food", 15.0, Some("Food")),
                summary("rent", 500.0, None),
            ],
        )
        .to_string();

        assert!(options.contains("\"Food\""), "{options}");
        assert!(options.contains("\"rent\""), "{options}");
        assert!(options.contains("\"pie\""), "{options}");
    }
}
