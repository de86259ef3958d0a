//! The budget page: the balances and every transaction with its share of
//! inflow or outflow.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    currency::format_amount,
    endpoints::{self, format_endpoint},
    html::{
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        amount_class, base, stat_card,
    },
    navigation::Header,
    selectors::{format_as_percentage, get_transactions, share_of_flow},
};

/// The formatted balances shown at the top of the page.
struct Balances {
    balance: String,
    inflow: String,
    outflow: String,
}

/// A transaction ready for display.
struct TransactionRow {
    url: String,
    category: String,
    description: String,
    value: f64,
    share: String,
}

/// Display the balances and the list of transactions.
pub async fn get_budget_page(State(state): State<AppState>) -> Result<Response, Error> {
    let (balances, rows) = state
        .select(|selectors, budget| {
            let balances = Balances {
                balance: selectors.get_formatted_balance(budget),
                inflow: selectors.get_formatted_inflow_balance(budget),
                outflow: selectors.get_formatted_outflow_balance(budget),
            };

            let inflow_balance = selectors.get_inflow_balance(budget);
            let outflow_balance = selectors.get_outflow_balance(budget);

            let rows = get_transactions(budget)
                .iter()
                .map(|transaction| {
                    let flow = if transaction.value > 0.0 {
                        inflow_balance
                    } else {
                        outflow_balance
                    };

                    TransactionRow {
                        url: format_endpoint(endpoints::TRANSACTION_VIEW, &transaction.id),
                        category: budget
                            .categories
                            .name_of(&transaction.category_id)
                            .unwrap_or(transaction.category_id.as_str())
                            .to_owned(),
                        description: transaction.description.clone().unwrap_or_default(),
                        value: transaction.value,
                        share: format_as_percentage(share_of_flow(transaction.value, flow)),
                    }
                })
                .collect::<Vec<_>>();

            (balances, rows)
        })?;

    Ok(budget_view(&balances, &rows).into_response())
}

fn budget_view(balances: &Balances, rows: &[TransactionRow]) -> Markup {
    let header = Header::new(endpoints::BUDGET_VIEW).into_html();

    let table_row = |row: &TransactionRow| {
        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE)
                {
                    a href=(row.url) class=(LINK_STYLE) { (row.category) }
                }
                td class=(TABLE_CELL_STYLE) { (row.description) }
                td class={ (TABLE_CELL_STYLE) " text-right " (amount_class(row.value)) }
                {
                    (format_amount(row.value, false))
                }
                td class={ (TABLE_CELL_STYLE) " text-right" } { (row.share) }
            }
        )
    };

    let content = html!(
        (header)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section id="balances" class="grid grid-cols-1 md:grid-cols-3 gap-4 w-full max-w-5xl mb-8"
            {
                (stat_card("Balance", &balances.balance, ""))
                (stat_card("Inflow", &balances.inflow, amount_class(1.0)))
                (stat_card("Outflow", &balances.outflow, amount_class(-1.0)))
            }

            section id="transactions" class="w-full max-w-5xl"
            {
                h1 class="text-xl font-bold mb-4" { "Transactions" }

                table class="w-full text-sm text-left rtl:text-right
                    text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Share" }
                        }
                    }

                    tbody
                    {
                        @for row in rows {
                            (table_row(row))
                        }

                        @if rows.is_empty() {
                            tr
                            {
                                td
                                    colspan="4"
                                    class="px-6 py-4 text-center
                                        text-gray-500 dark:text-gray-400"
                                {
                                    "No transactions yet."
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Budget", &[], &content)
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};
    use scraper::Selector;

    use crate::{
        AppState,
        budget::get_budget_page,
        state::BudgetState,
        test_utils::{assert_content_type, assert_valid_html, parse_html_document, select_text},
        transaction::Transaction,
    };

    fn example_state() -> AppState {
        AppState::with_budget(
            "unused.json",
            BudgetState::new(
                vec![
                    Transaction::new(1, "food", -10.0).description("Lunch"),
                    Transaction::new(2, "food", -5.0),
                    Transaction::new(3, "pay", 100.0),
                ],
                [("food", "Food"), ("pay", "Salary")].into_iter().collect(),
            ),
        )
    }

    #[tokio::test]
    async fn shows_balances() {
        let response = get_budget_page(State(example_state())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        assert_eq!(
            select_text(&html, "#balances p.text-2xl"),
            vec!["$85.00", "$100.00", "-$15.00"]
        );
    }

    #[tokio::test]
    async fn lists_transactions_with_shares() {
        let response = get_budget_page(State(example_state())).await.unwrap();

        let html = parse_html_document(response).await;
        let row_selector = Selector::parse("#transactions tbody tr").unwrap();
        let cell_selector = Selector::parse("td").unwrap();
        let rows: Vec<Vec<String>> = html
            .select(&row_selector)
            .map(|row| {
                row.select(&cell_selector)
                    .map(|cell| cell.text().collect::<String>().trim().to_owned())
                    .collect()
            })
            .collect();

        assert_eq!(
            rows,
            vec![
                vec!["Food", "Lunch", "-$10.00", "66.67%"],
                vec!["Food", "", "-$5.00", "33.33%"],
                vec!["Salary", "", "$100.00", "100.00%"],
            ]
        );
    }

    #[tokio::test]
    async fn links_to_transaction_pages() {
        let response = get_budget_page(State(example_state())).await.unwrap();

        let html = parse_html_document(response).await;
        let selector = Selector::parse("#transactions tbody a").unwrap();
        let links: Vec<_> = html
            .select(&selector)
            .filter_map(|a| a.value().attr("href"))
            .collect();

        assert_eq!(links, vec!["/transactions/1", "/transactions/2", "/transactions/3"]);
    }

    #[tokio::test]
    async fn shows_empty_state_without_transactions() {
        let state = AppState::with_budget("unused.json", BudgetState::default());

        let response = get_budget_page(State(state)).await.unwrap();

        let html = parse_html_document(response).await;
        assert_eq!(
            select_text(&html, "#transactions tbody td"),
            vec!["No transactions yet."]
        );
    }
}
