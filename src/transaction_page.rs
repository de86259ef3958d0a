//! The page for a single transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    currency::format_amount,
    endpoints,
    html::{CARD_STYLE, PAGE_CONTAINER_STYLE, amount_class, base, link},
    navigation::Header,
    selectors::{ResolvedTransaction, get_transaction},
    transaction::TransactionId,
};

/// What the transaction page shows.
struct TransactionDetails {
    resolved: ResolvedTransaction,
    inflow_percentage: String,
    outflow_percentage: String,
}

/// Display the transaction `transaction_id` with its category and its share of
/// inflow and outflow.
///
/// # Errors
/// Returns [Error::NotFound] if no transaction has the ID.
pub async fn get_transaction_page(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> Result<Response, Error> {
    let id = TransactionId::new(&transaction_id);

    let details = state
        .select(|selectors, budget| {
            get_transaction(budget, &id).map(|resolved| TransactionDetails {
                resolved,
                inflow_percentage: selectors.get_inflow_percentage(budget, &id),
                outflow_percentage: selectors.get_outflow_percentage(budget, &id),
            })
        })?
        .ok_or(Error::NotFound)?;

    Ok(transaction_view(&details).into_response())
}

fn transaction_view(details: &TransactionDetails) -> Markup {
    let header = Header::new(endpoints::TRANSACTION_VIEW).into_html();
    let transaction = &details.resolved.transaction;
    let category = details
        .resolved
        .category
        .as_deref()
        .unwrap_or(transaction.category_id.as_str());

    let field = |label: &str, value: Markup| {
        html!(
            div class="flex justify-between gap-8 py-2 border-b dark:border-gray-700"
            {
                dt class="text-gray-500 dark:text-gray-400" { (label) }
                dd class="font-semibold" { (value) }
            }
        )
    };

    let content = html!(
        (header)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section id="transaction" class={ (CARD_STYLE) " max-w-md" }
            {
                h1 class="text-xl font-bold mb-4"
                {
                    (transaction.description.as_deref().unwrap_or("Transaction"))
                }

                dl
                {
                    (field("ID", html!((transaction.id.as_str()))))
                    (field("Category", html!((category))))
                    (field("Amount", html!(
                        span class=(amount_class(transaction.value))
                        {
                            (format_amount(transaction.value, false))
                        }
                    )))
                    (field("Share of inflow", html!((details.inflow_percentage))))
                    (field("Share of outflow", html!((details.outflow_percentage))))
                }

                p class="mt-4" { (link(endpoints::BUDGET_VIEW, "Back to budget")) }
            }
        }
    );

    base("Transaction", &[], &content)
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use scraper::Selector;

    use crate::{
        AppState, Error,
        state::BudgetState,
        test_utils::parse_html_document,
        transaction::Transaction,
        transaction_page::get_transaction_page,
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

    async fn get_fields(transaction_id: &str) -> Vec<(String, String)> {
        let response = get_transaction_page(State(example_state()), Path(transaction_id.to_owned()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_document(response).await;
        let dt = Selector::parse("dt").unwrap();
        let dd = Selector::parse("dd").unwrap();

        html.select(&dt)
            .zip(html.select(&dd))
            .map(|(label, value)| {
                (
                    label.text().collect::<String>().trim().to_owned(),
                    value.text().collect::<String>().trim().to_owned(),
                )
            })
            .collect()
    }

    fn field<'a>(fields: &'a [(String, String)], label: &str) -> &'a str {
        fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, value)| value.as_str())
            .unwrap_or_else(|| panic!("No field labelled {label}"))
    }

    #[tokio::test]
    async fn shows_outflow_transaction() {
        let fields = get_fields("1").await;

        assert_eq!(field(&fields, "Category"), "Food");
        assert_eq!(field(&fields, "Amount"), "-$10.00");
        assert_eq!(field(&fields, "Share of outflow"), "66.67%");
        assert_eq!(field(&fields, "Share of inflow"), "0.00%");
    }

    #[tokio::test]
    async fn shows_inflow_transaction() {
        let fields = get_fields("3").await;

        assert_eq!(field(&fields, "Category"), "Salary");
        assert_eq!(field(&fields, "Share of inflow"), "100.00%");
        assert_eq!(field(&fields, "Share of outflow"), "0.00%");
    }

    #[tokio::test]
    async fn normalizes_the_path_id() {
        let fields = get_fields("3.0").await;

        assert_eq!(field(&fields, "ID"), "3");
    }

    #[tokio::test]
    async fn unknown_transaction_is_not_found() {
        let result = get_transaction_page(State(example_state()), Path("42".to_owned())).await;

        assert_eq!(result.unwrap_err(), Error::NotFound);
    }
}
