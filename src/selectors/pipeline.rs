//! Pure derivations over a budget snapshot.
//!
//! Nothing in here caches or fails: a missing transaction list is treated as
//! empty, a lookup miss yields `None`, and undefined ratios become zero.

use crate::{
    category::{CategoryId, CategoryMap},
    state::BudgetState,
    transaction::{Transaction, TransactionId},
};

/// The total magnitude of the transactions in one category.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionSummary {
    /// The category the transactions belong to.
    pub category_id: CategoryId,
    /// The sum of the absolute transaction values.
    pub value: f64,
    /// The category's display name, once resolved.
    pub category: Option<String>,
}

/// A transaction paired with the display name of its category.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTransaction {
    /// The transaction as it appears in the snapshot.
    pub transaction: Transaction,
    /// The category's display name, if the category is known.
    pub category: Option<String>,
}

/// Anything with a signed value that can be ranked by [sort_transactions].
pub trait Valued {
    /// The value to rank by.
    fn value(&self) -> f64;
}

impl Valued for Transaction {
    fn value(&self) -> f64 {
        self.value
    }
}

impl Valued for TransactionSummary {
    fn value(&self) -> f64 {
        self.value
    }
}

/// The snapshot's transactions, or an empty slice if it has none.
pub fn get_transactions(state: &BudgetState) -> &[Transaction] {
    state.transactions.as_deref().unwrap_or_default()
}

/// Find the first transaction whose ID matches `id` and resolve its category
/// name.
///
/// Returns `None` when no transaction matches.
pub fn get_transaction(state: &BudgetState, id: &TransactionId) -> Option<ResolvedTransaction> {
    get_transactions(state)
        .iter()
        .find(|transaction| &transaction.id == id)
        .map(|transaction| ResolvedTransaction {
            transaction: transaction.clone(),
            category: state
                .categories
                .name_of(&transaction.category_id)
                .map(str::to_owned),
        })
}

/// The transactions with a value strictly greater than zero.
pub fn inflow_transactions(transactions: &[Transaction]) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| transaction.value > 0.0)
        .cloned()
        .collect()
}

/// The transactions with a value strictly less than zero.
pub fn outflow_transactions(transactions: &[Transaction]) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| transaction.value < 0.0)
        .cloned()
        .collect()
}

/// The sum of the transaction values, zero for an empty list.
pub fn total_transactions(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .map(|transaction| transaction.value)
        .sum()
}

/// Group transactions by category, summing the absolute values.
///
/// Groups appear in the order their category is first seen in
/// `transactions`.
pub fn summarize_transactions(transactions: &[Transaction]) -> Vec<TransactionSummary> {
    let mut summaries: Vec<TransactionSummary> = Vec::new();

    for transaction in transactions {
        match summaries
            .iter_mut()
            .find(|summary| summary.category_id == transaction.category_id)
        {
            Some(summary) => summary.value += transaction.value.abs(),
            None => summaries.push(TransactionSummary {
                category_id: transaction.category_id.clone(),
                value: transaction.value.abs(),
                category: None,
            }),
        }
    }

    summaries
}

/// Copy `summaries`, filling in each category's display name.
///
/// The input is left untouched since it may be shared with other readers.
pub fn apply_category_names(
    summaries: &[TransactionSummary],
    categories: &CategoryMap,
) -> Vec<TransactionSummary> {
    summaries
        .iter()
        .map(|summary| TransactionSummary {
            category: categories.name_of(&summary.category_id).map(str::to_owned),
            ..summary.clone()
        })
        .collect()
}

/// Copy `items` sorted by value, largest first.
///
/// The sort is stable, so items with equal values keep their relative order.
pub fn sort_transactions<T: Valued + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.value().total_cmp(&a.value()));
    sorted
}

/// Format a ratio as a percentage with two decimal places, e.g. `0.5` as
/// `"50.00%"`.
pub fn format_as_percentage(ratio: f64) -> String {
    // Zero is matched too so that -0 prints as "0.00%".
    let ratio = if ratio.is_finite() && ratio != 0.0 {
        ratio
    } else {
        0.0
    };

    format!("{:.2}%", ratio * 100.0)
}

/// The share `value` makes up of `flow`, zero when the share is undefined
/// (e.g. `flow` is zero) or not positive.
///
/// A negative share means the transaction flows the other way to `flow`,
/// e.g. an inflow measured against the outflow balance.
pub fn share_of_flow(value: f64, flow: f64) -> f64 {
    let ratio = value / flow;

    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        0.0
    }
}
