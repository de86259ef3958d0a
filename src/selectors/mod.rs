//! Derived transaction data: balances, per-category summaries and
//! percentages.
//!
//! [pipeline] holds the pure derivations. [TransactionSelectors] wraps them
//! in caches keyed on the snapshot's inputs.

mod memo;
pub mod pipeline;
mod transaction_selectors;

pub use memo::MemoKey;
pub use pipeline::{
    ResolvedTransaction, TransactionSummary, Valued, format_as_percentage, get_transaction,
    get_transactions, share_of_flow, sort_transactions, summarize_transactions, total_transactions,
};
pub use transaction_selectors::{Selector, TransactionSelectors};
