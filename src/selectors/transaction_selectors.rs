//! Memoized selectors over a [BudgetState].

use std::sync::Arc;

use crate::{
    category::CategoryMap,
    currency::format_amount,
    selectors::{
        memo::Memo,
        pipeline::{
            TransactionSummary, apply_category_names, format_as_percentage, get_transaction,
            inflow_transactions, outflow_transactions, share_of_flow, summarize_transactions,
            total_transactions,
        },
    },
    state::BudgetState,
    transaction::{Transaction, TransactionId},
};

/// Names each memoized selector, e.g. for reading its recomputation count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// [TransactionSelectors::get_inflow_transactions]
    InflowTransactions,
    /// [TransactionSelectors::get_outflow_transactions]
    OutflowTransactions,
    /// [TransactionSelectors::get_balance]
    Balance,
    /// [TransactionSelectors::get_inflow_balance]
    InflowBalance,
    /// [TransactionSelectors::get_outflow_balance]
    OutflowBalance,
    /// [TransactionSelectors::get_formatted_balance]
    FormattedBalance,
    /// [TransactionSelectors::get_formatted_inflow_balance]
    FormattedInflowBalance,
    /// [TransactionSelectors::get_formatted_outflow_balance]
    FormattedOutflowBalance,
    /// Inflow totals per category before category names are resolved.
    InflowByCategory,
    /// Outflow totals per category before category names are resolved.
    OutflowByCategory,
    /// [TransactionSelectors::get_inflow_by_category_name]
    InflowByCategoryName,
    /// [TransactionSelectors::get_outflow_by_category_name]
    OutflowByCategoryName,
}

type TransactionList = Arc<[Transaction]>;
type SummaryList = Arc<[TransactionSummary]>;

/// Owns the caches for the derived transaction data.
///
/// Each selector remembers its last inputs and result. Calling a selector
/// again with a snapshot that shares the same inputs (by `Arc` identity)
/// returns the cached result without recomputing, so a snapshot with new
/// categories but the same transactions only recomputes the selectors that
/// read the categories.
#[derive(Debug)]
pub struct TransactionSelectors {
    /// Stands in for a missing transaction list so that it memoizes too.
    empty: TransactionList,
    inflow_transactions: Memo<TransactionList, TransactionList>,
    outflow_transactions: Memo<TransactionList, TransactionList>,
    balance: Memo<TransactionList, f64>,
    inflow_balance: Memo<TransactionList, f64>,
    outflow_balance: Memo<TransactionList, f64>,
    formatted_balance: Memo<f64, String>,
    formatted_inflow_balance: Memo<f64, String>,
    formatted_outflow_balance: Memo<f64, String>,
    inflow_by_category: Memo<TransactionList, SummaryList>,
    outflow_by_category: Memo<TransactionList, SummaryList>,
    inflow_by_category_name: Memo<(SummaryList, Arc<CategoryMap>), SummaryList>,
    outflow_by_category_name: Memo<(SummaryList, Arc<CategoryMap>), SummaryList>,
}

impl Default for TransactionSelectors {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionSelectors {
    /// Create a set of selectors with empty caches.
    pub fn new() -> Self {
        Self {
            empty: Arc::from(Vec::new()),
            inflow_transactions: Memo::new("inflow_transactions"),
            outflow_transactions: Memo::new("outflow_transactions"),
            balance: Memo::new("balance"),
            inflow_balance: Memo::new("inflow_balance"),
            outflow_balance: Memo::new("outflow_balance"),
            formatted_balance: Memo::new("formatted_balance"),
            formatted_inflow_balance: Memo::new("formatted_inflow_balance"),
            formatted_outflow_balance: Memo::new("formatted_outflow_balance"),
            inflow_by_category: Memo::new("inflow_by_category"),
            outflow_by_category: Memo::new("outflow_by_category"),
            inflow_by_category_name: Memo::new("inflow_by_category_name"),
            outflow_by_category_name: Memo::new("outflow_by_category_name"),
        }
    }

    /// How many times `selector` has computed its value.
    pub fn recomputations(&self, selector: Selector) -> usize {
        match selector {
            Selector::InflowTransactions => self.inflow_transactions.recomputations(),
            Selector::OutflowTransactions => self.outflow_transactions.recomputations(),
            Selector::Balance => self.balance.recomputations(),
            Selector::InflowBalance => self.inflow_balance.recomputations(),
            Selector::OutflowBalance => self.outflow_balance.recomputations(),
            Selector::FormattedBalance => self.formatted_balance.recomputations(),
            Selector::FormattedInflowBalance => self.formatted_inflow_balance.recomputations(),
            Selector::FormattedOutflowBalance => self.formatted_outflow_balance.recomputations(),
            Selector::InflowByCategory => self.inflow_by_category.recomputations(),
            Selector::OutflowByCategory => self.outflow_by_category.recomputations(),
            Selector::InflowByCategoryName => self.inflow_by_category_name.recomputations(),
            Selector::OutflowByCategoryName => self.outflow_by_category_name.recomputations(),
        }
    }

    fn transactions(&self, state: &BudgetState) -> TransactionList {
        state
            .transactions
            .clone()
            .unwrap_or_else(|| self.empty.clone())
    }

    /// The transactions with a positive value.
    pub fn get_inflow_transactions(&mut self, state: &BudgetState) -> TransactionList {
        let transactions = self.transactions(state);

        self.inflow_transactions
            .get_or_compute(transactions.clone(), || {
                inflow_transactions(&transactions).into()
            })
    }

    /// The transactions with a negative value.
    pub fn get_outflow_transactions(&mut self, state: &BudgetState) -> TransactionList {
        let transactions = self.transactions(state);

        self.outflow_transactions
            .get_or_compute(transactions.clone(), || {
                outflow_transactions(&transactions).into()
            })
    }

    /// The sum of all transaction values.
    pub fn get_balance(&mut self, state: &BudgetState) -> f64 {
        let transactions = self.transactions(state);

        self.balance
            .get_or_compute(transactions.clone(), || total_transactions(&transactions))
    }

    /// The sum of the inflow transaction values.
    pub fn get_inflow_balance(&mut self, state: &BudgetState) -> f64 {
        let inflow = self.get_inflow_transactions(state);

        self.inflow_balance
            .get_or_compute(inflow.clone(), || total_transactions(&inflow))
    }

    /// The sum of the outflow transaction values. Zero or negative.
    pub fn get_outflow_balance(&mut self, state: &BudgetState) -> f64 {
        let outflow = self.get_outflow_transactions(state);

        self.outflow_balance
            .get_or_compute(outflow.clone(), || total_transactions(&outflow))
    }

    /// The balance as currency, e.g. "$85.00".
    pub fn get_formatted_balance(&mut self, state: &BudgetState) -> String {
        let balance = self.get_balance(state);

        self.formatted_balance
            .get_or_compute(balance, || format_amount(balance, false))
    }

    /// The inflow balance as currency.
    pub fn get_formatted_inflow_balance(&mut self, state: &BudgetState) -> String {
        let balance = self.get_inflow_balance(state);

        self.formatted_inflow_balance
            .get_or_compute(balance, || format_amount(balance, false))
    }

    /// The outflow balance as currency, e.g. "-$15.00".
    pub fn get_formatted_outflow_balance(&mut self, state: &BudgetState) -> String {
        let balance = self.get_outflow_balance(state);

        self.formatted_outflow_balance
            .get_or_compute(balance, || format_amount(balance, false))
    }

    fn get_inflow_by_category(&mut self, state: &BudgetState) -> SummaryList {
        let inflow = self.get_inflow_transactions(state);

        self.inflow_by_category
            .get_or_compute(inflow.clone(), || summarize_transactions(&inflow).into())
    }

    fn get_outflow_by_category(&mut self, state: &BudgetState) -> SummaryList {
        let outflow = self.get_outflow_transactions(state);

        self.outflow_by_category
            .get_or_compute(outflow.clone(), || summarize_transactions(&outflow).into())
    }

    /// Inflow totals per category, with category names resolved.
    pub fn get_inflow_by_category_name(&mut self, state: &BudgetState) -> SummaryList {
        let summaries = self.get_inflow_by_category(state);
        let categories = state.categories.clone();

        self.inflow_by_category_name
            .get_or_compute((summaries.clone(), categories.clone()), || {
                apply_category_names(&summaries, &categories).into()
            })
    }

    /// Outflow totals per category, with category names resolved.
    pub fn get_outflow_by_category_name(&mut self, state: &BudgetState) -> SummaryList {
        let summaries = self.get_outflow_by_category(state);
        let categories = state.categories.clone();

        self.outflow_by_category_name
            .get_or_compute((summaries.clone(), categories.clone()), || {
                apply_category_names(&summaries, &categories).into()
            })
    }

    /// The share of the outflow balance that the transaction `id` makes up,
    /// e.g. `"66.67%"`.
    ///
    /// Inflow transactions, unknown IDs and an empty outflow balance all give
    /// `"0.00%"`.
    pub fn get_outflow_percentage(&mut self, state: &BudgetState, id: &TransactionId) -> String {
        let value = transaction_value(state, id);
        let flow = self.get_outflow_balance(state);

        format_as_percentage(share_of_flow(value, flow))
    }

    /// The share of the inflow balance that the transaction `id` makes up,
    /// e.g. `"100.00%"`.
    ///
    /// Outflow transactions, unknown IDs and an empty inflow balance all give
    /// `"0.00%"`.
    pub fn get_inflow_percentage(&mut self, state: &BudgetState, id: &TransactionId) -> String {
        let value = transaction_value(state, id);
        let flow = self.get_inflow_balance(state);

        format_as_percentage(share_of_flow(value, flow))
    }
}

/// The value of the transaction `id`, NaN if there is no such transaction.
fn transaction_value(state: &BudgetState, id: &TransactionId) -> f64 {
    get_transaction(state, id).map_or(f64::NAN, |resolved| resolved.transaction.value)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        category::{CategoryId, CategoryMap},
        selectors::{
            pipeline::TransactionSummary,
            transaction_selectors::{Selector, TransactionSelectors},
        },
        state::BudgetState,
        transaction::{Transaction, TransactionId},
    };

    fn example_state() -> BudgetState {
        BudgetState::new(
            vec![
                Transaction::new(1, "food", -10.0),
                Transaction::new(2, "food", -5.0),
                Transaction::new(3, "pay", 100.0),
            ],
            [("food", "Food"), ("pay", "Salary")].into_iter().collect(),
        )
    }

    #[test]
    fn computes_balances() {
        let mut selectors = TransactionSelectors::new();
        let state = example_state();

        assert_eq!(selectors.get_outflow_balance(&state), -15.0);
        assert_eq!(selectors.get_inflow_balance(&state), 100.0);
        assert_eq!(selectors.get_balance(&state), 85.0);
    }

    #[test]
    fn formats_balances() {
        let mut selectors = TransactionSelectors::new();
        let state = example_state();

        assert_eq!(selectors.get_formatted_balance(&state), "$85.00");
        assert_eq!(selectors.get_formatted_inflow_balance(&state), "$100.00");
        assert_eq!(selectors.get_formatted_outflow_balance(&state), "-$15.00");
    }

    #[test]
    fn resolves_category_names_for_summaries() {
        let mut selectors = TransactionSelectors::new();
        let state = example_state();

        let outflow = selectors.get_outflow_by_category_name(&state);
        let inflow = selectors.get_inflow_by_category_name(&state);

        assert_eq!(
            &outflow[..],
            &[TransactionSummary {
                category_id: CategoryId::new("food"),
                value: 15.0,
                category: Some("Food".to_owned()),
            }]
        );
        assert_eq!(inflow[0].category.as_deref(), Some("Salary"));
        assert_eq!(inflow[0].value, 100.0);
    }

    #[test]
    fn computes_percentages() {
        let mut selectors = TransactionSelectors::new();
        let state = example_state();

        assert_eq!(
            selectors.get_outflow_percentage(&state, &TransactionId::from(1)),
            "66.67%"
        );
        assert_eq!(
            selectors.get_inflow_percentage(&state, &TransactionId::new("3")),
            "100.00%"
        );
        assert_eq!(
            selectors.get_inflow_percentage(&state, &TransactionId::from(1)),
            "0.00%"
        );
        assert_eq!(
            selectors.get_outflow_percentage(&state, &TransactionId::from(3)),
            "0.00%"
        );
    }

    #[test]
    fn percentage_of_unknown_transaction_is_zero() {
        let mut selectors = TransactionSelectors::new();

        assert_eq!(
            selectors.get_outflow_percentage(&example_state(), &TransactionId::from(99)),
            "0.00%"
        );
    }

    #[test]
    fn percentage_without_outflow_is_zero() {
        let mut selectors = TransactionSelectors::new();
        let state = BudgetState::new(
            vec![Transaction::new(1, "pay", 100.0)],
            CategoryMap::default(),
        );

        assert_eq!(
            selectors.get_outflow_percentage(&state, &TransactionId::from(1)),
            "0.00%"
        );
    }

    #[test]
    fn missing_transaction_list_is_treated_as_empty() {
        let mut selectors = TransactionSelectors::new();
        let state = BudgetState::default();

        assert_eq!(selectors.get_balance(&state), 0.0);
        assert!(selectors.get_inflow_transactions(&state).is_empty());
        assert!(selectors.get_outflow_by_category_name(&state).is_empty());
        assert_eq!(
            selectors.get_inflow_percentage(&state, &TransactionId::from(1)),
            "0.00%"
        );

        // The stand-in empty list is shared, so repeated calls are cache hits.
        selectors.get_balance(&state);
        assert_eq!(selectors.recomputations(Selector::Balance), 1);
    }

    #[test]
    fn same_snapshot_is_computed_once() {
        let mut selectors = TransactionSelectors::new();
        let state = example_state();

        let first = selectors.get_outflow_by_category_name(&state);
        let second = selectors.get_outflow_by_category_name(&state.clone());

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(selectors.recomputations(Selector::OutflowTransactions), 1);
        assert_eq!(selectors.recomputations(Selector::OutflowByCategory), 1);
        assert_eq!(selectors.recomputations(Selector::OutflowByCategoryName), 1);
    }

    #[test]
    fn new_transactions_recompute() {
        let mut selectors = TransactionSelectors::new();
        let state = example_state();

        assert_eq!(selectors.get_outflow_balance(&state), -15.0);

        let updated = state.with_transactions(vec![Transaction::new(4, "rent", -500.0)]);

        assert_eq!(selectors.get_outflow_balance(&updated), -500.0);
        assert_eq!(selectors.recomputations(Selector::OutflowTransactions), 2);
        assert_eq!(selectors.recomputations(Selector::OutflowBalance), 2);
    }

    #[test]
    fn new_categories_only_recompute_named_summaries() {
        let mut selectors = TransactionSelectors::new();
        let state = example_state();

        let before = selectors.get_outflow_by_category_name(&state);

        let renamed = state.with_categories([("food", "Groceries")].into_iter().collect());
        let after = selectors.get_outflow_by_category_name(&renamed);

        assert_eq!(before[0].category.as_deref(), Some("Food"));
        assert_eq!(after[0].category.as_deref(), Some("Groceries"));
        assert_eq!(selectors.recomputations(Selector::OutflowTransactions), 1);
        assert_eq!(selectors.recomputations(Selector::OutflowByCategory), 1);
        assert_eq!(selectors.recomputations(Selector::OutflowByCategoryName), 2);
    }

    #[test]
    fn formatted_balance_reuses_string_when_balance_is_unchanged() {
        let mut selectors = TransactionSelectors::new();
        let state = example_state();

        selectors.get_formatted_outflow_balance(&state);
        // Different transactions, same outflow balance.
        let updated = state.with_transactions(vec![
            Transaction::new(5, "food", -15.0),
            Transaction::new(6, "pay", 1.0),
        ]);
        selectors.get_formatted_outflow_balance(&updated);

        assert_eq!(selectors.recomputations(Selector::OutflowBalance), 2);
        assert_eq!(selectors.recomputations(Selector::FormattedOutflowBalance), 1);
    }
}
