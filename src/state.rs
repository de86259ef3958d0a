//! The read-only budget snapshot that the selectors derive their data from.

use std::{fs, path::Path, sync::Arc};

use serde::Deserialize;

use crate::{Error, category::CategoryMap, transaction::Transaction};

/// A snapshot of the user's budget.
///
/// The transaction list and category map are reference counted so that the
/// selectors can tell whether an input changed by comparing pointers. Cloning
/// a snapshot is cheap and shares both.
#[derive(Debug, Clone, Default)]
pub struct BudgetState {
    /// The transactions, or `None` if the snapshot has no transaction list.
    pub transactions: Option<Arc<[Transaction]>>,
    /// The category display names.
    pub categories: Arc<CategoryMap>,
}

#[derive(Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    transactions: Option<Vec<Transaction>>,
    #[serde(default)]
    categories: CategoryMap,
}

impl BudgetState {
    /// Create a snapshot from a list of transactions and category names.
    pub fn new(transactions: Vec<Transaction>, categories: CategoryMap) -> Self {
        Self {
            transactions: Some(transactions.into()),
            categories: Arc::new(categories),
        }
    }

    /// Parse a snapshot from JSON.
    ///
    /// The `transactions` field may be missing or `null`, and `categories`
    /// defaults to an empty map.
    ///
    /// # Errors
    /// Returns [Error::SnapshotParse] if `json` is not a valid snapshot.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let snapshot: SnapshotFile =
            serde_json::from_str(json).map_err(|error| Error::SnapshotParse(error.to_string()))?;

        Ok(Self {
            transactions: snapshot.transactions.map(Arc::from),
            categories: Arc::new(snapshot.categories),
        })
    }

    /// Read and parse the snapshot file at `path`.
    ///
    /// # Errors
    /// Returns [Error::SnapshotRead] if the file cannot be read, or
    /// [Error::SnapshotParse] if its contents are not a valid snapshot.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let json = fs::read_to_string(path)
            .map_err(|error| Error::SnapshotRead(format!("{}: {error}", path.display())))?;

        Self::from_json_str(&json)
    }

    /// Replace the transaction list, keeping the categories.
    pub fn with_transactions(&self, transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Some(transactions.into()),
            categories: self.categories.clone(),
        }
    }

    /// Replace the category map, keeping the transactions.
    pub fn with_categories(&self, categories: CategoryMap) -> Self {
        Self {
            transactions: self.transactions.clone(),
            categories: Arc::new(categories),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Write, sync::Arc};

    use crate::{Error, category::CategoryId, state::BudgetState, transaction::TransactionId};

    #[test]
    fn parses_snapshot() {
        let state = BudgetState::from_json_str(
            r#"{
                "transactions": [
                    {"id": 1, "categoryId": "food", "value": -10},
                    {"id": "2", "categoryId": "pay", "value": "100"}
                ],
                "categories": {"food": "Food", "pay": "Salary"}
            }"#,
        )
        .unwrap();

        let transactions = state.transactions.unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[1].id, TransactionId::from(2));
        assert_eq!(transactions[1].value, 100.0);
        assert_eq!(
            state.categories.name_of(&CategoryId::new("food")),
            Some("Food")
        );
    }

    #[test]
    fn missing_transactions_is_none() {
        let state = BudgetState::from_json_str(r#"{"categories": {}}"#).unwrap();
        assert!(state.transactions.is_none());

        let state = BudgetState::from_json_str(r#"{"transactions": null}"#).unwrap();
        assert!(state.transactions.is_none());
        assert!(state.categories.is_empty());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let result = BudgetState::from_json_str("{\"transactions\": [");

        assert!(matches!(result, Err(Error::SnapshotParse(_))));
    }

    #[test]
    fn reads_snapshot_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"transactions": [{{"id": 1, "categoryId": "food", "value": -10}}]}}"#
        )
        .unwrap();

        let state = BudgetState::from_path(file.path()).unwrap();

        assert_eq!(state.transactions.unwrap().len(), 1);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = BudgetState::from_path(&dir.path().join("missing.json"));

        assert!(matches!(result, Err(Error::SnapshotRead(_))));
    }

    #[test]
    fn with_categories_shares_transactions() {
        let state = BudgetState::from_json_str(
            r#"{"transactions": [{"id": 1, "categoryId": "food", "value": -10}]}"#,
        )
        .unwrap();

        let updated = state.with_categories([("food", "Food")].into_iter().collect());

        assert!(Arc::ptr_eq(
            state.transactions.as_ref().unwrap(),
            updated.transactions.as_ref().unwrap()
        ));
        assert!(!Arc::ptr_eq(&state.categories, &updated.categories));
    }
}
