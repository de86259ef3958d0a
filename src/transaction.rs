//! Defines the transaction record read by the selectors and screens.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::category::CategoryId;

/// Identifies a transaction.
///
/// IDs arrive as either JSON numbers or strings, so both forms are normalized
/// to a canonical key before they are compared: any string that parses as a
/// finite number is stored in that number's shortest decimal form, which makes
/// `1`, `"1"`, `"01"` and `"1.0"` the same ID. Other strings are kept as-is
/// after trimming surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTransactionId", into = "String")]
pub struct TransactionId(String);

impl TransactionId {
    /// Normalize `raw` into a transaction ID.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();

        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => Self::from_number(number),
            _ => Self(trimmed.to_owned()),
        }
    }

    fn from_number(number: f64) -> Self {
        // `-0` and `0` must share a key.
        if number == 0.0 {
            Self("0".to_owned())
        } else {
            Self(number.to_string())
        }
    }

    /// The canonical key used for comparisons.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TransactionId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<i64> for TransactionId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<i32> for TransactionId {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl From<TransactionId> for String {
    fn from(value: TransactionId) -> Self {
        value.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTransactionId {
    Number(f64),
    Text(String),
}

impl From<RawTransactionId> for TransactionId {
    fn from(value: RawTransactionId) -> Self {
        match value {
            RawTransactionId::Number(number) if number.is_finite() => Self::from_number(number),
            RawTransactionId::Number(number) => Self(number.to_string()),
            RawTransactionId::Text(text) => Self::new(&text),
        }
    }
}

/// A single movement of money.
///
/// A positive `value` is an inflow (money received) and a negative `value` is
/// an outflow (money spent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The category the transaction belongs to.
    pub category_id: CategoryId,
    /// The signed amount of money.
    #[serde(deserialize_with = "deserialize_value")]
    pub value: f64,
    /// Free text describing the transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// Create a transaction without a description.
    pub fn new(id: impl Into<TransactionId>, category_id: impl Into<CategoryId>, value: f64) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            value,
            description: None,
        }
    }

    /// Set the description.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }
}

/// Values may be written as numbers or as numeric strings, e.g. `"-12.50"`.
/// NaN and infinite values are rejected.
fn deserialize_value<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValue {
        Number(f64),
        Text(String),
    }

    let value = match RawValue::deserialize(deserializer)? {
        RawValue::Number(number) => number,
        RawValue::Text(text) => text.trim().parse::<f64>().map_err(|error| {
            serde::de::Error::custom(format!("invalid transaction value \"{text}\": {error}"))
        })?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(serde::de::Error::custom(format!(
            "transaction value must be a finite number, got {value}"
        )))
    }
}
