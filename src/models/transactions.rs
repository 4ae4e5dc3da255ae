use serde::{Deserialize, Serialize};

use super::serde_util::option_amount;

/// Direction of funds movement.
///
/// Serialized as the bare API string; directions this client does not know
/// are kept verbatim so they are written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    /// Outgoing transfer to an external address
    Withdrawal,
    /// Incoming transfer from an external address
    Refill,
    /// Any other direction, as sent by the API
    Other(String),
}

impl Direction {
    /// The wire name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Withdrawal => "withdrawal",
            Self::Refill => "refill",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Direction {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "withdrawal" => Self::Withdrawal,
            "refill" => Self::Refill,
            _ => Self::Other(raw),
        }
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// A complete transaction record.
///
/// Listing endpoints may return placeholder rows with no direction, amount
/// or currency; those never become a `Transaction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub direction: Direction,
    #[serde(default)]
    pub txhash: Option<String>,
    pub currency: String,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(deserialize_with = "super::serde_util::amount::deserialize")]
    pub amount: f64,
    #[serde(default, rename = "from")]
    pub from_address: Option<String>,
    #[serde(default, rename = "to")]
    pub to_address: Option<String>,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

/// Transaction listing after incomplete rows have been dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transactions {
    pub transactions: Vec<Transaction>,
}

/// Response of transaction creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub transaction: Transaction,
}

/// Transaction row as sent by listing endpoints.
#[derive(Debug, Deserialize)]
struct RawTransaction {
    id: String,
    #[serde(default)]
    direction: Option<Direction>,
    #[serde(default)]
    txhash: Option<String>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    network: Option<String>,
    #[serde(default, deserialize_with = "option_amount::deserialize")]
    amount: Option<f64>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    input: Option<String>,
    #[serde(default)]
    label: Option<String>,
}

impl RawTransaction {
    fn into_complete(self) -> Option<Transaction> {
        Some(Transaction {
            id: self.id,
            direction: self.direction?,
            txhash: self.txhash,
            currency: self.currency?,
            network: self.network,
            amount: self.amount?,
            from_address: self.from,
            to_address: self.to,
            input: self.input,
            label: self.label,
        })
    }
}

/// Raw listing body. The all-transactions endpoint uses `transactions`,
/// the per-address endpoint uses `transaction`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawTransactions {
    #[serde(alias = "transaction")]
    transactions: Vec<RawTransaction>,
}

impl RawTransactions {
    /// Drops rows missing a direction, amount or currency.
    pub(crate) fn into_complete(self) -> Transactions {
        Transactions {
            transactions: self
                .transactions
                .into_iter()
                .filter_map(RawTransaction::into_complete)
                .collect(),
        }
    }
}

/// Payload for creating a transaction.
///
/// Withdrawals carry `to`, refills carry `from`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    pub direction: Direction,
    pub currency: String,
    pub amount: f64,
    pub network: String,
    #[serde(rename = "to", skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
    #[serde(rename = "from", skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    pub label: String,
}

impl NewTransaction {
    /// Withdrawal of `amount` `currency` to `to_address` over `network`.
    #[must_use]
    pub fn withdrawal(
        currency: impl Into<String>,
        amount: f64,
        to_address: impl Into<String>,
        network: impl Into<String>,
    ) -> Self {
        Self {
            direction: Direction::Withdrawal,
            currency: currency.into(),
            amount,
            network: network.into(),
            to_address: Some(to_address.into()),
            from_address: None,
            label: String::new(),
        }
    }

    /// Refill of `amount` `currency` from `from_address` over `network`.
    #[must_use]
    pub fn refill(
        currency: impl Into<String>,
        amount: f64,
        from_address: impl Into<String>,
        network: impl Into<String>,
    ) -> Self {
        Self {
            direction: Direction::Refill,
            currency: currency.into(),
            amount,
            network: network.into(),
            to_address: None,
            from_address: Some(from_address.into()),
            label: String::new(),
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}
