use serde::{Deserialize, Serialize};

use super::serde_util::option_amount;

/// A deposit address owned by the merchant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    /// On-chain address; absent while the address is still being generated
    pub address: Option<String>,
    pub currency: String,
    pub network: String,
    #[serde(default, deserialize_with = "option_amount::deserialize")]
    pub balance: Option<f64>,
    #[serde(default)]
    pub label: String,
}

/// Response of the address listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addresses {
    pub addresses: Vec<Address>,
}

/// Response of address creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressResponse {
    pub address: Address,
}

/// Payload for creating a deposit address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAddress {
    pub currency: String,
    pub network: String,
    pub label: String,
}

impl NewAddress {
    /// Creates a payload with an empty label.
    #[must_use]
    pub fn new(currency: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            network: network.into(),
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
