use serde::{Deserialize, Serialize};

use super::serde_util::{amount, option_amount};

/// Fee charged for withdrawing one currency over one network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalFee {
    /// Currency ticker
    pub currency: String,
    /// Blockchain network
    #[serde(default)]
    pub network: Option<String>,
    /// Fee amount, in `currency`
    #[serde(deserialize_with = "amount::deserialize")]
    pub fee: f64,
    /// Smallest amount that can be withdrawn
    #[serde(default, deserialize_with = "option_amount::deserialize")]
    pub min_amount: Option<f64>,
}

/// Withdrawal fee tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalFees {
    #[serde(alias = "fees")]
    pub withdrawal_fees: Vec<WithdrawalFee>,
}
