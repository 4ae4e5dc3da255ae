//! Endpoint paths, relative to the API origin.

/// All exchange rates.
pub const EXCHANGE_RATES: &str = "/api/v1/exchange_rates/all";

/// Withdrawal fee tiers.
pub const WITHDRAWAL_FEES: &str = "/api/v1/withdrawal_fees";

/// Deposit addresses (list and create).
pub const ADDRESSES: &str = "/api/v1/addresses";

/// Transactions (list and create).
pub const TRANSACTIONS: &str = "/api/v1/transactions";

/// Merchant invoices (list and create).
pub const INVOICES: &str = "/api/v1/invoices";

/// Legacy token-in-body invoice flow.
pub const PUBLIC_INVOICES: &str = "/api/v1/invoices/public";

/// Transactions of a single deposit address.
#[must_use]
pub fn address_transactions(address_id: &str) -> String {
    format!("{ADDRESSES}/{address_id}/transactions")
}
