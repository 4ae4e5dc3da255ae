//! Typed facades, one per API area.
//!
//! Each operation builds exactly one [`ApiMethod`], runs it once through the
//! shared [`Executor`] and maps the raw JSON into its response type. Errors
//! propagate unchanged.

mod addresses;
mod exchange_rates;
mod invoices;
mod public_invoices;
mod transactions;
mod withdrawal_fees;


pub use addresses::AddressesApi;
pub use exchange_rates::ExchangeRatesApi;
pub use invoices::InvoicesApi;
pub use public_invoices::PublicInvoicesApi;
pub use transactions::TransactionsApi;
pub use withdrawal_fees::WithdrawalFeesApi;

use serde::de::DeserializeOwned;

use crate::client::Executor;
use crate::error::{Error, Result};
use crate::method::ApiMethod;
use crate::models::{RawTransactions, Transactions};
use crate::transport::HttpClient;

/// Executes `method` and deserializes the response into `T`.
async fn invoke<H, T>(executor: &Executor<H>, method: &ApiMethod) -> Result<T>
where
    H: HttpClient,
    T: DeserializeOwned,
{
    let descriptor = method.descriptor()?;
    tracing::debug!(operation = method.name(), "Invoking API operation");

    let raw = executor.execute(&descriptor).await?;
    serde_json::from_value(raw).map_err(|source| Error::Schema {
        endpoint: descriptor.endpoint().to_string(),
        source,
    })
}

/// Executes a transaction listing and drops incomplete placeholder rows.
async fn invoke_transactions<H: HttpClient>(
    executor: &Executor<H>,
    method: &ApiMethod,
) -> Result<Transactions> {
    let raw: RawTransactions = invoke(executor, method).await?;
    let listing = raw.into_complete();
    tracing::trace!(
        operation = method.name(),
        kept = listing.transactions.len(),
        "Filtered transaction listing"
    );
    Ok(listing)
}
