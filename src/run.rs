//! Command execution.
//!
//! Builds the API client from the validated configuration, runs the
//! selected operation and writes the typed response to stdout as JSON.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use bitpapa_pay::BitpapaClient;
use bitpapa_pay::config::{Command, ValidatedConfig};
use bitpapa_pay::models::NewCryptoInvoice;
use bitpapa_pay::transport::HttpClient;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The API call failed.
    #[error(transparent)]
    Api(#[from] bitpapa_pay::Error),

    /// The response could not be written to stdout.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// The response could not be rendered as JSON.
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Runs the configured command against the production transport.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the API call fails or
/// the output cannot be written.
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let client = BitpapaClient::from_config(config.client)?;
    let mut output = Vec::new();

    let result = dispatch(&client, &config.command, &mut output).await;
    client.close();
    result?;

    std::io::stdout().write_all(&output)?;
    Ok(())
}

/// Runs `command` through `client` and writes the response to `out`.
pub async fn dispatch<H: HttpClient, W: Write>(
    client: &BitpapaClient<H>,
    command: &Command,
    out: &mut W,
) -> Result<(), RunError> {
    tracing::debug!(?command, "Running command");

    match command {
        // Handled before the client is built.
        Command::Init { .. } => Ok(()),
        Command::Rates => emit(out, &client.exchange_rates().all().await?),
        Command::Fees { currency, network } => {
            let fees = client
                .withdrawal_fees()
                .list(currency.as_deref(), network.as_deref())
                .await?;
            emit(out, &fees)
        }
        Command::Addresses { currency, label } => {
            let addresses = client
                .addresses()
                .list(currency.as_deref(), label.as_deref())
                .await?;
            emit(out, &addresses)
        }
        Command::CreateAddress {
            currency,
            network,
            label,
        } => {
            let created = client
                .addresses()
                .create(currency, network, label.as_deref())
                .await?;
            emit(out, &created)
        }
        Command::Transactions { address } => {
            let transactions = match address {
                Some(id) => client.addresses().transactions(id).await?,
                None => client.transactions().list().await?,
            };
            emit(out, &transactions)
        }
        Command::Invoices { page, per_page } => {
            emit(out, &client.invoices().list(*page, *per_page).await?)
        }
        Command::CreateInvoice {
            amount,
            currency,
            merchant_invoice_id,
            description,
        } => {
            let mut invoice = NewCryptoInvoice::new(*amount, currency.as_str());
            if let Some(id) = merchant_invoice_id {
                invoice = invoice.with_merchant_invoice_id(id.as_str());
            }
            if let Some(text) = description {
                invoice = invoice.with_description(text.as_str());
            }
            emit(out, &client.invoices().create_crypto(invoice).await?)
        }
        Command::PublicInvoices => emit(out, &client.public_invoices().list().await?),
    }
}

fn emit<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), RunError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
