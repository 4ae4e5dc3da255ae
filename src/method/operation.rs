//! The closed set of API operations.

use crate::error::{Error, Result};
use crate::models::{NewAddress, NewCryptoInvoice, NewFiatInvoice, NewPublicInvoice, NewTransaction};

use super::{MethodDescriptor, endpoints};

/// One API operation together with its arguments.
///
/// Every variant maps to exactly one [`MethodDescriptor`] through
/// [`ApiMethod::descriptor`]; facades never build descriptors by hand.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiMethod {
    GetExchangeRates,
    GetWithdrawalFees {
        currency: Option<String>,
        network: Option<String>,
    },
    GetAddresses {
        currency: Option<String>,
        label: Option<String>,
    },
    CreateAddress(NewAddress),
    GetAddressTransactions {
        address_id: String,
    },
    GetTransactions,
    CreateTransaction(NewTransaction),
    GetInvoices {
        page: Option<u32>,
        per_page: Option<u32>,
    },
    CreateCryptoInvoice(NewCryptoInvoice),
    CreateFiatInvoice(NewFiatInvoice),
    GetPublicInvoices {
        api_token: String,
    },
    CreatePublicInvoice(NewPublicInvoice),
}

impl ApiMethod {
    /// Short operation name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GetExchangeRates => "get_exchange_rates",
            Self::GetWithdrawalFees { .. } => "get_withdrawal_fees",
            Self::GetAddresses { .. } => "get_addresses",
            Self::CreateAddress(_) => "create_address",
            Self::GetAddressTransactions { .. } => "get_address_transactions",
            Self::GetTransactions => "get_transactions",
            Self::CreateTransaction(_) => "create_transaction",
            Self::GetInvoices { .. } => "get_invoices",
            Self::CreateCryptoInvoice(_) => "create_crypto_invoice",
            Self::CreateFiatInvoice(_) => "create_fiat_invoice",
            Self::GetPublicInvoices { .. } => "get_public_invoices",
            Self::CreatePublicInvoice(_) => "create_public_invoice",
        }
    }

    /// Builds the transport shape of this operation.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidEndpoint`] if an address id would escape its path segment
    /// - [`Error::Payload`] if a payload cannot be serialized
    pub fn descriptor(&self) -> Result<MethodDescriptor> {
        let descriptor = match self {
            Self::GetExchangeRates => MethodDescriptor::get(endpoints::EXCHANGE_RATES),
            Self::GetWithdrawalFees { currency, network } => {
                MethodDescriptor::get(endpoints::WITHDRAWAL_FEES)
                    .with_param("currency", currency.as_ref())
                    .with_param("network", network.as_ref())
            }
            Self::GetAddresses { currency, label } => MethodDescriptor::get(endpoints::ADDRESSES)
                .with_param("currency", currency.as_ref())
                .with_param("label", label.as_ref()),
            Self::CreateAddress(address) => MethodDescriptor::post(endpoints::ADDRESSES, address)?,
            Self::GetAddressTransactions { address_id } => {
                MethodDescriptor::get(endpoints::address_transactions(path_segment(address_id)?))
            }
            Self::GetTransactions => MethodDescriptor::get(endpoints::TRANSACTIONS),
            Self::CreateTransaction(transaction) => {
                MethodDescriptor::post(endpoints::TRANSACTIONS, transaction)?
            }
            Self::GetInvoices { page, per_page } => MethodDescriptor::get(endpoints::INVOICES)
                .with_param("page", *page)
                .with_param("per_page", *per_page),
            Self::CreateCryptoInvoice(invoice) => {
                MethodDescriptor::post(endpoints::INVOICES, invoice)?
            }
            Self::CreateFiatInvoice(invoice) => MethodDescriptor::post(endpoints::INVOICES, invoice)?,
            Self::GetPublicInvoices { api_token } => {
                MethodDescriptor::get(endpoints::PUBLIC_INVOICES)
                    .with_param("api_token", Some(api_token))
                    .public()
            }
            Self::CreatePublicInvoice(invoice) => {
                MethodDescriptor::post(endpoints::PUBLIC_INVOICES, invoice)?.public()
            }
        };

        Ok(descriptor)
    }
}

fn path_segment(id: &str) -> Result<&str> {
    // Percent escapes can spell a dot segment (`%2e%2e`).
    let escapes = id.contains(['/', '?', '#', '\\', '%']);
    if id.is_empty() || escapes || id == "." || id == ".." {
        return Err(Error::InvalidEndpoint {
            endpoint: endpoints::address_transactions(id),
            reason: "address id must be a single non-empty, unescaped path segment".to_string(),
        });
    }
    Ok(id)
}
