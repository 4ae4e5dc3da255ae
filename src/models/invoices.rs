use serde::{Deserialize, Serialize};

use super::serde_util::option_amount;

/// A merchant invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    /// Crypto currency the invoice is paid in
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default, deserialize_with = "option_amount::deserialize")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub fiat_currency_code: Option<String>,
    #[serde(default, deserialize_with = "option_amount::deserialize")]
    pub fiat_amount: Option<f64>,
    pub status: String,
    #[serde(default)]
    pub merchant_invoice_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Payment page
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Pagination block of the invoice listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// One page of invoices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoices {
    pub invoices: Vec<Invoice>,
    #[serde(default, alias = "pagination", skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

/// Response of invoice creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
}

/// Payload for an invoice priced in crypto.
///
/// Unset optional fields are left out of the request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCryptoInvoice {
    pub amount: f64,
    pub currency_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_invoice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewCryptoInvoice {
    /// Invoice for `amount` of `currency_code`.
    #[must_use]
    pub fn new(amount: f64, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
            merchant_invoice_id: None,
            description: None,
        }
    }

    /// Sets the merchant's own reference for this invoice.
    #[must_use]
    pub fn with_merchant_invoice_id(mut self, id: impl Into<String>) -> Self {
        self.merchant_invoice_id = Some(id.into());
        self
    }

    /// Sets the description shown to the payer.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Payload for an invoice priced in fiat and settled in crypto.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFiatInvoice {
    pub fiat_amount: f64,
    pub fiat_currency_code: String,
    /// Crypto currency the payer settles in; the API picks one if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_invoice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewFiatInvoice {
    /// Invoice for `fiat_amount` of `fiat_currency_code`.
    #[must_use]
    pub fn new(fiat_amount: f64, fiat_currency_code: impl Into<String>) -> Self {
        Self {
            fiat_amount,
            fiat_currency_code: fiat_currency_code.into(),
            currency_code: None,
            merchant_invoice_id: None,
            description: None,
        }
    }

    /// Sets the crypto currency the payer settles in.
    #[must_use]
    pub fn with_currency_code(mut self, currency_code: impl Into<String>) -> Self {
        self.currency_code = Some(currency_code.into());
        self
    }

    /// Sets the merchant's own reference for this invoice.
    #[must_use]
    pub fn with_merchant_invoice_id(mut self, id: impl Into<String>) -> Self {
        self.merchant_invoice_id = Some(id.into());
        self
    }

    /// Sets the description shown to the payer.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
