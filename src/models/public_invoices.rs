//! Legacy invoice flow where the token travels in the query or body.

use serde::{Deserialize, Serialize};

use super::serde_util::amount;

/// Telegram bot that hosts the payment page of public invoices.
const TELEGRAM_BOT_URL: &str = "https://t.me/bitpapa_bot";

/// Invoice created through the legacy public endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicInvoice {
    pub id: String,
    pub currency_code: String,
    #[serde(deserialize_with = "amount::deserialize")]
    pub amount: f64,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl PublicInvoice {
    /// Telegram deep link that opens the payment flow for this invoice.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{TELEGRAM_BOT_URL}?start={}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicInvoices {
    pub invoices: Vec<PublicInvoice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicInvoiceResponse {
    pub invoice: PublicInvoice,
}

/// Body of the legacy create call: `{"api_token": .., "invoice": {..}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPublicInvoice {
    pub api_token: String,
    pub invoice: PublicInvoiceInput,
}

/// Invoice fields of [`NewPublicInvoice`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicInvoiceInput {
    pub currency_code: String,
    pub amount: f64,
}

impl NewPublicInvoice {
    /// Invoice for `amount` of `currency_code`, authorized by `api_token`.
    #[must_use]
    pub fn new(api_token: impl Into<String>, currency_code: impl Into<String>, amount: f64) -> Self {
        Self {
            api_token: api_token.into(),
            invoice: PublicInvoiceInput {
                currency_code: currency_code.into(),
                amount,
            },
        }
    }
}
