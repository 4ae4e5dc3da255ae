//! Typed request payloads and response bodies.
//!
//! Responses are deliberately lenient: fields the API may omit are
//! `Option`s, and amounts accept both JSON numbers and numeric strings.

mod addresses;
mod exchange_rates;
mod invoices;
mod public_invoices;
mod serde_util;
mod transactions;
mod withdrawal_fees;


pub use addresses::{Address, AddressResponse, Addresses, NewAddress};
pub use exchange_rates::ExchangeRates;
pub use invoices::{Invoice, InvoiceResponse, Invoices, NewCryptoInvoice, NewFiatInvoice, PageMeta};
pub use public_invoices::{
    NewPublicInvoice, PublicInvoice, PublicInvoiceInput, PublicInvoiceResponse, PublicInvoices,
};
pub use transactions::{
    Direction, NewTransaction, Transaction, TransactionResponse, Transactions,
};
pub use withdrawal_fees::{WithdrawalFee, WithdrawalFees};

pub(crate) use transactions::RawTransactions;
