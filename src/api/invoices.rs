use crate::client::Executor;
use crate::error::Result;
use crate::method::ApiMethod;
use crate::models::{InvoiceResponse, Invoices, NewCryptoInvoice, NewFiatInvoice};
use crate::transport::HttpClient;

/// Merchant invoice operations.
#[derive(Debug)]
pub struct InvoicesApi<'a, H> {
    executor: &'a Executor<H>,
}

impl<'a, H: HttpClient> InvoicesApi<'a, H> {
    pub(crate) const fn new(executor: &'a Executor<H>) -> Self {
        Self { executor }
    }

    /// One page of invoices. Unset paging parameters use the API defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn list(&self, page: Option<u32>, per_page: Option<u32>) -> Result<Invoices> {
        super::invoke(self.executor, &ApiMethod::GetInvoices { page, per_page }).await
    }

    /// Issues an invoice priced in crypto.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn create_crypto(&self, invoice: NewCryptoInvoice) -> Result<InvoiceResponse> {
        super::invoke(self.executor, &ApiMethod::CreateCryptoInvoice(invoice)).await
    }

    /// Issues an invoice priced in fiat.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn create_fiat(&self, invoice: NewFiatInvoice) -> Result<InvoiceResponse> {
        super::invoke(self.executor, &ApiMethod::CreateFiatInvoice(invoice)).await
    }
}
