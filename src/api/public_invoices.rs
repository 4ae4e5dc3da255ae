use crate::client::{AccessToken, Executor};
use crate::error::{Error, Result};
use crate::method::ApiMethod;
use crate::models::{NewPublicInvoice, PublicInvoiceResponse, PublicInvoices};
use crate::transport::HttpClient;

/// Legacy public invoice flow.
///
/// The token travels as `api_token` in the query string or body; the
/// `X-Access-Token` header is never sent.
#[derive(Debug)]
pub struct PublicInvoicesApi<'a, H> {
    executor: &'a Executor<H>,
    access_token: Option<&'a AccessToken>,
}

impl<'a, H: HttpClient> PublicInvoicesApi<'a, H> {
    pub(crate) const fn new(executor: &'a Executor<H>, access_token: Option<&'a AccessToken>) -> Self {
        Self {
            executor,
            access_token,
        }
    }

    fn token(&self) -> Result<String> {
        self.access_token
            .map(|t| t.expose().to_string())
            .ok_or(Error::MissingAccessToken)
    }

    /// Lists invoices issued through the public flow.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAccessToken`] without a token, or an error if
    /// the request fails or the response is malformed.
    pub async fn list(&self) -> Result<PublicInvoices> {
        let method = ApiMethod::GetPublicInvoices {
            api_token: self.token()?,
        };
        super::invoke(self.executor, &method).await
    }

    /// Issues an invoice for `amount` `currency_code`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAccessToken`] without a token, or an error if
    /// the request fails or the response is malformed.
    pub async fn create(&self, currency_code: &str, amount: f64) -> Result<PublicInvoiceResponse> {
        let invoice = NewPublicInvoice::new(self.token()?, currency_code, amount);
        super::invoke(self.executor, &ApiMethod::CreatePublicInvoice(invoice)).await
    }
}
