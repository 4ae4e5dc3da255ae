use crate::client::Executor;
use crate::error::Result;
use crate::method::ApiMethod;
use crate::models::ExchangeRates;
use crate::transport::HttpClient;

/// Exchange rate operations.
#[derive(Debug)]
pub struct ExchangeRatesApi<'a, H> {
    executor: &'a Executor<H>,
}

impl<'a, H: HttpClient> ExchangeRatesApi<'a, H> {
    pub(crate) const fn new(executor: &'a Executor<H>) -> Self {
        Self { executor }
    }

    /// All exchange rates, keyed by pair such as `BTC_USD`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn all(&self) -> Result<ExchangeRates> {
        super::invoke(self.executor, &ApiMethod::GetExchangeRates).await
    }
}
