use crate::client::Executor;
use crate::error::Result;
use crate::method::ApiMethod;
use crate::models::WithdrawalFees;
use crate::transport::HttpClient;

/// Withdrawal fee operations.
#[derive(Debug)]
pub struct WithdrawalFeesApi<'a, H> {
    executor: &'a Executor<H>,
}

impl<'a, H: HttpClient> WithdrawalFeesApi<'a, H> {
    pub(crate) const fn new(executor: &'a Executor<H>) -> Self {
        Self { executor }
    }

    /// Withdrawal fee tiers, optionally narrowed to a currency and network.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn list(
        &self,
        currency: Option<&str>,
        network: Option<&str>,
    ) -> Result<WithdrawalFees> {
        let method = ApiMethod::GetWithdrawalFees {
            currency: currency.map(str::to_string),
            network: network.map(str::to_string),
        };
        super::invoke(self.executor, &method).await
    }
}
