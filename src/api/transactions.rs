use crate::client::Executor;
use crate::error::Result;
use crate::method::ApiMethod;
use crate::models::{NewTransaction, TransactionResponse, Transactions};
use crate::transport::HttpClient;

/// Transaction operations.
#[derive(Debug)]
pub struct TransactionsApi<'a, H> {
    executor: &'a Executor<H>,
}

impl<'a, H: HttpClient> TransactionsApi<'a, H> {
    pub(crate) const fn new(executor: &'a Executor<H>) -> Self {
        Self { executor }
    }

    /// All transactions of the merchant. Rows without a direction, amount
    /// or currency are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn list(&self) -> Result<Transactions> {
        super::invoke_transactions(self.executor, &ApiMethod::GetTransactions).await
    }

    /// Submits a transaction as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn create(&self, transaction: NewTransaction) -> Result<TransactionResponse> {
        super::invoke(self.executor, &ApiMethod::CreateTransaction(transaction)).await
    }

    /// Withdraws `amount` `currency` to an external address.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn withdraw(
        &self,
        currency: &str,
        amount: f64,
        to_address: &str,
        network: &str,
        label: Option<&str>,
    ) -> Result<TransactionResponse> {
        let transaction = NewTransaction::withdrawal(currency, amount, to_address, network)
            .with_label(label.unwrap_or_default());
        self.create(transaction).await
    }

    /// Registers a refill of `amount` `currency` from an external address.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn refill(
        &self,
        currency: &str,
        amount: f64,
        from_address: &str,
        network: &str,
        label: Option<&str>,
    ) -> Result<TransactionResponse> {
        let transaction = NewTransaction::refill(currency, amount, from_address, network)
            .with_label(label.unwrap_or_default());
        self.create(transaction).await
    }
}
