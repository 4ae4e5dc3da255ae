use crate::client::Executor;
use crate::error::Result;
use crate::method::ApiMethod;
use crate::models::{AddressResponse, Addresses, NewAddress, Transactions};
use crate::transport::HttpClient;

/// Deposit address operations.
#[derive(Debug)]
pub struct AddressesApi<'a, H> {
    executor: &'a Executor<H>,
}

impl<'a, H: HttpClient> AddressesApi<'a, H> {
    pub(crate) const fn new(executor: &'a Executor<H>) -> Self {
        Self { executor }
    }

    /// Lists deposit addresses, optionally filtered by currency and label.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn list(&self, currency: Option<&str>, label: Option<&str>) -> Result<Addresses> {
        let method = ApiMethod::GetAddresses {
            currency: currency.map(str::to_string),
            label: label.map(str::to_string),
        };
        super::invoke(self.executor, &method).await
    }

    /// Creates a deposit address. The label defaults to empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn create(
        &self,
        currency: &str,
        network: &str,
        label: Option<&str>,
    ) -> Result<AddressResponse> {
        let mut address = NewAddress::new(currency, network);
        if let Some(label) = label {
            address = address.with_label(label);
        }
        super::invoke(self.executor, &ApiMethod::CreateAddress(address)).await
    }

    /// Transactions of one address. Rows without a direction, amount or
    /// currency are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not a single path segment, the request
    /// fails or the response is malformed.
    pub async fn transactions(&self, address_id: &str) -> Result<Transactions> {
        let method = ApiMethod::GetAddressTransactions {
            address_id: address_id.to_string(),
        };
        super::invoke_transactions(self.executor, &method).await
    }
}
