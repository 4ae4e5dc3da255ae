//! The API client: header provider, session manager, request executor and
//! the combined [`BitpapaClient`].

mod config;
mod executor;
mod headers;
mod session;

#[cfg(test)]
mod session_tests;

pub use config::{
    AccessToken, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};
pub use executor::Executor;
pub use headers::{ACCESS_TOKEN, HeaderProvider};
pub use session::{ClientSession, SessionManager};

use crate::api::{
    AddressesApi, ExchangeRatesApi, InvoicesApi, PublicInvoicesApi, TransactionsApi,
    WithdrawalFeesApi,
};
use crate::error::{Error, Result};
use crate::transport::{HttpClient, ReqwestClient};

/// Client for the Bitpapa Pay API.
///
/// Owns one [`Executor`] (and through it one session) and hands out
/// lightweight facades per API area. Facades borrow the client, so every
/// call goes through the same session.
///
/// # Example
///
/// ```no_run
/// use bitpapa_pay::{AccessToken, BitpapaClient, ClientConfig};
///
/// # async fn example() -> bitpapa_pay::Result<()> {
/// let token = AccessToken::new("merchant-token").expect("valid token");
/// let client = BitpapaClient::from_config(ClientConfig::new().with_access_token(token))?;
///
/// let rates = client.exchange_rates().all().await?;
/// println!("BTC/USD: {:?}", rates.rate("BTC", "USD"));
///
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BitpapaClient<H = ReqwestClient> {
    executor: Executor<H>,
    access_token: Option<AccessToken>,
}

impl BitpapaClient<ReqwestClient> {
    /// Creates a client for the production API with the given token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Setup`] if the HTTP transport cannot be created.
    pub fn new(access_token: AccessToken) -> Result<Self> {
        Self::from_config(ClientConfig::new().with_access_token(access_token))
    }

    /// Creates a client with a reqwest transport built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Setup`] if the HTTP transport cannot be created.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestClient::with_timeout(config.timeout).map_err(Error::Setup)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<H> BitpapaClient<H> {
    /// Creates a client over a custom transport.
    #[must_use]
    pub fn with_transport(transport: H, config: ClientConfig) -> Self {
        let headers = HeaderProvider::from_config(&config);
        let sessions = SessionManager::new(transport, config.base_url, &headers);
        Self {
            executor: Executor::new(sessions),
            access_token: config.access_token,
        }
    }

    /// The request executor shared by all facades.
    #[must_use]
    pub const fn executor(&self) -> &Executor<H> {
        &self.executor
    }

    /// Releases the session. Later calls fail with [`Error::SessionClosed`].
    pub fn close(&self) {
        self.executor.sessions().close();
    }

    /// Returns true once the client has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.executor.sessions().is_closed()
    }
}

impl<H: HttpClient> BitpapaClient<H> {
    /// Exchange rate operations.
    #[must_use]
    pub const fn exchange_rates(&self) -> ExchangeRatesApi<'_, H> {
        ExchangeRatesApi::new(&self.executor)
    }

    /// Withdrawal fee operations.
    #[must_use]
    pub const fn withdrawal_fees(&self) -> WithdrawalFeesApi<'_, H> {
        WithdrawalFeesApi::new(&self.executor)
    }

    /// Deposit address operations.
    #[must_use]
    pub const fn addresses(&self) -> AddressesApi<'_, H> {
        AddressesApi::new(&self.executor)
    }

    /// Transaction operations.
    #[must_use]
    pub const fn transactions(&self) -> TransactionsApi<'_, H> {
        TransactionsApi::new(&self.executor)
    }

    /// Merchant invoice operations.
    #[must_use]
    pub const fn invoices(&self) -> InvoicesApi<'_, H> {
        InvoicesApi::new(&self.executor)
    }

    /// Legacy public invoice operations, authenticated by a token in the
    /// query or body instead of a header.
    #[must_use]
    pub const fn public_invoices(&self) -> PublicInvoicesApi<'_, H> {
        PublicInvoicesApi::new(&self.executor, self.access_token.as_ref())
    }
}
