//! The single shared session of a client.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use http::HeaderMap;
use url::Url;

use crate::error::{Error, Result};

use super::headers::HeaderProvider;

/// Reusable connection context: transport, API origin and the header set
/// captured when the session was created.
///
/// Immutable after creation and shared read-only by every in-flight call.
pub struct ClientSession<H> {
    transport: H,
    base_url: Url,
    headers: HeaderMap,
}

impl<H> ClientSession<H> {
    fn new(transport: H, base_url: Url, headers: HeaderMap) -> Self {
        Self {
            transport,
            base_url,
            headers,
        }
    }

    /// API origin endpoint paths are joined onto.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Headers sent with every request of this session.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) const fn transport(&self) -> &H {
        &self.transport
    }

    /// Resolves `endpoint` against the base URL.
    pub(crate) fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        self.base_url
            .join(endpoint)
            .map_err(|e| Error::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })
    }
}

impl<H> fmt::Debug for ClientSession<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSession")
            .field("base_url", &self.base_url.as_str())
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

enum SessionState<H> {
    Open(Arc<ClientSession<H>>),
    Closed,
}

/// Owns the one session of a client.
///
/// The session is created eagerly in [`SessionManager::new`], so concurrent
/// first calls can never race to install two of them. Once
/// [`close`](Self::close)d it is never recreated: [`session`](Self::session)
/// fails with [`Error::SessionClosed`] and a new client must be built.
pub struct SessionManager<H> {
    state: RwLock<SessionState<H>>,
}

impl<H> SessionManager<H> {
    /// Creates the session, capturing the provider's headers now.
    #[must_use]
    pub fn new(transport: H, base_url: Url, headers: &HeaderProvider) -> Self {
        let session = ClientSession::new(transport, base_url, headers.headers());
        Self {
            state: RwLock::new(SessionState::Open(Arc::new(session))),
        }
    }

    /// Returns the shared session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionClosed`] after [`close`](Self::close).
    pub fn session(&self) -> Result<Arc<ClientSession<H>>> {
        match &*self.state.read().unwrap_or_else(PoisonError::into_inner) {
            SessionState::Open(session) => Ok(Arc::clone(session)),
            SessionState::Closed => Err(Error::SessionClosed),
        }
    }

    /// Releases the session. Returns `true` if a session was open.
    ///
    /// Calls already holding the session complete normally; its connection
    /// pool is freed when the last of them finishes. Closing twice is a no-op.
    pub fn close(&self) -> bool {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *state, SessionState::Closed);
        drop(state);

        let was_open = matches!(previous, SessionState::Open(_));
        if was_open {
            tracing::debug!("Client session closed");
        }
        was_open
    }

    /// Returns true once [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(
            *self.state.read().unwrap_or_else(PoisonError::into_inner),
            SessionState::Closed
        )
    }
}

impl<H> fmt::Debug for SessionManager<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("closed", &self.is_closed())
            .finish()
    }
}
