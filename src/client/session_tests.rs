//! Tests for the header provider and session manager.

use std::sync::Arc;

use http::HeaderValue;

use super::{ACCESS_TOKEN, AccessToken, ClientConfig, HeaderProvider, SessionManager};
use crate::error::Error;

fn base_url() -> url::Url {
    url::Url::parse("https://bitpapa.test").unwrap()
}

fn provider(token: Option<&str>) -> HeaderProvider {
    HeaderProvider::new(
        HeaderValue::from_static("bitpapa-pay/test"),
        token.map(|t| AccessToken::new(t).unwrap()),
    )
}

mod header_provider {
    use super::*;

    #[test]
    fn headers_contain_content_type_user_agent_and_token() {
        let headers = provider(Some("tok")).headers();

        assert_eq!(headers.len(), 3);
        assert_eq!(headers[http::header::CONTENT_TYPE], "application/json");
        assert_eq!(headers[http::header::USER_AGENT], "bitpapa-pay/test");
        assert_eq!(headers[ACCESS_TOKEN], "tok");
    }

    #[test]
    fn token_header_is_omitted_without_token() {
        let headers = provider(None).headers();

        assert_eq!(headers.len(), 2);
        assert!(!headers.contains_key(ACCESS_TOKEN));
    }

    #[test]
    fn headers_are_identical_across_calls() {
        let provider = provider(Some("tok"));

        assert_eq!(provider.headers(), provider.headers());
    }

    #[test]
    fn token_header_is_sensitive() {
        let headers = provider(Some("tok")).headers();

        assert!(headers[ACCESS_TOKEN].is_sensitive());
        assert!(!format!("{headers:?}").contains("tok\""));
    }

    #[test]
    fn default_config_user_agent_embeds_crate_version() {
        let headers = HeaderProvider::from_config(&ClientConfig::new()).headers();

        assert_eq!(
            headers[http::header::USER_AGENT],
            concat!("bitpapa-pay/", env!("CARGO_PKG_VERSION"))
        );
    }
}

mod access_token {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let token = AccessToken::new("very-secret").unwrap();

        assert_eq!(format!("{token:?}"), "AccessToken(***)");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let token = AccessToken::new("  abc \n").unwrap();

        assert_eq!(token.expose(), "abc");
    }

    #[test]
    fn control_characters_are_rejected() {
        assert!(AccessToken::new("abc\u{7f}def").is_err());
    }
}

mod session_manager {
    use super::*;

    fn manager() -> SessionManager<()> {
        SessionManager::new((), base_url(), &provider(Some("tok")))
    }

    #[test]
    fn repeated_access_returns_same_session() {
        let manager = manager();

        let first = manager.session().unwrap();
        let second = manager.session().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn session_is_bound_to_base_url_and_headers() {
        let session = manager().session().unwrap();

        assert_eq!(session.base_url().as_str(), "https://bitpapa.test/");
        assert_eq!(session.headers()[ACCESS_TOKEN], "tok");
    }

    #[test]
    fn access_after_close_fails() {
        let manager = manager();

        assert!(manager.close());

        assert!(manager.is_closed());
        assert!(matches!(manager.session(), Err(Error::SessionClosed)));
    }

    #[test]
    fn closing_twice_is_a_no_op() {
        let manager = manager();

        assert!(manager.close());
        assert!(!manager.close());
        assert!(manager.is_closed());
    }

    #[test]
    fn session_held_by_in_flight_call_survives_close() {
        let manager = manager();
        let held = manager.session().unwrap();

        manager.close();

        assert_eq!(held.base_url().as_str(), "https://bitpapa.test/");
        assert_eq!(Arc::strong_count(&held), 1);
    }

    #[test]
    fn concurrent_access_shares_one_session() {
        let manager = manager();
        let reference = manager.session().unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| manager.session().unwrap())).collect();
            for handle in handles {
                assert!(Arc::ptr_eq(&handle.join().unwrap(), &reference));
            }
        });
    }

    #[test]
    fn endpoint_url_joins_path_onto_origin() {
        let session = manager().session().unwrap();

        let url = session.endpoint_url("/api/v1/invoices").unwrap();

        assert_eq!(url.as_str(), "https://bitpapa.test/api/v1/invoices");
    }
}
