//! Active-transport registry.
//!
//! The host SDK routes every REST call through whichever transport is
//! currently installed here. Installing the gateway's controller is the
//! one-line setup step an application performs at startup.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::traits::RestTransport;

/// Slot holding the active REST transport.
///
/// The host owns one registry; components resolve the transport through it
/// at call time, so a swap is observed by the next request.
#[derive(Default)]
pub struct TransportRegistry {
    transport: RwLock<Option<Arc<dyn RestTransport>>>,
}

impl TransportRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `transport` as the active REST transport.
    pub fn install(&self, transport: Arc<dyn RestTransport>) {
        *self.transport.write() = Some(transport);
    }

    /// Returns the active transport, if one is installed.
    #[must_use]
    pub fn current(&self) -> Option<Arc<dyn RestTransport>> {
        self.transport.read().clone()
    }

    /// Removes the active transport.
    pub fn clear(&self) {
        *self.transport.write() = None;
    }
}

impl std::fmt::Debug for TransportRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportRegistry")
            .field("installed", &self.transport.read().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, TransportError};
    use crate::traits::{HttpMethod, RequestOptions, RestResponse};
    use async_trait::async_trait;
    use serde_json::Value;

    struct NullTransport;

    #[async_trait]
    impl RestTransport for NullTransport {
        async fn ajax(
            &self,
            _method: HttpMethod,
            _url: &str,
            _body: String,
            _headers: Vec<(String, String)>,
        ) -> Result<RestResponse, TransportError> {
            Err(TransportError::ConnectionFailed)
        }

        async fn request(
            &self,
            _method: HttpMethod,
            _path: &str,
            _data: Value,
            _options: &RequestOptions,
        ) -> Result<RestResponse, ParseError> {
            Err(ParseError::connection_failed("no transport"))
        }
    }

    #[test]
    fn test_install_and_clear() {
        let registry = TransportRegistry::new();
        assert!(registry.current().is_none());

        registry.install(Arc::new(NullTransport));
        assert!(registry.current().is_some());

        registry.clear();
        assert!(registry.current().is_none());
    }

    #[test]
    fn test_install_replaces_previous() {
        let registry = TransportRegistry::new();
        registry.install(Arc::new(NullTransport));
        let first = registry.current().unwrap();

        registry.install(Arc::new(NullTransport));
        let second = registry.current().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }
}
