//! Emulated device instances.
//!
//! An [`Instance`] owns one bind address and one frozen [`OidStore`]. Nothing
//! is shared between instances. [`InstanceManager`] loads a whole agents list,
//! keeps the instances that came up, and reports the ones that did not.

mod manager;

pub use manager::{EngineRegistry, InstanceManager, RegistrationError};

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use crate::config::InstanceConfig;
use crate::error::{Error, LoadError, LoadFailure};
use crate::handler::{GetNextResult, GetResult, MibView, OidStore};
use crate::oid::Oid;
use crate::walk::{self, ParseOutput, RecordError};

/// One emulated device, ready to be served.
#[derive(Debug, Clone)]
pub struct Instance {
    config: InstanceConfig,
    store: Arc<OidStore>,
    skipped: Arc<[RecordError]>,
}

impl Instance {
    /// Load the capture named by `config` and build its store.
    ///
    /// Malformed records are skipped and kept in [`skipped`](Instance::skipped).
    /// The load fails if the file cannot be read, if no record survives, or if
    /// two records share an identifier.
    pub fn load(config: InstanceConfig) -> Result<Self, LoadError> {
        tracing::debug!(
            snmposter.file = %config.capture.display(),
            snmposter.bind = %config.bind,
            "loading instance"
        );

        let parsed = match walk::parse_file(&config.capture) {
            Ok(parsed) => parsed,
            Err(err) => {
                let source = match err {
                    Error::Io { source, .. } => source,
                    other => std::io::Error::other(other.to_string()),
                };
                return Err(LoadError {
                    capture: config.capture,
                    bind: config.bind,
                    reason: LoadFailure::Io(source),
                    skipped: Vec::new(),
                });
            }
        };

        Self::from_parsed(config, parsed)
    }

    /// Build an instance from an already-parsed capture.
    pub fn from_parsed(config: InstanceConfig, parsed: ParseOutput) -> Result<Self, LoadError> {
        let ParseOutput { records, errors } = parsed;

        if records.is_empty() {
            return Err(LoadError {
                capture: config.capture,
                bind: config.bind,
                reason: LoadFailure::Empty {
                    skipped: errors.len(),
                },
                skipped: errors,
            });
        }

        let store = match OidStore::build_unique(records) {
            Ok(store) => store,
            Err(oid) => {
                return Err(LoadError {
                    capture: config.capture,
                    bind: config.bind,
                    reason: LoadFailure::Duplicate(oid),
                    skipped: errors,
                });
            }
        };

        if !errors.is_empty() {
            tracing::warn!(
                snmposter.file = %config.capture.display(),
                snmposter.bind = %config.bind,
                snmposter.skipped = errors.len(),
                "instance loaded with skipped records"
            );
        }
        tracing::debug!(
            snmposter.file = %config.capture.display(),
            snmposter.bind = %config.bind,
            snmposter.records = store.len(),
            "instance loaded"
        );

        Ok(Self {
            config,
            store: Arc::new(store),
            skipped: errors.into(),
        })
    }

    /// Address the protocol engine should bind for this device.
    pub fn bind_addr(&self) -> SocketAddr {
        self.config.bind
    }

    /// Capture file this instance was loaded from.
    pub fn capture(&self) -> &Path {
        &self.config.capture
    }

    /// The instance's configuration.
    pub fn config(&self) -> &InstanceConfig {
        &self.config
    }

    /// Shared handle to the frozen store.
    pub fn store(&self) -> &Arc<OidStore> {
        &self.store
    }

    /// Records dropped while parsing the capture.
    pub fn skipped(&self) -> &[RecordError] {
        &self.skipped
    }
}

impl MibView for Instance {
    fn get(&self, oid: &Oid) -> GetResult {
        MibView::get(&*self.store, oid)
    }

    fn get_next(&self, oid: &Oid) -> GetNextResult {
        MibView::get_next(&*self.store, oid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;
    use crate::value::Value;
    use crate::walk::parse_str;

    fn config() -> InstanceConfig {
        InstanceConfig::new("memory.snmpwalk", "127.0.1.1:161".parse().unwrap())
    }

    #[test]
    fn test_from_parsed_keeps_skipped() {
        let parsed = parse_str(
            "1.3.6.1.2.1.1.5.0 = STRING: \"router1\"\n1.3.6.1.2.1.1.3.0 = Timeticks: soon\n",
        );
        let instance = Instance::from_parsed(config(), parsed).unwrap();
        assert_eq!(instance.store().len(), 1);
        assert_eq!(instance.skipped().len(), 1);
        assert_eq!(
            instance.bind_addr(),
            "127.0.1.1:161".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(
            MibView::get(&instance, &oid!(1, 3, 6, 1, 2, 1, 1, 5, 0)),
            GetResult::Value(Value::from("router1"))
        );
    }

    #[test]
    fn test_from_parsed_empty_is_error() {
        let parsed = parse_str("1.3.6.1.2.1.1.3.0 = Timeticks: soon\n");
        let err = Instance::from_parsed(config(), parsed).unwrap_err();
        assert!(matches!(err.reason, LoadFailure::Empty { skipped: 1 }));
        assert_eq!(err.skipped.len(), 1);
    }

    #[test]
    fn test_from_parsed_duplicate_is_error() {
        let parsed = parse_str("1.3.6.1.2.1.2.1.0 = INTEGER: 1\n1.3.6.1.2.1.2.1.0 = INTEGER: 2\n");
        let err = Instance::from_parsed(config(), parsed).unwrap_err();
        match err.reason {
            LoadFailure::Duplicate(oid) => assert_eq!(oid, oid!(1, 3, 6, 1, 2, 1, 2, 1, 0)),
            other => panic!("expected Duplicate, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let cfg = InstanceConfig::new("/nonexistent/walk", "127.0.1.1:161".parse().unwrap());
        let err = Instance::load(cfg).unwrap_err();
        assert!(matches!(err.reason, LoadFailure::Io(_)));
    }
}
