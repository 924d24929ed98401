//! Loading a full agents list into independent instances.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::JoinError;

use crate::config::{Config, InstanceConfig};
use crate::error::{LoadError, LoadFailure};
use crate::handler::OidStore;

use super::Instance;

/// Sink for loaded instances, implemented by the protocol engine.
///
/// The manager hands each instance's bind address and store to the engine
/// once loading is done. How the engine binds and answers requests is its
/// own business.
pub trait EngineRegistry {
    /// Error returned when the engine cannot take an instance.
    type Error;

    /// Register one instance under `bind`.
    fn register(&mut self, bind: SocketAddr, view: Arc<OidStore>) -> Result<(), Self::Error>;
}

/// An engine refusal for one instance.
#[derive(Debug)]
pub struct RegistrationError<E> {
    /// Address of the instance the engine refused.
    pub bind: SocketAddr,
    /// The engine's error.
    pub error: E,
}

/// Loaded instances plus the ones that failed.
///
/// A failing instance never stops the others: its [`LoadError`] is kept in
/// [`failed`](InstanceManager::failed) and loading moves on. Active instances
/// keep agents-list order.
#[derive(Debug, Default)]
pub struct InstanceManager {
    active: Vec<Instance>,
    failed: Vec<LoadError>,
}

impl InstanceManager {
    /// Load every instance one after another.
    pub fn load(configs: impl IntoIterator<Item = InstanceConfig>) -> Self {
        let mut manager = Self::default();
        for config in configs {
            manager.record(Instance::load(config));
        }
        manager.log_summary();
        manager
    }

    /// Load every instance from a parsed agents list.
    pub fn from_config(config: &Config) -> Self {
        Self::load(config.instances.iter().cloned())
    }

    /// Load instances on the blocking pool, one task per capture.
    ///
    /// Results are collected in agents-list order regardless of which task
    /// finishes first. A panic inside a load task is resumed on the caller; a
    /// cancelled task is recorded as a failed instance.
    pub async fn load_concurrent(configs: impl IntoIterator<Item = InstanceConfig>) -> Self {
        let handles: Vec<_> = configs
            .into_iter()
            .map(|config| {
                let capture = config.capture.clone();
                let bind = config.bind;
                let handle = tokio::task::spawn_blocking(move || Instance::load(config));
                (capture, bind, handle)
            })
            .collect();

        let mut manager = Self::default();
        for (capture, bind, handle) in handles {
            manager.record(joined(capture, bind, handle.await));
        }
        manager.log_summary();
        manager
    }

    fn record(&mut self, result: Result<Instance, LoadError>) {
        match result {
            Ok(instance) => self.active.push(instance),
            Err(err) => {
                tracing::warn!(
                    snmposter.file = %err.capture.display(),
                    snmposter.bind = %err.bind,
                    error = %err.reason,
                    "instance failed to load"
                );
                self.failed.push(err);
            }
        }
    }

    fn log_summary(&self) {
        tracing::info!(
            snmposter.active = self.active.len(),
            snmposter.failed = self.failed.len(),
            "instances loaded"
        );
    }

    /// Instances that loaded, in agents-list order.
    pub fn active(&self) -> &[Instance] {
        &self.active
    }

    /// Instances that failed to load.
    pub fn failed(&self) -> &[LoadError] {
        &self.failed
    }

    /// Find the active instance bound to `bind`.
    pub fn get(&self, bind: SocketAddr) -> Option<&Instance> {
        self.active.iter().find(|instance| instance.bind_addr() == bind)
    }

    /// Hand every active instance to the engine.
    ///
    /// A refusal is logged and returned; the remaining instances are still
    /// registered.
    pub fn register_all<R: EngineRegistry>(
        &self,
        registry: &mut R,
    ) -> Vec<RegistrationError<R::Error>> {
        let mut refused = Vec::new();
        for instance in &self.active {
            let bind = instance.bind_addr();
            match registry.register(bind, Arc::clone(instance.store())) {
                Ok(()) => {
                    tracing::debug!(snmposter.bind = %bind, "instance registered");
                }
                Err(error) => {
                    tracing::warn!(snmposter.bind = %bind, "engine refused instance");
                    refused.push(RegistrationError { bind, error });
                }
            }
        }
        refused
    }

    /// Consume the manager, returning active and failed instances.
    pub fn into_parts(self) -> (Vec<Instance>, Vec<LoadError>) {
        (self.active, self.failed)
    }
}

/// Unwrap a finished load task.
///
/// Only a runtime shutdown cancels a blocking task.
fn joined(
    capture: PathBuf,
    bind: SocketAddr,
    result: Result<Result<Instance, LoadError>, JoinError>,
) -> Result<Instance, LoadError> {
    match result {
        Ok(loaded) => loaded,
        Err(join_err) => match join_err.try_into_panic() {
            Ok(payload) => std::panic::resume_unwind(payload),
            Err(_) => Err(LoadError {
                capture,
                bind,
                reason: LoadFailure::Cancelled,
                skipped: Vec::new(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::MibView;
    use crate::oid;
    use crate::value::Value;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn capture(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn addr(s: &str) -> SocketAddr {
        s.parse().unwrap()
    }

    #[derive(Default)]
    struct RecordingRegistry {
        views: HashMap<SocketAddr, Arc<OidStore>>,
        refuse: Option<SocketAddr>,
    }

    impl EngineRegistry for RecordingRegistry {
        type Error = &'static str;

        fn register(&mut self, bind: SocketAddr, view: Arc<OidStore>) -> Result<(), Self::Error> {
            if self.refuse == Some(bind) {
                return Err("address in use");
            }
            self.views.insert(bind, view);
            Ok(())
        }
    }

    #[test]
    fn test_load_isolates_failures() {
        let good = capture("1.3.6.1.2.1.1.5.0 = STRING: \"router1\"\n");
        let empty = capture("");
        let configs = vec![
            InstanceConfig::new(good.path(), addr("127.0.1.1:161")),
            InstanceConfig::new(empty.path(), addr("127.0.1.2:161")),
            InstanceConfig::new("/nonexistent/walk", addr("127.0.1.3:161")),
        ];

        let manager = InstanceManager::load(configs);
        assert_eq!(manager.active().len(), 1);
        assert_eq!(manager.failed().len(), 2);
        assert!(matches!(
            manager.failed()[0].reason,
            LoadFailure::Empty { skipped: 0 }
        ));
        assert!(matches!(manager.failed()[1].reason, LoadFailure::Io(_)));

        let instance = manager.get(addr("127.0.1.1:161")).unwrap();
        assert_eq!(
            MibView::get(instance, &oid!(1, 3, 6, 1, 2, 1, 1, 5, 0)).into_value(),
            Some(Value::from("router1"))
        );
        assert!(manager.get(addr("127.0.1.2:161")).is_none());
    }

    #[test]
    fn test_instances_do_not_share_stores() {
        let a = capture("1.3.6.1.2.1.1.5.0 = STRING: \"a\"\n");
        let b = capture("1.3.6.1.2.1.1.5.0 = STRING: \"b\"\n");
        let manager = InstanceManager::load([
            InstanceConfig::new(a.path(), addr("127.0.1.1:161")),
            InstanceConfig::new(b.path(), addr("127.0.1.2:161")),
        ]);

        let name = oid!(1, 3, 6, 1, 2, 1, 1, 5, 0);
        let a = manager.get(addr("127.0.1.1:161")).unwrap();
        let b = manager.get(addr("127.0.1.2:161")).unwrap();
        assert_eq!(a.store().get(&name), Some(&Value::from("a")));
        assert_eq!(b.store().get(&name), Some(&Value::from("b")));
        assert!(!Arc::ptr_eq(a.store(), b.store()));
    }

    #[test]
    fn test_register_all_continues_after_refusal() {
        let a = capture("1.3.6.1.2.1.1.5.0 = STRING: \"a\"\n");
        let b = capture("1.3.6.1.2.1.1.5.0 = STRING: \"b\"\n");
        let manager = InstanceManager::load([
            InstanceConfig::new(a.path(), addr("127.0.1.1:161")),
            InstanceConfig::new(b.path(), addr("127.0.1.2:161")),
        ]);

        let mut registry = RecordingRegistry {
            refuse: Some(addr("127.0.1.1:161")),
            ..Default::default()
        };
        let refused = manager.register_all(&mut registry);

        assert_eq!(refused.len(), 1);
        assert_eq!(refused[0].bind, addr("127.0.1.1:161"));
        assert_eq!(refused[0].error, "address in use");
        assert_eq!(registry.views.len(), 1);
        assert!(registry.views.contains_key(&addr("127.0.1.2:161")));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_load_concurrent_preserves_order() {
        let captures: Vec<_> = (1..=4)
            .map(|i| capture(&format!("1.3.6.1.2.1.1.5.0 = STRING: \"device{i}\"\n")))
            .collect();
        let configs: Vec<_> = captures
            .iter()
            .enumerate()
            .map(|(i, c)| InstanceConfig::new(c.path(), addr(&format!("127.0.1.{}:161", i + 1))))
            .collect();

        let manager = InstanceManager::load_concurrent(configs).await;
        assert!(manager.failed().is_empty());
        let binds: Vec<_> = manager.active().iter().map(Instance::bind_addr).collect();
        assert_eq!(
            binds,
            vec![
                addr("127.0.1.1:161"),
                addr("127.0.1.2:161"),
                addr("127.0.1.3:161"),
                addr("127.0.1.4:161"),
            ]
        );
    }

    #[tokio::test]
    async fn test_cancelled_load_is_recorded_as_failure() {
        let handle = tokio::spawn(std::future::pending::<Result<Instance, LoadError>>());
        handle.abort();
        let result = handle.await;
        assert!(result.as_ref().is_err_and(|e| e.is_cancelled()));

        let mut manager = InstanceManager::default();
        manager.record(joined(
            PathBuf::from("/captures/switch.walk"),
            addr("127.0.1.9:161"),
            result,
        ));

        assert!(manager.active().is_empty());
        assert_eq!(manager.failed().len(), 1);
        let failed = &manager.failed()[0];
        assert_eq!(failed.capture, PathBuf::from("/captures/switch.walk"));
        assert_eq!(failed.bind, addr("127.0.1.9:161"));
        assert!(matches!(failed.reason, LoadFailure::Cancelled));
        assert!(failed.skipped.is_empty());
    }
}
