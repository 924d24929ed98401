// Allow large error types - the Error enum carries identifiers and input text inline.
#![allow(clippy::result_large_err)]

//! # snmposter
//!
//! Data layer for emulating SNMP devices from `snmpwalk` captures.
//!
//! A capture (the text output of `snmpwalk -On`) is parsed into typed
//! records, frozen into an ordered [`OidStore`], and served read-only
//! through [`MibView::get`] and [`MibView::get_next`]. Many captures can be
//! loaded side by side, each bound to its own address, via
//! [`InstanceManager`].
//!
//! ## Features
//!
//! - Tolerant walk parser: multi-line strings, untyped values, junk in
//!   identifiers, and per-record errors that never abort a file
//! - Arc-wise numeric OID ordering and binary-search lookups
//! - Independent, lock-free instances loaded sequentially or on Tokio's
//!   blocking pool
//!
//! ## Quick Start
//!
//! ```rust
//! use snmposter::{MibView, Oid, OidStore, oid, walk};
//!
//! let capture = "\
//! .1.3.6.1.2.1.1.5.0 = STRING: \"router1\"
//! .1.3.6.1.2.1.1.3.0 = Timeticks: (12345) 0:02:03.45
//! ";
//!
//! let parsed = walk::parse_str(capture);
//! assert!(parsed.errors.is_empty());
//! let store = OidStore::build(parsed.records)?;
//!
//! // Walk from the start: records come back in OID order.
//! let first = MibView::get_next(&store, &Oid::empty()).into_varbind().unwrap();
//! assert_eq!(first.oid, oid!(1, 3, 6, 1, 2, 1, 1, 3, 0));
//! assert_eq!(first.value.as_u32(), Some(12345));
//! # Ok::<(), snmposter::Error>(())
//! ```
//!
//! ## Multiple devices
//!
//! ```rust,no_run
//! use snmposter::{Config, InstanceManager};
//!
//! let config = Config::from_path("agents.csv")?;
//! let manager = InstanceManager::from_config(&config);
//! for failed in manager.failed() {
//!     eprintln!("{failed}");
//! }
//! for instance in manager.active() {
//!     println!("{} -> {} records", instance.bind_addr(), instance.store().len());
//! }
//! # Ok::<(), snmposter::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod handler;
pub mod instance;
pub mod oid;
pub mod prelude;
pub mod value;
pub mod varbind;
pub mod walk;

pub(crate) mod util;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::{Config, DEFAULT_AGENT_PORT, InstanceConfig};
pub use error::{
    ConfigErrorKind, Error, IdentifierErrorKind, LoadError, LoadFailure, Result, ValueErrorKind,
};
pub use handler::{GetNextResult, GetResult, MibView, OidStore};
pub use instance::{EngineRegistry, Instance, InstanceManager, RegistrationError};
pub use oid::{Oid, sanitize};
pub use value::Value;
pub use varbind::VarBind;
pub use walk::{ParseOutput, RecordError, TypeTag, WalkParser};
