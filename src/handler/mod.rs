//! Read-only query types for serving a capture.
//!
//! This module provides the interface a protocol engine consumes:
//!
//! - [`OidStore`] - frozen, sorted OID store with exact and next lookups
//! - [`MibView`] - trait for GET and GETNEXT, implemented by the store
//! - [`GetResult`], [`GetNextResult`] - lookup outcomes
//!
//! # Overview
//!
//! Each emulated device owns one [`OidStore`], built once from its capture and
//! never modified. The engine decodes a request, maps GET to [`MibView::get`]
//! and GETNEXT/GETBULK to repeated [`MibView::get_next`] calls, and encodes
//! the results. There is no SET: captured state is served as-is.
//!
//! ```rust
//! use snmposter::handler::{GetResult, MibView, OidStore};
//! use snmposter::walk::parse_str;
//! use snmposter::{Value, oid};
//!
//! let out = parse_str("1.3.6.1.2.1.1.5.0 = STRING: \"router1\"\n");
//! let store = OidStore::build(out.records).unwrap();
//!
//! assert_eq!(
//!     MibView::get(&store, &oid!(1, 3, 6, 1, 2, 1, 1, 5, 0)),
//!     GetResult::Value(Value::from("router1"))
//! );
//! ```

mod oid_store;
mod results;
mod traits;

pub use oid_store::OidStore;
pub use results::{GetNextResult, GetResult};
pub use traits::MibView;
