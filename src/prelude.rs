//! Prelude module for convenient imports.
//!
//! ```rust
//! use snmposter::prelude::*;
//! ```
//!
//! This imports:
//! - Core types: [`Oid`], [`Value`], [`VarBind`]
//! - Lookups: [`OidStore`], [`MibView`], [`GetResult`], [`GetNextResult`]
//! - Loading: [`InstanceManager`], [`InstanceConfig`]
//! - Error handling: [`Error`], [`Result`]
//! - The [`oid!`] macro for compile-time OID construction

pub use crate::config::InstanceConfig;
pub use crate::error::{Error, Result};
pub use crate::handler::{GetNextResult, GetResult, MibView, OidStore};
pub use crate::instance::InstanceManager;
pub use crate::oid::Oid;
pub use crate::value::Value;
pub use crate::varbind::VarBind;

#[doc(no_inline)]
pub use crate::oid;
