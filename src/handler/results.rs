//! Result types for read-only MIB queries.

use crate::value::Value;
use crate::varbind::VarBind;

/// Result of an exact-match lookup.
///
/// A miss is a normal outcome, not an error. A protocol engine maps it to
/// `noSuchObject`/`noSuchInstance` (v2c) or `noSuchName` (v1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetResult {
    /// The OID exists and has the given value.
    Value(Value),
    /// No object at this OID.
    NotFound,
}

impl GetResult {
    /// Check if this result holds a value.
    pub fn is_found(&self) -> bool {
        matches!(self, GetResult::Value(_))
    }

    /// Convert into an `Option`.
    pub fn into_value(self) -> Option<Value> {
        match self {
            GetResult::Value(v) => Some(v),
            GetResult::NotFound => None,
        }
    }
}

impl From<Option<Value>> for GetResult {
    fn from(value: Option<Value>) -> Self {
        value.map(GetResult::Value).unwrap_or(GetResult::NotFound)
    }
}

/// Result of a next-object lookup.
///
/// `EndOfTree` is the normal end of a walk; engines map it to
/// `endOfMibView` (v2c) or `noSuchName` (v1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetNextResult {
    /// The next OID in order and its value.
    Value(VarBind),
    /// No OID after the requested one.
    EndOfTree,
}

impl GetNextResult {
    /// Check if this is the end of the tree.
    pub fn is_end(&self) -> bool {
        matches!(self, GetNextResult::EndOfTree)
    }

    /// Convert into an `Option`.
    pub fn into_varbind(self) -> Option<VarBind> {
        match self {
            GetNextResult::Value(vb) => Some(vb),
            GetNextResult::EndOfTree => None,
        }
    }
}

impl From<Option<VarBind>> for GetNextResult {
    fn from(vb: Option<VarBind>) -> Self {
        vb.map(GetNextResult::Value)
            .unwrap_or(GetNextResult::EndOfTree)
    }
}
