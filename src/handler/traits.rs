//! MibView trait: the read-only query surface handed to a protocol engine.

use crate::oid::Oid;
use crate::varbind::VarBind;

use super::{GetNextResult, GetResult, OidStore};

/// Read-only view of an emulated device's MIB.
///
/// A protocol engine needs only these two calls: GET maps to
/// [`get`](MibView::get), and GETNEXT/GETBULK/walks map to repeated
/// [`get_next`](MibView::get_next) calls.
///
/// # GETNEXT and Ordering
///
/// [`get_next`](MibView::get_next) returns the entry with the smallest OID
/// strictly greater than the requested one. OIDs are compared arc-by-arc as
/// unsigned integers: `1.3.6.1.2` < `1.3.6.1.2.1` < `1.3.6.1.3`. Passing
/// [`Oid::empty()`] returns the first entry.
///
/// # Thread Safety
///
/// Views must be `Send + Sync`: an engine may serve many requests concurrently.
/// Implementations over a frozen [`OidStore`] need no locking.
///
/// # Example
///
/// ```rust
/// use snmposter::handler::{GetNextResult, MibView, OidStore};
/// use snmposter::{Oid, Value, VarBind, oid};
///
/// fn walk_all(view: &dyn MibView) -> Vec<VarBind> {
///     let mut out = Vec::new();
///     let mut cursor = Oid::empty();
///     while let GetNextResult::Value(vb) = view.get_next(&cursor) {
///         cursor = vb.oid.clone();
///         out.push(vb);
///     }
///     out
/// }
///
/// let store = OidStore::build([VarBind::new(oid!(1, 3, 6, 1), Value::Integer(1))]).unwrap();
/// assert_eq!(walk_all(&store).len(), 1);
/// ```
pub trait MibView: Send + Sync {
    /// Exact-match lookup.
    fn get(&self, oid: &Oid) -> GetResult;

    /// Next object strictly after `oid`.
    fn get_next(&self, oid: &Oid) -> GetNextResult;
}

impl MibView for OidStore {
    fn get(&self, oid: &Oid) -> GetResult {
        OidStore::get(self, oid).cloned().into()
    }

    fn get_next(&self, oid: &Oid) -> GetNextResult {
        OidStore::get_next(self, oid)
            .map(|(o, v)| VarBind::new(o.clone(), v.clone()))
            .into()
    }
}
