//! Variable binding (VarBind) type.
//!
//! A VarBind pairs an OID with a value. Every record read from a capture
//! is a VarBind, and the store hands VarBinds back from `get_next`.

use crate::oid::Oid;
use crate::value::Value;

/// Variable binding - an OID-value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarBind {
    /// The object identifier.
    pub oid: Oid,
    /// The value.
    pub value: Value,
}

impl VarBind {
    /// Create a new VarBind.
    pub fn new(oid: Oid, value: Value) -> Self {
        Self { oid, value }
    }
}

/// Renders in capture syntax: `1.3.6.1.2.1.1.5.0 = STRING: "router1"`.
impl std::fmt::Display for VarBind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}: {}", self.oid, self.value.type_name(), self.value)
    }
}

impl From<(Oid, Value)> for VarBind {
    fn from((oid, value): (Oid, Value)) -> Self {
        Self { oid, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;

    #[test]
    fn test_display() {
        let vb = VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 5, 0), Value::from("router1"));
        assert_eq!(vb.to_string(), "1.3.6.1.2.1.1.5.0 = STRING: \"router1\"");

        let vb = VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 3, 0), Value::TimeTicks(12345));
        assert_eq!(
            vb.to_string(),
            "1.3.6.1.2.1.1.3.0 = Timeticks: (12345) 0:02:03.45"
        );
    }
}
