//! Integration tests for the frozen OID store and its lookups.

mod common;

use common::*;
use snmposter::walk;
use snmposter::{Error, GetNextResult, GetResult, MibView, Oid, OidStore, Value, VarBind, oid};

fn switch_store() -> OidStore {
    OidStore::build(walk::parse_str(SWITCH_CAPTURE).records).unwrap()
}

#[test]
fn test_empty_store() {
    let store = OidStore::build(Vec::<VarBind>::new()).unwrap();
    assert!(store.is_empty());
    assert_eq!(MibView::get(&store, &sys_descr()), GetResult::NotFound);
    assert_eq!(
        MibView::get_next(&store, &Oid::empty()),
        GetNextResult::EndOfTree
    );
}

#[test]
fn test_full_walk_visits_every_record_in_order() {
    let store = switch_store();
    let mut cursor = Oid::empty();
    let mut visited = Vec::new();

    // N records take N successful steps plus one EndOfTree.
    for _ in 0..=store.len() {
        match MibView::get_next(&store, &cursor) {
            GetNextResult::Value(vb) => {
                assert!(vb.oid > cursor);
                cursor = vb.oid.clone();
                visited.push(vb);
            }
            GetNextResult::EndOfTree => break,
        }
    }

    assert_eq!(visited.len(), SWITCH_RECORDS);
    assert_eq!(visited, store.all());
    assert!(MibView::get_next(&store, &cursor).is_end());
}

#[test]
fn test_get_next_between_entries() {
    let store = switch_store();
    // Not in the store; falls between sysUpTime and sysContact.
    let gap = oid!(1, 3, 6, 1, 2, 1, 1, 3, 5);
    let next = MibView::get_next(&store, &gap).into_varbind().unwrap();
    assert_eq!(next.oid, sys_contact());
}

#[test]
fn test_get_next_from_subtree_root() {
    let store = switch_store();
    let next = MibView::get_next(&store, &interfaces_subtree())
        .into_varbind()
        .unwrap();
    assert_eq!(next.oid, oid!(1, 3, 6, 1, 2, 1, 2, 1, 0));
}

#[test]
fn test_numeric_not_lexical_order() {
    let store = switch_store();
    // ifDescr.1 (.2.1) comes before ifPhysAddress.1 (.6.1) and ifInOctets.1 (.10.1).
    let arcs: Vec<u32> = store
        .subtree(&oid!(1, 3, 6, 1, 2, 1, 2, 2, 1))
        .map(|(oid, _)| oid.arcs()[9])
        .collect();
    assert_eq!(arcs, vec![2, 6, 10]);
}

#[test]
fn test_get_exact() {
    let store = switch_store();
    assert_eq!(
        MibView::get(&store, &sys_name()),
        GetResult::Value(Value::from("router1"))
    );
    assert_eq!(
        MibView::get(&store, &sys_object_id()).into_value(),
        Some(Value::ObjectIdentifier(oid!(1, 3, 6, 1, 4, 1, 9, 1, 716)))
    );
    assert!(!MibView::get(&store, &nonexistent_oid()).is_found());
    // A subtree root is not an object.
    assert!(!MibView::get(&store, &system_subtree()).is_found());
}

#[test]
fn test_duplicate_identifier_rejected() {
    let capture = "\
.1.3.6.1.2.1.1.5.0 = STRING: \"a\"
.1.3.6.1.2.1.1.4.0 = STRING: \"noc\"
.1.3.6.1.2.1.1.5.0 = STRING: \"b\"
";
    let err = OidStore::build(walk::parse_str(capture).records).unwrap_err();
    match err {
        Error::DuplicateIdentifier { oid } => assert_eq!(oid, sys_name()),
        other => panic!("expected DuplicateIdentifier, got {other:?}"),
    }
}
