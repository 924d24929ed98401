//! Integration tests for loading agents lists into instances.

mod common;

use common::*;
use snmposter::{
    Config, EngineRegistry, Error, InstanceManager, LoadFailure, MibView, OidStore, Value,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn agents_list(entries: &[(&NamedTempFile, &str)]) -> String {
    let mut out = String::from("# capture,address\n");
    for (file, addr) in entries {
        out.push_str(&format!("{},{}\n", file.path().display(), addr));
    }
    out
}

#[test]
fn test_config_to_instances() {
    init_tracing();
    let switch = temp_file(SWITCH_CAPTURE);
    let router = temp_file(".1.3.6.1.2.1.1.5.0 = STRING: \"router2\"\n");
    let broken = temp_file("this is not a capture\n");

    let list = agents_list(&[
        (&switch, "127.0.1.1"),
        (&router, "127.0.1.2:1161"),
        (&broken, "127.0.1.3"),
    ]);
    let config = Config::parse(&list).unwrap();
    assert_eq!(config.instances.len(), 3);

    let manager = InstanceManager::from_config(&config);
    assert_eq!(manager.active().len(), 2);
    assert_eq!(manager.failed().len(), 1);

    let switch_addr: SocketAddr = "127.0.1.1:161".parse().unwrap();
    let router_addr: SocketAddr = "127.0.1.2:1161".parse().unwrap();

    let switch = manager.get(switch_addr).unwrap();
    assert_eq!(switch.store().len(), SWITCH_RECORDS);
    assert_eq!(switch.skipped().len(), 1);

    let router = manager.get(router_addr).unwrap();
    assert_eq!(
        MibView::get(router, &sys_name()).into_value(),
        Some(Value::from("router2"))
    );

    let failed = &manager.failed()[0];
    assert_eq!(failed.bind, "127.0.1.3:161".parse::<SocketAddr>().unwrap());
    assert!(matches!(failed.reason, LoadFailure::Empty { .. }));
}

#[test]
fn test_config_errors_carry_line() {
    let err = Config::parse("# header\nwalk.snmpwalk\n").unwrap_err();
    assert!(matches!(err, Error::Config { line: 2, .. }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_matches_sequential() {
    let a = temp_file(SWITCH_CAPTURE);
    let b = temp_file(".1.3.6.1.2.1.1.5.0 = STRING: \"b\"\n");
    let list = agents_list(&[(&a, "127.0.1.1"), (&b, "127.0.1.2")]);
    let config = Config::parse(&list).unwrap();

    let sequential = InstanceManager::from_config(&config);
    let concurrent = InstanceManager::load_concurrent(config.instances.clone()).await;

    assert_eq!(sequential.active().len(), concurrent.active().len());
    for (s, c) in sequential.active().iter().zip(concurrent.active()) {
        assert_eq!(s.bind_addr(), c.bind_addr());
        assert_eq!(s.store().all(), c.store().all());
    }
}

#[test]
fn test_register_all_hands_out_stores() {
    struct Engine(Vec<(SocketAddr, Arc<OidStore>)>);

    impl EngineRegistry for Engine {
        type Error = std::convert::Infallible;

        fn register(&mut self, bind: SocketAddr, view: Arc<OidStore>) -> Result<(), Self::Error> {
            self.0.push((bind, view));
            Ok(())
        }
    }

    let file = temp_file(SWITCH_CAPTURE);
    let list = agents_list(&[(&file, "127.0.1.1")]);
    let manager = InstanceManager::from_config(&Config::parse(&list).unwrap());

    let mut engine = Engine(Vec::new());
    assert!(manager.register_all(&mut engine).is_empty());
    assert_eq!(engine.0.len(), 1);
    assert!(Arc::ptr_eq(&engine.0[0].1, manager.active()[0].store()));
}
