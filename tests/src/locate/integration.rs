use std::path::Path;

use lbnode_common::config::{Config, DiscoveryStrategy};
use lbnode_common::error::{ClusterError, DiscoveryError, SelectionError, SessionError};
use lbnode_core::report::{self, HEADERS};
use lbnode_core::session::Session;
use lbnode_core::transport::AnsibleTransport;

use crate::support::{DownCluster, FakeCluster, ScriptedInput, SimulatedNetwork};

fn config(dir: &Path) -> Config {
    Config {
        inventory_path: dir.join("k8s.inventory"),
        discovery: DiscoveryStrategy::AddressScan,
        ..Config::default()
    }
}

fn cluster() -> FakeCluster {
    FakeCluster {
        nodes: vec!["n1", "n2"],
        ingress: vec!["7.1.2.3", "8.9.9.9", "7.5.5.5"],
    }
}

fn rows(table: &report::Table) -> Vec<(&str, &str)> {
    table
        .rows
        .iter()
        .map(|[node, ip]| (node.as_str(), ip.as_str()))
        .collect()
}

#[tokio::test]
async fn auto_discovered_addresses_are_probed_on_every_node() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    let mut network = SimulatedNetwork::new(cfg.inventory_path.clone());
    network.hosting = vec![("n1", "7.1.2.3"), ("n2", "7.1.2.3")];
    let cluster = cluster();
    let session = Session::new(&cfg, &cluster, &network);

    let report = session.run(&mut ScriptedInput::new(&["alice", "yes"])).await.unwrap();

    assert_eq!(report.interface.as_str(), "bond0.712");
    assert_eq!(
        network.probes(),
        vec![
            ("n1".to_string(), "7.1.2.3".to_string()),
            ("n1".to_string(), "7.5.5.5".to_string()),
            ("n2".to_string(), "7.1.2.3".to_string()),
            ("n2".to_string(), "7.5.5.5".to_string()),
        ]
    );

    let table = report::tabulate(&report.results);
    assert_eq!(table.headers, HEADERS);
    assert_eq!(rows(&table), vec![("n1", "7.1.2.3"), ("n2", "7.1.2.3")]);
    assert!(report.teardown.is_ok());
    assert!(!cfg.inventory_path.exists());
}

#[tokio::test]
async fn transport_sees_the_full_inventory_on_every_call() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    let network = SimulatedNetwork::new(cfg.inventory_path.clone());
    let cluster = cluster();
    let session = Session::new(&cfg, &cluster, &network);

    session.run(&mut ScriptedInput::new(&["alice", "yes"])).await.unwrap();

    let calls = network.calls();
    assert_eq!(calls.len(), 5);
    assert_eq!(calls[0].node, "n1");
    assert_eq!(calls[0].command, "ip -o addr show");
    for call in &calls {
        assert_eq!(call.user, "alice");
        assert_eq!(
            call.inventory.as_deref(),
            Some("[k8s]\nn1 ansible_user=alice\nn2 ansible_user=alice\n")
        );
    }
}

#[tokio::test]
async fn manual_addresses_keep_their_order() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    let mut network = SimulatedNetwork::new(cfg.inventory_path.clone());
    network.hosting = vec![("n2", "10.0.0.9"), ("n1", "7.5.5.5")];
    let cluster = cluster();
    let session = Session::new(&cfg, &cluster, &network);

    let mut input = ScriptedInput::new(&["alice", "no", "10.0.0.9, 7.5.5.5"]);
    let report = session.run(&mut input).await.unwrap();

    assert_eq!(input.asked, vec!["username", "selection", "candidates"]);
    let table = report::tabulate(&report.results);
    assert_eq!(rows(&table), vec![("n1", "7.5.5.5"), ("n2", "10.0.0.9")]);
}

#[tokio::test]
async fn unreachable_node_does_not_stop_the_sweep() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    let cluster = FakeCluster {
        nodes: vec!["n1", "n2", "n3"],
        ingress: vec!["7.1.2.3"],
    };
    let mut network = SimulatedNetwork::new(cfg.inventory_path.clone());
    network.unreachable = vec!["n2"];
    network.hosting = vec![("n3", "7.1.2.3")];
    let session = Session::new(&cfg, &cluster, &network);

    let report = session.run(&mut ScriptedInput::new(&["alice", "yes"])).await.unwrap();

    assert_eq!(network.probes().len(), 3);
    let table = report::tabulate(&report.results);
    assert_eq!(rows(&table), vec![("n3", "7.1.2.3")]);
}

#[tokio::test]
async fn no_hosting_node_renders_an_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    let network = SimulatedNetwork::new(cfg.inventory_path.clone());
    let cluster = cluster();
    let session = Session::new(&cfg, &cluster, &network);

    let report = session.run(&mut ScriptedInput::new(&["alice", "yes"])).await.unwrap();

    let table = report::tabulate(&report.results);
    assert!(table.is_empty());
    assert_eq!(table.headers, HEADERS);
}

#[tokio::test]
async fn invalid_menu_choice_aborts_before_inventory() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    let network = SimulatedNetwork::new(cfg.inventory_path.clone());
    let cluster = cluster();
    let session = Session::new(&cfg, &cluster, &network);

    let result = session.run(&mut ScriptedInput::new(&["alice", "sure"])).await;

    assert!(matches!(
        result,
        Err(SessionError::Selection(SelectionError::InvalidChoice(_)))
    ));
    assert!(network.calls().is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn invalid_manual_address_aborts_before_inventory() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    let network = SimulatedNetwork::new(cfg.inventory_path.clone());
    let cluster = cluster();
    let session = Session::new(&cfg, &cluster, &network);

    let result = session
        .run(&mut ScriptedInput::new(&["alice", "no", "7.1.2.3,$(reboot)"]))
        .await;

    assert!(matches!(
        result,
        Err(SessionError::Selection(SelectionError::InvalidAddress(_)))
    ));
    assert!(!cfg.inventory_path.exists());
}

#[tokio::test]
async fn cluster_failure_is_fatal_before_any_probe() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    let network = SimulatedNetwork::new(cfg.inventory_path.clone());
    let session = Session::new(&cfg, &DownCluster, &network);

    let result = session.run(&mut ScriptedInput::new(&["alice", "yes"])).await;

    assert!(matches!(
        result,
        Err(SessionError::Cluster(ClusterError::ListNodes(_)))
    ));
    assert!(network.calls().is_empty());
    assert!(!cfg.inventory_path.exists());
}

#[tokio::test]
async fn unreachable_probe_node_fails_discovery_and_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    let mut network = SimulatedNetwork::new(cfg.inventory_path.clone());
    network.unreachable = vec!["n1"];
    let cluster = cluster();
    let session = Session::new(&cfg, &cluster, &network);

    let result = session.run(&mut ScriptedInput::new(&["alice", "yes"])).await;

    assert!(matches!(
        result,
        Err(SessionError::Discovery(DiscoveryError::CommandFailed { .. }))
    ));
    assert_eq!(network.calls().len(), 1);
    assert!(network.probes().is_empty());
    assert!(!cfg.inventory_path.exists());
}

#[cfg(unix)]
#[tokio::test]
async fn real_transport_without_ansible_output_fails_discovery() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config(dir.path());
    cfg.ansible_program = String::from("echo");
    let transport = AnsibleTransport::new(cfg.ansible_program.clone(), cfg.inventory_path.clone());
    let cluster = cluster();
    let session = Session::new(&cfg, &cluster, &transport);

    let result = session.run(&mut ScriptedInput::new(&["alice", "yes"])).await;

    assert!(matches!(
        result,
        Err(SessionError::Discovery(DiscoveryError::NoMatch { .. }))
    ));
    assert!(!cfg.inventory_path.exists());
}
