use anyhow::Context;
use lbnode_common::config::Config;
use lbnode_common::success;
use lbnode_core::cluster::KubeCluster;
use lbnode_core::report;
use lbnode_core::session::Session;
use lbnode_core::transport::AnsibleTransport;
use tracing::warn;

use crate::commands::CommandLine;
use crate::terminal::{print, prompt::TerminalInput, spinner::Spinner};

pub async fn locate(commands: &CommandLine, cfg: &Config) -> anyhow::Result<()> {
    let kubeconfig = commands
        .kubeconfig_path()
        .context("cannot determine the home directory, pass --kubeconfig")?;
    let cluster = KubeCluster::from_kubeconfig(&kubeconfig).await?;
    let transport = AnsibleTransport::new(cfg.ansible_program.as_str(), cfg.inventory_path.as_path());
    let session = Session::new(cfg, &cluster, &transport);

    if !commands.quiet {
        print::welcome(&current_user());
    }

    let plan = session.prepare(&mut TerminalInput::new()).await?;

    let report = {
        let _spinner = Spinner::start(format!(
            "Please wait, sending {} ARP probe(s)...",
            plan.probe_count()
        ));
        session.execute(&plan).await?
    };
    success!("Probed {} node(s)", plan.nodes.len());

    print::results(&report::tabulate(&report.results));
    print::interface_used(&report.interface);

    if let Err(e) = report.teardown {
        warn!("{e}");
    }
    Ok(())
}

fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| String::from("operator"))
}
