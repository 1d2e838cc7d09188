use clap::{Parser, Subcommand};
use hostwatch_application::ports::HostsResolverPort;
use hostwatch_domain::CliOverrides;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "hostwatch")]
#[command(version)]
#[command(about = "Hostwatch - hosts-file resolver with live reload")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Hosts file to serve (defaults to the platform hosts file)
    #[arg(long, value_name = "FILE")]
    hosts: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Load the hosts file once and never reload it
    #[arg(long)]
    no_watch: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the IP mapped to a hostname
    Lookup { hostname: String },

    /// Print every hostname mapped to an IP
    Reverse { ip: String },

    /// Append an entry to the hosts file
    Add {
        ip: String,
        hostname: String,

        /// Wait until the reloaded table contains the new entry
        #[arg(long)]
        wait: bool,
    },

    /// Print the current table
    List {
        #[arg(long)]
        json: bool,
    },

    /// Keep serving and reloading until interrupted
    Watch,
}

#[derive(Serialize)]
struct EntryView<'a> {
    ip: &'a str,
    hostname: &'a str,
}

const ADD_WAIT_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        hosts_path: cli.hosts.clone(),
        log_level: cli.log_level.clone(),
        no_watch: cli.no_watch,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let services = di::HostsServices::new(&config).await?;

    match cli.command {
        Command::Lookup { hostname } => {
            let ip = services.lookup.execute(&hostname)?;
            println!("{}", ip);
        }
        Command::Reverse { ip } => {
            for hostname in services.reverse_lookup.execute(&ip) {
                println!("{}", hostname);
            }
        }
        Command::Add { ip, hostname, wait } => {
            let entry = services.append.execute(&ip, &hostname).await?;
            if wait {
                if !services.resolver.is_watching() {
                    warn!("--wait has no effect without a running watcher");
                } else {
                    wait_for_entry(&services, &entry.hostname, &entry.ip).await?;
                }
            }
            println!("{} {}", entry.ip, entry.hostname);
        }
        Command::List { json } => {
            let entries = services.list.execute();
            if json {
                let view: Vec<EntryView<'_>> = entries
                    .iter()
                    .map(|e| EntryView {
                        ip: &e.ip,
                        hostname: &e.hostname,
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                for entry in &entries {
                    println!("{:<20} {}", entry.ip, entry.hostname);
                }
            }
        }
        Command::Watch => {
            info!(
                path = %services.resolver.source_path().display(),
                entries = services.resolver.snapshot().len(),
                "Watching hosts file; press Ctrl-C to stop"
            );
            tokio::signal::ctrl_c().await?;
            info!(
                reloads = services.resolver.generation() - 1,
                "Shutting down"
            );
        }
    }

    Ok(())
}

async fn wait_for_entry(
    services: &di::HostsServices,
    hostname: &str,
    ip: &str,
) -> anyhow::Result<()> {
    let poll = async {
        loop {
            if matches!(services.resolver.lookup(hostname), Ok(found) if found.as_ref() == ip) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
    };

    tokio::time::timeout(ADD_WAIT_TIMEOUT, poll)
        .await
        .map_err(|_| anyhow::anyhow!("entry for {} not visible after reload", hostname))
}
