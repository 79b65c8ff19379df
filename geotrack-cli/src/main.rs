//! GeoTrack CLI - drive the tracking supervisor from a terminal.
//!
//! Wires the library to a simulated position source, a console status
//! indicator and a log-based keep-alive, then forwards START/STOP commands
//! read from stdin. `quit`, end of input or Ctrl-C tears the supervisor
//! down.

mod console;
mod sim;

use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

use geotrack::config::TrackingConfig;
use geotrack::location::{ProviderStatus, StreamingLocationClient};
use geotrack::logging::{default_log_dir, default_log_file, init_logging};
use geotrack::tracking::{TrackingCommand, TrackingSupervisor};

use console::{ConsoleIndicator, LogKeepAlive, StaticPermissionProbe};
use sim::{SimConfig, SimulatedPositionSource};

#[derive(Parser)]
#[command(name = "geotrack")]
#[command(about = "Track a (simulated) device position in the background", long_about = None)]
struct Args {
    /// Sampling interval in milliseconds
    #[arg(long, default_value = "10000")]
    interval_ms: u64,

    /// Latitude of the simulated route origin
    #[arg(long, default_value = "53.630278")]
    lat: f64,

    /// Longitude of the simulated route origin
    #[arg(long, default_value = "9.988333")]
    lon: f64,

    /// Simulate a missing location permission
    #[arg(long)]
    deny_permission: bool,

    /// Simulate disabled satellite positioning
    #[arg(long)]
    no_satellite: bool,

    /// Simulate disabled network positioning
    #[arg(long)]
    no_network: bool,

    /// Directory for log files
    #[arg(long, default_value_t = default_log_dir().to_string())]
    log_dir: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let _logging = match init_logging(&args.log_dir, default_log_file()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error initializing logging: {}", e);
            process::exit(1);
        }
    };

    info!(version = geotrack::VERSION, "geotrack starting");

    let providers = ProviderStatus {
        satellite_enabled: !args.no_satellite,
        network_enabled: !args.no_network,
    };
    let source = Arc::new(SimulatedPositionSource::new(
        SimConfig {
            origin: (args.lat, args.lon),
            ..SimConfig::default()
        },
        providers,
    ));
    let permissions = Arc::new(StaticPermissionProbe::new(!args.deny_permission));
    let client = Arc::new(StreamingLocationClient::new(permissions, source));

    let config = TrackingConfig::default().with_interval(Duration::from_millis(args.interval_ms));
    let (command_tx, command_rx) = mpsc::channel(config.command_capacity);

    let supervisor = TrackingSupervisor::new(
        client,
        Arc::new(ConsoleIndicator::new()),
        Arc::new(LogKeepAlive),
        config,
    );
    let supervisor_task = tokio::spawn(supervisor.run(command_rx));

    println!("Commands: start | stop | quit (Ctrl-C to exit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("interrupt received, shutting down");
                break;
            }
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    let input = line.trim();
                    if input.eq_ignore_ascii_case("quit") {
                        break;
                    }
                    match TrackingCommand::parse(input) {
                        Some(command) => {
                            if command_tx.send(command).await.is_err() {
                                break;
                            }
                        }
                        None if input.is_empty() => {}
                        None => warn!(input, "unrecognized command, ignoring"),
                    }
                }
                // End of input is treated like quit.
                Ok(None) | Err(_) => break,
            },
        }
    }

    // Dropping the sender is the destroy signal; the supervisor tears any
    // active cycle down before exiting.
    drop(command_tx);
    if let Err(e) = supervisor_task.await {
        warn!(error = %e, "supervisor task failed");
    }
    info!("geotrack stopped");
}
