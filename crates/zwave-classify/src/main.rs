use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use application::Classifier;
use domain::Device;
use infrastructure::{ClassifierConfig, NodeDescription, RecordedWrite, SimulatedNode};

/// Classify a Z-Wave node from its description and print the resulting thing
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Node description (JSON)
    #[arg(long)]
    node: String,

    /// Path to config directory
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Ignore the built-in quirk rules
    #[arg(long)]
    no_builtin_quirks: bool,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output<'a> {
    thing: &'a Device,
    config_writes: Vec<RecordedWrite>,
}

fn run() -> Result<()> {
    dotenv().ok();

    // Initialize tracing (stderr, so stdout stays machine readable)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,application=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // 1. Load Configuration
    info!(config_dir = %args.config_dir, "Loading configuration...");
    let mut config = ClassifierConfig::load(&args.config_dir)?;
    if args.no_builtin_quirks {
        config.use_builtin_quirks = false;
    }
    let quirks = config.quirk_table()?;
    info!(rules = quirks.len(), "Quirk table ready");

    // 2. Load the node
    let description = NodeDescription::from_file(&args.node)?;
    let node = SimulatedNode::from_description(&description);
    let mut device = description.to_device();
    info!(
        device_id = %device.id(),
        values = node.value_count(),
        "Loaded node description"
    );

    // 3. Classify
    Classifier::new(quirks).classify(&mut device, &node, &node);

    // 4. Report
    let output = Output {
        thing: &device,
        config_writes: node.config_writes(),
    };
    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
