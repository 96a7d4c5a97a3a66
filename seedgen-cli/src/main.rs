use anyhow::{bail, Context};
use clap::{Arg, Command};
use seedgen_lib::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout is reserved for the confirmation line
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let matches = Command::new("seedgen")
        .version("0.1.0")
        .about("Generate the synthetic users/orders dataset as storage/app/users_orders.json")
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .help("Project root to write under (current directory if not specified)")
                .value_parser(clap::value_parser!(PathBuf))
                .required(false),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .help("Read the written file back and check it matches the generated data")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    setup_tracing();

    let root = matches.get_one::<PathBuf>("root");
    let layout = OutputLayout::resolve(root.map(PathBuf::as_path))
        .context("Failed to resolve output location")?;

    let (dataset, path) = generate_and_write(&layout)
        .with_context(|| format!("Failed to save dataset under {}", layout.root().display()))?;

    if matches.get_flag("verify") {
        let loaded = load_dataset(&path)?;
        if loaded != dataset {
            bail!("{} does not match the generated dataset", path.display());
        }
        tracing::info!(path = %path.display(), "dataset verified");
    }

    println!("JSON data saved to {}", path.display());

    Ok(())
}
