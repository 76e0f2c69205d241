mod config;
mod main_lib;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};

use anyhow::Context;
use clap::Parser;
use config::Config;
use main_lib::{build_registry, init_tracing, run_function};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();
    init_tracing();
    let registry = build_registry(&config)?;

    if config.list {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let function = config
        .function
        .as_deref()
        .context("a function name is required")?;

    let input: Box<dyn Read> = match config.input_path() {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let output = BufWriter::new(io::stdout());

    let written = run_function(&registry, function, config.has_headers, input, output).await?;
    tracing::info!("{} wrote {} rows", function, written);
    Ok(())
}
