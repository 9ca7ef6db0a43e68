use std::io::{self, Write};

use anyhow::Context;
use bytes::BytesMut;
use tracing::info;

use benchenv::config::{load_config, DEFAULT_CONFIG_FILE};
use benchenv::parser::{capture_environment, seed_from_lines};
use benchenv::{global, logging};

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
    let config = load_config(&config_path)
        .with_context(|| format!("loading configuration from {}", config_path))?;

    logging::init_logging(&config.log);

    global::init_table();
    let seeded = global::with_store(|store| {
        let mut added = 0;
        if config.capture_environment {
            added += capture_environment(store);
        }
        added + seed_from_lines(store, &config.seed)
    });
    info!(seeded, "initialized environment table");

    if let Some(path) = &config.parameter_file {
        global::read_parameter_file(path)
            .with_context(|| format!("reading PARAMETER file {}", path.display()))?;
    }

    let mut block = BytesMut::new();
    global::dump_to_buffer(&mut block);

    match &config.output {
        Some(path) => std::fs::write(path, &block)
            .with_context(|| format!("writing variables to {}", path.display()))?,
        None => io::stdout().lock().write_all(&block)?,
    }

    if config.dump_table {
        global::dump_table(&mut io::stderr().lock())?;
    }

    Ok(())
}
