//! brewcraft - slot inventory core with a scripted session driver
//!
//! Replays a JSON gesture script against the cursor state machine,
//! standing in for the interactive UI binding layer.

mod config;
mod script;

use std::{env, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use tracing::info;

use brewcraft_core::catalog_from_file;
use brewcraft_inventory::{CursorController, Inventory};
use config::SessionConfig;
use script::SessionScript;

fn main() -> Result<()> {
    // Initialize tracing with INFO level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting brewcraft v{}", env!("CARGO_PKG_VERSION"));

    let cfg = SessionConfig::load();
    let catalog = catalog_from_file(cfg.items_path.as_ref())
        .with_context(|| format!("failed to load item pack {}", cfg.items_path))?;
    info!(items = catalog.len(), "item catalog loaded");

    let inventory = Inventory::new(cfg.inventory_size);
    let mut cursor = CursorController::new(inventory, Arc::new(catalog));
    cursor.set_double_click_window(cfg.double_click_ms);

    let Some(script_path) = env::args().nth(1).map(PathBuf::from) else {
        info!(
            slots = cfg.inventory_size,
            "no session script given; nothing to replay"
        );
        return Ok(());
    };

    let script = SessionScript::from_path(&script_path)?;
    script.run(&mut cursor)?;

    // Final slot summary for the log.
    for (index, slot) in cursor.inventory().slots().iter().enumerate() {
        if let Some(stack) = slot {
            let name = cursor.catalog().name(stack.item).unwrap_or("?");
            info!(index, item = name, count = stack.count, "slot");
        }
    }
    if let Some(held) = cursor.held() {
        let name = cursor.catalog().name(held.item).unwrap_or("?");
        info!(item = name, count = held.count, "still in hand");
    }

    Ok(())
}
