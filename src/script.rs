use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use brewcraft_inventory::{CursorController, InventoryEvent};
use brewcraft_persist::{capture, from_json, restore, to_json};

#[derive(Debug, Deserialize)]
struct SessionScriptFile {
    steps: Vec<ScriptStep>,
}

/// One scripted action: a pointer gesture or a boundary operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum ScriptStep {
    Add { item: String, amount: u32 },
    Remove { item: String, amount: u32 },
    Primary { slot: usize, at_ms: u64 },
    Secondary { slot: usize },
    DoubleClick { slot: usize },
    DragStart { slot: usize },
    DragOver { slot: usize },
    DragRelease,
    DragCancel,
    ClearAll,
    Save { path: PathBuf },
    Load { path: PathBuf },
}

/// Replays a gesture script against a cursor controller, standing in for
/// the interactive UI layer.
pub struct SessionScript {
    steps: Vec<ScriptStep>,
}

impl SessionScript {
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read session script {}", path.display()))?;
        let file: SessionScriptFile = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse session script {}", path.display()))?;
        if file.steps.is_empty() {
            anyhow::bail!("session script contains no steps");
        }
        Ok(Self { steps: file.steps })
    }

    pub fn run(&self, cursor: &mut CursorController) -> Result<()> {
        for (number, step) in self.steps.iter().enumerate() {
            info!(step = number, "applying {:?}", step);
            self.apply(cursor, step)?;

            for event in cursor.inventory_mut().events().drain() {
                match event {
                    InventoryEvent::Changed => info!("ui refresh: all slots"),
                    InventoryEvent::SlotChanged(index) => info!(index, "ui refresh: slot"),
                }
            }
            if let Some(held) = cursor.held() {
                let name = cursor.catalog().name(held.item).unwrap_or("?").to_string();
                info!(item = %name, count = held.count, "hand");
            }
        }
        Ok(())
    }

    fn apply(&self, cursor: &mut CursorController, step: &ScriptStep) -> Result<()> {
        match step {
            ScriptStep::Add { item, amount } => match cursor.catalog().id_by_name(item) {
                Some(id) => {
                    let leftover = cursor.add_item(id, *amount);
                    if leftover > 0 {
                        warn!(item = %item, leftover, "could not add all units");
                    }
                }
                None => warn!(item = %item, "unknown item in script"),
            },
            ScriptStep::Remove { item, amount } => match cursor.catalog().id_by_name(item) {
                Some(id) => {
                    let removed = cursor.remove_item(id, *amount);
                    if removed < *amount {
                        warn!(item = %item, removed, wanted = amount, "partial removal");
                    }
                }
                None => warn!(item = %item, "unknown item in script"),
            },
            ScriptStep::Primary { slot, at_ms } => cursor.primary_click_at(*slot, *at_ms),
            ScriptStep::Secondary { slot } => cursor.secondary_click(*slot),
            ScriptStep::DoubleClick { slot } => cursor.double_click(*slot),
            ScriptStep::DragStart { slot } => cursor.drag_start(*slot),
            ScriptStep::DragOver { slot } => cursor.drag_over(*slot),
            ScriptStep::DragRelease => cursor.drag_release(),
            ScriptStep::DragCancel => cursor.drag_cancel(),
            ScriptStep::ClearAll => cursor.inventory_mut().clear_all(),
            ScriptStep::Save { path } => {
                let snapshot = capture(cursor.inventory(), cursor.catalog());
                let json = to_json(&snapshot)?;
                fs::write(path, json)
                    .with_context(|| format!("failed to write snapshot {}", path.display()))?;
                info!(path = %path.display(), "inventory saved");
            }
            ScriptStep::Load { path } => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("failed to read snapshot {}", path.display()))?;
                let snapshot = from_json(&contents)?;
                let catalog = cursor.catalog_arc();
                restore(cursor.inventory_mut(), &catalog, &snapshot)?;
                info!(path = %path.display(), "inventory restored");
            }
        }
        Ok(())
    }
}
