use anyhow::{Context, Result};
use tracing::info;

use client::repair::calculation_repair;

use super::print_json;
use crate::state::AppState;

pub async fn handle_repair(state: &AppState, calculation_id: i64) -> Result<()> {
    let repair = calculation_repair(&state.services, calculation_id)
        .await
        .with_context(|| format!("Failed to check calculation {}", calculation_id))?;

    match &repair {
        Some(repair) => info!(calculation_id, time = %repair.time, "Calculation needs repair"),
        None => info!(calculation_id, "Calculation is consistent"),
    }
    print_json(&repair)
}
