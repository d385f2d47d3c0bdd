use anyhow::{Context, Result};
use tracing::info;

use client::Registered;

use crate::state::AppState;

pub async fn handle_delete<E: Registered>(state: &AppState, id: i64) -> Result<()> {
    state
        .services
        .of::<E>()
        .delete(id)
        .await
        .with_context(|| format!("Failed to delete {} {}", E::NAME, id))?;

    info!(entity = E::NAME, id, "Deleted");
    Ok(())
}
