use anyhow::{bail, Result};

use client::{resolve_entity, Registered, Resolution};

use super::print_json;
use crate::state::AppState;

pub async fn handle_show<E: Registered>(state: &AppState, id: &str) -> Result<()> {
    let service = state.services.of::<E>();
    let resolution = resolve_entity(Some(id), &state.config.not_found_route, |id| service.find(id)).await?;

    match resolution {
        Resolution::Found(entity) => print_json(&entity),
        Resolution::Blank => bail!("an id is required to show a {}", E::NAME),
        Resolution::NotFound { redirect } => bail!("{} {} not found, redirect to /{}", E::NAME, id, redirect),
    }
}
