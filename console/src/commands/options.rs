use anyhow::{bail, Result};

use client::{resolve_entity, EntityEditor, FormModel, Relationships, Resolution};

use super::print_json;
use crate::state::AppState;

/// Prints the option lists the edit form of a record would offer.
pub async fn handle_options<E: FormModel + Relationships>(state: &AppState, id: Option<&str>) -> Result<()> {
    let service = state.services.of::<E>();
    let entity = match resolve_entity(id, &state.config.not_found_route, |id| service.find(id)).await? {
        Resolution::Found(entity) => Some(entity),
        Resolution::Blank => None,
        Resolution::NotFound { redirect } => {
            bail!("{} {} not found, redirect to /{}", E::NAME, id.unwrap_or_default(), redirect)
        }
    };

    let editor = EntityEditor::open(state.services.clone(), entity).await?;
    print_json(&editor.options)
}
