use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};

use client::{resolve_entity, EntityEditor, FormModel, Relationships, Resolution};

use super::print_json;
use crate::state::AppState;

pub async fn handle_create<E: FormModel + Relationships>(state: &AppState, assignments: &[String]) -> Result<()> {
    let mut editor = EntityEditor::<E>::open(state.services.clone(), None).await?;
    editor.form.patch(parse_assignments(assignments)?)?;

    let saved = editor
        .save()
        .await
        .with_context(|| format!("Failed to create {}", E::NAME))?;
    print_json(&saved)
}

pub async fn handle_edit<E: FormModel + Relationships>(
    state: &AppState,
    id: &str,
    assignments: &[String],
    partial: bool,
) -> Result<()> {
    let service = state.services.of::<E>();
    let entity = match resolve_entity(Some(id), &state.config.not_found_route, |id| service.find(id)).await? {
        Resolution::Found(entity) => entity,
        Resolution::Blank => bail!("an id is required to edit a {}", E::NAME),
        Resolution::NotFound { redirect } => bail!("{} {} not found, redirect to /{}", E::NAME, id, redirect),
    };

    let mut editor = EntityEditor::open(state.services.clone(), Some(entity)).await?;
    editor.form.patch(parse_assignments(assignments)?)?;

    let result = if partial {
        editor.save_partial().await
    } else {
        editor.save().await
    };
    let saved = result.with_context(|| format!("Failed to update {} {}", E::NAME, id))?;
    print_json(&saved)
}

/// Turns `field=value` pairs into a form patch. Values that parse as JSON
/// are taken as such, so `disabled=true` is a boolean, `pair={"id":3}` a
/// reference and `name=BTC` text.
pub fn parse_assignments(assignments: &[String]) -> Result<Value> {
    let mut values = Map::new();
    for assignment in assignments {
        let Some((field, raw)) = assignment.split_once('=') else {
            bail!("expected FIELD=VALUE, got {:?}", assignment);
        };
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        values.insert(field.trim().to_string(), value);
    }
    Ok(Value::Object(values))
}
