//! Binding between entities and the raw state of their edit forms.
//!
//! Raw form state mirrors the entity field by field, except that timestamps
//! are held as `YYYY-MM-DDTHH:mm` text the way date-time controls show them.

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use shared::wire::{from_form_value, to_form_value};
use shared::{Draft, Entity};

use crate::error::{ClientError, Result};

pub mod asset;
pub mod calculation;
pub mod chart;
pub mod fee;
pub mod ohlc;
pub mod pair;
pub mod time_range;
pub mod touple;
pub mod tuple;

/// An entity that can be edited through a form.
pub trait FormModel: Entity {
    type Raw: Serialize + DeserializeOwned + Default + Clone + Debug + PartialEq + Send + Sync;

    /// camelCase names of the editable controls, `id` excluded.
    const FIELDS: &'static [&'static str];

    /// Raw state of the form for a new record created at `now`.
    fn defaults(now: DateTime<Utc>) -> Self::Raw;

    fn to_raw(&self) -> Self::Raw;

    /// Reads the form back. A form with an id yields [`Draft::Existing`].
    fn from_raw(raw: &Self::Raw) -> Result<Draft<Self>>;

    fn raw_id(raw: &Self::Raw) -> Option<i64>;
}

/// Form state of one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct FormGroup<E: FormModel> {
    raw: E::Raw,
}

impl<E: FormModel> FormGroup<E> {
    /// Form for `entity`, or a blank form when there is none.
    pub fn create(entity: Option<&E>) -> Self {
        Self::create_at(entity, Utc::now())
    }

    pub fn create_at(entity: Option<&E>, now: DateTime<Utc>) -> Self {
        let raw = match entity {
            Some(entity) => entity.to_raw(),
            None => E::defaults(now),
        };
        Self { raw }
    }

    pub fn reset(&mut self, entity: Option<&E>) {
        self.reset_at(entity, Utc::now());
    }

    pub fn reset_at(&mut self, entity: Option<&E>, now: DateTime<Utc>) {
        *self = Self::create_at(entity, now);
    }

    pub fn get_model(&self) -> Result<Draft<E>> {
        E::from_raw(&self.raw)
    }

    /// Id of the edited record; the id control is read-only.
    pub fn id(&self) -> Option<i64> {
        E::raw_id(&self.raw)
    }

    /// Overwrites the controls named in `values`, a JSON object keyed by
    /// camelCase field name. The `id` key is ignored.
    ///
    /// An unknown key or a value of the wrong type is reported as
    /// [`ClientError::InvalidForm`] naming the control; the form is then
    /// left as it was.
    pub fn patch(&mut self, values: Value) -> Result<()> {
        let Value::Object(values) = values else {
            return Err(ClientError::InvalidForm {
                field: "*".to_string(),
                value: values.to_string(),
            });
        };

        let mut current = match serde_json::to_value(&self.raw)? {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        let mut raw = self.raw.clone();
        for (key, value) in values {
            if key == "id" {
                continue;
            }
            if !E::FIELDS.contains(&key.as_str()) {
                return Err(invalid(key, &value));
            }
            current.insert(key.clone(), value.clone());
            raw = serde_json::from_value(Value::Object(current.clone())).map_err(|_| invalid(key, &value))?;
        }

        self.raw = raw;
        Ok(())
    }

    pub fn raw(&self) -> &E::Raw {
        &self.raw
    }

    pub fn raw_mut(&mut self) -> &mut E::Raw {
        &mut self.raw
    }
}

fn invalid(field: String, value: &Value) -> ClientError {
    let value = match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    ClientError::InvalidForm { field, value }
}

pub(crate) fn timestamp_to_form(value: &Option<DateTime<Utc>>) -> Option<String> {
    value.as_ref().map(to_form_value)
}

/// Empty controls read back as `None`.
pub(crate) fn timestamp_from_form(field: &'static str, value: &Option<String>) -> Result<Option<DateTime<Utc>>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => from_form_value(text)
            .map(Some)
            .map_err(|_| ClientError::InvalidForm {
                field: field.to_string(),
                value: text.to_string(),
            }),
    }
}
