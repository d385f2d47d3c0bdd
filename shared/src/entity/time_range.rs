//! Candle interval of a chart.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::identity::Identified;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model<Id = i64> {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Interval length in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_size: Option<i32>,
    /// ISO-8601 duration as sent by the backend, e.g. `PT15M`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub type NewModel = Model<()>;

impl<Id> Model<Id> {
    pub fn with_id<T>(self, id: T) -> Model<T> {
        Model {
            id,
            name: self.name,
            range_size: self.range_size,
            duration: self.duration,
            description: self.description,
        }
    }
}

impl Identified for Model {
    fn identifier(&self) -> i64 {
        self.id
    }
}

impl Entity for Model {
    type New = NewModel;

    const NAME: &'static str = "time-range";
    const RESOURCE_PATH: &'static str = "api/time-ranges";

    fn stub(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}
