use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Chart, Entity};
use crate::identity::{Identified, Ref};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model<Id = i64> {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, with = "crate::wire::iso_timestamp", skip_serializing_if = "Option::is_none")]
    pub last: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<Ref<Chart>>,
}

pub type NewModel = Model<()>;

impl<Id> Model<Id> {
    pub fn with_id<T>(self, id: T) -> Model<T> {
        Model {
            id,
            name: self.name,
            last: self.last,
            disabled: self.disabled,
            chart: self.chart,
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

    const NAME: &'static str = "calculation";
    const RESOURCE_PATH: &'static str = "api/calculations";

    fn stub(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}
