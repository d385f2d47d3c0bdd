//! Candle chart of a pair at a fixed time range.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, Pair, TimeRange};
use crate::identity::{Identified, Ref};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model<Id = i64> {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Time of the most recent candle fetched for this chart.
    #[serde(default, with = "crate::wire::iso_timestamp", skip_serializing_if = "Option::is_none")]
    pub last: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair: Option<Ref<Pair>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<Ref<TimeRange>>,
}

pub type NewModel = Model<()>;

impl<Id> Model<Id> {
    pub fn with_id<T>(self, id: T) -> Model<T> {
        Model {
            id,
            name: self.name,
            last: self.last,
            max_count: self.max_count,
            disabled: self.disabled,
            pair: self.pair,
            time_range: self.time_range,
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

    const NAME: &'static str = "chart";
    const RESOURCE_PATH: &'static str = "api/charts";

    fn stub(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}
