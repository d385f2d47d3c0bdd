//! Legacy twin of `tuple`, served from its own resource.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::{Calculation, Entity, Ohlc};
use crate::identity::{Identified, Ref};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model<Id = i64> {
    pub id: Id,
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub computation: Option<Decimal>,
    #[serde(default, with = "crate::wire::iso_timestamp", skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation: Option<Ref<Calculation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ohlc: Option<Ref<Ohlc>>,
}

pub type NewModel = Model<()>;

impl<Id> Model<Id> {
    pub fn with_id<T>(self, id: T) -> Model<T> {
        Model {
            id,
            computation: self.computation,
            time: self.time,
            calculation: self.calculation,
            ohlc: self.ohlc,
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

    const NAME: &'static str = "touple";
    const RESOURCE_PATH: &'static str = "api/touples";

    fn stub(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}
