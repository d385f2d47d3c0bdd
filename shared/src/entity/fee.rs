//! Trading fee tier of a pair.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, Pair};
use crate::identity::{Identified, Ref};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model<Id = i64> {
    pub id: Id,
    /// Traded volume from which this tier applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<i32>,
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub percent: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair: Option<Ref<Pair>>,
}

pub type NewModel = Model<()>;

impl<Id> Model<Id> {
    pub fn with_id<T>(self, id: T) -> Model<T> {
        Model {
            id,
            volume: self.volume,
            percent: self.percent,
            pair: self.pair,
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

    const NAME: &'static str = "fee";
    const RESOURCE_PATH: &'static str = "api/fees";

    fn stub(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}
