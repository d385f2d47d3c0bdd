//! OHLC candle data

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::{Chart, Entity};
use crate::identity::{Identified, Ref};

/// One candle of a chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model<Id = i64> {
    pub id: Id,
    /// Start of the candle interval
    #[serde(default, with = "crate::wire::iso_timestamp", skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub open: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub high: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub low: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub close: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume_weighted_average_price: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume: Option<Decimal>,
    /// Number of trades in the interval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<Ref<Chart>>,
}

pub type NewModel = Model<()>;

impl<Id> Model<Id> {
    pub fn with_id<T>(self, id: T) -> Model<T> {
        Model {
            id,
            time: self.time,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume_weighted_average_price: self.volume_weighted_average_price,
            volume: self.volume,
            count: self.count,
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

    const NAME: &'static str = "ohlc";
    const RESOURCE_PATH: &'static str = "api/ohlcs";

    fn stub(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}
