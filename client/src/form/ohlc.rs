use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::{Chart, Draft, NewOhlc, Ohlc, Ref};

use super::{timestamp_from_form, timestamp_to_form, FormModel};
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OhlcForm {
    pub id: Option<i64>,
    pub time: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub open: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub high: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub low: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub close: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub volume_weighted_average_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub volume: Option<Decimal>,
    pub count: Option<i32>,
    pub chart: Option<Ref<Chart>>,
}

impl FormModel for Ohlc {
    type Raw = OhlcForm;
    const FIELDS: &'static [&'static str] = &["time", "open", "high", "low", "close", "volumeWeightedAveragePrice", "volume", "count", "chart"];

    fn defaults(now: DateTime<Utc>) -> OhlcForm {
        OhlcForm {
            time: timestamp_to_form(&Some(now)),
            ..Default::default()
        }
    }

    fn to_raw(&self) -> OhlcForm {
        OhlcForm {
            id: Some(self.id),
            time: timestamp_to_form(&self.time),
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

    fn from_raw(raw: &OhlcForm) -> Result<Draft<Self>> {
        let ohlc = NewOhlc {
            id: (),
            time: timestamp_from_form("time", &raw.time)?,
            open: raw.open,
            high: raw.high,
            low: raw.low,
            close: raw.close,
            volume_weighted_average_price: raw.volume_weighted_average_price,
            volume: raw.volume,
            count: raw.count,
            chart: raw.chart,
        };

        Ok(match raw.id {
            Some(id) => Draft::Existing(ohlc.with_id(id)),
            None => Draft::New(ohlc),
        })
    }

    fn raw_id(raw: &OhlcForm) -> Option<i64> {
        raw.id
    }
}
