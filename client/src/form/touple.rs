use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::{Calculation, Draft, NewTouple, Ohlc, Ref, Touple};

use super::{timestamp_from_form, timestamp_to_form, FormModel};
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToupleForm {
    pub id: Option<i64>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub computation: Option<Decimal>,
    pub time: Option<String>,
    pub calculation: Option<Ref<Calculation>>,
    pub ohlc: Option<Ref<Ohlc>>,
}

impl FormModel for Touple {
    type Raw = ToupleForm;
    const FIELDS: &'static [&'static str] = &["computation", "time", "calculation", "ohlc"];

    fn defaults(now: DateTime<Utc>) -> ToupleForm {
        ToupleForm {
            time: timestamp_to_form(&Some(now)),
            ..Default::default()
        }
    }

    fn to_raw(&self) -> ToupleForm {
        ToupleForm {
            id: Some(self.id),
            computation: self.computation,
            time: timestamp_to_form(&self.time),
            calculation: self.calculation,
            ohlc: self.ohlc,
        }
    }

    fn from_raw(raw: &ToupleForm) -> Result<Draft<Self>> {
        let touple = NewTouple {
            id: (),
            computation: raw.computation,
            time: timestamp_from_form("time", &raw.time)?,
            calculation: raw.calculation,
            ohlc: raw.ohlc,
        };

        Ok(match raw.id {
            Some(id) => Draft::Existing(touple.with_id(id)),
            None => Draft::New(touple),
        })
    }

    fn raw_id(raw: &ToupleForm) -> Option<i64> {
        raw.id
    }
}
