use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::{Calculation, Draft, NewTuple, Ohlc, Ref, Tuple};

use super::{timestamp_from_form, timestamp_to_form, FormModel};
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TupleForm {
    pub id: Option<i64>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub computation: Option<Decimal>,
    pub time: Option<String>,
    pub calculation: Option<Ref<Calculation>>,
    pub ohlc: Option<Ref<Ohlc>>,
}

impl FormModel for Tuple {
    type Raw = TupleForm;
    const FIELDS: &'static [&'static str] = &["computation", "time", "calculation", "ohlc"];

    fn defaults(now: DateTime<Utc>) -> TupleForm {
        TupleForm {
            time: timestamp_to_form(&Some(now)),
            ..Default::default()
        }
    }

    fn to_raw(&self) -> TupleForm {
        TupleForm {
            id: Some(self.id),
            computation: self.computation,
            time: timestamp_to_form(&self.time),
            calculation: self.calculation,
            ohlc: self.ohlc,
        }
    }

    fn from_raw(raw: &TupleForm) -> Result<Draft<Self>> {
        let tuple = NewTuple {
            id: (),
            computation: raw.computation,
            time: timestamp_from_form("time", &raw.time)?,
            calculation: raw.calculation,
            ohlc: raw.ohlc,
        };

        Ok(match raw.id {
            Some(id) => Draft::Existing(tuple.with_id(id)),
            None => Draft::New(tuple),
        })
    }

    fn raw_id(raw: &TupleForm) -> Option<i64> {
        raw.id
    }
}
