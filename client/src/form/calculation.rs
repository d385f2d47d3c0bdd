use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared::{Calculation, Chart, Draft, NewCalculation, Ref};

use super::{timestamp_from_form, timestamp_to_form, FormModel};
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationForm {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub last: Option<String>,
    pub disabled: Option<bool>,
    pub chart: Option<Ref<Chart>>,
}

impl FormModel for Calculation {
    type Raw = CalculationForm;
    const FIELDS: &'static [&'static str] = &["name", "last", "disabled", "chart"];

    fn defaults(now: DateTime<Utc>) -> CalculationForm {
        CalculationForm {
            last: timestamp_to_form(&Some(now)),
            disabled: Some(false),
            ..Default::default()
        }
    }

    fn to_raw(&self) -> CalculationForm {
        CalculationForm {
            id: Some(self.id),
            name: self.name.clone(),
            last: timestamp_to_form(&self.last),
            disabled: self.disabled,
            chart: self.chart,
        }
    }

    fn from_raw(raw: &CalculationForm) -> Result<Draft<Self>> {
        let calculation = NewCalculation {
            id: (),
            name: raw.name.clone(),
            last: timestamp_from_form("last", &raw.last)?,
            disabled: raw.disabled,
            chart: raw.chart,
        };

        Ok(match raw.id {
            Some(id) => Draft::Existing(calculation.with_id(id)),
            None => Draft::New(calculation),
        })
    }

    fn raw_id(raw: &CalculationForm) -> Option<i64> {
        raw.id
    }
}
