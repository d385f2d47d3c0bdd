use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared::{Chart, Draft, NewChart, Pair, Ref, TimeRange};

use super::{timestamp_from_form, timestamp_to_form, FormModel};
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartForm {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub last: Option<String>,
    pub max_count: Option<i32>,
    pub disabled: Option<bool>,
    pub pair: Option<Ref<Pair>>,
    pub time_range: Option<Ref<TimeRange>>,
}

impl FormModel for Chart {
    type Raw = ChartForm;
    const FIELDS: &'static [&'static str] = &["name", "last", "maxCount", "disabled", "pair", "timeRange"];

    fn defaults(now: DateTime<Utc>) -> ChartForm {
        ChartForm {
            last: timestamp_to_form(&Some(now)),
            disabled: Some(false),
            ..Default::default()
        }
    }

    fn to_raw(&self) -> ChartForm {
        ChartForm {
            id: Some(self.id),
            name: self.name.clone(),
            last: timestamp_to_form(&self.last),
            max_count: self.max_count,
            disabled: self.disabled,
            pair: self.pair,
            time_range: self.time_range,
        }
    }

    fn from_raw(raw: &ChartForm) -> Result<Draft<Self>> {
        let chart = NewChart {
            id: (),
            name: raw.name.clone(),
            last: timestamp_from_form("last", &raw.last)?,
            max_count: raw.max_count,
            disabled: raw.disabled,
            pair: raw.pair,
            time_range: raw.time_range,
        };

        Ok(match raw.id {
            Some(id) => Draft::Existing(chart.with_id(id)),
            None => Draft::New(chart),
        })
    }

    fn raw_id(raw: &ChartForm) -> Option<i64> {
        raw.id
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use shared::samples;

    use super::*;

    #[test]
    fn test_defaults_use_now_and_clear_flags() {
        let now = Utc.with_ymd_and_hms(2022, 10, 25, 4, 47, 12).unwrap();
        let raw = Chart::defaults(now);
        assert_eq!(raw.id, None);
        assert_eq!(raw.last.as_deref(), Some("2022-10-25T04:47"));
        assert_eq!(raw.disabled, Some(false));
    }

    #[test]
    fn test_full_chart_survives_the_form() {
        let chart = samples::chart::full_data();
        let draft = Chart::from_raw(&chart.to_raw()).unwrap();
        assert_eq!(draft, Draft::Existing(chart));
    }
}
