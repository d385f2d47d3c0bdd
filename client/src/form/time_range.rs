use chrono::{DateTime, Utc};

use shared::entity::time_range;
use shared::{Draft, TimeRange};

use super::FormModel;
use crate::error::Result;

pub type TimeRangeForm = time_range::Model<Option<i64>>;

impl FormModel for TimeRange {
    type Raw = TimeRangeForm;
    const FIELDS: &'static [&'static str] = &["name", "rangeSize", "duration", "description"];

    fn defaults(_now: DateTime<Utc>) -> TimeRangeForm {
        TimeRangeForm::default()
    }

    fn to_raw(&self) -> TimeRangeForm {
        self.clone().with_id(Some(self.id))
    }

    fn from_raw(raw: &TimeRangeForm) -> Result<Draft<Self>> {
        let time_range = raw.clone();
        Ok(match time_range.id {
            Some(id) => Draft::Existing(time_range.with_id(id)),
            None => Draft::New(time_range.with_id(())),
        })
    }

    fn raw_id(raw: &TimeRangeForm) -> Option<i64> {
        raw.id
    }
}
