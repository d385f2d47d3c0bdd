//! Fees have no timestamp, so the form holds the record itself with an optional id.

use chrono::{DateTime, Utc};

use shared::entity::fee;
use shared::{Draft, Fee};

use super::FormModel;
use crate::error::Result;

pub type FeeForm = fee::Model<Option<i64>>;

impl FormModel for Fee {
    type Raw = FeeForm;
    const FIELDS: &'static [&'static str] = &["volume", "percent", "pair"];

    fn defaults(_now: DateTime<Utc>) -> FeeForm {
        FeeForm::default()
    }

    fn to_raw(&self) -> FeeForm {
        self.clone().with_id(Some(self.id))
    }

    fn from_raw(raw: &FeeForm) -> Result<Draft<Self>> {
        let fee = raw.clone();
        Ok(match fee.id {
            Some(id) => Draft::Existing(fee.with_id(id)),
            None => Draft::New(fee.with_id(())),
        })
    }

    fn raw_id(raw: &FeeForm) -> Option<i64> {
        raw.id
    }
}
