use chrono::{DateTime, Utc};

use shared::entity::pair;
use shared::{Draft, Pair};

use super::FormModel;
use crate::error::Result;

pub type PairForm = pair::Model<Option<i64>>;

impl FormModel for Pair {
    type Raw = PairForm;
    const FIELDS: &'static [&'static str] = &["name", "altname", "webSocketPairName", "lot", "pairDecimal", "lotDecimals", "lotMultiplier", "base", "quote"];

    fn defaults(_now: DateTime<Utc>) -> PairForm {
        PairForm::default()
    }

    fn to_raw(&self) -> PairForm {
        self.clone().with_id(Some(self.id))
    }

    fn from_raw(raw: &PairForm) -> Result<Draft<Self>> {
        let pair = raw.clone();
        Ok(match pair.id {
            Some(id) => Draft::Existing(pair.with_id(id)),
            None => Draft::New(pair.with_id(())),
        })
    }

    fn raw_id(raw: &PairForm) -> Option<i64> {
        raw.id
    }
}
