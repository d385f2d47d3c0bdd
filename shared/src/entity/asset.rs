//! Tradable asset (currency, coin, token).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::identity::Identified;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model<Id = i64> {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_decimals: Option<i32>,
    #[serde(default, with = "crate::wire::iso_timestamp", skip_serializing_if = "Option::is_none")]
    pub last_checked: Option<DateTime<Utc>>,
}

pub type NewModel = Model<()>;

impl<Id> Model<Id> {
    pub fn with_id<T>(self, id: T) -> Model<T> {
        Model {
            id,
            name: self.name,
            asset_class: self.asset_class,
            alternative_name: self.alternative_name,
            decimals: self.decimals,
            display_decimals: self.display_decimals,
            last_checked: self.last_checked,
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

    const NAME: &'static str = "asset";
    const RESOURCE_PATH: &'static str = "api/assets";

    fn stub(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}
