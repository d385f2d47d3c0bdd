use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared::{Asset, Draft, NewAsset};

use super::{timestamp_from_form, timestamp_to_form, FormModel};
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetForm {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub asset_class: Option<String>,
    pub alternative_name: Option<String>,
    pub decimals: Option<i32>,
    pub display_decimals: Option<i32>,
    pub last_checked: Option<String>,
}

impl FormModel for Asset {
    type Raw = AssetForm;
    const FIELDS: &'static [&'static str] = &["name", "assetClass", "alternativeName", "decimals", "displayDecimals", "lastChecked"];

    fn defaults(now: DateTime<Utc>) -> AssetForm {
        AssetForm {
            last_checked: timestamp_to_form(&Some(now)),
            ..Default::default()
        }
    }

    fn to_raw(&self) -> AssetForm {
        AssetForm {
            id: Some(self.id),
            name: self.name.clone(),
            asset_class: self.asset_class.clone(),
            alternative_name: self.alternative_name.clone(),
            decimals: self.decimals,
            display_decimals: self.display_decimals,
            last_checked: timestamp_to_form(&self.last_checked),
        }
    }

    fn from_raw(raw: &AssetForm) -> Result<Draft<Self>> {
        let asset = NewAsset {
            id: (),
            name: raw.name.clone(),
            asset_class: raw.asset_class.clone(),
            alternative_name: raw.alternative_name.clone(),
            decimals: raw.decimals,
            display_decimals: raw.display_decimals,
            last_checked: timestamp_from_form("lastChecked", &raw.last_checked)?,
        };

        Ok(match raw.id {
            Some(id) => Draft::Existing(asset.with_id(id)),
            None => Draft::New(asset),
        })
    }

    fn raw_id(raw: &AssetForm) -> Option<i64> {
        raw.id
    }
}
