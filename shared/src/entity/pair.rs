//! Trading pair of a base and a quote asset.

use serde::{Deserialize, Serialize};

use crate::entity::{Asset, Entity};
use crate::identity::{Identified, Ref};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model<Id = i64> {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_socket_pair_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair_decimal: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot_decimals: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot_multiplier: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Ref<Asset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<Ref<Asset>>,
}

pub type NewModel = Model<()>;

impl<Id> Model<Id> {
    pub fn with_id<T>(self, id: T) -> Model<T> {
        Model {
            id,
            name: self.name,
            altname: self.altname,
            web_socket_pair_name: self.web_socket_pair_name,
            lot: self.lot,
            pair_decimal: self.pair_decimal,
            lot_decimals: self.lot_decimals,
            lot_multiplier: self.lot_multiplier,
            base: self.base,
            quote: self.quote,
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

    const NAME: &'static str = "pair";
    const RESOURCE_PATH: &'static str = "api/pairs";

    fn stub(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}
