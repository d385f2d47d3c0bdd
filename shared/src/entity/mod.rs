//! Market-data entities as exchanged with the REST backend.
//!
//! Every entity module exposes `Model<Id = i64>`. A persisted record uses
//! the default `i64` identifier, a record that has not been saved yet is a
//! `Model<()>`, whose identifier serializes as `null`.

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::identity::{Identified, Ref};

pub mod asset;
pub mod calculation;
pub mod chart;
pub mod fee;
pub mod ohlc;
pub mod pair;
pub mod time_range;
pub mod touple;
pub mod tuple;

pub use asset::{Model as Asset, NewModel as NewAsset};
pub use calculation::{Model as Calculation, NewModel as NewCalculation};
pub use chart::{Model as Chart, NewModel as NewChart};
pub use fee::{Model as Fee, NewModel as NewFee};
pub use ohlc::{Model as Ohlc, NewModel as NewOhlc};
pub use pair::{Model as Pair, NewModel as NewPair};
pub use time_range::{Model as TimeRange, NewModel as NewTimeRange};
pub use touple::{Model as Touple, NewModel as NewTouple};
pub use tuple::{Model as Tuple, NewModel as NewTuple};

/// A persisted entity managed through its own REST resource.
pub trait Entity:
    Identified + Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The not yet persisted variant of the entity.
    type New: Clone + Debug + PartialEq + Serialize + Send + Sync + 'static;

    /// Lowercase entity name used in logs and on the command line.
    const NAME: &'static str;

    /// Path of the REST resource relative to the API base URL.
    const RESOURCE_PATH: &'static str;

    /// A record carrying nothing but the identifier.
    fn stub(id: i64) -> Self;

    fn from_ref(reference: Ref<Self>) -> Self {
        Self::stub(reference.id)
    }
}

/// A record read back from a form: either an existing entity or a new one.
#[derive(Clone, Debug, PartialEq)]
pub enum Draft<E: Entity> {
    Existing(E),
    New(E::New),
}

impl<E: Entity> Draft<E> {
    pub fn id(&self) -> Option<i64> {
        match self {
            Draft::Existing(entity) => Some(entity.identifier()),
            Draft::New(_) => None,
        }
    }
}
