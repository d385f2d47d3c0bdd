//! Option lists of the relationship selectors of each edit form.
//!
//! A list holds every record of the related resource plus the records the
//! edited entity currently points at, so the current selection is always
//! listed.

use async_trait::async_trait;
use serde::Serialize;

use shared::{merge_missing, Asset, Calculation, Chart, Fee, Ohlc, Pair, Ref, TimeRange, Touple, Tuple};

use crate::error::Result;
use crate::request::RequestOptions;
use crate::services::{Registered, Services};

#[async_trait]
pub trait Relationships: Registered {
    type Options: std::fmt::Debug + Default + Clone + PartialEq + Serialize + Send + Sync;

    async fn load_options(services: &Services, current: Option<&Self>) -> Result<Self::Options>;
}

/// All records of `R`, preceded by the referenced ones the backend did not return.
pub async fn shared_collection<R: Registered>(
    services: &Services,
    current: Vec<Option<Ref<R>>>,
) -> Result<Vec<R>> {
    let items = R::service(services).query(&RequestOptions::new()).await?.items;
    Ok(merge_missing(
        items,
        current.into_iter().map(|reference| reference.map(R::from_ref)),
    ))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairOptions {
    /// Shared by the base and the quote selector.
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub pairs: Vec<Pair>,
    pub time_ranges: Vec<TimeRange>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSelection {
    pub charts: Vec<Chart>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeOptions {
    pub pairs: Vec<Pair>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TupleOptions {
    pub calculations: Vec<Calculation>,
    pub ohlcs: Vec<Ohlc>,
}

#[async_trait]
impl Relationships for Asset {
    type Options = ();

    async fn load_options(_services: &Services, _current: Option<&Self>) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl Relationships for TimeRange {
    type Options = ();

    async fn load_options(_services: &Services, _current: Option<&Self>) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl Relationships for Pair {
    type Options = PairOptions;

    async fn load_options(services: &Services, current: Option<&Self>) -> Result<PairOptions> {
        let refs = match current {
            Some(pair) => vec![pair.base, pair.quote],
            None => Vec::new(),
        };
        Ok(PairOptions {
            assets: shared_collection(services, refs).await?,
        })
    }
}

#[async_trait]
impl Relationships for Chart {
    type Options = ChartOptions;

    async fn load_options(services: &Services, current: Option<&Self>) -> Result<ChartOptions> {
        let pairs = shared_collection(services, vec![current.and_then(|c| c.pair)]).await?;
        let time_ranges = shared_collection(services, vec![current.and_then(|c| c.time_range)]).await?;
        Ok(ChartOptions { pairs, time_ranges })
    }
}

#[async_trait]
impl Relationships for Calculation {
    type Options = ChartSelection;

    async fn load_options(services: &Services, current: Option<&Self>) -> Result<ChartSelection> {
        Ok(ChartSelection {
            charts: shared_collection(services, vec![current.and_then(|c| c.chart)]).await?,
        })
    }
}

#[async_trait]
impl Relationships for Ohlc {
    type Options = ChartSelection;

    async fn load_options(services: &Services, current: Option<&Self>) -> Result<ChartSelection> {
        Ok(ChartSelection {
            charts: shared_collection(services, vec![current.and_then(|o| o.chart)]).await?,
        })
    }
}

#[async_trait]
impl Relationships for Fee {
    type Options = FeeOptions;

    async fn load_options(services: &Services, current: Option<&Self>) -> Result<FeeOptions> {
        Ok(FeeOptions {
            pairs: shared_collection(services, vec![current.and_then(|f| f.pair)]).await?,
        })
    }
}

macro_rules! tuple_relationships {
    ($($entity:ty),+) => {
        $(
            #[async_trait]
            impl Relationships for $entity {
                type Options = TupleOptions;

                async fn load_options(services: &Services, current: Option<&Self>) -> Result<TupleOptions> {
                    let calculations =
                        shared_collection(services, vec![current.and_then(|t| t.calculation)]).await?;
                    let ohlcs = shared_collection(services, vec![current.and_then(|t| t.ohlc)]).await?;
                    Ok(TupleOptions { calculations, ohlcs })
                }
            }
        )+
    };
}

tuple_relationships!(Tuple, Touple);
