//! One service per entity, sharing a single HTTP client.

use reqwest::Client;

use shared::{Asset, Calculation, Chart, Config, Entity, Fee, Ohlc, Pair, TimeRange, Touple, Tuple};

use crate::service::EntityService;

#[derive(Debug, Clone)]
pub struct Services {
    pub assets: EntityService<Asset>,
    pub pairs: EntityService<Pair>,
    pub charts: EntityService<Chart>,
    pub ohlcs: EntityService<Ohlc>,
    pub calculations: EntityService<Calculation>,
    pub fees: EntityService<Fee>,
    pub time_ranges: EntityService<TimeRange>,
    pub tuples: EntityService<Tuple>,
    pub touples: EntityService<Touple>,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            assets: EntityService::new(client.clone(), config),
            pairs: EntityService::new(client.clone(), config),
            charts: EntityService::new(client.clone(), config),
            ohlcs: EntityService::new(client.clone(), config),
            calculations: EntityService::new(client.clone(), config),
            fees: EntityService::new(client.clone(), config),
            time_ranges: EntityService::new(client.clone(), config),
            tuples: EntityService::new(client.clone(), config),
            touples: EntityService::new(client, config),
        }
    }

    /// The service of entity `E`.
    pub fn of<E: Registered>(&self) -> &EntityService<E> {
        E::service(self)
    }
}

/// An entity with a service in [`Services`].
pub trait Registered: Entity {
    fn service(services: &Services) -> &EntityService<Self>;
}

macro_rules! register {
    ($($entity:ty => $field:ident),+ $(,)?) => {
        $(
            impl Registered for $entity {
                fn service(services: &Services) -> &EntityService<Self> {
                    &services.$field
                }
            }
        )+
    };
}

register! {
    Asset => assets,
    Pair => pairs,
    Chart => charts,
    Ohlc => ohlcs,
    Calculation => calculations,
    Fee => fees,
    TimeRange => time_ranges,
    Tuple => tuples,
    Touple => touples,
}
