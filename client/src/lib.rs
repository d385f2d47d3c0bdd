//! REST client for the market-data backend.
//!
//! [`EntityService`] talks to one entity resource, [`resolve_entity`] turns a
//! route parameter into a record, [`FormGroup`] binds records to raw form
//! state and [`EntityEditor`] / [`EntityList`] drive the update and list
//! workflows on top of them.

pub mod editor;
pub mod error;
pub mod form;
pub mod listing;
pub mod relations;
pub mod repair;
pub mod request;
pub mod resolve;
pub mod service;
pub mod services;

pub use editor::EntityEditor;
pub use error::{ClientError, Result};
pub use form::{FormGroup, FormModel};
pub use listing::EntityList;
pub use relations::Relationships;
pub use request::{RequestOptions, SortState};
pub use resolve::{resolve_entity, Resolution};
pub use service::{EntityService, QueryResponse};
pub use services::{Registered, Services};
