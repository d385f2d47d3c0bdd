//! Fetching the record a screen is opened for.

use std::future::Future;

use tracing::warn;

use crate::error::Result;

/// Outcome of resolving the id parameter of a route.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<E> {
    /// The backend returned the record.
    Found(E),
    /// No id was given; the screen starts from an empty record.
    Blank,
    /// The record does not exist; navigate to `redirect` instead.
    NotFound { redirect: String },
}

impl<E> Resolution<E> {
    pub fn found(self) -> Option<E> {
        match self {
            Resolution::Found(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound { .. })
    }
}

/// Resolves `id_param` through `fetch`.
///
/// A missing or empty parameter resolves to [`Resolution::Blank`] without
/// calling `fetch`. A parameter that is not an id, or an id `fetch` finds
/// nothing for, resolves to [`Resolution::NotFound`] pointing at
/// `not_found_route`. Errors returned by `fetch` are passed through.
pub async fn resolve_entity<E, F, Fut>(
    id_param: Option<&str>,
    not_found_route: &str,
    fetch: F,
) -> Result<Resolution<E>>
where
    F: FnOnce(i64) -> Fut,
    Fut: Future<Output = Result<Option<E>>>,
{
    let raw = match id_param.map(str::trim) {
        None | Some("") => return Ok(Resolution::Blank),
        Some(raw) => raw,
    };

    let not_found = || Resolution::NotFound {
        redirect: not_found_route.to_string(),
    };

    let id: i64 = match raw.parse() {
        Ok(id) => id,
        Err(_) => {
            warn!(id = raw, "Route id is not a number, redirecting to {}", not_found_route);
            return Ok(not_found());
        }
    };

    match fetch(id).await? {
        Some(entity) => Ok(Resolution::Found(entity)),
        None => {
            warn!(id, "Entity not found, redirecting to {}", not_found_route);
            Ok(not_found())
        }
    }
}
