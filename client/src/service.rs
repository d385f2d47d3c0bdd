//! REST access to one entity resource.

use std::borrow::Cow;
use std::marker::PhantomData;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use shared::{add_to_collection_if_missing, equals_by_id, Config, Entity, Identified};

use crate::error::{ClientError, Result};
use crate::request::RequestOptions;

/// Header carrying the size of the whole result set of a list request.
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

const MERGE_PATCH_JSON: &str = "application/merge-patch+json";

/// One page of a list request.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResponse<E> {
    pub items: Vec<E>,
    /// Taken from [`TOTAL_COUNT_HEADER`] when the backend sends it.
    pub total_count: Option<u64>,
}

/// Create, read, update and delete calls against `api/<resource>`.
pub struct EntityService<E> {
    client: Client,
    resource_url: String,
    entity: PhantomData<fn() -> E>,
}

impl<E> Clone for EntityService<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            resource_url: self.resource_url.clone(),
            entity: PhantomData,
        }
    }
}

impl<E> std::fmt::Debug for EntityService<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityService")
            .field("resource_url", &self.resource_url)
            .finish()
    }
}

impl<E: Entity> EntityService<E> {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            resource_url: config.endpoint_for(E::RESOURCE_PATH),
            entity: PhantomData,
        }
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    fn entity_url(&self, id: i64) -> String {
        format!("{}/{}", self.resource_url, id)
    }

    pub async fn create(&self, entity: &E::New) -> Result<E> {
        debug!(entity = E::NAME, "POST {}", self.resource_url);
        let response = self.client.post(&self.resource_url).json(entity).send().await?;
        let response = error_for_status(response).await?;
        Ok(response.json().await?)
    }

    /// Replaces the whole record.
    pub async fn update(&self, entity: &E) -> Result<E> {
        let url = self.entity_url(entity.identifier());
        debug!(entity = E::NAME, "PUT {}", url);
        let response = self.client.put(&url).json(entity).send().await?;
        let response = error_for_status(response).await?;
        Ok(response.json().await?)
    }

    /// Sends only the fields that are set; the backend keeps the others.
    pub async fn partial_update(&self, entity: &E) -> Result<E> {
        let url = self.entity_url(entity.identifier());
        debug!(entity = E::NAME, "PATCH {}", url);
        let body = serde_json::to_vec(entity)?;
        let response = self
            .client
            .patch(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static(MERGE_PATCH_JSON))
            .body(body)
            .send()
            .await?;
        let response = error_for_status(response).await?;
        Ok(response.json().await?)
    }

    /// `Ok(None)` when the backend has no record with this id.
    pub async fn find(&self, id: i64) -> Result<Option<E>> {
        let url = self.entity_url(id);
        debug!(entity = E::NAME, "GET {}", url);
        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = error_for_status(response).await?;
        Ok(Some(response.json().await?))
    }

    pub async fn query(&self, options: &RequestOptions) -> Result<QueryResponse<E>> {
        let query = options.to_query();
        debug!(entity = E::NAME, ?query, "GET {}", self.resource_url);
        let response = self.client.get(&self.resource_url).query(&query).send().await?;
        let response = error_for_status(response).await?;

        let total_count = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse().ok());
        let items = response.json().await?;

        Ok(QueryResponse { items, total_count })
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let url = self.entity_url(id);
        debug!(entity = E::NAME, "DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        error_for_status(response).await?;
        Ok(())
    }

    pub fn get_identifier(&self, entity: &E) -> i64 {
        entity.identifier()
    }

    pub fn compare(&self, a: Option<&E>, b: Option<&E>) -> bool {
        equals_by_id(a, b)
    }

    pub fn add_to_collection_if_missing<'a, I>(&self, collection: &'a [E], candidates: I) -> Cow<'a, [E]>
    where
        I: IntoIterator<Item = Option<E>>,
    {
        add_to_collection_if_missing(collection, candidates)
    }
}

async fn error_for_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status { status, url, body })
}
