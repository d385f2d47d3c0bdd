//! List screen state.

use shared::{Entity, Identified};

use crate::error::Result;
use crate::request::{RequestOptions, SortState};
use crate::service::EntityService;

pub struct EntityList<E: Entity> {
    service: EntityService<E>,
    pub items: Vec<E>,
    pub total_items: Option<u64>,
    pub sort: SortState,
    /// Zero based.
    pub page: u32,
    pub items_per_page: u32,
    pub is_loading: bool,
}

impl<E: Entity> EntityList<E> {
    pub fn new(service: EntityService<E>, items_per_page: u32) -> Self {
        Self {
            service,
            items: Vec::new(),
            total_items: None,
            sort: SortState::default(),
            page: 0,
            items_per_page,
            is_loading: false,
        }
    }

    pub fn request_options(&self) -> RequestOptions {
        RequestOptions::new()
            .page(self.page)
            .size(self.items_per_page)
            .sort(&self.sort)
    }

    pub async fn load(&mut self) -> Result<()> {
        self.is_loading = true;
        let result = self.service.query(&self.request_options()).await;
        self.is_loading = false;

        let response = result?;
        self.items = response.items;
        self.total_items = response.total_count;
        Ok(())
    }

    pub async fn navigate_to_page(&mut self, page: u32) -> Result<()> {
        self.page = page;
        self.load().await
    }

    /// Sorts by `predicate`, flipping the direction when it already is the sort column.
    pub async fn sort_by(&mut self, predicate: &str) -> Result<()> {
        self.sort.toggle(predicate);
        self.load().await
    }

    /// Deletes a record and reloads the current page.
    pub async fn delete(&mut self, id: i64) -> Result<()> {
        self.service.delete(id).await?;
        self.load().await
    }

    pub fn track_id(&self, item: &E) -> i64 {
        item.identifier()
    }
}
