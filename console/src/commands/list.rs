use anyhow::{anyhow, Result};
use tracing::info;

use client::{EntityList, Registered, SortState};

use super::print_json;
use crate::cli::ListArgs;
use crate::state::AppState;

pub async fn handle_list<E: Registered>(state: &AppState, args: &ListArgs) -> Result<()> {
    let size = args.size.unwrap_or(state.config.items_per_page);
    let mut list = EntityList::new(state.services.of::<E>().clone(), size);
    list.page = args.page;
    list.sort = args.sort.parse::<SortState>().map_err(|e| anyhow!(e))?;

    list.load().await?;

    info!(
        entity = E::NAME,
        page = list.page,
        shown = list.items.len(),
        total = ?list.total_items,
        "Listed"
    );
    print_json(&list.items)
}
