//! Listing and search pages
//!
//! Both are public: anonymous visitors can browse and search, the
//! navigation and delete buttons adapt to login state.

use actix_web::{get, web, HttpResponse};
use lineup_store::{QueueStore, TableOrder};
use std::sync::Arc;

use crate::error::{run_blocking, ApiError};
use crate::extract::CurrentUser;
use crate::forms::SearchQuery;
use crate::views::{self, ListingView};

/// GET /
///
/// Every queue table, newest first.
#[get("/")]
pub async fn index(
    queues: web::Data<Arc<QueueStore>>,
    viewer: CurrentUser,
) -> Result<HttpResponse, ApiError> {
    let store = queues.get_ref().clone();
    let tables = run_blocking(move || store.list_tables(TableOrder::NewestFirst)).await?;
    let view = ListingView {
        heading: "Queue tables",
        tables: &tables,
        viewer: viewer.user(),
        query: None,
        empty_message: "No queue tables yet.",
    };
    Ok(views::html(view.render()))
}

/// GET /search
///
/// Case-insensitive substring search over table names. A blank or
/// absent query renders the empty search form; it never falls back to
/// the full listing.
#[get("/search")]
pub async fn search(
    query: web::Query<SearchQuery>,
    queues: web::Data<Arc<QueueStore>>,
    viewer: CurrentUser,
) -> Result<HttpResponse, ApiError> {
    let needle = query.searching_table.trim().to_string();
    let store = queues.get_ref().clone();
    let lookup = needle.clone();
    let tables = run_blocking(move || store.search_tables(&lookup)).await?;
    let view = ListingView {
        heading: "Search queue tables",
        tables: &tables,
        viewer: viewer.user(),
        query: Some(&needle),
        empty_message: if needle.is_empty() {
            "Enter a search term to find queue tables."
        } else {
            "No matching queue tables."
        },
    };
    Ok(views::html(view.render()))
}
