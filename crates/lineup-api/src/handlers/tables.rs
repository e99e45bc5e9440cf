//! Queue table creation, entry appending and cascading delete
//!
//! Every route here is login-gated. No ownership model exists: any
//! signed-in user may add to or delete any table.

use actix_web::{get, post, web, HttpResponse};
use lineup_commons::TableId;
use lineup_store::QueueStore;
use std::sync::Arc;

use super::see_other;
use crate::error::{run_blocking, ApiError};
use crate::extract::RequireLogin;
use crate::forms::{NewEntryForm, NewTableForm};
use crate::views::{self, NewTableView, TableDetailView};

/// GET /queue
///
/// Renders the new-table form.
#[get("/queue")]
pub async fn new_table_form(auth: RequireLogin) -> HttpResponse {
    let view = NewTableView {
        viewer: &auth.user,
        error: None,
        table_name: "",
    };
    views::html(view.render())
}

/// POST /queue
///
/// Creates a queue table and redirects to the listing. A blank name
/// re-renders the form with a message.
#[post("/queue")]
pub async fn create_table(
    auth: RequireLogin,
    form: web::Form<NewTableForm>,
    queues: web::Data<Arc<QueueStore>>,
) -> Result<HttpResponse, ApiError> {
    let name = form.table_name.trim().to_string();
    if name.is_empty() {
        let view = NewTableView {
            viewer: &auth.user,
            error: Some("Table name is required."),
            table_name: "",
        };
        return Ok(views::html(view.render()));
    }

    let store = queues.get_ref().clone();
    run_blocking(move || store.create_table(&name)).await?;
    Ok(see_other("/"))
}

/// GET /make/{table_id}
///
/// One table, its entries and the add-entry form. Unknown ids are 404.
#[get("/make/{table_id}")]
pub async fn table_detail(
    auth: RequireLogin,
    path: web::Path<i64>,
    queues: web::Data<Arc<QueueStore>>,
) -> Result<HttpResponse, ApiError> {
    let table_id = TableId::new(path.into_inner());
    let (table, entries) = fetch_detail(&queues, table_id).await?;
    let view = TableDetailView {
        table: &table,
        entries: &entries,
        viewer: &auth.user,
        error: None,
    };
    Ok(views::html(view.render()))
}

/// POST /make/{table_id}
///
/// Appends an entry and redirects back to the same table. The table is
/// resolved first, so unknown ids are 404 before any validation
/// output.
#[post("/make/{table_id}")]
pub async fn add_entry(
    auth: RequireLogin,
    path: web::Path<i64>,
    form: web::Form<NewEntryForm>,
    queues: web::Data<Arc<QueueStore>>,
) -> Result<HttpResponse, ApiError> {
    let table_id = TableId::new(path.into_inner());
    let name = form.name.trim().to_string();

    if name.is_empty() {
        let (table, entries) = fetch_detail(&queues, table_id).await?;
        let view = TableDetailView {
            table: &table,
            entries: &entries,
            viewer: &auth.user,
            error: Some("Name is required."),
        };
        return Ok(views::html(view.render()));
    }

    let store = queues.get_ref().clone();
    run_blocking(move || store.add_entry(table_id, &name)).await?;
    Ok(see_other(&format!("/make/{table_id}")))
}

/// POST /delete/{table_id}
///
/// Cascading delete, then back to the listing. Unknown ids are 404.
#[post("/delete/{table_id}")]
pub async fn delete_table(
    _auth: RequireLogin,
    path: web::Path<i64>,
    queues: web::Data<Arc<QueueStore>>,
) -> Result<HttpResponse, ApiError> {
    let table_id = TableId::new(path.into_inner());
    let store = queues.get_ref().clone();
    run_blocking(move || store.delete_table(table_id)).await?;
    Ok(see_other("/"))
}

async fn fetch_detail(
    queues: &web::Data<Arc<QueueStore>>,
    table_id: TableId,
) -> Result<(lineup_commons::QueueTable, Vec<lineup_commons::QueueEntry>), ApiError> {
    let store = queues.get_ref().clone();
    run_blocking(move || {
        let table = store.get_table(table_id)?;
        let entries = store.list_entries(table_id)?;
        Ok((table, entries))
    })
    .await
}
