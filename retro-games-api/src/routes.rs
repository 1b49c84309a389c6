//! Route table and handlers. Every store call runs on the blocking pool.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};

use retro_games_catalog::{
    CatalogEntry, EntryFields, EntryOrder, MAX_API_PAGE_SIZE, PageRequest, Paginated, RawEntry,
};
use retro_games_db::CatalogStore;

use crate::ApiError;
use crate::extract::{JsonBody, PathParams, QueryParams};

pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Build the API `Router` over the given store.
pub fn router(store: CatalogStore) -> Router {
    Router::new()
        .route("/", get(info_handler))
        .route("/games", get(list_handler).post(create_handler))
        .route(
            "/games/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(store)
}

/// Serve the API at the given address (e.g. `"127.0.0.1:8000"`).
pub async fn serve(store: CatalogStore, addr: &str) -> Result<(), std::io::Error> {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    page: Option<u32>,
    page_size: Option<u32>,
}

async fn blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Task(e.to_string()))?
}

/// `GET /`
async fn info_handler() -> Json<Value> {
    Json(json!({
        "message": "Retro Games Catalog API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `POST /games`
async fn create_handler(
    State(store): State<CatalogStore>,
    JsonBody(raw): JsonBody<RawEntry>,
) -> Result<(StatusCode, Json<CatalogEntry>), ApiError> {
    let fields = EntryFields::validate(&raw)?;
    let entry = blocking(move || {
        let id = store.create(&fields)?;
        Ok(CatalogEntry::from_fields(id, fields))
    })
    .await?;
    log::info!("POST /games -> 201 (id {})", entry.id);
    Ok((StatusCode::CREATED, Json(entry)))
}

/// `GET /games?page=&page_size=`
async fn list_handler(
    State(store): State<CatalogStore>,
    QueryParams(params): QueryParams<ListParams>,
) -> Result<Json<Paginated<CatalogEntry>>, ApiError> {
    let request = PageRequest::bounded(
        params.page.unwrap_or(1),
        params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        MAX_API_PAGE_SIZE,
    )?;
    let page = blocking(move || Ok(store.list_page(request, EntryOrder::ReleaseYearDesc)?)).await?;
    log::info!(
        "GET /games -> 200 (page {} of {}, {} entries)",
        page.page,
        page.total_pages,
        page.entries.len()
    );
    Ok(Json(page))
}

/// `GET /games/:id`
async fn get_handler(
    State(store): State<CatalogStore>,
    PathParams(id): PathParams<i64>,
) -> Result<Json<CatalogEntry>, ApiError> {
    let entry = blocking(move || Ok(store.get(id)?)).await?;
    log::info!("GET /games/{id} -> 200");
    Ok(Json(entry))
}

/// `PUT /games/:id`
async fn update_handler(
    State(store): State<CatalogStore>,
    PathParams(id): PathParams<i64>,
    JsonBody(raw): JsonBody<RawEntry>,
) -> Result<Json<CatalogEntry>, ApiError> {
    let fields = EntryFields::validate(&raw)?;
    let entry = blocking(move || {
        if !store.update(id, &fields)? {
            return Err(ApiError::NotFound(id));
        }
        Ok(CatalogEntry::from_fields(id, fields))
    })
    .await?;
    log::info!("PUT /games/{id} -> 200");
    Ok(Json(entry))
}

/// `DELETE /games/:id`
async fn delete_handler(
    State(store): State<CatalogStore>,
    PathParams(id): PathParams<i64>,
) -> Result<StatusCode, ApiError> {
    blocking(move || {
        if store.delete(id)? {
            Ok(())
        } else {
            Err(ApiError::NotFound(id))
        }
    })
    .await?;
    log::info!("DELETE /games/{id} -> 204");
    Ok(StatusCode::NO_CONTENT)
}
