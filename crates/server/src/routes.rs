use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use aflam_catalog::browse::{self, Layout, SortKey};
use aflam_catalog::categories::{Category, CategoryPatch, NewCategory};
use aflam_catalog::episodes::{Episode, EpisodePatch, NewEpisode};
use aflam_catalog::movies::{Movie, MoviePatch, NewMovie};
use aflam_catalog::series::{NewSeries, Series, SeriesPatch};
use aflam_core::error::ApiError;

use crate::error::AppError;
use crate::state::AppState;
use crate::validation;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_router() -> Router<AppState> {
    Router::new()
        // Movies
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/featured", get(featured_movies))
        .route("/movies/search", get(search_movies))
        .route(
            "/movies/{id}",
            get(get_movie).patch(update_movie).delete(delete_movie),
        )
        // Series
        .route("/series", get(list_series).post(create_series))
        .route("/series/featured", get(featured_series))
        .route("/series/search", get(search_series))
        .route(
            "/series/{id}",
            get(get_series).patch(update_series).delete(delete_series),
        )
        .route("/series/{id}/episodes", get(series_episodes))
        // Episodes
        .route("/episodes", post(create_episode))
        .route(
            "/episodes/{id}",
            get(get_episode)
                .patch(update_episode)
                .delete(delete_episode),
        )
        // Categories
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            get(get_category)
                .patch(update_category)
                .delete(delete_category),
        )
        // Cross-kind search page composition
        .route("/browse", get(browse_catalog))
}

#[derive(Deserialize)]
struct SearchQuery {
    q: Option<String>,
}

/// The search contract rejects an empty or absent query before it reaches
/// the store.
fn require_query(q: Option<String>) -> Result<String, AppError> {
    match q {
        Some(q) if !q.is_empty() => Ok(q),
        _ => Err(ApiError::InvalidQuery("query parameter 'q' is required".into()).into()),
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// ---------------------------------------------------------------------------
// Movies
// ---------------------------------------------------------------------------

async fn list_movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
    Json(state.catalog.list_movies())
}

async fn featured_movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
    Json(state.catalog.featured_movies())
}

async fn search_movies(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Movie>>, AppError> {
    let q = require_query(query.q)?;
    Ok(Json(state.catalog.search_movies(&q)))
}

async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, AppError> {
    let movie = state
        .catalog
        .get_movie(id)
        .ok_or_else(|| ApiError::NotFound("movie not found".into()))?;
    Ok(Json(movie))
}

async fn create_movie(
    State(state): State<AppState>,
    Json(body): Json<NewMovie>,
) -> Result<(StatusCode, Json<Movie>), AppError> {
    if let Some(fields) = validation::validate_new_movie(&body) {
        return Err(ApiError::Validation { fields }.into());
    }
    Ok((StatusCode::CREATED, Json(state.catalog.create_movie(body))))
}

async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<MoviePatch>,
) -> Result<Json<Movie>, AppError> {
    if let Some(fields) = validation::validate_movie_patch(&body) {
        return Err(ApiError::Validation { fields }.into());
    }
    let movie = state
        .catalog
        .update_movie(id, body)
        .ok_or_else(|| ApiError::NotFound("movie not found".into()))?;
    Ok(Json(movie))
}

async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !state.catalog.delete_movie(id) {
        return Err(ApiError::NotFound("movie not found".into()).into());
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

async fn list_series(State(state): State<AppState>) -> Json<Vec<Series>> {
    Json(state.catalog.list_series())
}

async fn featured_series(State(state): State<AppState>) -> Json<Vec<Series>> {
    Json(state.catalog.featured_series())
}

async fn search_series(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Series>>, AppError> {
    let q = require_query(query.q)?;
    Ok(Json(state.catalog.search_series(&q)))
}

async fn get_series(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Series>, AppError> {
    let series = state
        .catalog
        .get_series(id)
        .ok_or_else(|| ApiError::NotFound("series not found".into()))?;
    Ok(Json(series))
}

async fn create_series(
    State(state): State<AppState>,
    Json(body): Json<NewSeries>,
) -> Result<(StatusCode, Json<Series>), AppError> {
    if let Some(fields) = validation::validate_new_series(&body) {
        return Err(ApiError::Validation { fields }.into());
    }
    Ok((StatusCode::CREATED, Json(state.catalog.create_series(body))))
}

async fn update_series(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<SeriesPatch>,
) -> Result<Json<Series>, AppError> {
    if let Some(fields) = validation::validate_series_patch(&body) {
        return Err(ApiError::Validation { fields }.into());
    }
    let series = state
        .catalog
        .update_series(id, body)
        .ok_or_else(|| ApiError::NotFound("series not found".into()))?;
    Ok(Json(series))
}

async fn delete_series(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !state.catalog.delete_series(id) {
        return Err(ApiError::NotFound("series not found".into()).into());
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// Episodes of one series. The parent id is not checked for existence; an
/// unknown series simply has no episodes.
async fn series_episodes(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<Vec<Episode>> {
    Json(state.catalog.episodes_by_series(id))
}

// ---------------------------------------------------------------------------
// Episodes
// ---------------------------------------------------------------------------

async fn get_episode(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Episode>, AppError> {
    let episode = state
        .catalog
        .get_episode(id)
        .ok_or_else(|| ApiError::NotFound("episode not found".into()))?;
    Ok(Json(episode))
}

async fn create_episode(
    State(state): State<AppState>,
    Json(body): Json<NewEpisode>,
) -> Result<(StatusCode, Json<Episode>), AppError> {
    if let Some(fields) = validation::validate_new_episode(&body) {
        return Err(ApiError::Validation { fields }.into());
    }
    Ok((
        StatusCode::CREATED,
        Json(state.catalog.create_episode(body)),
    ))
}

async fn update_episode(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<EpisodePatch>,
) -> Result<Json<Episode>, AppError> {
    if let Some(fields) = validation::validate_episode_patch(&body) {
        return Err(ApiError::Validation { fields }.into());
    }
    let episode = state
        .catalog
        .update_episode(id, body)
        .ok_or_else(|| ApiError::NotFound("episode not found".into()))?;
    Ok(Json(episode))
}

async fn delete_episode(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !state.catalog.delete_episode(id) {
        return Err(ApiError::NotFound("episode not found".into()).into());
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalog.list_categories())
}

async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Category>, AppError> {
    let category = state
        .catalog
        .get_category(id)
        .ok_or_else(|| ApiError::NotFound("category not found".into()))?;
    Ok(Json(category))
}

async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<NewCategory>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    if let Some(fields) = validation::validate_new_category(&body) {
        return Err(ApiError::Validation { fields }.into());
    }
    Ok((
        StatusCode::CREATED,
        Json(state.catalog.create_category(body)),
    ))
}

async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<CategoryPatch>,
) -> Result<Json<Category>, AppError> {
    if let Some(fields) = validation::validate_category_patch(&body) {
        return Err(ApiError::Validation { fields }.into());
    }
    let category = state
        .catalog
        .update_category(id, body)
        .ok_or_else(|| ApiError::NotFound("category not found".into()))?;
    Ok(Json(category))
}

async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !state.catalog.delete_category(id) {
        return Err(ApiError::NotFound("category not found".into()).into());
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}

// ---------------------------------------------------------------------------
// Browse (search page composition)
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
enum BrowseType {
    #[default]
    All,
    Movie,
    Series,
}

#[derive(Deserialize)]
struct BrowseQuery {
    q: Option<String>,
    #[serde(rename = "type", default)]
    content_type: BrowseType,
    #[serde(default)]
    sort: SortKey,
    #[serde(default)]
    layout: Layout,
}

#[derive(Serialize)]
struct BrowseResponse {
    movies: Vec<Movie>,
    series: Vec<Series>,
}

/// Cross-kind search with display ordering. Only the "all types" view is
/// truncated to a preview per kind (6 for grid, 3 for list); a single-type
/// view returns every hit.
async fn browse_catalog(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Result<Json<BrowseResponse>, AppError> {
    let q = require_query(query.q)?;
    let mixed = query.content_type == BrowseType::All;

    let mut movies = match query.content_type {
        BrowseType::Series => Vec::new(),
        _ => state.catalog.search_movies(&q),
    };
    let mut series = match query.content_type {
        BrowseType::Movie => Vec::new(),
        _ => state.catalog.search_series(&q),
    };

    browse::sort(&mut movies, query.sort);
    browse::sort(&mut series, query.sort);
    browse::preview_cap(&mut movies, mixed, query.layout);
    browse::preview_cap(&mut series, mixed, query.layout);

    Ok(Json(BrowseResponse { movies, series }))
}
