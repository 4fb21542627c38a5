//! Cafe API Handlers

use axum::{
    Json,
    extract::{
        Form, Path, Query, State,
        rejection::{FormRejection, PathRejection, QueryRejection},
    },
};
use serde::{Deserialize, Serialize};
use shared::models::{Cafe, CafeCreate};

use super::form::AddCafeForm;
use crate::auth::ApiKey;
use crate::core::ServerState;
use crate::db::repository::{RepoError, cafe};
use crate::security_log;
use crate::utils::{AppError, AppResult, SuccessResponse, success};

const NO_CAFE_AT_LOCATION: &str = "Sorry, we don't have a cafe at that location.";
const NO_CAFES_YET: &str = "Sorry, there are no cafes in the database yet.";

/// `{"cafe": {...}}`
#[derive(Debug, Serialize)]
pub struct CafeResponse {
    pub cafe: Cafe,
}

/// `{"cafes": [...]}`
#[derive(Debug, Serialize)]
pub struct CafeListResponse {
    pub cafes: Vec<Cafe>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub loc: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub new_price: Option<String>,
}

/// Non-integer ids fall through to the generic not-found response
fn cafe_id(path: Result<Path<i64>, PathRejection>) -> AppResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::cafe_not_found())
}

/// GET /random - 随机返回一家咖啡馆
pub async fn random(State(state): State<ServerState>) -> AppResult<Json<CafeResponse>> {
    let picked = cafe::find_random(state.pool())
        .await?
        .ok_or_else(|| AppError::not_found(NO_CAFES_YET))?;
    Ok(Json(CafeResponse { cafe: picked }))
}

/// GET /all - 获取所有咖啡馆 (按名称排序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<CafeListResponse>> {
    let cafes = cafe::find_all(state.pool()).await?;
    Ok(Json(CafeListResponse { cafes }))
}

/// GET /search?loc= - 按地点精确查询
pub async fn search(
    State(state): State<ServerState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<Json<CafeListResponse>> {
    let Some(loc) = query.ok().and_then(|Query(q)| q.loc) else {
        return Err(AppError::not_found(NO_CAFE_AT_LOCATION));
    };

    let cafes = cafe::find_by_location(state.pool(), &loc).await?;
    if cafes.is_empty() {
        return Err(AppError::not_found(NO_CAFE_AT_LOCATION));
    }
    Ok(Json(CafeListResponse { cafes }))
}

/// POST /add?api-key= - 创建咖啡馆 (表单)
pub async fn create(
    State(state): State<ServerState>,
    api_key: ApiKey,
    form: Result<Form<AddCafeForm>, FormRejection>,
) -> AppResult<Json<SuccessResponse>> {
    api_key.authorize(&state, "add_cafe")?;

    let Form(form) = form.map_err(|e| AppError::validation(e.body_text()))?;
    let payload = CafeCreate::try_from(form)?;
    let name = payload.name.clone();

    let added = match cafe::create(state.pool(), payload).await {
        Ok(added) => added,
        Err(e @ RepoError::Duplicate(_)) => {
            tracing::info!(name = %name, "Rejected duplicate cafe name");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(id = added.id, name = %added.name, "Cafe added");
    Ok(success("Successfully added the new cafe."))
}

/// PATCH /update-price/{id}?new_price= - 修改咖啡价格
///
/// Unauthenticated unless `PRICE_UPDATE_REQUIRES_KEY` is enabled. Like
/// `report_closed`, an unknown id is a 404 before the key or price is looked at.
/// A blank price clears the stored price.
pub async fn update_price(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
    api_key: ApiKey,
    query: Result<Query<PriceQuery>, QueryRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let id = cafe_id(path)?;

    let existing = cafe::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(AppError::cafe_not_found)?;

    if state.config.price_update_requires_key {
        api_key.authorize(&state, "update_price")?;
    }

    let new_price = query
        .ok()
        .and_then(|Query(q)| q.new_price)
        .ok_or_else(|| AppError::validation("Missing query parameter: new_price"))?;
    let new_price = Some(new_price.trim()).filter(|p| !p.is_empty());

    let updated = cafe::update_price(state.pool(), existing.id, new_price).await?;

    tracing::info!(
        id = updated.id,
        price = updated.coffee_price.as_deref().unwrap_or("<none>"),
        "Cafe price updated"
    );
    Ok(success("Successfully updated the price."))
}

/// DELETE /report-closed/{id}?api-key= - 删除已关闭的咖啡馆
///
/// The row is looked up before the key is checked, so an unknown id is a 404
/// regardless of the key.
pub async fn report_closed(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
    api_key: ApiKey,
) -> AppResult<Json<SuccessResponse>> {
    let id = cafe_id(path)?;

    let closed = cafe::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(AppError::cafe_not_found)?;

    api_key.authorize(&state, "report_closed")?;

    if !cafe::delete(state.pool(), id).await? {
        return Err(AppError::cafe_not_found());
    }

    security_log!("INFO", "cafe_deleted", id = closed.id, name = closed.name.as_str());
    Ok(success("Successfully deleted the cafe from the database."))
}
