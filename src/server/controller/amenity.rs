use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        amenity::{AmenityDto, CreateAmenityDto, PaginatedAmenitiesDto, UpdateAmenityDto},
        api::{ErrorDto, PaginationParams},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::pagination::PageRequest,
        service::amenity::AmenityService,
        state::AppState,
    },
};

/// Tag for grouping amenity endpoints in OpenAPI documentation
pub static AMENITY_TAG: &str = "amenities";

#[utoipa::path(
    get,
    path = "/api/amenity",
    tag = AMENITY_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of amenities", body = PaginatedAmenitiesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_amenities(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let amenities = AmenityService::new(&state.db)
        .get_paginated(PageRequest::new(params.page, params.limit))
        .await?;

    Ok((StatusCode::OK, Json(amenities.into_dto())))
}

/// Create an amenity. The icon is derived from the name.
///
/// # Access Control
/// - `Staff` - Admins and receptionists
#[utoipa::path(
    post,
    path = "/api/amenity/create",
    tag = AMENITY_TAG,
    request_body = CreateAmenityDto,
    responses(
        (status = 201, description = "Amenity created", body = AmenityDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Staff permission required", body = ErrorDto),
        (status = 409, description = "Amenity name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_amenity(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAmenityDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let amenity = AmenityService::new(&state.db)
        .create(&payload.name, payload.description)
        .await?;

    Ok((StatusCode::CREATED, Json(amenity.into_dto())))
}

/// Update an amenity. Renaming re-derives the icon.
///
/// # Access Control
/// - `Staff` - Admins and receptionists
#[utoipa::path(
    put,
    path = "/api/amenity/update/{id}",
    tag = AMENITY_TAG,
    params(
        ("id" = i32, Path, description = "Amenity ID")
    ),
    request_body = UpdateAmenityDto,
    responses(
        (status = 200, description = "Amenity updated", body = AmenityDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Staff permission required", body = ErrorDto),
        (status = 404, description = "Amenity not found", body = ErrorDto),
        (status = 409, description = "Amenity name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_amenity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAmenityDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let amenity = AmenityService::new(&state.db)
        .update(id, payload.name, payload.description)
        .await?;

    Ok((StatusCode::OK, Json(amenity.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/amenity/delete/{id}",
    tag = AMENITY_TAG,
    params(
        ("id" = i32, Path, description = "Amenity ID")
    ),
    responses(
        (status = 204, description = "Amenity deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Staff permission required", body = ErrorDto),
        (status = 404, description = "Amenity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_amenity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    AmenityService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
