use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        amenity::{self, AMENITY_TAG},
        auth::{self, AUTH_TAG},
        availability::{self, AVAILABILITY_TAG},
        booking::{self, BOOKING_TAG},
        invitation::{self, INVITATION_TAG},
        room::{self, ROOM_TAG},
        room_type::{self, ROOM_TYPE_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hoterra API",
        description = "Hotel booking backend: availability, bookings, staff and catalog management"
    ),
    tags(
        (name = AVAILABILITY_TAG, description = "Room availability search"),
        (name = BOOKING_TAG, description = "Booking lifecycle"),
        (name = AUTH_TAG, description = "Registration, login and sessions"),
        (name = INVITATION_TAG, description = "Staff invitations"),
        (name = USER_TAG, description = "Account administration"),
        (name = ROOM_TAG, description = "Room catalog"),
        (name = ROOM_TYPE_TAG, description = "Room type catalog"),
        (name = AMENITY_TAG, description = "Amenity catalog"),
    )
)]
struct ApiDoc;

/// Builds the API router and serves the generated OpenAPI document through Swagger UI at
/// `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(availability::get_available))
        .routes(routes!(availability::get_available_by_room_type))
        .routes(routes!(booking::get_bookings))
        .routes(routes!(booking::get_booking))
        .routes(routes!(booking::create_booking))
        .routes(routes!(booking::update_booking_status))
        .routes(routes!(invitation::invite_staff))
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::me))
        .routes(routes!(auth::staff_register))
        .routes(routes!(user::get_users))
        .routes(routes!(user::update_user_status))
        .routes(routes!(room::get_rooms))
        .routes(routes!(room::get_room))
        .routes(routes!(room::create_room))
        .routes(routes!(room::update_room))
        .routes(routes!(room::delete_room))
        .routes(routes!(room_type::get_room_types))
        .routes(routes!(room_type::get_room_type))
        .routes(routes!(room_type::create_room_type))
        .routes(routes!(room_type::update_room_type))
        .routes(routes!(room_type::delete_room_type))
        .routes(routes!(amenity::get_amenities))
        .routes(routes!(amenity::create_amenity))
        .routes(routes!(amenity::update_amenity))
        .routes(routes!(amenity::delete_amenity))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
