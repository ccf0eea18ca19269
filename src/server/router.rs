use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, attendance, auth, event, organization, registration},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Event Desk API", description = "Organization event management"),
    tags(
        (name = "organization", description = "Organizations and their admin accounts"),
        (name = "auth", description = "Registration, login and sessions"),
        (name = "admin", description = "Dashboard, user approval and event moderation"),
        (name = "event", description = "Event submission and listing"),
        (name = "registration", description = "Event registrations and QR codes"),
        (name = "attendance", description = "QR check-in"),
    )
)]
struct ApiDoc;

/// Builds every API route plus Swagger UI at `/api/docs`.
///
/// The caller supplies state and the session layer.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            organization::list_organizations,
            organization::create_organization
        ))
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(admin::get_dashboard_stats))
        .routes(routes!(admin::get_users))
        .routes(routes!(admin::approve_event))
        .routes(routes!(admin::reject_event))
        .routes(routes!(admin::approve_organizer))
        .routes(routes!(admin::reject_organizer))
        .routes(routes!(admin::toggle_user_status))
        .routes(routes!(event::get_events, event::create_event))
        .routes(routes!(event::get_upcoming_events))
        .routes(routes!(registration::get_event_registrations))
        .routes(routes!(registration::register_for_event))
        .routes(routes!(registration::get_user_registrations))
        .routes(routes!(attendance::verify_qr))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(CorsLayer::permissive())
}
