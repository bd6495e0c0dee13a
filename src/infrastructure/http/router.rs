use crate::infrastructure::http::controllers::{self as api, admin};
use crate::infrastructure::http::middleware::{require_admin, AppState};
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::{self, TraceLayer};
use tracing::Level;

/// Form submissions and admin edits are small JSON documents
const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    // Admin routes (require a valid session cookie)
    let admin_protected = Router::new()
        .route("/session", get(admin::auth::get_session))
        .route(
            "/appointments",
            get(admin::appointments::list_appointments),
        )
        .route(
            "/appointments/:id",
            get(admin::appointments::get_appointment)
                .patch(admin::appointments::update_appointment)
                .delete(admin::appointments::delete_appointment),
        )
        .route("/quotes", get(admin::quotes::list_quotes))
        .route(
            "/quotes/:id",
            get(admin::quotes::get_quote)
                .patch(admin::quotes::update_quote)
                .delete(admin::quotes::delete_quote),
        )
        .route(
            "/availability",
            get(admin::availability::get_availability).put(admin::availability::update_templates),
        )
        .route(
            "/availability/blocked-dates",
            post(admin::availability::create_blocked_date),
        )
        .route(
            "/availability/blocked-dates/:key",
            delete(admin::availability::delete_blocked_date),
        )
        .route(
            "/settings",
            get(admin::settings::get_settings).put(admin::settings::update_settings),
        )
        .route(
            "/content",
            get(admin::content::list_content).put(admin::content::upsert_content),
        )
        .route("/content/:id", delete(admin::content::delete_content))
        .route("/analytics", get(admin::reporting::get_analytics))
        .route("/stats", get(admin::reporting::get_stats))
        .route("/export", get(admin::reporting::export_csv))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ));

    let admin_routes = Router::new()
        .route("/login", post(admin::auth::login))
        .route("/logout", post(admin::auth::logout))
        .merge(admin_protected);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/availability", get(api::availability::get_availability))
        .route(
            "/api/appointments",
            post(api::appointments::create_appointment),
        )
        .route("/api/quotes", post(api::quotes::create_quote))
        .route("/api/analytics/events", post(api::analytics::track_event))
        .route("/api/content/:locale", get(api::content::get_content))
        .nest("/api/admin", admin_routes)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "OK"
}
