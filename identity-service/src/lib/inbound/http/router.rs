use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate::authenticate;
use super::handlers::create_user::create_user;
use super::handlers::get_current_user::get_current_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::service::UserService;

pub struct AppState<UR: UserRepository> {
    pub user_service: Arc<UserService<UR>>,
    pub token_issuer: Arc<TokenIssuer>,
    pub token_ttl_minutes: i64,
}

impl<UR: UserRepository> Clone for AppState<UR> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            token_issuer: Arc::clone(&self.token_issuer),
            token_ttl_minutes: self.token_ttl_minutes,
        }
    }
}

pub fn create_router<UR: UserRepository>(
    user_service: Arc<UserService<UR>>,
    token_issuer: Arc<TokenIssuer>,
    token_ttl_minutes: i64,
) -> Router {
    let state = AppState {
        user_service,
        token_issuer,
        token_ttl_minutes,
    };

    let public_routes = Router::new()
        .route("/api/users", post(create_user::<UR>))
        .route("/api/auth/token", post(authenticate::<UR>));

    let protected_routes = Router::new()
        .route("/api/users/me", get(get_current_user::<UR>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<UR>,
        ));

    // Bearer tokens travel in headers, so spans record method and uri only
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
