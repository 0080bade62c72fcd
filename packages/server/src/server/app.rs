//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::common::AdminUser;
use crate::config::Config;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::admin_identity_middleware;
use crate::server::routes::{
    contact_handler, graphql_batch_handler, graphql_handler, graphql_playground, health_handler,
    join_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Acting admin comes from request extensions (populated by admin_identity_middleware)
    let acting_admin = request.extensions().get::<AdminUser>().cloned();

    let context = GraphQLContext::new(state.db_pool.clone(), acting_admin);

    // Add context to request extensions
    request.extensions_mut().insert(context);

    next.run(request).await
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, config: &Config) -> Router {
    // Create GraphQL schema (singleton)
    let schema = Arc::new(create_schema());

    // Create shared app state
    let app_state = AppState {
        db_pool: pool.clone(),
    };

    // CORS configuration: explicit origins when configured, any origin for
    // development
    let cors = if config.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([AUTHORIZATION, CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([AUTHORIZATION, CONTENT_TYPE])
    };

    // Clone pool for the identity middleware closure
    let pool_for_identity = pool.clone();

    // Build router
    let mut router = Router::new()
        // GraphQL endpoints
        .route("/graphql", post(graphql_handler))
        .route("/graphql/batch", post(graphql_batch_handler));

    // GraphQL playground only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        router = router.route("/graphql", get(graphql_playground));
    }

    let mut app = router
        // Health check (no rate limit)
        .route("/health", get(health_handler))
        // Public intake forms
        .route("/join", post(join_handler))
        .route("/contact", post(contact_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(create_graphql_context)) // Create GraphQL context
        .layer(middleware::from_fn(move |req, next| {
            admin_identity_middleware(pool_for_identity.clone(), req, next)
        })); // Resolve forwarded admin identity

    // Rate limiting per client IP; disabled when configured to zero (tests)
    if config.rate_limit_per_second > 0 {
        let rate_limit_config = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(config.rate_limit_per_second)
                .burst_size(config.rate_limit_burst)
                .use_headers() // Extract IP from X-Forwarded-For header
                .finish()
                .expect("Rate limiter configuration is valid and should never fail"),
        );

        app = app.layer(GovernorLayer {
            config: rate_limit_config,
        });
    }

    app
        .layer(Extension(app_state)) // Add shared state (must be after middlewares that need it)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State (schema for GraphQL handlers)
        .with_state(schema)
}
