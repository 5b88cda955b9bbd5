use axum::{
    Router,
    extract::{Extension, Request},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
};
use opentelemetry::{global, propagation::Extractor};
use tower_http::trace::TraceLayer;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use userdesk_utils::version_info::format_version_for_runtime_env;

use crate::config::Config;
use crate::users::UserSource;

pub mod config;
pub mod telemetry;
pub mod users;

struct HeaderExtractor<'a>(&'a HeaderMap);

impl Extractor for HeaderExtractor<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(|k| k.as_str()).collect()
    }
}

/// All routes of the service, served under `/api`.
pub fn routes<U: UserSource>(source: U, config: Config) -> Router {
    let api = Router::new()
        .route("/is-health", get(health_check))
        .merge(users::users_routes(source));

    Router::new()
        .nest("/api", api)
        .fallback(any(catch_all))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let parent_context = global::get_text_map_propagator(|propagator| {
                    propagator.extract(&HeaderExtractor(request.headers()))
                });

                let span = tracing::info_span!(
                    "http_request",
                    http_request.method = ?request.method(),
                    http_request.uri = ?request.uri(),
                    http_request.version = ?request.version(),
                    http_request.user_agent = ?request.headers().get(axum::http::header::USER_AGENT),
                );
                span.set_parent(parent_context);

                span
            }),
        )
        .layer(Extension(config))
}

fn insert_header(response: &mut Response, name: &'static str, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => {
            response
                .headers_mut()
                .insert(HeaderName::from_static(name), value);
        }
        Err(err) => tracing::warn!(header = name, error = %err, "skipping invalid header value"),
    }
}

async fn health_check(Extension(config): Extension<Config>) -> Response {
    let mut response = (StatusCode::OK, "OK").into_response();

    let env = config.environment();
    insert_header(&mut response, "x-service-env", &env.to_string());
    insert_header(
        &mut response,
        "x-service-version",
        &format_version_for_runtime_env(env.into()),
    );

    response
}

async fn catch_all() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
