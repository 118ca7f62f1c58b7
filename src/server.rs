//! HTTP transport for the GraphQL schema.
//!
//! One route. `POST <path>` executes a document. `GET <path>` executes the
//! document in the query string, unless the client asks for HTML without
//! sending a `query` parameter: then the GraphiQL console is served (when
//! enabled).

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::{FromRequest, Request, State},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerSettings;
use crate::error::Result;
use crate::graphql::BookshelfSchema;

#[derive(Clone)]
struct GraphqlState {
    schema: BookshelfSchema,
    /// Rendered GraphiQL page, `None` when the console is disabled.
    console: Option<Arc<str>>,
}

pub fn graphiql_page(endpoint: &str) -> String {
    GraphiQLSource::build().endpoint(endpoint).finish()
}

pub fn router(schema: BookshelfSchema, settings: &ServerSettings) -> Router {
    let state = GraphqlState {
        schema,
        console: settings
            .graphiql
            .then(|| Arc::from(graphiql_page(&settings.path))),
    };

    Router::new()
        .route(&settings.path, get(graphql_get).post(graphql_post))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn graphql_post(
    State(state): State<GraphqlState>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(request.into_inner()).await.into()
}

async fn graphql_get(State(state): State<GraphqlState>, request: Request) -> Response {
    if let Some(page) = state.console.as_deref() {
        if wants_console(&request) {
            return Html(page.to_owned()).into_response();
        }
    }

    let parsed: std::result::Result<GraphQLRequest, _> =
        GraphQLRequest::from_request(request, &state).await;
    match parsed {
        Ok(request) => {
            let response = state.schema.execute(request.into_inner()).await;
            GraphQLResponse::from(response).into_response()
        }
        Err(rejection) => rejection.into_response(),
    }
}

/// A browser navigating to the endpoint: accepts HTML and sent no document.
fn wants_console(request: &Request) -> bool {
    let has_query = request.uri().query().is_some_and(|qs| {
        qs.split('&')
            .any(|pair| pair.split('=').next() == Some("query"))
    });
    let accepts_html = request
        .headers()
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"));
    accepts_html && !has_query
}

/// Binds `settings.bind_addr()` and serves until Ctrl-C.
pub async fn run_server(schema: BookshelfSchema, settings: &ServerSettings) -> Result<()> {
    let listener = TcpListener::bind(settings.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, path = %settings.path, graphiql = settings.graphiql, "GraphQL server listening");

    axum::serve(listener, router(schema, settings))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
