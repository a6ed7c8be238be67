use async_graphql::http::{GraphiQLSource, parse_query_string};
use async_graphql::parser::{
    parse_query,
    types::{DocumentOperations, OperationType},
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Json, Router,
    extract::{RawQuery, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerSettings;
use crate::error::{BookshelfError, Result};

use super::BookshelfSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Clone)]
struct ServerState {
    schema: BookshelfSchema,
    graphiql: bool,
}

/// Build the router: a single `/graphql` route and nothing else.
///
/// `POST` always executes. `GET` executes queries carried in the query
/// string, refuses mutations with 405, and with no `query` parameter serves
/// GraphiQL if enabled (400 otherwise).
pub fn router(schema: BookshelfSchema, graphiql: bool) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
        .layer(TraceLayer::new_for_http())
        .with_state(ServerState { schema, graphiql })
}

async fn graphql_post(State(state): State<ServerState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

async fn graphql_get(State(state): State<ServerState>, RawQuery(raw): RawQuery) -> Response {
    let raw = raw.unwrap_or_default();
    if !has_query_param(&raw) {
        if state.graphiql {
            return Html(
                GraphiQLSource::build()
                    .endpoint(GRAPHQL_PATH)
                    .title("bookshelf")
                    .finish(),
            )
            .into_response();
        }
        return error_response(StatusCode::BAD_REQUEST, "Must provide query string.");
    }

    let request = match parse_query_string(&raw) {
        Ok(request) => request,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    let kind = match operation_type(&request.query, request.operation_name.as_deref()) {
        Some(OperationType::Mutation) => Some("mutation"),
        Some(OperationType::Subscription) => Some("subscription"),
        _ => None,
    };
    if let Some(kind) = kind {
        let mut response = error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            &format!("Can only perform a {} operation from a POST request.", kind),
        );
        response
            .headers_mut()
            .insert(header::ALLOW, header::HeaderValue::from_static("POST"));
        return response;
    }

    GraphQLResponse::from(state.schema.execute(request).await).into_response()
}

fn has_query_param(raw: &str) -> bool {
    raw.split('&')
        .any(|pair| pair.split('=').next() == Some("query"))
}

/// Type of the operation `operation_name` selects, if the document parses
/// and the selection is unambiguous. Anything else is left to execution to
/// report.
fn operation_type(query: &str, operation_name: Option<&str>) -> Option<OperationType> {
    let document = parse_query(query).ok()?;
    match document.operations {
        DocumentOperations::Single(operation) => Some(operation.node.ty),
        DocumentOperations::Multiple(operations) => {
            let name = operation_name?;
            operations
                .iter()
                .find(|(op_name, _)| op_name.as_str() == name)
                .map(|(_, operation)| operation.node.ty)
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = serde_json::json!({ "errors": [{ "message": message }] });
    (status, Json(body)).into_response()
}

/// Bind the configured address. Failure here is fatal to `serve`.
pub async fn bind(settings: &ServerSettings) -> Result<TcpListener> {
    let addr = settings.socket_addr()?;
    TcpListener::bind(addr)
        .await
        .map_err(|source| BookshelfError::Bind { addr, source })
}

/// Serve `schema` on an already bound listener until Ctrl-C.
pub async fn run_server(
    schema: BookshelfSchema,
    listener: TcpListener,
    graphiql: bool,
) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, graphiql, "Server listening");

    axum::serve(listener, router(schema, graphiql))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
