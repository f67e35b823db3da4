//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: logs the request line, matches
//! the path against the fixed route table, and builds the response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use super::routes;
use crate::config::AppState;
use crate::http;
use crate::logger;

/// A route handler produces the full response for its path
type RouteHandler = fn() -> Response<Full<Bytes>>;

/// Immutable mapping from exact path to handler, built once at startup.
/// Exact string match only; no prefix or pattern matching.
pub struct RouteTable {
    routes: HashMap<&'static str, RouteHandler>,
}

impl RouteTable {
    pub fn new() -> Self {
        let mut table: HashMap<&'static str, RouteHandler> = HashMap::new();
        table.insert("/", || http::build_json_response(&routes::root()));
        table.insert("/api/data", || {
            http::build_json_response(&routes::api_data())
        });
        table.insert("/health", || http::build_json_response(&routes::health()));
        Self { routes: table }
    }

    /// Look up the handler for an exact path
    pub fn get(&self, path: &str) -> Option<RouteHandler> {
        self.routes.get(path).copied()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Main entry point for HTTP request handling.
///
/// Every request is logged, matched or not. Only GET requests can match a
/// route; anything else short-circuits to 404 with an empty body.
pub fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    if state.config.logging.access_log {
        let request_line = logger::format_request_line(req.method(), req.uri(), req.version());
        (state.request_log)(peer_addr, &request_line);
    }

    Ok(dispatch(req.method(), req.uri().path(), &state))
}

/// Match method and path against the route table
fn dispatch(method: &Method, path: &str, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    if *method != Method::GET {
        return http::build_404_response();
    }

    match state.routes.get(path) {
        Some(handler) => handler(),
        None => http::build_404_response(),
    }
}
