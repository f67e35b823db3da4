//! Logger module
//!
//! Provides logging utilities for the test backend:
//! - Server lifecycle logging
//! - Per-request access logging in the `[Backend]` format
//! - Error and warning logging

use std::net::SocketAddr;

use hyper::Version;

/// Per-request logging hook, invoked once per request with the client
/// address and the raw request line. The default writes to stdout; tests
/// may install a capturing callback instead.
pub type RequestLogger = Box<dyn Fn(SocketAddr, &str) + Send + Sync>;

/// Default request logger: `[Backend] <client-address> - <request-line>`
pub fn log_request(peer_addr: SocketAddr, request_line: &str) {
    println!("{}", format_backend_line(peer_addr, request_line));
}

/// Format the `[Backend]` access log line
pub fn format_backend_line(peer_addr: SocketAddr, request_line: &str) -> String {
    format!("[Backend] {peer_addr} - {request_line}")
}

/// Reconstruct the request line as `METHOD PATH[?QUERY] HTTP/VERSION`
pub fn format_request_line(method: &hyper::Method, uri: &hyper::Uri, version: Version) -> String {
    let version = match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "HTTP/1.1",
    };
    format!("{method} {uri} {version}")
}

pub fn log_server_start(addr: &SocketAddr) {
    println!("[Backend] Test backend listening on: http://{addr}");
    println!("[Backend]   GET /          (greeting + timestamp)");
    println!("[Backend]   GET /api/data  (fixed item list)");
    println!("[Backend]   GET /health    (health probe)");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}
