// Application state module
// Immutable per-process state shared across connections

use super::types::Config;
use crate::handler::RouteTable;
use crate::logger::{self, RequestLogger};

/// Application state.
///
/// Everything here is built once at startup and never mutated; requests are
/// stateless, so no locking is needed.
pub struct AppState {
    pub config: Config,
    pub routes: RouteTable,
    pub request_log: RequestLogger,
}

impl AppState {
    /// Create `AppState` with the default stdout request logger
    pub fn new(config: Config) -> Self {
        Self::with_request_logger(config, Box::new(logger::log_request))
    }

    /// Create `AppState` with a custom request-log callback.
    /// Tests install a capturing callback here.
    pub fn with_request_logger(config: Config, request_log: RequestLogger) -> Self {
        Self {
            config,
            routes: RouteTable::new(),
            request_log,
        }
    }
}
