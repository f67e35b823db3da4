// Request handler module entry point

mod router;
mod routes;

pub use router::{handle_request, RouteTable};
