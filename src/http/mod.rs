// HTTP module entry point
// Response builders decoupled from route business logic

pub mod response;

pub use response::{build_404_response, build_json_response};
