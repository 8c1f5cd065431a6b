pub mod api;
pub mod config;
pub mod endpoint;
pub mod router;
pub mod server;
pub mod sheet;
pub mod time;
pub mod toggle_definitions;
pub mod toggle_matching;
pub mod toggle_request;

// Integration tests build fixtures from here, so it ships with the lib
// rather than behind cfg(test).
pub mod test_utils;
