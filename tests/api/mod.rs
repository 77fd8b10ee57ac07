//! REST API endpoint tests

mod health_tests;
mod server_tests;
