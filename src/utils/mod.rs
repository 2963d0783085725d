// URL handling utilities
pub mod url_encoding;
pub mod url_parser;
pub mod url_builder;

// JSON utilities
pub mod json_converter;

// Timing
pub mod debounce;

// Re-export all utilities for convenient access
pub use url_encoding::path_segment;
pub use url_parser::{hostname_from_url, host_without_port};
pub use url_builder::app_url;
pub use json_converter::{value_to_short_string, port_string};
pub use debounce::Debouncer;
