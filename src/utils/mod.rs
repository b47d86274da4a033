// Start of file: /src/utils/mod.rs

/*
    * Cross-cutting helpers: global error handling, the unified response
    * envelope and JSON formatting.
*/

pub mod error_handler;
pub mod json;
pub mod response_handler;

// End of file: /src/utils/mod.rs
