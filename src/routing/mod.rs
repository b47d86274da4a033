// Start of file: /src/routing/mod.rs

/*
    * Ordered route tables: Django-style path patterns, first-match
    * resolution and reverse lookup by route name.
*/

pub mod converter;
pub mod error;
pub mod pattern;
pub mod table;

pub use converter::Converter;
pub use error::RouteError;
pub use pattern::RoutePattern;
pub use table::{catch_all, path, ResolvedRoute, RouteEntry, RouteParams, RouteTable};

// End of file: /src/routing/mod.rs
