// Start of file: /src/routing/table.rs

// Ordered route table with first-match resolution and reverse lookup

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::routing::{error::RouteError, pattern::RoutePattern};

/// One `(pattern, handler, name)` binding
#[derive(Debug, Clone)]
pub struct RouteEntry<H> {
    pub pattern: RoutePattern,
    pub handler: H,
    pub name: String,
}

/// Builds a route entry from pattern source text
pub fn path<H>(pattern: &str, handler: H, name: &str) -> Result<RouteEntry<H>, RouteError> {
    Ok(RouteEntry {
        pattern: RoutePattern::parse(pattern)?,
        handler,
        name: name.to_string(),
    })
}

/// Builds an entry that matches every path; declare it last
pub fn catch_all<H>(handler: H, name: &str) -> RouteEntry<H> {
    RouteEntry {
        pattern: RoutePattern::catch_all(),
        handler,
        name: name.to_string(),
    }
}

/// Parameters extracted by a matched pattern, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(String, String)>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute<'a, H> {
    pub name: &'a str,
    pub handler: &'a H,
    pub params: RouteParams,
}

/// Immutable, ordered list of routes. Built once at startup and only read
/// afterwards, so it can be shared freely between request tasks.
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    entries: Vec<RouteEntry<H>>,
}

impl<H> RouteTable<H> {
    /// Validates the entries and freezes their order.
    ///
    /// Route names must be unique. A catch-all declared before other entries
    /// is accepted but logged, since every later entry becomes unreachable.
    pub fn new(entries: Vec<RouteEntry<H>>) -> Result<Self, RouteError> {
        let mut names: HashSet<&str> = HashSet::new();
        for entry in &entries {
            if !names.insert(entry.name.as_str()) {
                return Err(RouteError::DuplicateName(entry.name.clone()));
            }
        }

        if let Some(position) = entries.iter().position(|entry| entry.pattern.is_catch_all()) {
            let shadowed: Vec<&str> = entries[position + 1..]
                .iter()
                .map(|entry| entry.name.as_str())
                .collect();

            if !shadowed.is_empty() {
                warn!(
                    "Catch-all route '{}' is declared before {:?}; those routes can never match",
                    entries[position].name, shadowed
                );
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RouteEntry<H>] {
        &self.entries
    }

    /// Resolves a request path to the first matching entry.
    ///
    /// The path must start with `/`; it is stripped before patterns are tried.
    pub fn resolve(&self, request_path: &str) -> Result<ResolvedRoute<'_, H>, RouteError> {
        let relative: &str = request_path
            .strip_prefix('/')
            .ok_or_else(|| RouteError::NotFound(request_path.to_string()))?;

        for entry in &self.entries {
            if let Some(captured) = entry.pattern.matches(relative) {
                debug!("Path '{}' resolved to route '{}'", request_path, entry.name);
                return Ok(ResolvedRoute {
                    name: &entry.name,
                    handler: &entry.handler,
                    params: RouteParams(captured),
                });
            }
        }

        debug!("Path '{}' matched no route", request_path);
        Err(RouteError::NotFound(request_path.to_string()))
    }

    /// Builds the absolute path for the named route
    pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let entry: &RouteEntry<H> = self
            .entries
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| RouteError::NoReverseMatch(name.to_string()))?;

        let rendered: String = entry.pattern.render(name, params)?;
        Ok(format!("/{rendered}"))
    }
}


// End of file: /src/routing/table.rs
