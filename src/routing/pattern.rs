// Start of file: /src/routing/pattern.rs

// Path patterns in `articles/<slug:slug>` syntax

use std::fmt;

use crate::routing::{converter::Converter, error::RouteError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Param { name: String, converter: Converter },
}

/// A compiled route pattern.
///
/// Patterns are written relative to the application root, without a leading
/// slash, and must match the whole path: the empty pattern only matches the
/// root. [`RoutePattern::catch_all`] builds the one pattern that matches every
/// path; it belongs at the end of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    parts: Vec<Part>,
    catch_all: bool,
}

impl RoutePattern {
    pub fn parse(source: &str) -> Result<Self, RouteError> {
        let invalid = |reason: String| RouteError::InvalidPattern {
            pattern: source.to_string(),
            reason,
        };

        let mut parts: Vec<Part> = Vec::new();
        let mut literal: String = String::new();
        let mut rest: &str = source;

        while let Some(ch) = rest.chars().next() {
            match ch {
                '<' => {
                    let close: usize = rest
                        .find('>')
                        .ok_or_else(|| invalid("unterminated '<' placeholder".to_string()))?;
                    let spec: &str = &rest[1..close];

                    let (converter, name) = match spec.split_once(':') {
                        Some((conv, name)) => (conv.parse::<Converter>().map_err(|_| {
                            invalid(format!("unknown converter '{conv}'"))
                        })?, name),
                        None => (Converter::Str, spec),
                    };

                    if !is_identifier(name) {
                        return Err(invalid(format!("'{name}' is not a valid parameter name")));
                    }
                    if parts.iter().any(|p| matches!(p, Part::Param { name: n, .. } if n == name)) {
                        return Err(invalid(format!("parameter '{name}' is declared twice")));
                    }

                    if !literal.is_empty() {
                        parts.push(Part::Literal(std::mem::take(&mut literal)));
                    }
                    parts.push(Part::Param {
                        name: name.to_string(),
                        converter,
                    });
                    rest = &rest[close + 1..];
                }
                '>' => return Err(invalid("unbalanced '>'".to_string())),
                _ => {
                    literal.push(ch);
                    rest = &rest[ch.len_utf8()..];
                }
            }
        }

        if !literal.is_empty() {
            parts.push(Part::Literal(literal));
        }

        if matches!(parts.first(), Some(Part::Literal(l)) if l.starts_with('/')) {
            return Err(invalid("patterns are relative and must not start with '/'".to_string()));
        }

        Ok(Self {
            source: source.to_string(),
            parts,
            catch_all: false,
        })
    }

    /// Matches any path and reverses to the root
    pub fn catch_all() -> Self {
        Self {
            source: String::new(),
            parts: Vec::new(),
            catch_all: true,
        }
    }

    pub fn is_catch_all(&self) -> bool {
        self.catch_all
    }

    /// Parameter names in declaration order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|part| match part {
            Part::Param { name, .. } => Some(name.as_str()),
            Part::Literal(_) => None,
        })
    }

    /// Matches `path` (already stripped of its leading slash) and returns the
    /// extracted parameters, or `None` when the pattern does not apply.
    pub fn matches(&self, path: &str) -> Option<Vec<(String, String)>> {
        if self.is_catch_all() {
            return Some(Vec::new());
        }

        let mut captured: Vec<(String, String)> = Vec::new();
        match_parts(&self.parts, path, &mut captured).then_some(captured)
    }

    /// Renders the pattern back into a relative path. Every declared
    /// parameter must be supplied, valid for its converter, and nothing else
    /// may be passed.
    pub fn render(&self, route: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        if let Some((extra, _)) = params
            .iter()
            .find(|(key, _)| !self.param_names().any(|name| name == *key))
        {
            return Err(RouteError::UnexpectedParameter {
                route: route.to_string(),
                param: extra.to_string(),
            });
        }

        let mut rendered: String = String::new();
        for part in &self.parts {
            match part {
                Part::Literal(text) => rendered.push_str(text),
                Part::Param { name, converter } => {
                    let value: &str = params
                        .iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| RouteError::MissingParameter {
                            route: route.to_string(),
                            param: name.clone(),
                        })?;

                    if !converter.accepts(value) {
                        return Err(RouteError::InvalidParameter {
                            route: route.to_string(),
                            param: name.clone(),
                            value: value.to_string(),
                        });
                    }
                    rendered.push_str(value);
                }
            }
        }

        Ok(rendered)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        }
        _ => false,
    }
}

// Backtracks over parameter lengths, longest first, so a parameter followed
// by a literal it could also consume (`<slug:a>-<slug:b>`) still matches.
fn match_parts(parts: &[Part], input: &str, captured: &mut Vec<(String, String)>) -> bool {
    let Some((part, remaining)) = parts.split_first() else {
        return input.is_empty();
    };

    match part {
        Part::Literal(text) => input
            .strip_prefix(text.as_str())
            .is_some_and(|rest| match_parts(remaining, rest, captured)),
        Part::Param { name, converter } => {
            let run: usize = input
                .char_indices()
                .find(|(_, ch)| !converter.accepts_char(*ch))
                .map(|(index, _)| index)
                .unwrap_or(input.len());

            let ends: Vec<usize> = input[..run]
                .char_indices()
                .map(|(index, ch)| index + ch.len_utf8())
                .collect();

            for end in ends.into_iter().rev() {
                captured.push((name.clone(), input[..end].to_string()));
                if match_parts(remaining, &input[end..], captured) {
                    return true;
                }
                captured.pop();
            }
            false
        }
    }
}


// End of file: /src/routing/pattern.rs
