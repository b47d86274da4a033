// Start of file: /src/routing/converter.rs

// Path converters for typed route parameters

use std::{fmt, str::FromStr};

use crate::routing::error::RouteError;

/// Typed parameter kinds usable in a pattern placeholder (`<slug:slug>`).
/// None of them accept `/`, so a parameter never spans path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    /// Any non-empty run of characters except `/`
    Str,
    /// ASCII letters, digits, hyphens and underscores
    Slug,
    /// ASCII digits
    Int,
}

impl Converter {
    /// Whether `ch` may appear in a value of this converter
    pub fn accepts_char(self, ch: char) -> bool {
        match self {
            Converter::Str => ch != '/',
            Converter::Slug => ch.is_ascii_alphanumeric() || ch == '-' || ch == '_',
            Converter::Int => ch.is_ascii_digit(),
        }
    }

    /// Whether the whole `value` is a valid, non-empty value for this converter
    pub fn accepts(self, value: &str) -> bool {
        !value.is_empty() && value.chars().all(|ch| self.accepts_char(ch))
    }
}

impl FromStr for Converter {
    type Err = RouteError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "str" => Ok(Converter::Str),
            "slug" => Ok(Converter::Slug),
            "int" => Ok(Converter::Int),
            other => Err(RouteError::InvalidPattern {
                pattern: other.to_string(),
                reason: format!("unknown converter '{other}'"),
            }),
        }
    }
}

impl fmt::Display for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            Converter::Str => "str",
            Converter::Slug => "slug",
            Converter::Int => "int",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_url_safe_identifiers() {
        assert!(Converter::Slug.accepts("my-first-post"));
        assert!(Converter::Slug.accepts("Post_2024"));
        assert!(!Converter::Slug.accepts(""));
        assert!(!Converter::Slug.accepts("two words"));
        assert!(!Converter::Slug.accepts("a/b"));
        assert!(!Converter::Slug.accepts("caf\u{e9}"));
    }

    #[test]
    fn str_rejects_only_slashes() {
        assert!(Converter::Str.accepts("hello world!"));
        assert!(!Converter::Str.accepts("a/b"));
    }

    #[test]
    fn int_accepts_digits_only() {
        assert!(Converter::Int.accepts("2024"));
        assert!(!Converter::Int.accepts("-1"));
    }

    #[test]
    fn parses_known_names() {
        assert_eq!("slug".parse::<Converter>(), Ok(Converter::Slug));
        assert!("uuid".parse::<Converter>().is_err());
        assert_eq!(Converter::Int.to_string(), "int");
    }
}

// End of file: /src/routing/converter.rs
