//! The CSS `display` property.
//!
//! Only the keyword form is supported. Visibility toggling needs two things
//! from it: the `none` keyword, and whatever "on" value a section uses when
//! shown (`block` for plain blocks, `flex` for flex rows, and so on).
//!
//! ```rust
//! use domkit::Display;
//!
//! let display: Display = "inline-flex".parse().unwrap();
//! assert_eq!(display, Display::InlineFlex);
//! assert_eq!(display.to_string(), "inline-flex");
//! ```

use std::fmt;
use std::str::FromStr;

use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::multispace0,
    sequence::delimited,
};

use crate::error::DomError;

/// Controls whether an element is rendered and how it lays out its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Display {
    /// Element is not rendered and takes no space.
    None,
    /// Block-level box (default for sections and popups).
    #[default]
    Block,
    Inline,
    InlineBlock,
    Flex,
    InlineFlex,
    Grid,
    InlineGrid,
    /// The element's box is replaced by its children's boxes.
    Contents,
    Table,
    ListItem,
}

impl Display {
    /// The keyword as written in CSS.
    pub fn as_str(&self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
            Display::Inline => "inline",
            Display::InlineBlock => "inline-block",
            Display::Flex => "flex",
            Display::InlineFlex => "inline-flex",
            Display::Grid => "grid",
            Display::InlineGrid => "inline-grid",
            Display::Contents => "contents",
            Display::Table => "table",
            Display::ListItem => "list-item",
        }
    }

    /// Returns true for every keyword except `none`.
    pub fn is_rendered(&self) -> bool {
        *self != Display::None
    }

    fn from_keyword(keyword: &str) -> Option<Self> {
        let display = match keyword.to_ascii_lowercase().as_str() {
            "none" => Display::None,
            "block" => Display::Block,
            "inline" => Display::Inline,
            "inline-block" => Display::InlineBlock,
            "flex" => Display::Flex,
            "inline-flex" => Display::InlineFlex,
            "grid" => Display::Grid,
            "inline-grid" => Display::InlineGrid,
            "contents" => Display::Contents,
            "table" => Display::Table,
            "list-item" => Display::ListItem,
            _ => return None,
        };
        Some(display)
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Display {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_display(s) {
            Ok((rest, display)) if rest.is_empty() => Ok(display),
            _ => Err(DomError::UnknownDisplay(s.trim().to_string())),
        }
    }
}

/// Parses a CSS identifier (alphanumeric characters, dashes, and underscores).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Parse a display keyword, ignoring surrounding whitespace.
pub fn parse_display(input: &str) -> IResult<&str, Display> {
    let (rest, ident) = delimited(multispace0, parse_ident, multispace0)(input)?;
    match Display::from_keyword(ident) {
        Some(display) => Ok((rest, display)),
        None => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keywords_case_insensitively() {
        assert_eq!("FLEX".parse::<Display>(), Ok(Display::Flex));
        assert_eq!(" none ".parse::<Display>(), Ok(Display::None));
        assert_eq!("List-Item".parse::<Display>(), Ok(Display::ListItem));
    }

    #[test]
    fn rejects_unknown_keywords() {
        assert_eq!(
            "flexbox".parse::<Display>(),
            Err(DomError::UnknownDisplay("flexbox".to_string()))
        );
        assert!("".parse::<Display>().is_err());
        assert!("flex grid".parse::<Display>().is_err());
    }

    #[test]
    fn only_none_is_not_rendered() {
        assert!(!Display::None.is_rendered());
        assert!(Display::Flex.is_rendered());
        assert!(Display::default().is_rendered());
    }
}
