//! Inline `style` attribute handling.
//!
//! An [`InlineStyle`] keeps declarations in source order so that writing the
//! text back out is stable. `display` is the only property with a typed
//! accessor; everything else is kept verbatim.

use std::fmt;

use nom::{
    IResult,
    bytes::complete::take_till,
    character::complete::{char, multispace0},
    combinator::opt,
    multi::many0,
    sequence::tuple,
};

use crate::display::{Display, parse_ident};
use crate::error::{DomError, Result};

/// Ordered `property: value` declarations of an element's inline style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse style attribute text such as `"display: flex; color: red"`.
    ///
    /// A `display` declaration with an unknown keyword is dropped, the same
    /// way a browser ignores an invalid assignment.
    pub fn parse(text: &str) -> Result<Self> {
        let (rest, declarations) =
            many0(parse_declaration)(text).map_err(|e| DomError::InvalidStyle(e.to_string()))?;

        if !rest.trim().is_empty() {
            return Err(DomError::InvalidStyle(format!(
                "unexpected text after declarations: {}",
                rest.trim()
            )));
        }

        let mut style = InlineStyle::new();
        for (property, value) in declarations {
            if value.is_empty() {
                continue;
            }
            if property.eq_ignore_ascii_case("display") && value.parse::<Display>().is_err() {
                log::debug!("Dropping invalid inline display value: {}", value);
                continue;
            }
            style.set(property, value);
        }
        Ok(style)
    }

    /// Get the raw value of a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(property))
            .map(|(_, value)| value.as_str())
    }

    /// Set a property, replacing an existing declaration in place.
    pub fn set(&mut self, property: &str, value: &str) {
        match self
            .declarations
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(property))
        {
            Some(slot) => slot.1 = value.to_string(),
            None => self
                .declarations
                .push((property.to_ascii_lowercase(), value.to_string())),
        }
    }

    /// Remove a property. Returns true if it was present.
    pub fn remove(&mut self, property: &str) -> bool {
        let before = self.declarations.len();
        self.declarations
            .retain(|(name, _)| !name.eq_ignore_ascii_case(property));
        self.declarations.len() != before
    }

    /// The inline `display` value, or `None` when it was never set.
    pub fn display(&self) -> Option<Display> {
        self.get("display").and_then(|value| value.parse().ok())
    }

    pub fn set_display(&mut self, display: Display) {
        self.set("display", display.as_str());
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", property, value)?;
        }
        Ok(())
    }
}

fn parse_declaration(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = multispace0(input)?;
    let (input, property) = parse_ident(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;
    let (input, value) = take_till(|c| c == ';')(input)?;
    let (input, _) = opt(char(';'))(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, (property, value.trim())))
}
