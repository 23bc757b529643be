use crate::types::DelimiterError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The single-byte field separator used when splitting uploaded lines.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Delimiter(u8);

impl Delimiter {
    pub const COMMA: Delimiter = Delimiter(b',');

    pub fn as_byte(&self) -> u8 {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::COMMA
    }
}

impl TryFrom<char> for Delimiter {
    type Error = DelimiterError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        if value == '\n' || value == '\r' {
            return Err(DelimiterError::LineTerminator);
        }

        if value.is_ascii() {
            Ok(Delimiter(value as u8))
        } else {
            Err(DelimiterError::NotSingleByte(value.to_string()))
        }
    }
}

impl FromStr for Delimiter {
    type Err = DelimiterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "\\t" || value.eq_ignore_ascii_case("tab") {
            return Ok(Delimiter(b'\t'));
        }

        let mut chars = value.chars();

        match (chars.next(), chars.next()) {
            (Some(single), None) => Delimiter::try_from(single),
            _ => Err(DelimiterError::NotSingleByte(value.to_string()))
        }
    }
}

impl Display for Delimiter {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0 as char)
    }
}
