//! Reading names from their presentation format.

use super::{MAX_LABEL_LEN, MAX_NAME_LEN};
use core::fmt;
use core::str::Chars;

/// Converts a name in presentation format into its wire format.
///
/// A missing final dot is tolerated: the result is always absolute.
pub(super) fn wire_from_str(s: &str) -> Result<Vec<u8>, FromStrError> {
    if s.is_empty() {
        return Err(FromStrError::Empty);
    }
    if s == "." {
        return Ok(vec![0]);
    }
    let mut wire = Vec::with_capacity(s.len() + 2);
    let mut start = 0;
    wire.push(0);
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        let octet = match ch {
            '.' => {
                close_label(&mut wire, start)?;
                start = wire.len();
                wire.push(0);
                continue;
            }
            '\\' => unescape(&mut chars)?,
            ' '..='~' => ch as u8,
            _ => return Err(FromStrError::IllegalCharacter(ch)),
        };
        if wire.len() - start > MAX_LABEL_LEN {
            return Err(FromStrError::LongLabel);
        }
        wire.push(octet);
    }
    if wire.len() - start > 1 {
        close_label(&mut wire, start)?;
        wire.push(0);
    }
    if wire.len() > MAX_NAME_LEN {
        return Err(FromStrError::LongName);
    }
    Ok(wire)
}

/// Writes the length octet of the label starting at `start`.
fn close_label(wire: &mut [u8], start: usize) -> Result<(), FromStrError> {
    match wire.len() - start - 1 {
        0 => Err(FromStrError::EmptyLabel),
        // Checked against MAX_LABEL_LEN while pushing.
        len => {
            wire[start] = len as u8;
            Ok(())
        }
    }
}

/// Reads what follows a backslash: either one character or three digits.
fn unescape(chars: &mut Chars) -> Result<u8, FromStrError> {
    let ch = chars.next().ok_or(FromStrError::UnexpectedEnd)?;
    let Some(first) = ch.to_digit(10) else {
        return match ch {
            ' '..='~' => Ok(ch as u8),
            _ => Err(FromStrError::IllegalEscape),
        };
    };
    let mut value = first;
    for _ in 0..2 {
        let digit = chars
            .next()
            .and_then(|ch| ch.to_digit(10))
            .ok_or(FromStrError::IllegalEscape)?;
        value = value * 10 + digit;
    }
    u8::try_from(value).map_err(|_| FromStrError::IllegalEscape)
}

//------------ FromStrError --------------------------------------------------

/// A string was not a valid domain name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FromStrError {
    Empty,
    EmptyLabel,
    LongLabel,
    LongName,
    IllegalEscape,
    IllegalCharacter(char),
    UnexpectedEnd,
}

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FromStrError::Empty => f.write_str("empty domain name"),
            FromStrError::EmptyLabel => f.write_str("empty label"),
            FromStrError::LongLabel => f.write_str("label too long"),
            FromStrError::LongName => f.write_str("domain name too long"),
            FromStrError::IllegalEscape => f.write_str("illegal escape"),
            FromStrError::IllegalCharacter(ch) => {
                write!(f, "illegal character {:?}", ch)
            }
            FromStrError::UnexpectedEnd => {
                f.write_str("unexpected end of input")
            }
        }
    }
}

impl std::error::Error for FromStrError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn presentation_format() {
        assert_eq!(
            wire_from_str("www.example"),
            wire_from_str("www.example.")
        );
        assert_eq!(
            wire_from_str("www.example.").unwrap(),
            b"\x03www\x07example\0"
        );
        assert_eq!(wire_from_str(".").unwrap(), b"\0");
        assert_eq!(wire_from_str("a\\.b.c").unwrap(), b"\x03a.b\x01c\0");
        assert_eq!(wire_from_str("\\065.c").unwrap(), b"\x01A\x01c\0");
    }

    #[test]
    fn malformed() {
        assert_eq!(wire_from_str(""), Err(FromStrError::Empty));
        assert_eq!(wire_from_str("a..b"), Err(FromStrError::EmptyLabel));
        assert_eq!(wire_from_str(".a"), Err(FromStrError::EmptyLabel));
        assert_eq!(
            wire_from_str(&"a".repeat(64)),
            Err(FromStrError::LongLabel)
        );
        assert!(wire_from_str(&"a".repeat(63)).is_ok());
        assert_eq!(
            wire_from_str(&["a".repeat(63).as_str(); 4].join(".")),
            Err(FromStrError::LongName)
        );
        assert_eq!(wire_from_str("a\\2"), Err(FromStrError::IllegalEscape));
        assert_eq!(
            wire_from_str("a\\256"),
            Err(FromStrError::IllegalEscape)
        );
        assert_eq!(wire_from_str("a\\"), Err(FromStrError::UnexpectedEnd));
        assert_eq!(
            wire_from_str("a\u{e4}"),
            Err(FromStrError::IllegalCharacter('\u{e4}'))
        );
    }
}
