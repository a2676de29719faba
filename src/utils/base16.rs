//! Hex digits, as Base 16 of [RFC 4648].
//!
//! Digests are shown in lower case. Decoding accepts either case.
//!
//! [RFC 4648]: https://tools.ietf.org/html/rfc4648

use core::fmt;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Writes `octets` as hex digits.
pub fn display<W: fmt::Write>(octets: &[u8], f: &mut W) -> fmt::Result {
    for &octet in octets {
        f.write_char(char::from(DIGITS[usize::from(octet >> 4)]))?;
        f.write_char(char::from(DIGITS[usize::from(octet & 0x0f)]))?;
    }
    Ok(())
}

pub fn encode_string<B: AsRef<[u8]> + ?Sized>(octets: &B) -> String {
    let mut res = String::with_capacity(octets.as_ref().len() * 2);
    // Writing to a string never fails.
    let _ = display(octets.as_ref(), &mut res);
    res
}

/// Returns a value that displays `octets` as hex digits.
pub fn encode_display<B: AsRef<[u8]> + ?Sized>(
    octets: &B,
) -> impl fmt::Display + '_ {
    struct Hex<'a>(&'a [u8]);

    impl<'a> fmt::Display for Hex<'a> {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            display(self.0, f)
        }
    }

    Hex(octets.as_ref())
}

/// Decodes a sequence of hex digits.
///
/// Every character must be a digit. Callers that allow white space between
/// words filter it out first.
pub fn decode_chars<I>(chars: I) -> Result<Vec<u8>, DecodeError>
where
    I: IntoIterator<Item = char>,
{
    let mut res = Vec::new();
    let mut high = None;
    for ch in chars {
        let nibble = ch.to_digit(16).ok_or(DecodeError::IllegalChar(ch))?;
        // A hex digit is below 16.
        let nibble = nibble as u8;
        match high.take() {
            Some(high) => res.push(high << 4 | nibble),
            None => high = Some(nibble),
        }
    }
    match high {
        Some(_) => Err(DecodeError::ShortInput),
        None => Ok(res),
    }
}

pub fn decode_vec(s: &str) -> Result<Vec<u8>, DecodeError> {
    decode_chars(s.chars())
}

//------------ DecodeError ---------------------------------------------------

/// Hex data was malformed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    IllegalChar(char),

    /// An odd number of digits.
    ShortInput,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::IllegalChar(ch) => {
                write!(f, "illegal hex character {:?}", ch)
            }
            DecodeError::ShortInput => f.write_str("odd number of hex digits"),
        }
    }
}

impl std::error::Error for DecodeError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode() {
        assert_eq!(decode_vec("").unwrap(), b"");
        assert_eq!(decode_vec("F00f").unwrap(), b"\xf0\x0f");
        assert_eq!(decode_vec("F0F"), Err(DecodeError::ShortInput));
        assert_eq!(decode_vec("F0 0F"), Err(DecodeError::IllegalChar(' ')));
        assert_eq!(
            decode_chars("F0 0F".chars().filter(|ch| *ch != ' ')).unwrap(),
            b"\xf0\x0f"
        );
    }

    #[test]
    fn encode() {
        assert_eq!(encode_string(b""), "");
        assert_eq!(encode_string(b"\xf0\x0f\xab"), "f00fab");
        assert_eq!(encode_display(b"\xC6\x80").to_string(), "c680");
    }
}
