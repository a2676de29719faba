//! The name type.

use super::label::{fmt_label, Labels};
use super::text::{wire_from_str, FromStrError};
use super::traits::ToName;
use super::{MAX_LABEL_LEN, MAX_NAME_LEN};
use crate::base::wire::{FormError, ParseError};
use bytes::Bytes;
use core::{cmp, fmt, str};
use octseq::octets::Octets;
use octseq::parse::Parser;

//------------ Name ----------------------------------------------------------

/// An uncompressed absolute domain name.
///
/// The name is kept in wire format atop an octets sequence. The content is
/// checked on creation so that the type always holds a well-formed name.
///
/// Equality and ordering ignore ASCII case. Ordering follows the canonical
/// name order of DNSSEC, comparing labels from the root down.
#[derive(Clone)]
pub struct Name<Octs>(Octs);

impl<Octs: AsRef<[u8]>> Name<Octs> {
    /// Creates a name from wire format octets.
    ///
    /// The octets must contain exactly one absolute, uncompressed name.
    pub fn from_octets(octets: Octs) -> Result<Self, NameError> {
        let len = wire_len(octets.as_ref())?;
        if len != octets.as_ref().len() {
            return Err(NameError::TrailingData);
        }
        Ok(Name(octets))
    }

    /// Wraps octets that are known to be a valid name.
    pub(crate) fn from_octets_unchecked(octets: Octs) -> Self {
        Name(octets)
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.as_slice() == b"\0"
    }

    pub fn label_count(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Labels<'_> {
        Labels::new(self.as_slice())
    }
}

impl<Octs> Name<Octs> {
    /// Takes a name from the front of a parser.
    pub fn parse<'a, Src: Octets<Range<'a> = Octs> + ?Sized>(
        parser: &mut Parser<'a, Src>,
    ) -> Result<Self, ParseError> {
        let len = wire_len(parser.peek_all())?;
        Ok(Name(parser.parse_octets(len)?))
    }
}

impl Name<Bytes> {
    pub fn bytes_from_str(s: &str) -> Result<Self, FromStrError> {
        wire_from_str(s).map(|wire| Name(wire.into()))
    }
}

impl Name<Vec<u8>> {
    pub fn vec_from_str(s: &str) -> Result<Self, FromStrError> {
        wire_from_str(s).map(Name)
    }
}

/// Returns the length of the name at the start of `wire`.
fn wire_len(wire: &[u8]) -> Result<usize, NameError> {
    let mut pos = 0;
    loop {
        let len = usize::from(*wire.get(pos).ok_or(NameError::ShortInput)?);
        if len > MAX_LABEL_LEN {
            // Compression pointers and the extended label types alike.
            return Err(NameError::BadLabel);
        }
        pos += 1 + len;
        if pos > MAX_NAME_LEN {
            return Err(NameError::LongName);
        }
        if len == 0 {
            return Ok(pos);
        }
    }
}

//--- FromStr

impl<Octs: From<Vec<u8>>> str::FromStr for Name<Octs> {
    type Err = FromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        wire_from_str(s).map(|wire| Name(wire.into()))
    }
}

//--- ToName

impl<Octs: AsRef<[u8]>> ToName for Name<Octs> {
    fn as_flat_slice(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- PartialEq, Eq, PartialOrd, and Ord

impl<Octs: AsRef<[u8]>, N: ToName + ?Sized> PartialEq<N> for Name<Octs> {
    fn eq(&self, other: &N) -> bool {
        self.name_eq(other)
    }
}

impl<Octs: AsRef<[u8]>> Eq for Name<Octs> {}

impl<Octs: AsRef<[u8]>, N: ToName + ?Sized> PartialOrd<N> for Name<Octs> {
    fn partial_cmp(&self, other: &N) -> Option<cmp::Ordering> {
        Some(self.name_cmp(other))
    }
}

impl<Octs: AsRef<[u8]>> Ord for Name<Octs> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.name_cmp(other)
    }
}

//--- Display and Debug

impl<Octs: AsRef<[u8]>> fmt::Display for Name<Octs> {
    /// Writes the name without the final dot. The root is written as `.`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for (i, label) in self.iter().filter(|l| !l.is_empty()).enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            fmt_label(label, f)?;
        }
        Ok(())
    }
}

impl<Octs: AsRef<[u8]>> fmt::Debug for Name<Octs> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({})", self.fmt_with_dot())
    }
}

//------------ NameError -----------------------------------------------------

/// Octets did not contain a valid name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// A label was compressed or of an unknown type.
    BadLabel,

    /// The name was longer than 255 octets.
    LongName,

    /// The octets ended before the root label.
    ShortInput,

    /// There was data after the root label.
    TrailingData,
}

impl From<NameError> for ParseError {
    fn from(err: NameError) -> Self {
        match err {
            NameError::ShortInput => ParseError::ShortInput,
            NameError::BadLabel => {
                FormError::new("compressed or unknown label").into()
            }
            NameError::LongName => FormError::new("long domain name").into(),
            NameError::TrailingData => {
                FormError::new("trailing data after name").into()
            }
        }
    }
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            NameError::BadLabel => "compressed or unknown label",
            NameError::LongName => "long domain name",
            NameError::ShortInput => "unexpected end of name",
            NameError::TrailingData => "trailing data after name",
        })
    }
}

impl std::error::Error for NameError {}

//============ Testing =======================================================
