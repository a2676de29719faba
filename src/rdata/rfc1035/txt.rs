//! Descriptive text.

use crate::base::iana::Rtype;
use crate::base::rdata::{ComposeRecordData, LongRecordData, RecordData};
use crate::base::wire::ParseError;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::octets::Octets;
use octseq::parse::Parser;

/// TXT record data.
///
/// One or more character strings, each preceded by its length. The wire
/// format is kept as is.
#[derive(Clone, Eq, PartialEq)]
pub struct Txt<Octs>(Octs);

impl<Octs: AsRef<[u8]>> Txt<Octs> {
    /// Creates TXT data holding `text`.
    ///
    /// Text longer than 255 octets is split into several strings. Empty
    /// text becomes a single empty string.
    pub fn build_from_slice(text: &[u8]) -> Result<Self, LongRecordData>
    where
        Octs: From<Vec<u8>>,
    {
        let mut wire = Vec::with_capacity(text.len() + text.len() / 255 + 1);
        if text.is_empty() {
            wire.push(0);
        }
        for chunk in text.chunks(255) {
            // At most 255.
            wire.push(chunk.len() as u8);
            wire.extend_from_slice(chunk);
        }
        if wire.len() > usize::from(u16::MAX) {
            return Err(LongRecordData::new());
        }
        Ok(Txt(wire.into()))
    }

    pub fn from_octets(octets: Octs) -> Result<Self, TxtError> {
        check_wire(octets.as_ref())?;
        Ok(Txt(octets))
    }

    pub fn iter(&self) -> TxtIter<'_> {
        TxtIter(self.as_slice())
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl<Octs: AsRef<[u8]>> Txt<Octs> {
    pub fn parse<'a, Src: Octets<Range<'a> = Octs> + ?Sized>(
        parser: &mut Parser<'a, Src>,
    ) -> Result<Self, ParseError> {
        let len = parser.remaining();
        let octets = parser.parse_octets(len)?;
        check_wire(octets.as_ref())
            .map_err(|_| ParseError::form_error("invalid TXT record data"))?;
        Ok(Txt(octets))
    }
}

fn check_wire(mut wire: &[u8]) -> Result<(), TxtError> {
    if wire.is_empty() {
        return Err(TxtError::Empty);
    }
    if wire.len() > usize::from(u16::MAX) {
        return Err(TxtError::Long);
    }
    while let Some((&len, tail)) = wire.split_first() {
        wire = tail.get(usize::from(len)..).ok_or(TxtError::ShortInput)?;
    }
    Ok(())
}

impl<Octs> RecordData for Txt<Octs> {
    fn rtype(&self) -> Rtype {
        Rtype::TXT
    }
}

impl<Octs: AsRef<[u8]>> ComposeRecordData for Txt<Octs> {
    fn rdlen(&self) -> u16 {
        // Checked on creation.
        self.as_slice().len() as u16
    }

    fn compose_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        buf.append_slice(self.as_slice())
    }
}

impl<Octs: AsRef<[u8]>> fmt::Display for Txt<Octs> {
    /// Writes each string quoted, separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, string) in self.iter().enumerate() {
            f.write_str(if i == 0 { "\"" } else { " \"" })?;
            for &ch in string {
                match ch {
                    b'"' | b'\\' => write!(f, "\\{}", char::from(ch))?,
                    0x20..=0x7e => write!(f, "{}", char::from(ch))?,
                    _ => write!(f, "\\{:03}", ch)?,
                }
            }
            f.write_str("\"")?;
        }
        Ok(())
    }
}

impl<Octs: AsRef<[u8]>> fmt::Debug for Txt<Octs> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Txt({})", self)
    }
}

//------------ TxtIter -------------------------------------------------------

/// The character strings of TXT data.
#[derive(Clone, Debug)]
pub struct TxtIter<'a>(&'a [u8]);

impl<'a> Iterator for TxtIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, tail) = self.0.split_first()?;
        let (string, rest) = tail.split_at(usize::from(len).min(tail.len()));
        self.0 = rest;
        Some(string)
    }
}

//------------ TxtError ------------------------------------------------------

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TxtError {
    /// No character string at all.
    Empty,

    /// A string runs past the end of the data.
    ShortInput,

    Long,
}

impl fmt::Display for TxtError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            TxtError::Empty => "empty TXT record data",
            TxtError::ShortInput => "short character string",
            TxtError::Long => "record data too long",
        })
    }
}

impl std::error::Error for TxtError {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::compose_checked;

    #[test]
    fn build() {
        let rdata =
            Txt::<Vec<u8>>::build_from_slice(b"hello \"world\"").unwrap();
        assert_eq!(rdata.to_string(), "\"hello \\\"world\\\"\"");
        let wire = compose_checked(&rdata);
        let parsed = Txt::parse(&mut Parser::from_ref(wire.as_slice()));
        assert_eq!(parsed.unwrap().as_slice(), rdata.as_slice());

        let empty = Txt::<Vec<u8>>::build_from_slice(b"").unwrap();
        assert_eq!(empty.as_slice(), b"\0");
        assert_eq!(empty.to_string(), "\"\"");

        let long = Txt::<Vec<u8>>::build_from_slice(&[b'a'; 300]).unwrap();
        let lens: Vec<_> = long.iter().map(<[u8]>::len).collect();
        assert_eq!(lens, [255, 45]);
    }

    #[test]
    fn malformed() {
        assert_eq!(
            Txt::from_octets(b"\x05abc".as_slice()).unwrap_err(),
            TxtError::ShortInput
        );
        assert_eq!(
            Txt::from_octets(b"".as_slice()).unwrap_err(),
            TxtError::Empty
        );
        let mut parser = Parser::from_ref(b"\x05abc".as_slice());
        assert!(Txt::parse(&mut parser).is_err());
    }
}
