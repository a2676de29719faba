//! Traits for record data and data of unknown type.
//!
//! The concrete types live in the top-level [rdata][crate::rdata] module.
//! Anything usable as record data implements [`RecordData`]; if it can be
//! written out, it also implements [`ComposeRecordData`].

use super::iana::Rtype;
use super::wire::{Compose, ParseError};
use crate::utils::base16;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::octets::Octets;
use octseq::parse::Parser;

//----------- RecordData -----------------------------------------------------

pub trait RecordData {
    /// The type of record this data belongs to.
    fn rtype(&self) -> Rtype;

    /// Whether the data is held in the generic form of RFC 3597.
    fn is_generic(&self) -> bool {
        false
    }
}

impl<'a, T: RecordData> RecordData for &'a T {
    fn rtype(&self) -> Rtype {
        (*self).rtype()
    }

    fn is_generic(&self) -> bool {
        (*self).is_generic()
    }
}

//----------- ComposeRecordData ----------------------------------------------

/// Record data that can be written in wire format.
///
/// The canonical form only differs for types that embed domain names which
/// RFC 4034 requires to be lowercased. Those override
/// [`compose_canonical_rdata`][Self::compose_canonical_rdata].
pub trait ComposeRecordData: RecordData {
    /// The length of the data in octets.
    fn rdlen(&self) -> u16;

    fn compose_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError>;

    fn compose_canonical_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.compose_rdata(buf)
    }

    /// Appends the data preceded by its length.
    fn compose_len_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.rdlen().compose(buf)?;
        self.compose_rdata(buf)
    }

    /// Appends the canonical data preceded by its length.
    fn compose_canonical_len_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.rdlen().compose(buf)?;
        self.compose_canonical_rdata(buf)
    }
}

impl<'a, T: ComposeRecordData> ComposeRecordData for &'a T {
    fn rdlen(&self) -> u16 {
        (*self).rdlen()
    }

    fn compose_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        (*self).compose_rdata(buf)
    }

    fn compose_canonical_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        (*self).compose_canonical_rdata(buf)
    }
}

//------------ UnknownRecordData ---------------------------------------------

/// Raw record data of any type.
///
/// This is what the generic presentation format of [RFC 3597],
/// `\# <len> <hex>`, turns into, regardless of whether the type is known.
/// On its own it is written out exactly as held. Data of a known type is
/// only canonicalized by [`ZoneRecordData`][crate::rdata::ZoneRecordData].
///
/// [RFC 3597]: https://tools.ietf.org/html/rfc3597
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownRecordData<Octs> {
    rtype: Rtype,
    data: Octs,
}

impl<Octs: AsRef<[u8]>> UnknownRecordData<Octs> {
    pub fn from_octets(
        rtype: Rtype,
        data: Octs,
    ) -> Result<Self, LongRecordData> {
        check_rdlen(data.as_ref().len())?;
        Ok(UnknownRecordData { rtype, data })
    }

    /// Reads the generic presentation format.
    ///
    /// The hex digits may be split into several words.
    pub fn from_generic_str(
        rtype: Rtype,
        s: &str,
    ) -> Result<Self, GenericFromStrError>
    where
        Octs: From<Vec<u8>>,
    {
        let mut words = s.split_ascii_whitespace();
        if words.next() != Some("\\#") {
            return Err(GenericFromStrError::MissingMarker);
        }
        let len: usize = words
            .next()
            .and_then(|word| word.parse().ok())
            .ok_or(GenericFromStrError::MissingLength)?;
        check_rdlen(len).map_err(|_| GenericFromStrError::LongData)?;
        let data = base16::decode_chars(words.flat_map(str::chars))
            .map_err(GenericFromStrError::Hex)?;
        if data.len() != len {
            return Err(GenericFromStrError::LengthMismatch);
        }
        Ok(UnknownRecordData {
            rtype,
            data: data.into(),
        })
    }

    pub fn as_slice(&self) -> &[u8] {
        self.data.as_ref()
    }
}

impl<Octs> UnknownRecordData<Octs> {
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    pub fn data(&self) -> &Octs {
        &self.data
    }

    /// Takes everything left in the parser as data of type `rtype`.
    pub fn parse<'a, Src: Octets<Range<'a> = Octs> + ?Sized>(
        rtype: Rtype,
        parser: &mut Parser<'a, Src>,
    ) -> Result<Self, ParseError> {
        let len = parser.remaining();
        check_rdlen(len)
            .map_err(|_| ParseError::form_error("long record data"))?;
        let data = parser.parse_octets(len)?;
        Ok(UnknownRecordData { rtype, data })
    }
}

fn check_rdlen(len: usize) -> Result<(), LongRecordData> {
    if len > usize::from(u16::MAX) {
        Err(LongRecordData(()))
    } else {
        Ok(())
    }
}

impl<Octs: AsRef<[u8]>> RecordData for UnknownRecordData<Octs> {
    fn rtype(&self) -> Rtype {
        self.rtype
    }

    fn is_generic(&self) -> bool {
        true
    }
}

impl<Octs: AsRef<[u8]>> ComposeRecordData for UnknownRecordData<Octs> {
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

impl<Octs: AsRef<[u8]>> fmt::Display for UnknownRecordData<Octs> {
    /// Writes the generic form with the data as a single hex word.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\\# {}", self.as_slice().len())?;
        if !self.as_slice().is_empty() {
            write!(f, " {}", base16::encode_display(self.as_slice()))?;
        }
        Ok(())
    }
}

//------------ LongRecordData ------------------------------------------------

/// Record data would be longer than 65535 octets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LongRecordData(());

impl LongRecordData {
    pub(crate) fn new() -> Self {
        LongRecordData(())
    }
}

impl fmt::Display for LongRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("record data too long")
    }
}

impl std::error::Error for LongRecordData {}

//------------ GenericFromStrError -------------------------------------------

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GenericFromStrError {
    MissingMarker,
    MissingLength,
    LongData,
    Hex(base16::DecodeError),

    /// The hex data does not have the announced length.
    LengthMismatch,
}

impl fmt::Display for GenericFromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GenericFromStrError::MissingMarker => {
                f.write_str("expected '\\#'")
            }
            GenericFromStrError::MissingLength => {
                f.write_str("expected length of generic data")
            }
            GenericFromStrError::LongData => {
                f.write_str("record data too long")
            }
            GenericFromStrError::Hex(err) => fmt::Display::fmt(&err, f),
            GenericFromStrError::LengthMismatch => {
                f.write_str("generic data does not match its length")
            }
        }
    }
}

impl std::error::Error for GenericFromStrError {}

//============ Testing ======================================================

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use octseq::builder::infallible;

    /// Composes `data` both ways, checking `rdlen` against each.
    ///
    /// Returns the regular wire format.
    pub fn compose_checked<R: ComposeRecordData>(data: &R) -> Vec<u8> {
        let mut canonical = Vec::new();
        infallible(data.compose_canonical_rdata(&mut canonical));
        assert_eq!(canonical.len(), usize::from(data.rdlen()));
        let mut buf = Vec::new();
        infallible(data.compose_rdata(&mut buf));
        assert_eq!(buf.len(), usize::from(data.rdlen()));
        buf
    }

    fn generic(rtype: Rtype, s: &str) -> UnknownRecordData<Vec<u8>> {
        UnknownRecordData::from_generic_str(rtype, s).unwrap()
    }

    #[test]
    fn generic_from_str() {
        let data = generic(Rtype::ZONEMD, "\\# 6 78 3C 10 DB 01 01");
        assert_eq!(data.as_slice(), b"\x78\x3c\x10\xdb\x01\x01");
        assert_eq!(data.to_string(), "\\# 6 783c10db0101");
        assert!(data.is_generic());
        assert_eq!(compose_checked(&data), data.as_slice());

        let empty = generic(Rtype::from_int(65280), "\\# 0");
        assert_eq!(empty.to_string(), "\\# 0");
    }

    #[test]
    fn generic_from_str_errors() {
        let err = |s| {
            UnknownRecordData::<Vec<u8>>::from_generic_str(Rtype::TXT, s)
                .unwrap_err()
        };
        assert_eq!(err("\\# 3 0102"), GenericFromStrError::LengthMismatch);
        assert_eq!(err("6 010203"), GenericFromStrError::MissingMarker);
        assert_eq!(err("\\# x"), GenericFromStrError::MissingLength);
        assert_eq!(err("\\# 65536"), GenericFromStrError::LongData);
        assert_eq!(
            err("\\# 1 0g"),
            GenericFromStrError::Hex(base16::DecodeError::IllegalChar('g'))
        );
    }

    #[test]
    fn long_data() {
        assert!(
            UnknownRecordData::from_octets(Rtype::TXT, vec![0u8; 0x10000])
                .is_err()
        );
        let data =
            UnknownRecordData::from_octets(Rtype::TXT, vec![0u8; 0xFFFF])
                .unwrap();
        assert_eq!(data.rdlen(), 0xFFFF);
    }

    #[test]
    fn parse_takes_everything() {
        let mut parser = Parser::from_ref(b"foo".as_slice());
        let data =
            UnknownRecordData::parse(Rtype::from_int(65280), &mut parser)
                .unwrap();
        assert_eq!(data.data(), &b"foo".as_slice());
        assert_eq!(parser.remaining(), 0);
    }
}
