//! ZONEMD record data, [RFC 8976].
//!
//! [RFC 8976]: https://tools.ietf.org/html/rfc8976

use crate::base::iana::{Rtype, ZonemdAlgorithm, ZonemdScheme};
use crate::base::rdata::{ComposeRecordData, LongRecordData, RecordData};
use crate::base::serial::Serial;
use crate::base::wire::{Compose, Parse, ParseError};
use crate::utils::base16;
use core::fmt;
use core::str::FromStr;
use octseq::builder::OctetsBuilder;
use octseq::octets::Octets;
use octseq::parse::Parser;

/// Serial, scheme and algorithm.
const HEAD_LEN: u16 = Serial::COMPOSE_LEN
    + ZonemdScheme::COMPOSE_LEN
    + ZonemdAlgorithm::COMPOSE_LEN;

//------------ Zonemd --------------------------------------------------------

/// The digest of a zone, carried at its apex.
///
/// Any scheme, algorithm and digest length is accepted here. Whether a
/// record can be used to verify a zone is decided during validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Zonemd<Octs> {
    serial: Serial,
    scheme: ZonemdScheme,
    algorithm: ZonemdAlgorithm,
    digest: Octs,
}

impl<Octs> Zonemd<Octs> {
    pub fn new(
        serial: Serial,
        scheme: ZonemdScheme,
        algorithm: ZonemdAlgorithm,
        digest: Octs,
    ) -> Result<Self, LongRecordData>
    where
        Octs: AsRef<[u8]>,
    {
        if digest.as_ref().len() > usize::from(u16::MAX - HEAD_LEN) {
            return Err(LongRecordData::new());
        }
        Ok(Zonemd {
            serial,
            scheme,
            algorithm,
            digest,
        })
    }

    /// The SOA serial of the zone version that was digested.
    pub fn serial(&self) -> Serial {
        self.serial
    }

    pub fn scheme(&self) -> ZonemdScheme {
        self.scheme
    }

    pub fn algorithm(&self) -> ZonemdAlgorithm {
        self.algorithm
    }

    pub fn digest(&self) -> &Octs {
        &self.digest
    }

    /// Parses the data. Everything after the algorithm is the digest.
    pub fn parse<'a, Src: Octets<Range<'a> = Octs> + ?Sized>(
        parser: &mut Parser<'a, Src>,
    ) -> Result<Self, ParseError> {
        let serial = Serial::parse(parser)?;
        let scheme = ZonemdScheme::parse(parser)?;
        let algorithm = ZonemdAlgorithm::parse(parser)?;
        let len = parser.remaining();
        if len > usize::from(u16::MAX - HEAD_LEN) {
            return Err(ParseError::form_error("long ZONEMD digest"));
        }
        Ok(Zonemd {
            serial,
            scheme,
            algorithm,
            digest: parser.parse_octets(len)?,
        })
    }
}

impl<Octs: From<Vec<u8>> + AsRef<[u8]>> FromStr for Zonemd<Octs> {
    type Err = ZonemdFromStrError;

    /// Reads serial, scheme and algorithm in decimal, then the digest.
    ///
    /// The hex digest may be split into several words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_ascii_whitespace();
        let serial = words
            .next()
            .and_then(|word| word.parse().ok())
            .ok_or(ZonemdFromStrError::Serial)?;
        let scheme = words
            .next()
            .and_then(|word| word.parse().ok())
            .ok_or(ZonemdFromStrError::Scheme)?;
        let algorithm = words
            .next()
            .and_then(|word| word.parse().ok())
            .ok_or(ZonemdFromStrError::Algorithm)?;
        let digest = base16::decode_chars(words.flat_map(str::chars))
            .map_err(ZonemdFromStrError::Digest)?;
        Zonemd::new(serial, scheme, algorithm, Octs::from(digest))
            .map_err(|_| ZonemdFromStrError::LongDigest)
    }
}

impl<Octs> RecordData for Zonemd<Octs> {
    fn rtype(&self) -> Rtype {
        Rtype::ZONEMD
    }
}

impl<Octs: AsRef<[u8]>> ComposeRecordData for Zonemd<Octs> {
    fn rdlen(&self) -> u16 {
        HEAD_LEN + self.digest.as_ref().len() as u16
    }

    fn compose_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.serial.compose(buf)?;
        self.scheme.compose(buf)?;
        self.algorithm.compose(buf)?;
        buf.append_slice(self.digest.as_ref())
    }
}

impl<Octs: AsRef<[u8]>> fmt::Display for Zonemd<Octs> {
    /// Writes the digest as one word of lowercase hex.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.serial, self.scheme, self.algorithm)?;
        if !self.digest.as_ref().is_empty() {
            f.write_str(" ")?;
            base16::display(self.digest.as_ref(), f)?;
        }
        Ok(())
    }
}

//------------ ZonemdFromStrError --------------------------------------------

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ZonemdFromStrError {
    Serial,
    Scheme,
    Algorithm,
    Digest(base16::DecodeError),
    LongDigest,
}

impl fmt::Display for ZonemdFromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ZonemdFromStrError::Serial => f.write_str("invalid serial"),
            ZonemdFromStrError::Scheme => f.write_str("invalid scheme"),
            ZonemdFromStrError::Algorithm => {
                f.write_str("invalid hash algorithm")
            }
            ZonemdFromStrError::Digest(err) => {
                write!(f, "invalid digest: {}", err)
            }
            ZonemdFromStrError::LongDigest => f.write_str("digest too long"),
        }
    }
}

impl std::error::Error for ZonemdFromStrError {}

//============ Testing =======================================================
