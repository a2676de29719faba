//! Signatures, [RFC 4034].
//!
//! A signed zone's RRSIG records are digested like everything else. Only
//! those covering the apex ZONEMD RRset are left out, which is found by
//! their type covered.
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034

use crate::base::iana::{Rtype, SecurityAlgorithm};
use crate::base::name::{Name, ToName};
use crate::base::rdata::{ComposeRecordData, LongRecordData, RecordData};
use crate::base::record::Ttl;
use crate::base::serial::Serial;
use crate::base::wire::{Compose, Parse, ParseError};
use crate::utils::base64;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::octets::Octets;
use octseq::parse::Parser;

/// Length of everything before the signer name.
const HEAD_LEN: u16 = Rtype::COMPOSE_LEN
    + SecurityAlgorithm::COMPOSE_LEN
    + u8::COMPOSE_LEN
    + Ttl::COMPOSE_LEN
    + 2 * Serial::COMPOSE_LEN
    + u16::COMPOSE_LEN;

/// RRSIG record data.
///
/// Inception and expiration are signature times kept as [`Serial`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rrsig<Octs, Name> {
    type_covered: Rtype,
    algorithm: SecurityAlgorithm,
    labels: u8,
    original_ttl: Ttl,
    expiration: Serial,
    inception: Serial,
    key_tag: u16,
    signer_name: Name,
    signature: Octs,
}

impl<Octs, Name> Rrsig<Octs, Name> {
    /// Creates the data, refusing a signature that would not fit.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        type_covered: Rtype,
        algorithm: SecurityAlgorithm,
        labels: u8,
        original_ttl: Ttl,
        expiration: Serial,
        inception: Serial,
        key_tag: u16,
        signer_name: Name,
        signature: Octs,
    ) -> Result<Self, LongRecordData>
    where
        Octs: AsRef<[u8]>,
        Name: ToName,
    {
        let len = usize::from(HEAD_LEN + signer_name.compose_len())
            + signature.as_ref().len();
        if len > usize::from(u16::MAX) {
            return Err(LongRecordData::new());
        }
        Ok(Rrsig {
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name,
            signature,
        })
    }

    pub fn type_covered(&self) -> Rtype {
        self.type_covered
    }

    pub fn signature(&self) -> &Octs {
        &self.signature
    }

    fn compose_head<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.type_covered.compose(buf)?;
        self.algorithm.compose(buf)?;
        self.labels.compose(buf)?;
        self.original_ttl.compose(buf)?;
        self.expiration.compose(buf)?;
        self.inception.compose(buf)?;
        self.key_tag.compose(buf)
    }
}

impl<Octs> Rrsig<Octs, Name<Octs>> {
    /// Parses the data, taking the rest of the parser as the signature.
    pub fn parse<'a, Src: Octets<Range<'a> = Octs> + ?Sized>(
        parser: &mut Parser<'a, Src>,
    ) -> Result<Self, ParseError> {
        let type_covered = Rtype::parse(parser)?;
        let algorithm = SecurityAlgorithm::parse(parser)?;
        let labels = u8::parse(parser)?;
        let original_ttl = Ttl::parse(parser)?;
        let expiration = Serial::parse(parser)?;
        let inception = Serial::parse(parser)?;
        let key_tag = u16::parse(parser)?;
        let signer_name = Name::parse(parser)?;
        let len = parser.remaining();
        Ok(Rrsig {
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name,
            signature: parser.parse_octets(len)?,
        })
    }
}

impl<Octs, Name> RecordData for Rrsig<Octs, Name> {
    fn rtype(&self) -> Rtype {
        Rtype::RRSIG
    }
}

impl<Octs, Name> ComposeRecordData for Rrsig<Octs, Name>
where
    Octs: AsRef<[u8]>,
    Name: ToName,
{
    fn rdlen(&self) -> u16 {
        // Checked on creation. Parsed data is limited by its record.
        HEAD_LEN
            + self.signer_name.compose_len()
            + self.signature.as_ref().len() as u16
    }

    fn compose_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.compose_head(buf)?;
        self.signer_name.compose(buf)?;
        buf.append_slice(self.signature.as_ref())
    }

    fn compose_canonical_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.compose_head(buf)?;
        self.signer_name.compose_canonical(buf)?;
        buf.append_slice(self.signature.as_ref())
    }
}

impl<Octs, Name> fmt::Display for Rrsig<Octs, Name>
where
    Octs: AsRef<[u8]>,
    Name: ToName,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} ",
            self.type_covered,
            self.algorithm,
            self.labels,
            self.original_ttl,
            self.expiration.fmt_rrsig(),
            self.inception.fmt_rrsig(),
            self.key_tag,
            self.signer_name.fmt_with_dot()
        )?;
        base64::display(&self.signature, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::compose_checked;
    use octseq::builder::infallible;

    fn rrsig() -> Rrsig<Vec<u8>, Name<Vec<u8>>> {
        Rrsig::new(
            Rtype::ZONEMD,
            SecurityAlgorithm::ECDSAP256SHA256,
            1,
            Ttl::DAY,
            Serial::rrsig_from_str("20180401000000").unwrap(),
            Serial::rrsig_from_str("20180319000000").unwrap(),
            12345,
            Name::vec_from_str("Example.").unwrap(),
            vec![0xde, 0xad, 0xbe, 0xef],
        )
        .unwrap()
    }

    #[test]
    fn parse_back() {
        let rdata = rrsig();
        let wire = compose_checked(&rdata);
        let parsed = Rrsig::parse(&mut Parser::from_ref(wire.as_slice()))
            .unwrap();
        assert_eq!(parsed.type_covered(), Rtype::ZONEMD);
        assert_eq!(parsed.signature(), &b"\xde\xad\xbe\xef".as_slice());
        assert_eq!(parsed.to_string(), rdata.to_string());
    }

    #[test]
    fn canonical_signer() {
        let mut buf = Vec::new();
        infallible(rrsig().compose_canonical_rdata(&mut buf));
        assert_eq!(&buf[..2], b"\x00\x3f");
        assert_eq!(&buf[18..27], b"\x07example\0");
        assert_eq!(&buf[27..], b"\xde\xad\xbe\xef");
    }

    #[test]
    fn display() {
        assert_eq!(
            rrsig().to_string(),
            "ZONEMD 13 1 86400 20180401000000 20180319000000 12345 \
             Example. 3q2+7w=="
        );
    }

    #[test]
    fn long_signature() {
        let res = Rrsig::new(
            Rtype::A,
            SecurityAlgorithm::ED25519,
            1,
            Ttl::HOUR,
            Serial(1),
            Serial(0),
            1,
            Name::vec_from_str("example.").unwrap(),
            vec![0u8; 0xFFFF],
        );
        assert_eq!(res.unwrap_err(), LongRecordData::new());
    }
}
