//! Translating between digests and ZONEMD record data.
//!
//! ZONEMD record data can appear in a zone either as the typed
//! [`Zonemd`] record data or in the generic form of [RFC 3597] as
//! [`UnknownRecordData`] of type 63. Both contain the same octets. The
//! functions herein produce both forms and accept either.
//!
//! [RFC 3597]: https://tools.ietf.org/html/rfc3597

use super::digest::{DigestPair, DigestSet, HashAlgorithm};
use super::error::ZonemdError;
use super::zone::Zone;
use super::StoredRecordData;
use crate::base::iana::Rtype;
use crate::base::rdata::{ComposeRecordData, UnknownRecordData};
use crate::base::serial::Serial;
use crate::base::wire::ParseError;
use crate::rdata::{Zonemd, ZoneRecordData};
use bytes::Bytes;
use octseq::builder::infallible;
use octseq::parse::Parser;
use tracing::trace;

//------------ EncodedDigest -------------------------------------------------

/// A digest encoded as ZONEMD record data.
#[derive(Clone, Debug)]
pub struct EncodedDigest {
    typed: Zonemd<Bytes>,
    generic: UnknownRecordData<Bytes>,
}

impl EncodedDigest {
    /// Returns the typed form of the record data.
    pub fn typed(&self) -> &Zonemd<Bytes> {
        &self.typed
    }

    /// Returns the generic form of the record data.
    pub fn generic(&self) -> &UnknownRecordData<Bytes> {
        &self.generic
    }

    /// Converts the value into zone record data of the requested form.
    pub fn into_record_data(self, generic: bool) -> StoredRecordData {
        if generic {
            self.generic.into()
        } else {
            self.typed.into()
        }
    }
}

//------------ encode --------------------------------------------------------

/// Encodes a digest as ZONEMD record data.
///
/// The digest isn’t checked against the algorithm so that placeholders
/// and digests for unknown algorithms can be encoded, too.
pub fn encode(
    serial: Serial,
    pair: DigestPair,
    digest: &[u8],
) -> Result<EncodedDigest, ZonemdError> {
    let typed = Zonemd::new(
        serial,
        pair.scheme(),
        pair.algorithm(),
        Bytes::copy_from_slice(digest),
    )
    .map_err(|_| ZonemdError::LongRecordData)?;
    let mut rdata = Vec::new();
    infallible(typed.compose_rdata(&mut rdata));
    let generic = UnknownRecordData::from_octets(Rtype::ZONEMD, rdata.into())
        .map_err(|_| ZonemdError::LongRecordData)?;
    Ok(EncodedDigest { typed, generic })
}

//------------ decode --------------------------------------------------------

/// Decodes ZONEMD record data in either form.
///
/// The record data must be at least six octets long. If the algorithm is
/// known, the digest must have the algorithm’s length. Digests for unknown
/// algorithms are accepted so that validation can report them.
pub fn decode(data: &StoredRecordData) -> Result<Zonemd<Bytes>, ZonemdError> {
    let zonemd = match data {
        ZoneRecordData::Zonemd(zonemd) => zonemd.clone(),
        ZoneRecordData::Unknown(data) if data.rtype() == Rtype::ZONEMD => {
            let mut parser = Parser::from_ref(data.data());
            Zonemd::parse(&mut parser).map_err(|err| match err {
                ParseError::ShortInput => {
                    ZonemdError::MalformedDigestRecord("short record data")
                }
                ParseError::Form(err) => {
                    ZonemdError::MalformedDigestRecord(err.as_str())
                }
            })?
        }
        _ => {
            return Err(ZonemdError::MalformedDigestRecord(
                "not ZONEMD record data",
            ))
        }
    };
    if let Some(algorithm) = HashAlgorithm::lookup(zonemd.algorithm()) {
        if zonemd.digest().len() != algorithm.digest_len() {
            return Err(ZonemdError::MalformedDigestRecord(
                "digest length does not match hash algorithm",
            ));
        }
    }
    Ok(zonemd)
}

/// Decodes all ZONEMD records at the apex of a zone.
///
/// Fails if any of the records fails to decode or if there are two
/// records for the same scheme and algorithm. Records in typed and generic
/// form with the same data count only once. An empty set is returned if
/// there are no ZONEMD records at all.
pub fn decode_apex(
    zone: &Zone,
) -> Result<DigestSet<Zonemd<Bytes>>, ZonemdError> {
    let mut res = DigestSet::new();
    for record in zone.apex_records(Rtype::ZONEMD) {
        let zonemd = decode(record.data())?;
        trace!("Found apex ZONEMD {}", zonemd);
        res.insert(
            DigestPair::new(zonemd.scheme(), zonemd.algorithm()),
            zonemd,
        )?;
    }
    Ok(res)
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::{Class, ZonemdAlgorithm, ZonemdScheme};
    use crate::base::{Name, Record, Ttl};
    use crate::zonemd::{StoredName, StoredRecord};

    fn name(s: &str) -> StoredName {
        Name::bytes_from_str(s).unwrap()
    }

    fn generic(s: &str) -> StoredRecordData {
        UnknownRecordData::<Bytes>::from_generic_str(Rtype::ZONEMD, s)
            .unwrap()
            .into()
    }

    fn apex_record(data: StoredRecordData) -> StoredRecord {
        Record::new(name("example."), Class::IN, Ttl::DAY, data)
    }

    #[test]
    fn encode_both_forms() {
        let encoded = encode(
            Serial(2018031900),
            DigestPair::default(),
            &[0xc6, 0x80, 0x90, 0xd9],
        )
        .unwrap();
        assert_eq!(encoded.typed().to_string(), "2018031900 1 1 c68090d9");
        assert_eq!(
            encoded.generic().to_string(),
            "\\# 10 7848b91c0101c68090d9"
        );
        let record = apex_record(encoded.clone().into_record_data(true));
        assert_eq!(
            record.to_string(),
            "example. 86400 IN TYPE63 \\# 10 7848b91c0101c68090d9"
        );
        let record = apex_record(encoded.into_record_data(false));
        assert_eq!(
            record.to_string(),
            "example. 86400 IN ZONEMD 2018031900 1 1 c68090d9"
        );
    }

    #[test]
    fn decode_either_form() {
        let placeholder = [0u8; 48];
        let encoded =
            encode(Serial(7), DigestPair::default(), &placeholder).unwrap();
        let typed = decode(&encoded.clone().into_record_data(false)).unwrap();
        let generic = decode(&encoded.into_record_data(true)).unwrap();
        assert_eq!(typed, generic);
        assert_eq!(typed.serial(), Serial(7));
        assert_eq!(&typed.digest()[..], &placeholder[..]);
    }

    #[test]
    fn decode_rejects() {
        assert_eq!(
            decode(&generic("\\# 5 0000000101")),
            Err(ZonemdError::MalformedDigestRecord("short record data"))
        );
        assert_eq!(
            decode(&generic("\\# 8 00000001 0101 abcd")),
            Err(ZonemdError::MalformedDigestRecord(
                "digest length does not match hash algorithm"
            ))
        );
        assert!(matches!(
            decode(&crate::rdata::A::from_octets(192, 0, 2, 1).into()),
            Err(ZonemdError::MalformedDigestRecord(_))
        ));

        // Unknown algorithms and schemes decode fine.
        let zonemd = decode(&generic("\\# 8 00000001 0709 abcd")).unwrap();
        assert_eq!(zonemd.scheme(), ZonemdScheme::from_int(7));
        assert_eq!(zonemd.algorithm(), ZonemdAlgorithm::from_int(9));
    }

    #[test]
    fn decode_apex_records() {
        let sha512 =
            DigestPair::new(ZonemdScheme::SIMPLE, ZonemdAlgorithm::SHA512);
        let mut zone = Zone::new(name("example."));
        assert!(decode_apex(&zone).unwrap().is_empty());

        let first =
            encode(Serial(1), DigestPair::default(), &[0; 48]).unwrap();
        zone.insert(apex_record(first.clone().into_record_data(false)));
        zone.insert(apex_record(first.into_record_data(true)));
        zone.insert(apex_record(
            encode(Serial(1), sha512, &[0; 64])
                .unwrap()
                .into_record_data(true),
        ));
        zone.insert(Record::new(
            name("sub.example."),
            Class::IN,
            Ttl::DAY,
            encode(Serial(1), sha512, &[1; 64])
                .unwrap()
                .into_record_data(false),
        ));
        let set = decode_apex(&zone).unwrap();
        assert_eq!(
            set.pairs().collect::<Vec<_>>(),
            [DigestPair::default(), sha512]
        );

        zone.insert(apex_record(
            encode(Serial(1), sha512, &[2; 64])
                .unwrap()
                .into_record_data(false),
        ));
        assert_eq!(
            decode_apex(&zone).unwrap_err(),
            ZonemdError::DuplicateDigestRecord(sha512)
        );
    }
}
