//! Zone digests.
//!
//! This module implements the calculation and verification of the message
//! digest over the content of a zone defined in [RFC 8976]. The digest is
//! published at the apex of the zone in one or more ZONEMD records.
//!
//! The content of a zone is kept in a [`Zone`]: the apex name plus all
//! records of the zone in canonical order. From there, things work in a
//! number of layers:
//!
//! * [collate] turns the zone into the sequence of canonical records that
//!   is the input to the hash function, leaving out the ZONEMD records and
//!   their signatures at the apex,
//! * [digest] contains the tables of the known collation schemes and hash
//!   algorithms and feeds the collated zone into the hash functions,
//! * [codec] translates between digests and ZONEMD record data, either in
//!   its typed form or the generic form of RFC 3597,
//! * [generate] adds fresh ZONEMD records to a zone, and
//! * [validate] checks the ZONEMD records of a zone.
//!
//! # Example
//!
//! ```
//! use domain_zonemd::base::{Class, Name, Record, Serial, Ttl};
//! use domain_zonemd::rdata::{Ns, Soa};
//! use domain_zonemd::zonemd::{generate, validate, DigestPair, Zone};
//!
//! let apex = Name::bytes_from_str("example.").unwrap();
//! let mut zone = Zone::new(apex.clone());
//! zone.insert(Record::new(
//!     apex.clone(),
//!     Class::IN,
//!     Ttl::DAY,
//!     Soa::new(
//!         Name::bytes_from_str("ns1.example.").unwrap(),
//!         Name::bytes_from_str("admin.example.").unwrap(),
//!         Serial(2018031900),
//!         Ttl::from_secs(1800),
//!         Ttl::from_secs(900),
//!         Ttl::from_secs(604800),
//!         Ttl::DAY,
//!     )
//!     .into(),
//! ));
//! zone.insert(Record::new(
//!     apex,
//!     Class::IN,
//!     Ttl::DAY,
//!     Ns::new(Name::bytes_from_str("ns1.example.").unwrap()).into(),
//! ));
//!
//! let zone = generate::generate(&zone, [DigestPair::default()], false)
//!     .unwrap();
//! assert!(validate::validate(&zone).unwrap().is_valid());
//! ```
//!
//! [RFC 8976]: https://tools.ietf.org/html/rfc8976

pub use self::codec::{decode, decode_apex, encode, EncodedDigest};
pub use self::config::GenerateConfig;
pub use self::digest::{
    compute_digest, compute_digests, DigestContext, DigestPair,
    DigestScheme, DigestSet, HashAlgorithm, DIGEST_SCHEMES,
    HASH_ALGORITHMS,
};
pub use self::error::{DigestFailure, ZonemdError};
pub use self::generate::Generator;
pub use self::records::{Rrset, Rrsets, SortedRecords};
pub use self::validate::{DigestVerdict, ValidationReport};
pub use self::zone::Zone;

use crate::base::{Name, Record};
use crate::rdata::ZoneRecordData;
use bytes::Bytes;

pub mod codec;
pub mod collate;
pub mod config;
pub mod digest;
pub mod error;
pub mod generate;
pub mod records;
pub mod validate;
pub mod zone;

/// The type of domain names stored in a zone.
pub type StoredName = Name<Bytes>;

/// The type of record data stored in a zone.
pub type StoredRecordData = ZoneRecordData<Bytes, StoredName>;

/// The type of records stored in a zone.
pub type StoredRecord = Record<StoredName, StoredRecordData>;
