//! Zone digests for DNS zones.
//!
//! This crate implements the ZONEMD record defined in [RFC 8976]: a
//! cryptographic message digest over the content of a DNS zone that is
//! published at the zone apex so that recipients can verify the zone as a
//! whole.
//!
//! The modules follow the layout of the `domain` crate:
//!
//! * [base] contains the fundamental DNS types needed to represent zone
//!   content: domain names, the IANA code point types, serial numbers,
//!   records, and the traits for record data and the wire format,
//! * [rdata] contains the concrete record data types, most importantly
//!   [`Zonemd`][rdata::Zonemd] itself,
//! * [zonemd] contains the digest machinery: canonical collation of a
//!   zone, the hash algorithm table, the digest record codec, and the
//!   generator and validator operating on a [`Zone`][zonemd::Zone].
//!
//! # Reference of feature flags
//!
//! * `serde`: Enables serde serialization for a number of basic types and
//!   the generator configuration.
//! * `logging`: Provides [`logging::init_logging`] which installs a
//!   `tracing` subscriber driven by the `RUST_LOG` environment variable.
//!
//! [RFC 8976]: https://tools.ietf.org/html/rfc8976

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
pub mod rdata;
pub mod utils;
pub mod zonemd;

#[cfg(any(test, feature = "logging"))]
pub mod logging;
