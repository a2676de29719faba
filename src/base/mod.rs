//! DNS types that zone content is made of.
//!
//! Names and record data are generic over the octets holding them. A
//! [`Zone`][crate::zonemd::Zone] uses [`Bytes`][bytes::Bytes], so records
//! are cheap to clone.
//!
//! Nothing here deals with messages. Data is only ever read from and
//! written to uncompressed wire format, see [wire]. Writing comes in two
//! forms: as held, and the canonical form of [RFC 4034] section 6.2 that
//! digests are calculated over.
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034

pub use self::cmp::CanonicalOrd;
pub use self::iana::{Class, Rtype};
pub use self::name::{Name, ToName};
pub use self::rdata::{
    ComposeRecordData, LongRecordData, RecordData, UnknownRecordData,
};
pub use self::record::{Record, Ttl};
pub use self::serial::Serial;
pub use self::wire::{Compose, FormError, Parse, ParseError};

pub mod cmp;
pub mod iana;
pub mod name;
pub mod rdata;
pub mod record;
pub mod serde;
pub mod serial;
pub mod wire;
