//! Absolute domain names.
//!
//! A name is a sequence of labels of up to 63 octets each, ending in the
//! empty root label. On the wire, each label is prefixed with its length
//! and the whole name takes at most 255 octets. Zone content only ever
//! holds uncompressed absolute names, so [`Name`] is the only name type.
//! The [`ToName`] trait supplies the canonical order of [RFC 4034] and
//! the lowercased wire format to anything that can show its wire octets.
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034

pub use self::absolute::{Name, NameError};
pub use self::label::Labels;
pub use self::text::FromStrError;
pub use self::traits::{ToName, WithDot};

/// The maximum length of a label in octets.
pub const MAX_LABEL_LEN: usize = 63;

/// The maximum length of the wire format of a name in octets.
pub const MAX_NAME_LEN: usize = 255;

mod absolute;
mod label;
mod text;
mod traits;
