//! The canonical sort order.
//!
//! DNSSEC defines its own order for records in [RFC 4034], section 6: the
//! owner names are compared label by label starting at the root, ignoring
//! ASCII case. Within an owner and type, records are ordered by their
//! canonical record data as plain octet strings. Zone digests are
//! calculated over records in exactly this order. Because the order
//! differs from what `Ord` would naturally mean for these types, it lives
//! in its own trait.
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034#section-6

use core::cmp::Ordering;

/// A type with a canonical DNSSEC order.
pub trait CanonicalOrd<Rhs: ?Sized = Self> {
    #[must_use]
    fn canonical_cmp(&self, other: &Rhs) -> Ordering;
}
