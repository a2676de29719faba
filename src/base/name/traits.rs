//! The trait for anything holding a name.

use super::absolute::Name;
use super::label::{cmp_labels, Labels};
use super::MAX_NAME_LEN;
use core::{cmp, fmt};
use octseq::builder::OctetsBuilder;

//------------ ToName --------------------------------------------------------

/// A type that holds an absolute, uncompressed domain name.
///
/// Implementers provide the wire format of a well-formed name. The
/// canonical order and the canonical wire format come with the trait.
pub trait ToName {
    /// Returns the uncompressed wire format of the name.
    fn as_flat_slice(&self) -> &[u8];

    fn iter_labels(&self) -> Labels<'_> {
        Labels::new(self.as_flat_slice())
    }

    fn compose_len(&self) -> u16 {
        // At most 255 octets.
        self.as_flat_slice().len() as u16
    }

    fn compose<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        buf.append_slice(self.as_flat_slice())
    }

    /// Appends the name with all ASCII letters lowercased.
    ///
    /// This is the canonical form of section 6.2 of [RFC 4034].
    ///
    /// [RFC 4034]: https://tools.ietf.org/html/rfc4034
    fn compose_canonical<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        let wire = self.as_flat_slice();
        let mut lower = [0u8; MAX_NAME_LEN];
        let lower = &mut lower[..wire.len()];
        lower.copy_from_slice(wire);
        // Length octets are at most 63 and thus never letters.
        lower.make_ascii_lowercase();
        buf.append_slice(lower)
    }

    fn as_name_slice(&self) -> Name<&[u8]> {
        Name::from_octets_unchecked(self.as_flat_slice())
    }

    /// Returns a value displaying the name with its final dot.
    fn fmt_with_dot(&self) -> WithDot<'_> {
        WithDot(self.as_flat_slice())
    }

    fn name_eq<N: ToName + ?Sized>(&self, other: &N) -> bool {
        self.as_flat_slice()
            .eq_ignore_ascii_case(other.as_flat_slice())
    }

    /// Compares in the canonical name order of [RFC 4034], section 6.1.
    ///
    /// [RFC 4034]: https://tools.ietf.org/html/rfc4034#section-6.1
    fn name_cmp<N: ToName + ?Sized>(&self, other: &N) -> cmp::Ordering {
        let mut left = self.iter_labels().rev();
        let mut right = other.iter_labels().rev();
        loop {
            match (left.next(), right.next()) {
                (Some(l), Some(r)) => match cmp_labels(l, r) {
                    cmp::Ordering::Equal => {}
                    res => return res,
                },
                (l, r) => return l.is_some().cmp(&r.is_some()),
            }
        }
    }

    /// Returns whether `self` is at or below `base`.
    fn ends_with<N: ToName + ?Sized>(&self, base: &N) -> bool {
        let mut labels = self.iter_labels().rev();
        base.iter_labels().rev().all(|b| {
            labels.next().map_or(false, |l| l.eq_ignore_ascii_case(b))
        })
    }
}

impl<'a, N: ToName + ?Sized> ToName for &'a N {
    fn as_flat_slice(&self) -> &[u8] {
        (*self).as_flat_slice()
    }
}

//------------ WithDot -------------------------------------------------------

/// Displays a name with a final dot.
pub struct WithDot<'a>(&'a [u8]);

impl<'a> fmt::Display for WithDot<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = Name::from_octets_unchecked(self.0);
        if name.is_root() {
            f.write_str(".")
        } else {
            write!(f, "{}.", name)
        }
    }
}

//============ Testing =======================================================
