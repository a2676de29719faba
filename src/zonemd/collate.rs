//! Collation of a zone into the input of the digest.
//!
//! A collation scheme determines which records of a zone are fed to the
//! hash function and in which form. The only scheme currently defined is
//! [SIMPLE][simple].

use super::zone::Zone;
use crate::base::iana::{Class, Rtype};
use crate::base::name::ToName;
use octseq::builder::infallible;
use tracing::{debug, trace};

/// Collates a zone according to the SIMPLE scheme.
///
/// The scheme is defined in section 3.3.1 of [RFC 8976]: every record of
/// the zone in canonical order and canonical wire format, except the
/// ZONEMD RRset at the apex and the RRSIG records at the apex covering it.
///
/// The function hands the wire format of each record to `op` and returns
/// the number of records it produced. Only records of the given class are
/// considered and only those at or below the apex. All others are skipped.
///
/// The canonical form of one record at a time is kept in memory.
///
/// [RFC 8976]: https://tools.ietf.org/html/rfc8976#section-3.3.1
pub fn simple(zone: &Zone, class: Class, op: &mut dyn FnMut(&[u8])) -> usize {
    let mut buf = Vec::new();
    let mut count = 0;
    for rrset in zone.records().rrsets() {
        if rrset.class() != class || !rrset.owner().ends_with(zone.apex()) {
            debug!(
                "Skipping out-of-zone RRset {} {} {}",
                rrset.owner(),
                rrset.class(),
                rrset.rtype()
            );
            continue;
        }
        let at_apex = zone.is_apex(rrset.owner());
        if at_apex && rrset.rtype() == Rtype::ZONEMD {
            trace!("Skipping apex ZONEMD RRset");
            continue;
        }
        for record in rrset.iter() {
            if at_apex
                && record.data().rrsig_type_covered() == Some(Rtype::ZONEMD)
            {
                trace!("Skipping apex RRSIG covering ZONEMD");
                continue;
            }
            buf.clear();
            infallible(record.compose_canonical(&mut buf));
            op(&buf);
            count += 1;
        }
    }
    count
}

//============ Testing =======================================================
