//! The content of a zone.

use super::error::ZonemdError;
use super::records::SortedRecords;
use super::{StoredName, StoredRecord, StoredRecordData};
use crate::base::iana::Rtype;
use crate::base::name::ToName;
use crate::base::record::Record;
use crate::rdata::{Soa, ZoneRecordData};
use octseq::parse::Parser;
use tracing::trace;

//------------ Zone ----------------------------------------------------------

/// The records of a zone together with its apex.
///
/// The records are kept in canonical order. A record that is inserted more
/// than once is only kept once. A zone can contain records that are not
/// part of it, i.e., whose owner is not at or below the apex or whose class
/// is not the class of the apex SOA record. These records are ignored when
/// calculating the digest.
#[derive(Clone, Debug)]
pub struct Zone {
    apex: StoredName,
    records: SortedRecords<StoredName, StoredRecordData>,
}

impl Zone {
    /// Creates a new, empty zone with the given apex.
    pub fn new(apex: StoredName) -> Self {
        Zone {
            apex,
            records: SortedRecords::new(),
        }
    }

    /// Creates a zone from the apex and a sequence of records.
    pub fn from_records(
        apex: StoredName,
        records: impl IntoIterator<Item = StoredRecord>,
    ) -> Self {
        Zone {
            apex,
            records: records.into_iter().collect(),
        }
    }

    /// Adds a record to the zone.
    ///
    /// Returns whether the record was new. If it wasn’t, the stored record
    /// keeps the lower of both TTLs.
    pub fn insert(&mut self, record: StoredRecord) -> bool {
        match self.records.insert(record) {
            Ok(()) => true,
            Err(record) => {
                trace!("Duplicate record {}", record);
                false
            }
        }
    }

    /// Returns the apex of the zone.
    pub fn apex(&self) -> &StoredName {
        &self.apex
    }

    /// Returns the records of the zone in canonical order.
    pub fn records(&self) -> &SortedRecords<StoredName, StoredRecordData> {
        &self.records
    }

    /// Converts the zone into its records in canonical order.
    pub fn into_records(self) -> Vec<StoredRecord> {
        self.records.into_inner()
    }

    /// Returns the number of records in the zone.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the zone has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records at the apex with the given type.
    ///
    /// The records of all classes are returned.
    pub fn apex_records(
        &self,
        rtype: Rtype,
    ) -> impl Iterator<Item = &StoredRecord> + '_ {
        self.records.owner_records(&self.apex, rtype)
    }

    /// Returns the SOA record of the zone.
    ///
    /// The zone must have exactly one SOA record at its apex. If the record
    /// data was given in generic form, it is parsed.
    pub fn soa(
        &self,
    ) -> Result<Record<StoredName, Soa<StoredName>>, ZonemdError> {
        let mut soas = self.apex_records(Rtype::SOA);
        let record = soas.next().ok_or(ZonemdError::MissingSoa)?;
        if soas.next().is_some() {
            return Err(ZonemdError::MultipleSoa);
        }
        let soa = match record.data() {
            ZoneRecordData::Soa(soa) => soa.clone(),
            ZoneRecordData::Unknown(data) => {
                let mut parser = Parser::from_ref(data.data());
                Soa::parse(&mut parser)
                    .ok()
                    .filter(|_| parser.remaining() == 0)
                    .ok_or(ZonemdError::MalformedSoa)?
            }
            _ => return Err(ZonemdError::MalformedSoa),
        };
        Ok(Record::new(
            record.owner().clone(),
            record.class(),
            record.ttl(),
            soa,
        ))
    }

    /// Returns whether `owner` is the apex of the zone.
    pub(crate) fn is_apex<N: ToName>(&self, owner: &N) -> bool {
        owner.name_eq(&self.apex)
    }

    /// Removes all records at the apex with the given type.
    pub(crate) fn remove_apex_rrsets(&mut self, rtype: Rtype) {
        let apex = self.apex.clone();
        self.records.retain(|record| {
            record.rtype() != rtype || !record.owner().name_eq(&apex)
        })
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Class;
    use crate::base::rdata::UnknownRecordData;
    use crate::base::{Name, Serial, Ttl};
    use crate::rdata::Ns;
    use bytes::Bytes;

    fn name(s: &str) -> StoredName {
        Name::bytes_from_str(s).unwrap()
    }

    fn soa(serial: u32) -> StoredRecordData {
        Soa::new(
            name("ns1.example."),
            name("admin.example."),
            Serial(serial),
            Ttl::from_secs(1800),
            Ttl::from_secs(900),
            Ttl::from_secs(604800),
            Ttl::DAY,
        )
        .into()
    }

    #[test]
    fn soa_lookup() {
        let mut zone = Zone::new(name("example."));
        assert_eq!(zone.soa().unwrap_err(), ZonemdError::MissingSoa);

        zone.insert((name("Example."), 86400, soa(1)).into());
        zone.insert(
            (name("example."), 3600, Ns::new(name("ns1.example.")).into())
                .into(),
        );
        let record = zone.soa().unwrap();
        assert_eq!(record.data().serial(), Serial(1));
        assert_eq!(record.ttl(), Ttl::DAY);
        assert_eq!(record.class(), Class::IN);

        zone.insert((name("example."), 86400, soa(2)).into());
        assert_eq!(zone.soa().unwrap_err(), ZonemdError::MultipleSoa);
    }

    #[test]
    fn generic_soa() {
        let mut zone = Zone::new(name("example."));
        zone.insert(
            (
                name("example."),
                300,
                UnknownRecordData::<Bytes>::from_generic_str(
                    Rtype::SOA,
                    "\\# 22 00 00 00000001 0000000a 0000000b \
                     0000000c 0000000d",
                )
                .unwrap()
                .into(),
            )
                .into(),
        );
        let record = zone.soa().unwrap();
        assert_eq!(record.data().serial(), Serial(1));
        assert_eq!(record.data().minimum(), Ttl::from_secs(13));

        let mut zone = Zone::new(name("example."));
        zone.insert(
            (
                name("example."),
                300,
                UnknownRecordData::from_octets(
                    Rtype::SOA,
                    Bytes::from_static(b"\0\0\0"),
                )
                .unwrap()
                .into(),
            )
                .into(),
        );
        assert_eq!(zone.soa().unwrap_err(), ZonemdError::MalformedSoa);
    }

    #[test]
    fn duplicate_insert() {
        let mut zone = Zone::new(name("example."));
        assert!(zone.insert((name("example."), 86400, soa(1)).into()));
        assert!(!zone.insert((name("EXAMPLE."), 60, soa(1)).into()));
        assert_eq!(zone.len(), 1);
        assert_eq!(zone.soa().unwrap().ttl(), Ttl::from_secs(60));

        let records = zone.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ttl().as_secs(), 60);
    }

    #[test]
    fn remove_apex_rrsets() {
        let mut zone = Zone::new(name("example."));
        zone.insert((name("example."), 86400, soa(1)).into());
        zone.insert(
            (name("example."), 3600, Ns::new(name("ns1.example.")).into())
                .into(),
        );
        zone.insert(
            (
                name("sub.example."),
                3600,
                Ns::new(name("ns1.sub.example.")).into(),
            )
                .into(),
        );
        zone.remove_apex_rrsets(Rtype::NS);
        assert_eq!(zone.len(), 2);
        assert_eq!(zone.apex_records(Rtype::NS).count(), 0);
    }
}
