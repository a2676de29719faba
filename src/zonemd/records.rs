//! Records kept in canonical order.

use crate::base::cmp::CanonicalOrd;
use crate::base::iana::{Class, Rtype};
use crate::base::name::ToName;
use crate::base::rdata::RecordData;
use crate::base::record::Record;
use std::slice;

//------------ SortedRecords -------------------------------------------------

/// Records in the order a digest consumes them.
///
/// The order is class, owner, type and canonical data, which places the
/// records of each RRset next to each other. A record that only differs
/// from a stored one in its TTL is not stored again. The stored copy gets
/// the lower TTL instead.
#[derive(Clone, Debug)]
pub struct SortedRecords<N, D> {
    records: Vec<Record<N, D>>,
}

impl<N, D> SortedRecords<N, D> {
    pub fn new() -> Self {
        SortedRecords { records: Vec::new() }
    }

    /// Adds a record unless it is already present.
    ///
    /// A record that was present is handed back.
    pub fn insert(&mut self, record: Record<N, D>) -> Result<(), Record<N, D>>
    where
        N: ToName,
        D: RecordData + CanonicalOrd,
    {
        let pos = self
            .records
            .binary_search_by(|stored| stored.canonical_cmp(&record));
        let idx = match pos {
            Ok(idx) => idx,
            Err(idx) => {
                self.records.insert(idx, record);
                return Ok(());
            }
        };
        let stored = &mut self.records[idx];
        if record.ttl() < stored.ttl() {
            stored.set_ttl(record.ttl());
        }
        Err(record)
    }

    pub fn retain(&mut self, keep: impl FnMut(&Record<N, D>) -> bool) {
        self.records.retain(keep)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<Record<N, D>> {
        self.records.iter()
    }

    pub fn rrsets(&self) -> Rrsets<N, D> {
        Rrsets {
            rest: &self.records,
        }
    }

    /// Returns the records of `owner` and `rtype` in every class.
    pub fn owner_records<'a, NN: ToName>(
        &'a self,
        owner: &'a NN,
        rtype: Rtype,
    ) -> impl Iterator<Item = &'a Record<N, D>> + 'a
    where
        N: ToName,
        D: RecordData,
    {
        self.records.iter().filter(move |record| {
            record.rtype() == rtype && record.owner().name_eq(owner)
        })
    }

    pub fn into_inner(self) -> Vec<Record<N, D>> {
        self.records
    }
}

impl<N, D> Default for SortedRecords<N, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, D> FromIterator<Record<N, D>> for SortedRecords<N, D>
where
    N: ToName,
    D: RecordData + CanonicalOrd,
{
    fn from_iter<I: IntoIterator<Item = Record<N, D>>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<N, D> Extend<Record<N, D>> for SortedRecords<N, D>
where
    N: ToName,
    D: RecordData + CanonicalOrd,
{
    fn extend<I: IntoIterator<Item = Record<N, D>>>(&mut self, iter: I) {
        iter.into_iter().for_each(|record| {
            // Duplicates only lower the TTL of the stored copy.
            let _ = self.insert(record);
        })
    }
}

//------------ Rrset ---------------------------------------------------------

/// The records sharing owner, class and type. Never empty.
pub struct Rrset<'a, N, D> {
    records: &'a [Record<N, D>],
}

impl<'a, N, D> Rrset<'a, N, D> {
    fn head(&self) -> &'a Record<N, D> {
        &self.records[0]
    }

    pub fn owner(&self) -> &'a N {
        self.head().owner()
    }

    pub fn class(&self) -> Class {
        self.head().class()
    }

    pub fn rtype(&self) -> Rtype
    where
        D: RecordData,
    {
        self.head().rtype()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> slice::Iter<'a, Record<N, D>> {
        self.records.iter()
    }
}

//------------ Rrsets --------------------------------------------------------

/// Splits sorted records into RRsets.
pub struct Rrsets<'a, N, D> {
    rest: &'a [Record<N, D>],
}

impl<'a, N, D> Iterator for Rrsets<'a, N, D>
where
    N: ToName,
    D: RecordData,
{
    type Item = Rrset<'a, N, D>;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = self.rest.split_first()?;
        let len = 1 + tail
            .iter()
            .take_while(|record| {
                record.class() == head.class()
                    && record.rtype() == head.rtype()
                    && record.owner().name_eq(head.owner())
            })
            .count();
        let (records, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(Rrset { records })
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::name::Name;
    use crate::base::record::Ttl;
    use crate::rdata::{Ns, ZoneRecordData, A};

    type Data = ZoneRecordData<Vec<u8>, Name<Vec<u8>>>;
    type TestRecord = Record<Name<Vec<u8>>, Data>;

    fn name(s: &str) -> Name<Vec<u8>> {
        Name::vec_from_str(s).unwrap()
    }

    fn a(owner: &str, ttl: u32, last: u8) -> TestRecord {
        (name(owner), ttl, A::from_octets(192, 0, 2, last).into()).into()
    }

    fn ns(owner: &str, target: &str) -> TestRecord {
        (name(owner), 3600, Ns::new(name(target)).into()).into()
    }

    #[test]
    fn canonical_order() {
        let records: SortedRecords<_, _> = [
            a("z.example.", 3600, 1),
            a("example.", 3600, 2),
            ns("example.", "ns2.example."),
            a("example.", 3600, 1),
            a("A.example.", 3600, 1),
            ns("example.", "NS1.example."),
        ]
        .into_iter()
        .collect();
        let owners: Vec<_> = records
            .iter()
            .map(|record| format!("{} {}", record.owner(), record.rtype()))
            .collect();
        assert_eq!(
            owners,
            [
                "example A",
                "example A",
                "example NS",
                "example NS",
                "A.example A",
                "z.example A"
            ]
        );
        let ns: Vec<_> = records
            .owner_records(&name("EXAMPLE."), Rtype::NS)
            .map(|record| record.data().to_string())
            .collect();
        assert_eq!(ns, ["NS1.example.", "ns2.example."]);
    }

    #[test]
    fn duplicates_keep_lowest_ttl() {
        let mut records = SortedRecords::new();
        assert!(records.insert(a("example.", 3600, 1)).is_ok());
        assert!(records.insert(a("example.", 60, 1)).is_err());
        assert!(records.insert(a("EXAMPLE.", 7200, 1)).is_err());
        assert_eq!(records.len(), 1);
        assert_eq!(records.iter().next().unwrap().ttl(), Ttl::from_secs(60));
    }

    #[test]
    fn rrsets() {
        let records: SortedRecords<_, _> = [
            a("example.", 3600, 1),
            a("example.", 3600, 2),
            ns("example.", "ns1.example."),
            a("www.example.", 3600, 1),
        ]
        .into_iter()
        .collect();
        let sets: Vec<_> = records
            .rrsets()
            .map(|rrset| {
                (rrset.owner().to_string(), rrset.rtype(), rrset.len())
            })
            .collect();
        assert_eq!(
            sets,
            [
                ("example".into(), Rtype::A, 2),
                ("example".into(), Rtype::NS, 1),
                ("www.example".into(), Rtype::A, 1),
            ]
        );
        let empty = SortedRecords::<Name<Vec<u8>>, Data>::new();
        assert_eq!(empty.rrsets().count(), 0);
    }
}
