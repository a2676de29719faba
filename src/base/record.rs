//! Records and their TTLs.

use super::cmp::CanonicalOrd;
use super::iana::{Class, Rtype};
use super::name::ToName;
use super::rdata::{ComposeRecordData, RecordData};
use super::wire::{Compose, Parse, ParseError};
use core::cmp::Ordering;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Record --------------------------------------------------------

/// A resource record.
///
/// The record type comes from the data via [`RecordData`]. Two records are
/// equal when owner, class and data are; the TTL is ignored.
#[derive(Clone, Debug)]
pub struct Record<Name, Data> {
    owner: Name,
    class: Class,
    ttl: Ttl,
    data: Data,
}

impl<Name, Data> Record<Name, Data> {
    pub fn new(owner: Name, class: Class, ttl: Ttl, data: Data) -> Self {
        Record {
            owner,
            class,
            ttl,
            data,
        }
    }

    pub fn owner(&self) -> &Name {
        &self.owner
    }

    pub fn rtype(&self) -> Rtype
    where
        Data: RecordData,
    {
        self.data.rtype()
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn ttl(&self) -> Ttl {
        self.ttl
    }

    pub fn set_ttl(&mut self, ttl: Ttl) {
        self.ttl = ttl
    }

    pub fn data(&self) -> &Data {
        &self.data
    }
}

impl<N: ToName, D: ComposeRecordData> Record<N, D> {
    /// Appends the canonical wire format of the record.
    ///
    /// This is the form of section 6.2 of [RFC 4034] with the record's own
    /// TTL: the owner and any names in the data that call for it are
    /// lowercased and nothing is compressed.
    ///
    /// [RFC 4034]: https://tools.ietf.org/html/rfc4034
    pub fn compose_canonical<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.owner.compose_canonical(buf)?;
        self.data.rtype().compose(buf)?;
        self.class.compose(buf)?;
        self.ttl.compose(buf)?;
        self.data.compose_canonical_len_rdata(buf)
    }
}

/// An `IN` record from owner, TTL and data.
impl<N, D> From<(N, u32, D)> for Record<N, D> {
    fn from((owner, ttl, data): (N, u32, D)) -> Self {
        Self::new(owner, Class::IN, Ttl(ttl), data)
    }
}

impl<N: PartialEq, D: PartialEq> PartialEq for Record<N, D> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner
            && self.class == other.class
            && self.data == other.data
    }
}

impl<N: Eq, D: Eq> Eq for Record<N, D> {}

impl<N, D> CanonicalOrd for Record<N, D>
where
    N: ToName,
    D: RecordData + CanonicalOrd,
{
    /// Orders by class, owner, type and data.
    ///
    /// Keeping the class first leaves all records of one zone together.
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.class
            .cmp(&other.class)
            .then_with(|| self.owner.name_cmp(&other.owner))
            .then_with(|| self.rtype().cmp(&other.rtype()))
            .then_with(|| self.data.canonical_cmp(&other.data))
    }
}

impl<N, D> fmt::Display for Record<N, D>
where
    N: ToName,
    D: RecordData + fmt::Display,
{
    /// Writes the record as a zone file line.
    ///
    /// Data held in generic form comes with the generic `TYPE<n>`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.owner.fmt_with_dot(),
            self.ttl,
            self.class
        )?;
        if self.data.is_generic() {
            write!(f, "TYPE{}", self.rtype().to_int())?;
        } else {
            write!(f, "{}", self.rtype())?;
        }
        write!(f, " {}", self.data)
    }
}

//------------ Ttl -----------------------------------------------------------

/// A time to live in seconds.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ttl(u32);

impl Ttl {
    pub const HOUR: Ttl = Ttl(3600);
    pub const DAY: Ttl = Ttl(86400);

    #[must_use]
    pub const fn from_secs(secs: u32) -> Self {
        Ttl(secs)
    }

    #[must_use]
    pub const fn as_secs(self) -> u32 {
        self.0
    }
}

impl Compose for Ttl {
    const COMPOSE_LEN: u16 = 4;

    fn compose<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.0.compose(buf)
    }
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for Ttl {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        u32::parse(parser).map(Ttl)
    }
}

impl From<u32> for Ttl {
    fn from(secs: u32) -> Self {
        Ttl(secs)
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::name::Name;
    use crate::base::rdata::UnknownRecordData;
    use crate::rdata::{Ns, ZoneRecordData, A};
    use octseq::builder::infallible;

    #[test]
    fn compose_canonical_lowercases() {
        let record = Record::new(
            Name::vec_from_str("WWW.Example.").unwrap(),
            Class::IN,
            Ttl::HOUR,
            Ns::new(Name::vec_from_str("NS1.Example.").unwrap()),
        );
        let mut buf = Vec::new();
        infallible(record.compose_canonical(&mut buf));
        assert_eq!(
            buf,
            b"\x03www\x07example\0\
              \x00\x02\x00\x01\x00\x00\x0e\x10\x00\x0d\
              \x03ns1\x07example\0"
                .as_ref()
        );
    }

    #[test]
    fn ttl_is_not_part_of_identity() {
        let owner = Name::vec_from_str("example.").unwrap();
        let a1: Record<_, ZoneRecordData<Vec<u8>, Name<Vec<u8>>>> =
            (owner.clone(), 3600, A::from_octets(192, 0, 2, 1).into()).into();
        let a2: Record<_, ZoneRecordData<Vec<u8>, Name<Vec<u8>>>> =
            (owner, 60, A::from_octets(192, 0, 2, 2).into()).into();
        assert_eq!(a1.canonical_cmp(&a2), Ordering::Less);

        let mut a1_ttl = a1.clone();
        a1_ttl.set_ttl(Ttl::from_secs(1));
        assert_eq!(a1.canonical_cmp(&a1_ttl), Ordering::Equal);
        assert_eq!(a1, a1_ttl);
        assert_ne!(a1, a2);
    }

    #[test]
    fn display() {
        let record = Record::new(
            Name::vec_from_str("example.").unwrap(),
            Class::IN,
            Ttl::from_secs(300),
            UnknownRecordData::from_octets(
                Rtype::from_int(65280),
                vec![0xde, 0xad],
            )
            .unwrap(),
        );
        assert_eq!(
            record.to_string(),
            "example. 300 IN TYPE65280 \\# 2 dead"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ttl_ser_de() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Ttl::HOUR,
            &[Token::NewtypeStruct { name: "Ttl" }, Token::U32(3600)],
        );
    }
}
