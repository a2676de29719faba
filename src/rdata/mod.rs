//! Record data types.
//!
//! Only types that change the digest are modelled: everything embedding a
//! domain name that is lowercased in canonical form, RRSIG so signatures
//! over the apex ZONEMD RRset can be told apart, and ZONEMD itself. A and
//! AAAA come along because most zones are made of them. Every other type
//! stays [`UnknownRecordData`] inside [`ZoneRecordData`].

#[macro_use]
mod macros;

pub mod aaaa;
pub mod dname;
pub mod dnssec;
pub mod rfc1035;
pub mod srv;
pub mod zonemd;

pub use self::aaaa::Aaaa;
pub use self::dname::Dname;
pub use self::dnssec::Rrsig;
pub use self::rfc1035::{Cname, Mx, Ns, Ptr, Soa, Txt, A};
pub use self::srv::Srv;
pub use self::zonemd::Zonemd;

use crate::base::cmp::CanonicalOrd;
use crate::base::iana::Rtype;
use crate::base::name::{Name, ToName};
use crate::base::rdata::{ComposeRecordData, RecordData, UnknownRecordData};
use crate::base::wire::ParseError;
use core::cmp::Ordering;
use core::fmt;
use octseq::builder::{infallible, OctetsBuilder};
use octseq::octets::Octets;
use octseq::parse::Parser;

//------------ ZoneRecordData ------------------------------------------------

/// The data of any record in a zone.
///
/// Data given in the generic form of RFC 3597 stays `Unknown` even when
/// its type has a variant, so the same content can show up in two forms.
/// Generic data of a modelled type is composed canonically as if it had
/// been given typed. Equality and order compare that canonical form, so
/// both forms of the same data are one record.
#[derive(Clone)]
pub enum ZoneRecordData<Octs, Name> {
    A(A),
    Aaaa(Aaaa),
    Cname(Cname<Name>),
    Dname(Dname<Name>),
    Mx(Mx<Name>),
    Ns(Ns<Name>),
    Ptr(Ptr<Name>),
    Rrsig(Rrsig<Octs, Name>),
    Soa(Soa<Name>),
    Srv(Srv<Name>),
    Txt(Txt<Octs>),
    Zonemd(Zonemd<Octs>),
    Unknown(UnknownRecordData<Octs>),
}

/// Applies the expression to the data of whatever variant `$data` is.
macro_rules! with_data {
    ($data:expr, $inner:ident => $e:expr) => {
        match $data {
            ZoneRecordData::A($inner) => $e,
            ZoneRecordData::Aaaa($inner) => $e,
            ZoneRecordData::Cname($inner) => $e,
            ZoneRecordData::Dname($inner) => $e,
            ZoneRecordData::Mx($inner) => $e,
            ZoneRecordData::Ns($inner) => $e,
            ZoneRecordData::Ptr($inner) => $e,
            ZoneRecordData::Rrsig($inner) => $e,
            ZoneRecordData::Soa($inner) => $e,
            ZoneRecordData::Srv($inner) => $e,
            ZoneRecordData::Txt($inner) => $e,
            ZoneRecordData::Zonemd($inner) => $e,
            ZoneRecordData::Unknown($inner) => $e,
        }
    };
}

impl<Octs, N> ZoneRecordData<Octs, N> {
    /// Returns the type covered if this is an RRSIG record.
    ///
    /// This also works if the RRSIG record data is in generic form.
    pub fn rrsig_type_covered(&self) -> Option<Rtype>
    where
        Octs: AsRef<[u8]>,
    {
        match self {
            ZoneRecordData::Rrsig(rrsig) => Some(rrsig.type_covered()),
            ZoneRecordData::Unknown(data) if data.rtype() == Rtype::RRSIG => {
                match *data.as_slice() {
                    [high, low, ..] => {
                        Some(Rtype::from_int(u16::from_be_bytes([high, low])))
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

impl<Octs: AsRef<[u8]>> ZoneRecordData<Octs, Name<Octs>> {
    /// Parses record data of the given type.
    ///
    /// The parser needs to be limited to the record data. Record types
    /// without a dedicated type become [`UnknownRecordData`].
    pub fn parse<'a, Src: Octets<Range<'a> = Octs> + ?Sized>(
        rtype: Rtype,
        parser: &mut Parser<'a, Src>,
    ) -> Result<Self, ParseError> {
        let res = match rtype {
            Rtype::A => A::parse(parser).map(ZoneRecordData::A),
            Rtype::AAAA => Aaaa::parse(parser).map(ZoneRecordData::Aaaa),
            Rtype::CNAME => Cname::parse(parser).map(ZoneRecordData::Cname),
            Rtype::DNAME => Dname::parse(parser).map(ZoneRecordData::Dname),
            Rtype::MX => Mx::parse(parser).map(ZoneRecordData::Mx),
            Rtype::NS => Ns::parse(parser).map(ZoneRecordData::Ns),
            Rtype::PTR => Ptr::parse(parser).map(ZoneRecordData::Ptr),
            Rtype::RRSIG => Rrsig::parse(parser).map(ZoneRecordData::Rrsig),
            Rtype::SOA => Soa::parse(parser).map(ZoneRecordData::Soa),
            Rtype::SRV => Srv::parse(parser).map(ZoneRecordData::Srv),
            Rtype::TXT => Txt::parse(parser).map(ZoneRecordData::Txt),
            Rtype::ZONEMD => {
                Zonemd::parse(parser).map(ZoneRecordData::Zonemd)
            }
            _ => UnknownRecordData::parse(rtype, parser)
                .map(ZoneRecordData::Unknown),
        }?;
        if parser.remaining() != 0 {
            return Err(ParseError::form_error("trailing record data"));
        }
        Ok(res)
    }
}

impl<Octs: AsRef<[u8]>, N> ZoneRecordData<Octs, N> {
    /// Reads generic data of a modelled type as that type.
    ///
    /// Returns `None` for typed data, for types without a variant and for
    /// generic data that does not parse.
    fn typed_generic(&self) -> Option<ZoneRecordData<&[u8], Name<&[u8]>>> {
        let ZoneRecordData::Unknown(data) = self else {
            return None;
        };
        let mut parser = Parser::from_ref(data.as_slice());
        let parsed = ZoneRecordData::<&[u8], Name<&[u8]>>::parse(
            data.rtype(),
            &mut parser,
        );
        parsed.ok().filter(|typed| !typed.is_generic())
    }
}

//--- From

macro_rules! from_data {
    ( $( $variant:ident ( $ty:ty ) ),* ) => {
        $(
            impl<Octs, N> From<$ty> for ZoneRecordData<Octs, N> {
                fn from(data: $ty) -> Self {
                    ZoneRecordData::$variant(data)
                }
            }
        )*
    };
}

from_data!(
    A(A),
    Aaaa(Aaaa),
    Cname(Cname<N>),
    Dname(Dname<N>),
    Mx(Mx<N>),
    Ns(Ns<N>),
    Ptr(Ptr<N>),
    Rrsig(Rrsig<Octs, N>),
    Soa(Soa<N>),
    Srv(Srv<N>),
    Txt(Txt<Octs>),
    Zonemd(Zonemd<Octs>),
    Unknown(UnknownRecordData<Octs>)
);

//--- PartialEq and Eq

impl<O, N, OO, NN> PartialEq<ZoneRecordData<OO, NN>> for ZoneRecordData<O, N>
where
    O: AsRef<[u8]>,
    N: ToName,
    OO: AsRef<[u8]>,
    NN: ToName,
{
    fn eq(&self, other: &ZoneRecordData<OO, NN>) -> bool {
        self.rtype() == other.rtype()
            && self.canonical_cmp(other) == Ordering::Equal
    }
}

impl<O: AsRef<[u8]>, N: ToName> Eq for ZoneRecordData<O, N> {}

//--- CanonicalOrd

impl<O, N, OO, NN> CanonicalOrd<ZoneRecordData<OO, NN>>
    for ZoneRecordData<O, N>
where
    O: AsRef<[u8]>,
    N: ToName,
    OO: AsRef<[u8]>,
    NN: ToName,
{
    /// Compares the canonical wire format of the record data.
    ///
    /// The record type is not considered.
    fn canonical_cmp(&self, other: &ZoneRecordData<OO, NN>) -> Ordering {
        let mut left = Vec::new();
        let mut right = Vec::new();
        infallible(self.compose_canonical_rdata(&mut left));
        infallible(other.compose_canonical_rdata(&mut right));
        left.cmp(&right)
    }
}

//--- RecordData and ComposeRecordData

impl<Octs: AsRef<[u8]>, N> RecordData for ZoneRecordData<Octs, N> {
    fn rtype(&self) -> Rtype {
        with_data!(self, data => data.rtype())
    }

    fn is_generic(&self) -> bool {
        matches!(self, ZoneRecordData::Unknown(_))
    }
}

impl<Octs, N> ComposeRecordData for ZoneRecordData<Octs, N>
where
    Octs: AsRef<[u8]>,
    N: ToName,
{
    fn rdlen(&self) -> u16 {
        with_data!(self, data => data.rdlen())
    }

    fn compose_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        with_data!(self, data => data.compose_rdata(buf))
    }

    fn compose_canonical_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        if let Some(typed) = self.typed_generic() {
            return typed.compose_canonical_rdata(buf);
        }
        with_data!(self, data => data.compose_canonical_rdata(buf))
    }
}

//--- Display and Debug

impl<Octs, N> fmt::Display for ZoneRecordData<Octs, N>
where
    Octs: AsRef<[u8]>,
    N: ToName,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        with_data!(self, data => fmt::Display::fmt(data, f))
    }
}

impl<Octs, N> fmt::Debug for ZoneRecordData<Octs, N>
where
    Octs: AsRef<[u8]> + fmt::Debug,
    N: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        with_data!(self, data => fmt::Debug::fmt(data, f))
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::ZonemdAlgorithm;
    use crate::base::Serial;
    use bytes::Bytes;

    type Data = ZoneRecordData<Vec<u8>, Name<Vec<u8>>>;

    fn name(s: &str) -> Name<Vec<u8>> {
        Name::vec_from_str(s).unwrap()
    }

    #[test]
    fn typed_and_generic_are_equal() {
        let typed: Data = Ns::new(name("ns1.example.")).into();
        let generic: Data = UnknownRecordData::from_octets(
            Rtype::NS,
            b"\x03NS1\x07EXAMPLE\0".to_vec(),
        )
        .unwrap()
        .into();
        assert_eq!(typed.canonical_cmp(&generic), Ordering::Equal);
        assert!(typed == generic);
        assert!(!typed.is_generic());
        assert!(generic.is_generic());

        let other: Data = Ns::new(name("ns2.example.")).into();
        assert_eq!(typed.canonical_cmp(&other), Ordering::Less);
        assert_eq!(generic.canonical_cmp(&other), Ordering::Less);

        let mut buf = Vec::new();
        infallible(generic.compose_canonical_rdata(&mut buf));
        assert_eq!(buf, b"\x03ns1\x07example\0");
        infallible(generic.compose_rdata(&mut buf));
        assert_eq!(&buf[13..], b"\x03NS1\x07EXAMPLE\0");
    }

    #[test]
    fn generic_of_unmodelled_or_broken_type_stays_raw() {
        let unknown: Data = UnknownRecordData::from_octets(
            Rtype::from_int(65280),
            b"\x03NS1\0".to_vec(),
        )
        .unwrap()
        .into();
        let broken: Data = UnknownRecordData::from_octets(
            Rtype::NS,
            b"\x03NS1".to_vec(),
        )
        .unwrap()
        .into();
        for data in [unknown, broken] {
            let mut buf = Vec::new();
            infallible(data.compose_canonical_rdata(&mut buf));
            assert!(buf.starts_with(b"\x03NS1"));
        }
    }

    #[test]
    fn rrsig_type_covered() {
        let generic: Data = UnknownRecordData::from_octets(
            Rtype::RRSIG,
            b"\x00\x3f\x0d\x01".to_vec(),
        )
        .unwrap()
        .into();
        assert_eq!(generic.rrsig_type_covered(), Some(Rtype::ZONEMD));

        let other: Data = A::from_octets(192, 0, 2, 1).into();
        assert_eq!(other.rrsig_type_covered(), None);
    }

    #[test]
    fn parse_by_rtype() {
        let wire = Bytes::from_static(
            b"\x78\x48\xb9\x1c\x01\x02\
              \x00\x01\x02\x03\x04\x05\x06\x07\x08\x09",
        );
        let mut parser = Parser::from_ref(&wire);
        let data = ZoneRecordData::parse(Rtype::ZONEMD, &mut parser).unwrap();
        match data {
            ZoneRecordData::Zonemd(ref zonemd) => {
                assert_eq!(zonemd.serial(), Serial(2018031900));
                assert_eq!(zonemd.algorithm(), ZonemdAlgorithm::SHA512);
            }
            _ => panic!("expected ZONEMD data"),
        }

        let mut parser = Parser::from_ref(&wire);
        let data = ZoneRecordData::parse(Rtype::from_int(65280), &mut parser)
            .unwrap();
        assert!(data.is_generic());
        assert_eq!(data.rdlen(), 16);

        let short = Bytes::from_static(b"\xc0\x00\x02\x01\x00");
        let mut parser = Parser::from_ref(&short);
        assert!(ZoneRecordData::parse(Rtype::A, &mut parser).is_err());
    }
}
