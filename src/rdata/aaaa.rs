//! IPv6 host addresses, [RFC 3596].
//!
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

use crate::base::iana::Rtype;
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::wire::{Compose, Parse, ParseError};
use core::{fmt, str};
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;
use std::net::Ipv6Addr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Aaaa {
    addr: Ipv6Addr,
}

impl Aaaa {
    pub fn new(addr: Ipv6Addr) -> Aaaa {
        Aaaa { addr }
    }

    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<Octs>,
    ) -> Result<Self, ParseError> {
        Ipv6Addr::parse(parser).map(Aaaa::new)
    }
}

impl str::FromStr for Aaaa {
    type Err = std::net::AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Aaaa::new)
    }
}

impl RecordData for Aaaa {
    fn rtype(&self) -> Rtype {
        Rtype::AAAA
    }
}

impl ComposeRecordData for Aaaa {
    fn rdlen(&self) -> u16 {
        Ipv6Addr::COMPOSE_LEN
    }

    fn compose_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.addr.compose(buf)
    }
}

impl fmt::Display for Aaaa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.addr, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::compose_checked;

    #[test]
    fn wire_and_text() {
        let rdata: Aaaa = "2001:db8::63".parse().unwrap();
        let wire = compose_checked(&rdata);
        assert_eq!(wire.len(), 16);
        assert_eq!(&wire[..4], b"\x20\x01\x0d\xb8");
        let parsed = Aaaa::parse(&mut Parser::from_ref(wire.as_slice()));
        assert_eq!(parsed, Ok(rdata));
        assert_eq!(rdata.to_string(), "2001:db8::63");
    }
}
