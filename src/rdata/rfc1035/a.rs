//! IPv4 host addresses.

use crate::base::iana::Rtype;
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::wire::{Compose, Parse, ParseError};
use core::{fmt, str};
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;
use std::net::Ipv4Addr;

/// A record data: an IPv4 address in network byte order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct A {
    addr: Ipv4Addr,
}

impl A {
    pub fn new(addr: Ipv4Addr) -> A {
        A { addr }
    }

    pub fn from_octets(a: u8, b: u8, c: u8, d: u8) -> A {
        A::new(Ipv4Addr::new(a, b, c, d))
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<Octs>,
    ) -> Result<Self, ParseError> {
        Ipv4Addr::parse(parser).map(A::new)
    }
}

impl str::FromStr for A {
    type Err = std::net::AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(A::new)
    }
}

impl RecordData for A {
    fn rtype(&self) -> Rtype {
        Rtype::A
    }
}

impl ComposeRecordData for A {
    fn rdlen(&self) -> u16 {
        Ipv4Addr::COMPOSE_LEN
    }

    fn compose_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.addr.compose(buf)
    }
}

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.addr, f)
    }
}
