//! Start of authority.

use crate::base::iana::Rtype;
use crate::base::name::{Name, ToName};
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::record::Ttl;
use crate::base::serial::Serial;
use crate::base::wire::{Compose, Parse, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::octets::Octets;
use octseq::parse::Parser;

/// SOA record data.
///
/// Marks the apex of a zone. The serial names the version of the zone,
/// which a zone digest is bound to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Soa<N> {
    mname: N,
    rname: N,
    serial: Serial,
    refresh: Ttl,
    retry: Ttl,
    expire: Ttl,
    minimum: Ttl,
}

impl<N> Soa<N> {
    pub fn new(
        mname: N,
        rname: N,
        serial: Serial,
        refresh: Ttl,
        retry: Ttl,
        expire: Ttl,
        minimum: Ttl,
    ) -> Self {
        Soa {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    /// The primary name server.
    pub fn mname(&self) -> &N {
        &self.mname
    }

    /// The mailbox of the person responsible, as a name.
    pub fn rname(&self) -> &N {
        &self.rname
    }

    pub fn serial(&self) -> Serial {
        self.serial
    }

    pub fn refresh(&self) -> Ttl {
        self.refresh
    }

    pub fn retry(&self) -> Ttl {
        self.retry
    }

    pub fn expire(&self) -> Ttl {
        self.expire
    }

    pub fn minimum(&self) -> Ttl {
        self.minimum
    }

    /// Appends everything after the two names.
    fn compose_timers<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.serial.compose(buf)?;
        for ttl in [self.refresh, self.retry, self.expire, self.minimum] {
            ttl.compose(buf)?;
        }
        Ok(())
    }
}

impl<Octs> Soa<Name<Octs>> {
    pub fn parse<'a, Src: Octets<Range<'a> = Octs> + ?Sized>(
        parser: &mut Parser<'a, Src>,
    ) -> Result<Self, ParseError> {
        let mname = Name::parse(parser)?;
        let rname = Name::parse(parser)?;
        let serial = Serial::parse(parser)?;
        let mut ttl = || Ttl::parse(parser);
        Ok(Soa::new(mname, rname, serial, ttl()?, ttl()?, ttl()?, ttl()?))
    }
}

impl<N> RecordData for Soa<N> {
    fn rtype(&self) -> Rtype {
        Rtype::SOA
    }
}

impl<N: ToName> ComposeRecordData for Soa<N> {
    fn rdlen(&self) -> u16 {
        self.mname.compose_len()
            + self.rname.compose_len()
            + Serial::COMPOSE_LEN
            + 4 * Ttl::COMPOSE_LEN
    }

    fn compose_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.mname.compose(buf)?;
        self.rname.compose(buf)?;
        self.compose_timers(buf)
    }

    fn compose_canonical_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.mname.compose_canonical(buf)?;
        self.rname.compose_canonical(buf)?;
        self.compose_timers(buf)
    }
}

impl<N: ToName> fmt::Display for Soa<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname.fmt_with_dot(),
            self.rname.fmt_with_dot(),
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
    }
}
