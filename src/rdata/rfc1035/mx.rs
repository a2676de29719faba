//! Mail exchangers.

use crate::base::iana::Rtype;
use crate::base::name::{Name, ToName};
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::wire::{Compose, Parse, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::octets::Octets;
use octseq::parse::Parser;

/// MX record data: a mail exchange for the owner.
///
/// Lower preference values are tried first.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mx<N> {
    preference: u16,
    exchange: N,
}

impl<N> Mx<N> {
    pub fn new(preference: u16, exchange: N) -> Self {
        Mx {
            preference,
            exchange,
        }
    }

    pub fn preference(&self) -> u16 {
        self.preference
    }

    pub fn exchange(&self) -> &N {
        &self.exchange
    }
}

impl<Octs> Mx<Name<Octs>> {
    pub fn parse<'a, Src: Octets<Range<'a> = Octs> + ?Sized>(
        parser: &mut Parser<'a, Src>,
    ) -> Result<Self, ParseError> {
        let preference = u16::parse(parser)?;
        Ok(Mx::new(preference, Name::parse(parser)?))
    }
}

impl<N> RecordData for Mx<N> {
    fn rtype(&self) -> Rtype {
        Rtype::MX
    }
}

impl<N: ToName> ComposeRecordData for Mx<N> {
    fn rdlen(&self) -> u16 {
        u16::COMPOSE_LEN + self.exchange.compose_len()
    }

    fn compose_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.preference.compose(buf)?;
        self.exchange.compose(buf)
    }

    fn compose_canonical_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.preference.compose(buf)?;
        self.exchange.compose_canonical(buf)
    }
}

impl<N: ToName> fmt::Display for Mx<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange.fmt_with_dot())
    }
}
