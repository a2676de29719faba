//! Service locations, [RFC 2782].
//!
//! [RFC 2782]: https://tools.ietf.org/html/rfc2782

use crate::base::iana::Rtype;
use crate::base::name::{Name, ToName};
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::wire::{Compose, Parse, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::octets::Octets;
use octseq::parse::Parser;

/// SRV record data.
///
/// RFC 2782 wants the target left alone but RFC 4034 lists SRV among the
/// types whose names are lowercased in canonical form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Srv<N> {
    priority: u16,
    weight: u16,
    port: u16,
    target: N,
}

impl<N> Srv<N> {
    pub fn new(priority: u16, weight: u16, port: u16, target: N) -> Self {
        Srv {
            priority,
            weight,
            port,
            target,
        }
    }

    pub fn priority(&self) -> u16 {
        self.priority
    }

    pub fn weight(&self) -> u16 {
        self.weight
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn target(&self) -> &N {
        &self.target
    }

    fn compose_numbers<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        for value in [self.priority, self.weight, self.port] {
            value.compose(buf)?;
        }
        Ok(())
    }
}

impl<Octs> Srv<Name<Octs>> {
    pub fn parse<'a, Src: Octets<Range<'a> = Octs> + ?Sized>(
        parser: &mut Parser<'a, Src>,
    ) -> Result<Self, ParseError> {
        let priority = u16::parse(parser)?;
        let weight = u16::parse(parser)?;
        let port = u16::parse(parser)?;
        Ok(Srv::new(priority, weight, port, Name::parse(parser)?))
    }
}

impl<N> RecordData for Srv<N> {
    fn rtype(&self) -> Rtype {
        Rtype::SRV
    }
}

impl<N: ToName> ComposeRecordData for Srv<N> {
    fn rdlen(&self) -> u16 {
        3 * u16::COMPOSE_LEN + self.target.compose_len()
    }

    fn compose_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.compose_numbers(buf)?;
        self.target.compose(buf)
    }

    fn compose_canonical_rdata<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.compose_numbers(buf)?;
        self.target.compose_canonical(buf)
    }
}

impl<N: ToName> fmt::Display for Srv<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority,
            self.weight,
            self.port,
            self.target.fmt_with_dot()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::compose_checked;
    use octseq::builder::infallible;

    #[test]
    fn canonical_target() {
        let target = Name::vec_from_str("Example.com.").unwrap();
        let rdata = Srv::new(10, 11, 12, target);
        let wire = compose_checked(&rdata);
        let parsed = Srv::parse(&mut Parser::from_ref(wire.as_slice()));
        assert_eq!(parsed.unwrap().to_string(), "10 11 12 Example.com.");

        let mut canonical = Vec::new();
        infallible(rdata.compose_canonical_rdata(&mut canonical));
        assert_eq!(&canonical[..6], &wire[..6]);
        assert_eq!(&canonical[6..], b"\x07example\x03com\0");
    }
}
