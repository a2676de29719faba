//! Reading and writing the wire format.
//!
//! Zone content is only ever written as uncompressed wire data, so the
//! traits here are small. [`Compose`] appends a value of known length to
//! an [`OctetsBuilder`], [`Parse`] takes one from the front of a
//! [`Parser`].

use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::{Parser, ShortInput};
use std::net::{Ipv4Addr, Ipv6Addr};

//------------ Compose -------------------------------------------------------

/// A fixed-width value that can be appended in wire format.
pub trait Compose {
    /// The number of octets the value occupies on the wire.
    const COMPOSE_LEN: u16;

    fn compose<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError>;
}

//------------ Parse ---------------------------------------------------------

/// A value that can be taken from the front of a parser.
///
/// On error, the position of the parser is unspecified.
pub trait Parse<'a, Octs: ?Sized>: Sized {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError>;
}

macro_rules! fixed_width {
    ( $( $ty:ty: $len:literal, $octets:ident, $from:expr; )* ) => {
        $(
            impl Compose for $ty {
                const COMPOSE_LEN: u16 = $len;

                fn compose<B: OctetsBuilder + ?Sized>(
                    &self,
                    buf: &mut B,
                ) -> Result<(), B::AppendError> {
                    buf.append_slice(&self.$octets())
                }
            }

            impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for $ty {
                fn parse(
                    parser: &mut Parser<'a, Octs>,
                ) -> Result<Self, ParseError> {
                    let mut octets = [0u8; $len];
                    parser.parse_buf(&mut octets)?;
                    Ok(($from)(octets))
                }
            }
        )*
    };
}

fixed_width! {
    u8: 1, to_be_bytes, u8::from_be_bytes;
    u16: 2, to_be_bytes, u16::from_be_bytes;
    u32: 4, to_be_bytes, u32::from_be_bytes;
    Ipv4Addr: 4, octets, Ipv4Addr::from;
    Ipv6Addr: 16, octets, Ipv6Addr::from;
}

//============ Error Types ===================================================

//------------ ParseError ----------------------------------------------------

/// Wire data could not be parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The data ended too early.
    ShortInput,

    /// The data was there but malformed.
    Form(FormError),
}

impl ParseError {
    pub fn form_error(msg: &'static str) -> Self {
        ParseError::Form(FormError(msg))
    }
}

impl From<ShortInput> for ParseError {
    fn from(_: ShortInput) -> Self {
        ParseError::ShortInput
    }
}

impl From<FormError> for ParseError {
    fn from(err: FormError) -> Self {
        ParseError::Form(err)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::ShortInput => f.write_str("short wire data"),
            ParseError::Form(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for ParseError {}

//------------ FormError -----------------------------------------------------

/// Malformed wire data, described by a static message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormError(&'static str);

impl FormError {
    pub fn new(msg: &'static str) -> Self {
        FormError(msg)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for FormError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use octseq::builder::infallible;

    #[test]
    fn network_byte_order() {
        let mut buf = Vec::new();
        infallible(0x0102u16.compose(&mut buf));
        infallible(Ipv4Addr::new(192, 0, 2, 1).compose(&mut buf));
        assert_eq!(buf, [1, 2, 192, 0, 2, 1]);
        assert_eq!(Ipv6Addr::COMPOSE_LEN, 16);

        let mut parser = Parser::from_ref(buf.as_slice());
        assert_eq!(u32::parse(&mut parser), Ok(0x0102_c000));
        assert_eq!(u16::parse(&mut parser), Ok(0x0201));
        assert_eq!(u8::parse(&mut parser), Err(ParseError::ShortInput));
    }
}
