//! Serial numbers.

use super::wire::{Compose, Parse, ParseError};
use core::{fmt, str};
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};

//------------ Serial --------------------------------------------------------

/// A 32 bit serial number.
///
/// The SOA record carries the version of a zone as a serial and a ZONEMD
/// record names the version its digest was calculated for. RRSIG records
/// use serials for their validity period.
///
/// A digest only applies to the exact zone version it names, so there is
/// only plain integer equality and no [RFC 1982] ordering:
/// `Serial(2017120219)` and `Serial(3017120219)` are simply different.
///
/// [RFC 1982]: https://tools.ietf.org/html/rfc1982
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Serial(pub u32);

impl Serial {
    pub fn into_int(self) -> u32 {
        self.0
    }

    /// Reads a signature time.
    ///
    /// RRSIG presentation format allows either the plain number of seconds
    /// since the epoch or a UTC date in `YYYYMMDDHHmmSS` form.
    pub fn rrsig_from_str(src: &str) -> Result<Self, IllegalSignatureTime> {
        if src.is_empty() || !src.bytes().all(|ch| ch.is_ascii_digit()) {
            return Err(IllegalSignatureTime);
        }
        match src.len() {
            14 => rrsig_date(src).ok_or(IllegalSignatureTime),
            len if len <= 10 => {
                src.parse().map(Serial).map_err(|_| IllegalSignatureTime)
            }
            _ => Err(IllegalSignatureTime),
        }
    }

    /// Returns a value displaying the serial as a signature time.
    pub fn fmt_rrsig(self) -> impl fmt::Display {
        SignatureTime(self)
    }
}

/// Converts a `YYYYMMDDHHmmSS` string of ASCII digits.
fn rrsig_date(src: &str) -> Option<Serial> {
    let field = |range: core::ops::Range<usize>| -> Option<u8> {
        src.get(range)?.parse().ok()
    };
    let year = src.get(0..4)?.parse().ok()?;
    let month = Month::try_from(field(4..6)?).ok()?;
    let date = Date::from_calendar_date(year, month, field(6..8)?).ok()?;
    let time = Time::from_hms(field(8..10)?, field(10..12)?, field(12..14)?)
        .ok()?;
    let secs = PrimitiveDateTime::new(date, time)
        .assume_utc()
        .unix_timestamp();
    u32::try_from(secs).ok().map(Serial)
}

impl Compose for Serial {
    const COMPOSE_LEN: u16 = 4;

    fn compose<B: OctetsBuilder + ?Sized>(
        &self,
        buf: &mut B,
    ) -> Result<(), B::AppendError> {
        self.0.compose(buf)
    }
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for Serial {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        u32::parse(parser).map(Serial)
    }
}

impl From<u32> for Serial {
    fn from(value: u32) -> Self {
        Serial(value)
    }
}

impl From<Serial> for u32 {
    fn from(serial: Serial) -> Self {
        serial.0
    }
}

impl str::FromStr for Serial {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Serial)
    }
}

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

//------------ SignatureTime -------------------------------------------------

struct SignatureTime(Serial);

impl fmt::Display for SignatureTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let secs = i64::from(self.0.into_int());
        let Ok(time) = OffsetDateTime::from_unix_timestamp(secs) else {
            return fmt::Display::fmt(&self.0, f);
        };
        write!(
            f,
            "{:04}{:02}{:02}{:02}{:02}{:02}",
            time.year(),
            u8::from(time.month()),
            time.day(),
            time.hour(),
            time.minute(),
            time.second()
        )
    }
}

//------------ IllegalSignatureTime ------------------------------------------

/// A string was not a valid signature time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IllegalSignatureTime;

impl fmt::Display for IllegalSignatureTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("illegal signature time")
    }
}

impl std::error::Error for IllegalSignatureTime {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn equality_is_exact() {
        // 10^9 apart, i.e., less than 2^31. RFC 1982 would call the
        // second one newer, but they name different zone versions.
        assert_ne!(Serial(2017120219), Serial(3017120219));
        assert_eq!(Serial(2018031900), "2018031900".parse().unwrap());
        assert_eq!(Serial(7).to_string(), "7");
    }

    #[test]
    fn rrsig_time() {
        let serial = Serial::rrsig_from_str("20180319000000").unwrap();
        assert_eq!(serial, Serial(1521417600));
        assert_eq!(serial.fmt_rrsig().to_string(), "20180319000000");
        assert_eq!(Serial::rrsig_from_str("1521417600"), Ok(serial));
        assert!(Serial::rrsig_from_str("20181319000000").is_err());
        assert!(Serial::rrsig_from_str("2018031900000").is_err());
        assert!(Serial::rrsig_from_str("-1").is_err());
        assert!(Serial::rrsig_from_str("").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Serial(42),
            &[Token::NewtypeStruct { name: "Serial" }, Token::U32(42)],
        );
    }
}
