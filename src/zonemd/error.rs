//! Error types for zone digests.

use super::digest::DigestPair;
use crate::base::Serial;
use core::fmt;

//------------ ZonemdError ---------------------------------------------------

/// An error happened while calculating or checking a zone digest.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ZonemdError {
    /// The collation scheme isn’t in the table of known schemes.
    UnknownScheme(u8),

    /// The hash algorithm isn’t in the table of known algorithms.
    UnknownAlgorithm(u8),

    /// ZONEMD record data could not be decoded.
    MalformedDigestRecord(&'static str),

    /// The zone does not contain a ZONEMD record at its apex.
    MissingDigestRecord,

    /// There is more than one digest for the same scheme and algorithm.
    DuplicateDigestRecord(DigestPair),

    /// The serial of a ZONEMD record differs from the serial of the zone.
    SerialMismatch {
        /// The serial of the apex SOA record.
        expected: Serial,

        /// The serial stored in the ZONEMD record.
        actual: Serial,
    },

    /// The stored digest differs from the digest of the zone.
    ///
    /// Both values are given in lower-case hex.
    DigestMismatch {
        /// The digest stored in the ZONEMD record.
        expected: String,

        /// The digest calculated over the zone.
        actual: String,
    },

    /// The zone does not have an SOA record at its apex.
    MissingSoa,

    /// The zone has more than one SOA record at its apex.
    MultipleSoa,

    /// The apex SOA record data is in generic form and cannot be parsed.
    MalformedSoa,

    /// Record data exceeds the size limit of 65535 octets.
    LongRecordData,
}

impl From<DigestFailure> for ZonemdError {
    fn from(err: DigestFailure) -> Self {
        match err {
            DigestFailure::UnknownScheme(code) => {
                ZonemdError::UnknownScheme(code)
            }
            DigestFailure::UnknownAlgorithm(code) => {
                ZonemdError::UnknownAlgorithm(code)
            }
            DigestFailure::SerialMismatch { expected, actual } => {
                ZonemdError::SerialMismatch { expected, actual }
            }
            DigestFailure::DigestMismatch { expected, actual } => {
                ZonemdError::DigestMismatch { expected, actual }
            }
        }
    }
}

impl fmt::Display for ZonemdError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ZonemdError::UnknownScheme(code) => {
                write!(f, "unknown ZONEMD scheme {}", code)
            }
            ZonemdError::UnknownAlgorithm(code) => {
                write!(f, "unknown ZONEMD hash algorithm {}", code)
            }
            ZonemdError::MalformedDigestRecord(msg) => {
                write!(f, "malformed ZONEMD record: {}", msg)
            }
            ZonemdError::MissingDigestRecord => {
                f.write_str("no ZONEMD record at the zone apex")
            }
            ZonemdError::DuplicateDigestRecord(pair) => {
                write!(f, "duplicate ZONEMD record for {}", pair)
            }
            ZonemdError::SerialMismatch { expected, actual } => write!(
                f,
                "SOA serial {} does not match ZONEMD serial {}",
                expected, actual
            ),
            ZonemdError::DigestMismatch {
                ref expected,
                ref actual,
            } => write!(
                f,
                "ZONEMD digest {} does not match calculated digest {}",
                expected, actual
            ),
            ZonemdError::MissingSoa => {
                f.write_str("no SOA record at the zone apex")
            }
            ZonemdError::MultipleSoa => {
                f.write_str("more than one SOA record at the zone apex")
            }
            ZonemdError::MalformedSoa => {
                f.write_str("malformed SOA record at the zone apex")
            }
            ZonemdError::LongRecordData => f.write_str("record data too long"),
        }
    }
}

impl std::error::Error for ZonemdError {}

//------------ DigestFailure -------------------------------------------------

/// The reason a single ZONEMD record failed validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DigestFailure {
    /// The collation scheme of the record is unknown.
    UnknownScheme(u8),

    /// The hash algorithm of the record is unknown.
    UnknownAlgorithm(u8),

    /// The serial of the record doesn’t match the SOA serial.
    SerialMismatch { expected: Serial, actual: Serial },

    /// The stored digest doesn’t match the zone.
    DigestMismatch { expected: String, actual: String },
}

impl fmt::Display for DigestFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&ZonemdError::from(self.clone()), f)
    }
}

impl std::error::Error for DigestFailure {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn diagnostics() {
        assert_eq!(
            ZonemdError::SerialMismatch {
                expected: Serial(2017120219),
                actual: Serial(3017120219),
            }
            .to_string(),
            "SOA serial 2017120219 does not match ZONEMD serial 3017120219"
        );
        assert_eq!(
            DigestFailure::DigestMismatch {
                expected: "00ff".into(),
                actual: "ff00".into(),
            }
            .to_string(),
            "ZONEMD digest 00ff does not match calculated digest ff00"
        );
        assert_eq!(
            ZonemdError::UnknownScheme(7).to_string(),
            "unknown ZONEMD scheme 7"
        );
        assert_eq!(
            DigestFailure::UnknownAlgorithm(9).to_string(),
            "unknown ZONEMD hash algorithm 9"
        );
    }
}
