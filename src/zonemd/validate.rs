//! Checking the ZONEMD records of a zone.

use super::codec::decode_apex;
use super::digest::{
    compute_digests, DigestPair, DigestScheme, HashAlgorithm,
};
use super::error::{DigestFailure, ZonemdError};
use super::zone::Zone;
use crate::base::serial::Serial;
use crate::rdata::Zonemd;
use crate::utils::base16;
use bytes::Bytes;
use core::fmt;
use std::vec::Vec;
use tracing::debug;

//------------ DigestVerdict -------------------------------------------------

/// The outcome of checking one ZONEMD record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DigestVerdict {
    pair: DigestPair,
    result: Result<(), DigestFailure>,
}

impl DigestVerdict {
    /// Returns the scheme and algorithm of the record.
    pub fn pair(&self) -> DigestPair {
        self.pair
    }

    /// Returns whether the record is fine.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Returns the reason the record failed if it did.
    pub fn failure(&self) -> Option<&DigestFailure> {
        self.result.as_ref().err()
    }

    pub fn result(&self) -> &Result<(), DigestFailure> {
        &self.result
    }
}

impl fmt::Display for DigestVerdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.result {
            Ok(()) => write!(f, "ZONEMD {}: ok", self.pair),
            Err(ref err) => write!(f, "ZONEMD {}: {}", self.pair, err),
        }
    }
}

//------------ ValidationReport ----------------------------------------------

/// The outcome of checking all ZONEMD records of a zone.
///
/// There is one verdict for each ZONEMD record at the apex, ordered by
/// scheme and algorithm.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationReport {
    serial: Serial,
    verdicts: Vec<DigestVerdict>,
}

impl ValidationReport {
    /// Returns the serial of the apex SOA record.
    pub fn serial(&self) -> Serial {
        self.serial
    }

    pub fn verdicts(&self) -> &[DigestVerdict] {
        &self.verdicts
    }

    /// Returns whether the zone is valid.
    ///
    /// This is the case if there is at least one ZONEMD record and all
    /// of them are fine.
    pub fn is_valid(&self) -> bool {
        !self.verdicts.is_empty()
            && self.verdicts.iter().all(DigestVerdict::is_ok)
    }

    /// Returns the failed records.
    pub fn failures(&self) -> impl Iterator<Item = &DigestVerdict> + '_ {
        self.verdicts.iter().filter(|verdict| !verdict.is_ok())
    }

    /// Converts the report into an error for the first failed record.
    pub fn into_result(self) -> Result<(), ZonemdError> {
        if self.verdicts.is_empty() {
            return Err(ZonemdError::MissingDigestRecord);
        }
        for verdict in self.verdicts {
            verdict.result?
        }
        Ok(())
    }
}

//------------ validate ------------------------------------------------------

/// Checks the ZONEMD records of a zone.
///
/// The function fails outright if the zone doesn’t have exactly one SOA
/// record at its apex, has no ZONEMD records at its apex, or any of these
/// records can’t be decoded or has the same scheme and algorithm as
/// another one.
///
/// Otherwise each record is checked in turn. First, its serial must match
/// that of the SOA record. Then its scheme and hash algorithm must be
/// known. Only then is the digest of the zone calculated and compared to
/// the digest of the record. The result of every check is returned in the
/// report.
pub fn validate(zone: &Zone) -> Result<ValidationReport, ZonemdError> {
    let serial = zone.soa()?.data().serial();
    let records = decode_apex(zone)?;
    if records.is_empty() {
        return Err(ZonemdError::MissingDigestRecord);
    }

    let checked: Vec<_> = records
        .iter()
        .map(|(pair, zonemd)| (*pair, check_record(zonemd, serial)))
        .collect();
    let digests = compute_digests(
        zone,
        checked
            .iter()
            .filter(|(_, result)| result.is_ok())
            .map(|(pair, _)| *pair),
    )?;

    let verdicts = checked
        .into_iter()
        .zip(records.iter())
        .map(|((pair, result), (_, zonemd))| {
            let result = result.and_then(|()| match digests.get(pair) {
                Some(digest) => compare_digest(zonemd, digest),
                None => Ok(()),
            });
            let verdict = DigestVerdict { pair, result };
            debug!("Zone {}: {}", zone.apex(), verdict);
            verdict
        })
        .collect();
    Ok(ValidationReport { serial, verdicts })
}

/// Performs the checks that don’t need the digest.
fn check_record(
    zonemd: &Zonemd<Bytes>,
    serial: Serial,
) -> Result<(), DigestFailure> {
    if zonemd.serial() != serial {
        return Err(DigestFailure::SerialMismatch {
            expected: serial,
            actual: zonemd.serial(),
        });
    }
    if DigestScheme::lookup(zonemd.scheme()).is_none() {
        return Err(DigestFailure::UnknownScheme(zonemd.scheme().to_int()));
    }
    if HashAlgorithm::lookup(zonemd.algorithm()).is_none() {
        return Err(DigestFailure::UnknownAlgorithm(
            zonemd.algorithm().to_int(),
        ));
    }
    Ok(())
}

fn compare_digest(
    zonemd: &Zonemd<Bytes>,
    digest: &[u8],
) -> Result<(), DigestFailure> {
    if zonemd.digest()[..] == *digest {
        Ok(())
    } else {
        Err(DigestFailure::DigestMismatch {
            expected: base16::encode_string(zonemd.digest()),
            actual: base16::encode_string(digest),
        })
    }
}

//============ Testing =======================================================
