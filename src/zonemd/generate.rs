//! Adding ZONEMD records to a zone.

use super::codec::{decode_apex, encode};
use super::config::GenerateConfig;
use super::digest::{compute_digests, DigestPair, DigestSet};
use super::error::ZonemdError;
use super::zone::Zone;
use crate::base::iana::Rtype;
use crate::base::rdata::RecordData;
use crate::base::record::Record;
use tracing::debug;

//------------ Generator -----------------------------------------------------

/// Creates the ZONEMD records of a zone.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: GenerateConfig,
}

impl Generator {
    pub fn new(config: GenerateConfig) -> Self {
        Generator { config }
    }

    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Returns a copy of the zone with fresh ZONEMD records.
    ///
    /// All ZONEMD records at the apex are removed and one new record is
    /// added for each configured pair of scheme and algorithm. The records
    /// carry the serial of the apex SOA record. Their TTL is the TTL of
    /// the SOA record unless configured otherwise.
    ///
    /// The zone needs exactly one SOA record at its apex. All pairs must
    /// be known and distinct. Otherwise the function fails before any
    /// digest is calculated.
    pub fn generate(&self, zone: &Zone) -> Result<Zone, ZonemdError> {
        let soa = zone.soa()?;
        let serial = soa.data().serial();
        let ttl = self.config.ttl().unwrap_or_else(|| soa.ttl());

        let mut algorithms = DigestSet::new();
        for &pair in self.config.pairs() {
            let (_, algorithm) = pair.resolve()?;
            algorithms.insert(pair, algorithm)?;
        }
        let digests = if self.config.placeholder() {
            algorithms.map(|algorithm| vec![0; algorithm.digest_len()])
        } else {
            compute_digests(zone, algorithms.pairs())?
        };

        let mut res = zone.clone();
        res.remove_apex_rrsets(Rtype::ZONEMD);
        for (pair, digest) in digests {
            let data = encode(serial, pair, &digest)?
                .into_record_data(self.config.generic());
            let record =
                Record::new(zone.apex().clone(), soa.class(), ttl, data);
            debug!("Adding {}", record);
            res.insert(record);
        }
        Ok(res)
    }
}

//------------ generate ------------------------------------------------------

/// Returns a copy of the zone with ZONEMD records for the given pairs.
///
/// If `pairs` is empty, a digest for the SIMPLE scheme and SHA384 is
/// created. If `placeholder` is `true`, the digests are all zeros.
pub fn generate(
    zone: &Zone,
    pairs: impl IntoIterator<Item = DigestPair>,
    placeholder: bool,
) -> Result<Zone, ZonemdError> {
    let mut config = GenerateConfig::new();
    config.set_pairs(pairs);
    config.set_placeholder(placeholder);
    Generator::new(config).generate(zone)
}

/// Replaces the ZONEMD records of a zone with records for the real digest.
///
/// This is the second step after creating placeholder records and then
/// signing the zone. The pairs are taken from the ZONEMD records present
/// at the apex. The TTL and form of the first such record are kept.
pub fn update_placeholders(zone: &Zone) -> Result<Zone, ZonemdError> {
    let existing = decode_apex(zone)?;
    if existing.is_empty() {
        return Err(ZonemdError::MissingDigestRecord);
    }
    let mut config = GenerateConfig::new();
    config.set_pairs(existing.pairs());
    if let Some(record) = zone.apex_records(Rtype::ZONEMD).next() {
        config.set_ttl(Some(record.ttl()));
        config.set_generic(record.data().is_generic());
    }
    Generator::new(config).generate(zone)
}

//============ Testing =======================================================
