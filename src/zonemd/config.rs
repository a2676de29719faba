//! Configuration of the digest generator.

use super::digest::DigestPair;
use crate::base::record::Ttl;
use std::vec::Vec;

//------------ GenerateConfig ------------------------------------------------

/// Configuration for generating the ZONEMD records of a zone.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenerateConfig {
    /// The schemes and algorithms to create digests for.
    ///
    /// Never empty.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "deserialize_pairs")
    )]
    pairs: Vec<DigestPair>,

    /// Create placeholder records with a digest of all zeros.
    placeholder: bool,

    /// The TTL of the ZONEMD records.
    ///
    /// If this is `None`, the TTL of the SOA record is used.
    ttl: Option<Ttl>,

    /// Create record data in the generic form of RFC 3597.
    generic: bool,
}

impl GenerateConfig {
    /// Creates a new, default config.
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the pairs of scheme and algorithm digests are created for.
    pub fn pairs(&self) -> &[DigestPair] {
        &self.pairs
    }

    /// Sets the pairs of scheme and algorithm to create digests for.
    ///
    /// If the list is empty, the default pair of the SIMPLE scheme and
    /// SHA384 is used.
    pub fn set_pairs(&mut self, pairs: impl IntoIterator<Item = DigestPair>) {
        self.pairs = pairs.into_iter().collect();
        if self.pairs.is_empty() {
            self.pairs.push(DigestPair::default())
        }
    }

    /// Returns whether placeholder records are created.
    pub fn placeholder(&self) -> bool {
        self.placeholder
    }

    /// Sets whether placeholder records are created.
    ///
    /// A placeholder record has a digest of all zeros of the correct length
    /// for its algorithm. It is used when the zone is signed after adding
    /// the ZONEMD records. Once signing is done, the real digest is
    /// calculated and replaces the placeholder.
    pub fn set_placeholder(&mut self, placeholder: bool) {
        self.placeholder = placeholder
    }

    /// Returns the TTL of the records if explicitly set.
    pub fn ttl(&self) -> Option<Ttl> {
        self.ttl
    }

    /// Sets the TTL of the records.
    ///
    /// If set to `None`, the records use the TTL of the apex SOA record.
    pub fn set_ttl(&mut self, ttl: Option<Ttl>) {
        self.ttl = ttl
    }

    /// Returns whether record data in generic form is created.
    pub fn generic(&self) -> bool {
        self.generic
    }

    /// Sets whether the record data is created in generic form.
    pub fn set_generic(&mut self, generic: bool) {
        self.generic = generic
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        GenerateConfig {
            pairs: vec![DigestPair::default()],
            placeholder: false,
            ttl: None,
            generic: false,
        }
    }
}

/// Reads the pairs, replacing an empty list with the default pair.
#[cfg(feature = "serde")]
fn deserialize_pairs<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<DigestPair>, D::Error> {
    let mut pairs: Vec<DigestPair> =
        serde::Deserialize::deserialize(deserializer)?;
    if pairs.is_empty() {
        pairs.push(DigestPair::default())
    }
    Ok(pairs)
}

//============ Testing =======================================================
