//! Calculating zone digests.
//!
//! The collation schemes and hash algorithms that can be used for a digest
//! are listed in two static tables, [`DIGEST_SCHEMES`] and
//! [`HASH_ALGORITHMS`]. A scheme or algorithm not in these tables can’t be
//! used for calculating a digest and results in an error.

use super::collate;
use super::error::ZonemdError;
use super::zone::Zone;
use crate::base::iana::{Class, ZonemdAlgorithm, ZonemdScheme};
use core::fmt;
use ring::digest;
use std::slice;
use std::vec::Vec;
use tracing::debug;

//------------ DigestScheme --------------------------------------------------

/// The signature of a function collating a zone.
///
/// The function hands each piece of input for the hash function to the
/// closure and returns the number of records it collated.
pub type CollateFn = fn(&Zone, Class, &mut dyn FnMut(&[u8])) -> usize;

/// A known collation scheme.
pub struct DigestScheme {
    code: ZonemdScheme,
    mnemonic: &'static str,
    collate: CollateFn,
}

/// The collation schemes that can be used for zone digests.
pub static DIGEST_SCHEMES: [DigestScheme; 1] = [DigestScheme {
    code: ZonemdScheme::SIMPLE,
    mnemonic: "SIMPLE",
    collate: collate::simple,
}];

impl DigestScheme {
    /// Returns the scheme for the given code if it is known.
    pub fn lookup(code: ZonemdScheme) -> Option<&'static DigestScheme> {
        DIGEST_SCHEMES.iter().find(|scheme| scheme.code == code)
    }

    pub fn code(&self) -> ZonemdScheme {
        self.code
    }

    pub fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    /// Collates the records of `class` in the zone.
    pub fn collate(
        &self,
        zone: &Zone,
        class: Class,
        op: &mut dyn FnMut(&[u8]),
    ) -> usize {
        (self.collate)(zone, class, op)
    }
}

impl fmt::Debug for DigestScheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DigestScheme")
            .field("code", &self.code)
            .field("mnemonic", &self.mnemonic)
            .finish()
    }
}

//------------ HashAlgorithm -------------------------------------------------

/// A known hash algorithm.
pub struct HashAlgorithm {
    code: ZonemdAlgorithm,
    mnemonic: &'static str,
    digest_len: usize,
    algorithm: &'static digest::Algorithm,
}

/// The hash algorithms that can be used for zone digests.
pub static HASH_ALGORITHMS: [HashAlgorithm; 2] = [
    HashAlgorithm {
        code: ZonemdAlgorithm::SHA384,
        mnemonic: "SHA384",
        digest_len: 48,
        algorithm: &digest::SHA384,
    },
    HashAlgorithm {
        code: ZonemdAlgorithm::SHA512,
        mnemonic: "SHA512",
        digest_len: 64,
        algorithm: &digest::SHA512,
    },
];

impl HashAlgorithm {
    /// Returns the algorithm for the given code if it is known.
    pub fn lookup(code: ZonemdAlgorithm) -> Option<&'static HashAlgorithm> {
        HASH_ALGORITHMS.iter().find(|alg| alg.code == code)
    }

    pub fn code(&self) -> ZonemdAlgorithm {
        self.code
    }

    pub fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    /// Returns the length of a digest in octets.
    pub fn digest_len(&self) -> usize {
        self.digest_len
    }

    /// Starts calculating a digest.
    pub fn start(&self) -> DigestContext {
        DigestContext {
            context: digest::Context::new(self.algorithm),
        }
    }
}

impl fmt::Debug for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HashAlgorithm")
            .field("code", &self.code)
            .field("mnemonic", &self.mnemonic)
            .field("digest_len", &self.digest_len)
            .finish()
    }
}

//------------ DigestContext -------------------------------------------------

/// A digest being calculated.
pub struct DigestContext {
    context: digest::Context,
}

impl DigestContext {
    /// Adds input to the digest.
    pub fn update(&mut self, data: &[u8]) {
        self.context.update(data)
    }

    /// Finishes the digest.
    pub fn finish(self) -> Vec<u8> {
        self.context.finish().as_ref().into()
    }
}

//------------ DigestPair ----------------------------------------------------

/// The collation scheme and hash algorithm of a digest.
///
/// A zone can contain one digest for every pair.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DigestPair {
    scheme: ZonemdScheme,
    algorithm: ZonemdAlgorithm,
}

impl DigestPair {
    pub fn new(scheme: ZonemdScheme, algorithm: ZonemdAlgorithm) -> Self {
        DigestPair { scheme, algorithm }
    }

    pub fn scheme(self) -> ZonemdScheme {
        self.scheme
    }

    pub fn algorithm(self) -> ZonemdAlgorithm {
        self.algorithm
    }

    /// Looks up the scheme and algorithm in the tables.
    ///
    /// The scheme is checked first.
    pub fn resolve(
        self,
    ) -> Result<(&'static DigestScheme, &'static HashAlgorithm), ZonemdError>
    {
        let scheme = DigestScheme::lookup(self.scheme)
            .ok_or(ZonemdError::UnknownScheme(self.scheme.to_int()))?;
        let algorithm = HashAlgorithm::lookup(self.algorithm)
            .ok_or(ZonemdError::UnknownAlgorithm(self.algorithm.to_int()))?;
        Ok((scheme, algorithm))
    }
}

impl Default for DigestPair {
    /// Returns the pair of the SIMPLE scheme and SHA384.
    fn default() -> Self {
        DigestPair::new(ZonemdScheme::SIMPLE, ZonemdAlgorithm::SHA384)
    }
}

impl fmt::Display for DigestPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "scheme {} hash algorithm {}", self.scheme, self.algorithm)
    }
}

//------------ DigestSet -----------------------------------------------------

/// A set of values keyed by their digest pair.
///
/// Values are kept ordered by pair. Inserting a value for a pair already
/// present is an error.
#[derive(Clone, Debug)]
pub struct DigestSet<T> {
    items: Vec<(DigestPair, T)>,
}

impl<T> DigestSet<T> {
    pub fn new() -> Self {
        DigestSet { items: Vec::new() }
    }

    /// Adds a value for a pair.
    ///
    /// Fails with [`ZonemdError::DuplicateDigestRecord`] if the pair is
    /// already present.
    pub fn insert(
        &mut self,
        pair: DigestPair,
        value: T,
    ) -> Result<(), ZonemdError> {
        match self.items.binary_search_by_key(&pair, |item| item.0) {
            Ok(_) => Err(ZonemdError::DuplicateDigestRecord(pair)),
            Err(idx) => {
                self.items.insert(idx, (pair, value));
                Ok(())
            }
        }
    }

    pub fn get(&self, pair: DigestPair) -> Option<&T> {
        self.items
            .binary_search_by_key(&pair, |item| item.0)
            .ok()
            .map(|idx| &self.items[idx].1)
    }

    pub fn contains(&self, pair: DigestPair) -> bool {
        self.get(pair).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = DigestPair> + '_ {
        self.items.iter().map(|item| item.0)
    }

    pub fn iter(&self) -> slice::Iter<(DigestPair, T)> {
        self.items.iter()
    }

    /// Converts each value while keeping the pairs.
    pub fn map<U, F: FnMut(T) -> U>(self, mut op: F) -> DigestSet<U> {
        DigestSet {
            items: self
                .items
                .into_iter()
                .map(|(pair, value)| (pair, op(value)))
                .collect(),
        }
    }
}

impl<T> Default for DigestSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for DigestSet<T> {
    type Item = (DigestPair, T);
    type IntoIter = std::vec::IntoIter<(DigestPair, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

//------------ compute_digest ------------------------------------------------

/// Calculates the digest of a zone for a scheme and algorithm.
///
/// Fails if the scheme or algorithm are unknown or if the zone doesn’t
/// have exactly one SOA record. Only records in the class of the SOA
/// record are included.
pub fn compute_digest(
    zone: &Zone,
    pair: DigestPair,
) -> Result<Vec<u8>, ZonemdError> {
    let (scheme, algorithm) = pair.resolve()?;
    let class = zone.soa()?.class();
    let mut context = algorithm.start();
    let count = scheme.collate(zone, class, &mut |data| context.update(data));
    debug!(
        "Calculated {} {} digest over {} records of zone {}",
        scheme.mnemonic(),
        algorithm.mnemonic(),
        count,
        zone.apex()
    );
    Ok(context.finish())
}

/// Calculates the digests of a zone for several pairs at once.
///
/// The zone is collated only once per scheme. All pairs are checked
/// before any hashing happens and a pair given twice is an error.
pub fn compute_digests(
    zone: &Zone,
    pairs: impl IntoIterator<Item = DigestPair>,
) -> Result<DigestSet<Vec<u8>>, ZonemdError> {
    let mut contexts = DigestSet::new();
    for pair in pairs {
        let (_, algorithm) = pair.resolve()?;
        contexts.insert(pair, algorithm.start())?;
    }
    let class = zone.soa()?.class();
    for scheme in DIGEST_SCHEMES.iter() {
        let mut active: Vec<_> = contexts
            .items
            .iter_mut()
            .filter(|item| item.0.scheme() == scheme.code())
            .map(|item| &mut item.1)
            .collect();
        if active.is_empty() {
            continue;
        }
        let count = scheme.collate(zone, class, &mut |data| {
            for context in active.iter_mut() {
                context.update(data)
            }
        });
        debug!(
            "Collated {} records of zone {} for {} digests using {}",
            count,
            zone.apex(),
            active.len(),
            scheme.mnemonic()
        );
    }
    Ok(contexts.map(DigestContext::finish))
}

//============ Testing =======================================================
