//! Serde support shared by several types.
#![cfg(feature = "serde")]

use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;
use serde::de::{Deserialize, Deserializer, Error, Visitor};

/// Deserializes a code point from its integer or its mnemonic.
///
/// Human readable formats may use either. Compact formats always carry
/// the integer `N`.
pub fn deserialize_native_or_str<'de, D, T, N>(
    deserializer: D,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + From<N>,
    T::Err: fmt::Display,
    N: Deserialize<'de> + TryFrom<u64>,
{
    if !deserializer.is_human_readable() {
        return N::deserialize(deserializer).map(T::from);
    }
    deserializer.deserialize_any(CodeVisitor::<T, N>(PhantomData))
}

struct CodeVisitor<T, N>(PhantomData<(T, N)>);

impl<'de, T, N> Visitor<'de> for CodeVisitor<T, N>
where
    T: FromStr + From<N>,
    T::Err: fmt::Display,
    N: TryFrom<u64>,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a mnemonic")
    }

    fn visit_u64<E: Error>(self, value: u64) -> Result<T, E> {
        match N::try_from(value) {
            Ok(value) => Ok(T::from(value)),
            Err(_) => Err(E::custom("value out of range")),
        }
    }

    fn visit_str<E: Error>(self, value: &str) -> Result<T, E> {
        value.parse().map_err(E::custom)
    }
}
