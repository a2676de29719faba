//! The macro defining the code point types.

/// Defines a newtype over an integer code point.
///
/// The header names the type, its integer and its text form: `decimal`
/// for registries whose presentation format is the plain number, or a
/// prefix string such as `"TYPE"` for mnemonics with the RFC 3597
/// fallback. Each following `NAME = value;` line defines a constant whose
/// name doubles as the mnemonic.
macro_rules! iana_code {
    (@text $name:ident, $int:ty, decimal) => {
        impl core::str::FromStr for $name {
            type Err = core::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map($name)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                <$int as serde::Deserialize>::deserialize(deserializer)
                    .map($name)
            }
        }
    };

    (@text $name:ident, $int:ty, $prefix:literal) => {
        impl core::str::FromStr for $name {
            type Err = $crate::base::iana::FromStrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if let Some(value) = Self::from_mnemonic(s.as_bytes()) {
                    return Ok(value);
                }
                let digits = s
                    .get(..$prefix.len())
                    .filter(|head| head.eq_ignore_ascii_case($prefix))
                    .map(|_| &s[$prefix.len()..])
                    .filter(|tail| {
                        !tail.is_empty()
                            && tail.bytes().all(|ch| ch.is_ascii_digit())
                    })
                    .ok_or($crate::base::iana::FromStrError)?;
                digits
                    .parse()
                    .map($name)
                    .map_err(|_| $crate::base::iana::FromStrError)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                match self.to_mnemonic_str() {
                    Some(mnemonic) => f.write_str(mnemonic),
                    None => write!(f, "{}{}", $prefix, self.0),
                }
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                if serializer.is_human_readable() {
                    serializer.collect_str(self)
                } else {
                    serde::Serialize::serialize(&self.0, serializer)
                }
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                $crate::base::serde::deserialize_native_or_str::<
                    D,
                    Self,
                    $int,
                >(deserializer)
            }
        }
    };

    (
        $(#[$attr:meta])*
        $name:ident: $int:ty, $text:tt;
        $( $(#[$cattr:meta])* $code:ident = $value:literal; )*
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $name($int);

        impl $name {
            $(
                $(#[$cattr])*
                pub const $code: $name = $name($value);
            )*

            const MNEMONICS: &'static [($int, &'static str)] = &[
                $( ($value, stringify!($code)), )*
            ];

            #[must_use]
            pub const fn from_int(value: $int) -> Self {
                $name(value)
            }

            #[must_use]
            pub const fn to_int(self) -> $int {
                self.0
            }

            /// Looks up a mnemonic, ignoring ASCII case.
            #[must_use]
            pub fn from_mnemonic(mnemonic: &[u8]) -> Option<Self> {
                Self::MNEMONICS
                    .iter()
                    .find(|(_, text)| {
                        text.as_bytes().eq_ignore_ascii_case(mnemonic)
                    })
                    .map(|&(value, _)| $name(value))
            }

            #[must_use]
            pub fn to_mnemonic_str(self) -> Option<&'static str> {
                Self::MNEMONICS
                    .iter()
                    .find(|&&(value, _)| value == self.0)
                    .map(|&(_, text)| text)
            }
        }

        impl From<$int> for $name {
            fn from(value: $int) -> Self {
                $name(value)
            }
        }

        impl From<$name> for $int {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl $crate::base::wire::Compose for $name {
            const COMPOSE_LEN: u16 =
                <$int as $crate::base::wire::Compose>::COMPOSE_LEN;

            fn compose<B: octseq::builder::OctetsBuilder + ?Sized>(
                &self,
                buf: &mut B,
            ) -> Result<(), B::AppendError> {
                $crate::base::wire::Compose::compose(&self.0, buf)
            }
        }

        impl<'a, Octs> $crate::base::wire::Parse<'a, Octs> for $name
        where
            Octs: AsRef<[u8]> + ?Sized,
        {
            fn parse(
                parser: &mut octseq::parse::Parser<'a, Octs>,
            ) -> Result<Self, $crate::base::wire::ParseError> {
                <$int as $crate::base::wire::Parse<'a, Octs>>::parse(parser)
                    .map($name)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                match self.to_mnemonic_str() {
                    Some(mnemonic) => {
                        write!(f, "{}::{}", stringify!($name), mnemonic)
                    }
                    None => write!(f, "{}({})", stringify!($name), self.0),
                }
            }
        }

        iana_code!(@text $name, $int, $text);
    };
}
