//! Code points from the IANA DNS registries.
//!
//! Each registry gets a newtype over its integer so that any value can be
//! represented, with constants for the values this crate cares about.
//! The constant names double as mnemonics for the text form.

use core::fmt;

pub use self::class::Class;
pub use self::rtype::Rtype;
pub use self::secalg::SecurityAlgorithm;
pub use self::zonemd::{ZonemdAlgorithm, ZonemdScheme};

#[macro_use]
mod macros;

pub mod class;
pub mod rtype;
pub mod secalg;
pub mod zonemd;

//------------ FromStrError --------------------------------------------------

/// A string was neither a known mnemonic nor the generic form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FromStrError;

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("unknown mnemonic")
    }
}

impl std::error::Error for FromStrError {}
