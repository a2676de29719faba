//! Record types of [RFC 1035] that commonly make up a zone.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

pub use self::a::A;
pub use self::mx::Mx;
pub use self::name::{Cname, Ns, Ptr};
pub use self::soa::Soa;
pub use self::txt::{Txt, TxtError, TxtIter};

mod a;
mod mx;
mod name;
mod soa;
mod txt;
