//! Subtree redirection, [RFC 6672].
//!
//! RFC 6672 leaves lowercasing the target open. RFC 4034 lists DNAME among
//! the types with canonical names, which is what zone digests follow.
//!
//! [RFC 6672]: https://tools.ietf.org/html/rfc6672

name_type! {
    /// DNAME record data.
    Dname: DNAME, dname
}
