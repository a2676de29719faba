//! Record types holding a single domain name.

name_type! {
    /// The canonical name of an alias.
    Cname: CNAME, cname
}

name_type! {
    /// A host authoritative for the owner's zone.
    Ns: NS, nsdname
}

name_type! {
    /// A pointer to another place in the name space.
    Ptr: PTR, ptrdname
}
