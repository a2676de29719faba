//! Record types.

iana_code! {
    /// The type of a record.
    ///
    /// Only the types that commonly make up a zone have constants. Others
    /// are shown in the `TYPE<n>` form of [RFC 3597].
    ///
    /// [RFC 3597]: https://tools.ietf.org/html/rfc3597
    Rtype: u16, "TYPE";

    A = 1;
    NS = 2;
    CNAME = 5;
    SOA = 6;
    PTR = 12;
    MX = 15;
    TXT = 16;
    AAAA = 28;
    SRV = 33;
    DNAME = 39;
    DS = 43;
    RRSIG = 46;
    NSEC = 47;
    DNSKEY = 48;
    NSEC3 = 50;

    /// Message digest for DNS zone, [RFC 8976].
    ///
    /// [RFC 8976]: https://tools.ietf.org/html/rfc8976
    ZONEMD = 63;
}
