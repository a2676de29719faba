//! DNSSEC algorithm numbers.

iana_code! {
    /// The algorithm of a DNSSEC signature.
    ///
    /// Digesting never checks signatures. The value is only carried along
    /// in RRSIG record data.
    SecurityAlgorithm: u8, decimal;

    RSASHA1 = 5;
    RSASHA256 = 8;
    RSASHA512 = 10;
    ECDSAP256SHA256 = 13;
    ECDSAP384SHA384 = 14;
    ED25519 = 15;
    ED448 = 16;
}
