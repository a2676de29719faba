//! ZONEMD parameters.
//!
//! Both registries are presented as plain numbers in zone files.

iana_code! {
    /// How zone data is collated before hashing.
    ///
    /// Which schemes can be used is decided by the scheme table in
    /// [`zonemd::digest`][crate::zonemd::digest].
    ZonemdScheme: u8, decimal;

    SIMPLE = 1;
}

iana_code! {
    /// The hash algorithm of a zone digest.
    ZonemdAlgorithm: u8, decimal;

    SHA384 = 1;
    SHA512 = 2;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decimal_presentation() {
        assert_eq!(ZonemdScheme::SIMPLE.to_string(), "1");
        assert_eq!(ZonemdAlgorithm::SHA512.to_string(), "2");
        assert_eq!("1".parse(), Ok(ZonemdAlgorithm::SHA384));
        assert_eq!(
            ZonemdAlgorithm::from_mnemonic(b"sha384"),
            Some(ZonemdAlgorithm::SHA384)
        );
        assert!("SHA384".parse::<ZonemdAlgorithm>().is_err());
        assert_eq!(
            format!("{:?}", ZonemdAlgorithm::from_int(9)),
            "ZonemdAlgorithm(9)"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(&ZonemdScheme::SIMPLE, &[Token::U8(1)]);
        assert_tokens(&ZonemdAlgorithm::from_int(9), &[Token::U8(9)]);
    }
}
