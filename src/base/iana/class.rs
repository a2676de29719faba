//! Record classes.

iana_code! {
    /// The class of a record.
    ///
    /// Only IN is seen in practice. A zone holds records of a single class,
    /// the one of its SOA record. Unnamed values use the `CLASS<n>` form of
    /// [RFC 3597].
    ///
    /// [RFC 3597]: https://tools.ietf.org/html/rfc3597
    Class: u16, "CLASS";

    /// Internet.
    IN = 1;

    /// Chaosnet.
    CH = 3;

    /// Hesiod.
    HS = 4;
}

#[cfg(test)]
mod test {
    use super::Class;

    #[test]
    fn text_form() {
        assert_eq!("in".parse(), Ok(Class::IN));
        assert_eq!("CLASS4".parse(), Ok(Class::HS));
        assert_eq!("class42".parse::<Class>().unwrap().to_int(), 42);
        assert!("CLASS".parse::<Class>().is_err());
        assert!("CLASS+1".parse::<Class>().is_err());
        assert!("NOPE".parse::<Class>().is_err());
        assert_eq!(Class::CH.to_string(), "CH");
        assert_eq!(Class::from_int(42).to_string(), "CLASS42");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Configure, Token};

        assert_tokens(&Class::IN.readable(), &[Token::Str("IN")]);
        assert_tokens(&Class::from_int(5).readable(), &[Token::Str("CLASS5")]);
        assert_tokens(&Class::IN.compact(), &[Token::U16(1)]);
    }
}
