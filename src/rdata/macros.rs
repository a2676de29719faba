//! Macros for use in rdata definitions.

/// Defines record data consisting of nothing but one domain name.
///
/// All such types are on the list of section 6.2 of RFC 4034, so the name
/// is lowercased in canonical form.
macro_rules! name_type {
    ( $(#[$attr:meta])* $target:ident: $rtype:ident, $field:ident ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, PartialEq)]
        pub struct $target<N> {
            $field: N,
        }

        impl<N> $target<N> {
            pub fn new($field: N) -> Self {
                $target { $field }
            }

            pub fn $field(&self) -> &N {
                &self.$field
            }
        }

        impl<Octs> $target<$crate::base::name::Name<Octs>> {
            pub fn parse<'a, Src>(
                parser: &mut octseq::parse::Parser<'a, Src>,
            ) -> Result<Self, $crate::base::wire::ParseError>
            where
                Src: octseq::octets::Octets<Range<'a> = Octs> + ?Sized,
            {
                $crate::base::name::Name::parse(parser).map(Self::new)
            }
        }

        impl<N> $crate::base::rdata::RecordData for $target<N> {
            fn rtype(&self) -> $crate::base::iana::Rtype {
                $crate::base::iana::Rtype::$rtype
            }
        }

        impl<N: $crate::base::name::ToName>
            $crate::base::rdata::ComposeRecordData for $target<N>
        {
            fn rdlen(&self) -> u16 {
                $crate::base::name::ToName::compose_len(&self.$field)
            }

            fn compose_rdata<B: octseq::builder::OctetsBuilder + ?Sized>(
                &self,
                buf: &mut B,
            ) -> Result<(), B::AppendError> {
                $crate::base::name::ToName::compose(&self.$field, buf)
            }

            fn compose_canonical_rdata<B>(
                &self,
                buf: &mut B,
            ) -> Result<(), B::AppendError>
            where
                B: octseq::builder::OctetsBuilder + ?Sized,
            {
                $crate::base::name::ToName::compose_canonical(
                    &self.$field,
                    buf,
                )
            }
        }

        impl<N: $crate::base::name::ToName> core::fmt::Display
            for $target<N>
        {
            fn fmt(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                let name = &self.$field;
                write!(f, "{}", $crate::base::name::ToName::fmt_with_dot(name))
            }
        }
    };
}
