//! Encoding of Base 64.
//!
//! The Base 64 encoding is defined in [RFC 4648]. The DNS only uses the
//! original *base64* variant with padding. Only encoding is needed here:
//! signatures are shown in presentation format but never read back from
//! it.
//!
//! [RFC 4648]: https://tools.ietf.org/html/rfc4648

use core::fmt;

/// Encodes binary data in *base64* and writes it into a format stream.
pub fn display<B, W>(bytes: &B, f: &mut W) -> fmt::Result
where
    B: AsRef<[u8]> + ?Sized,
    W: fmt::Write,
{
    for chunk in bytes.as_ref().chunks(3) {
        let group = chunk
            .iter()
            .enumerate()
            .fold(0u32, |group, (i, &octet)| {
                group | u32::from(octet) << (16 - 8 * i)
            });
        // A chunk of n octets yields n + 1 characters plus padding.
        for i in 0..4 {
            if i > chunk.len() {
                f.write_char(PAD)?;
            } else {
                let index = (group >> (18 - 6 * i)) & 0x3F;
                f.write_char(ENCODE_ALPHABET[index as usize])?;
            }
        }
    }
    Ok(())
}

/// Encodes binary data in *base64* and returns the encoded data as a string.
pub fn encode_string<B: AsRef<[u8]> + ?Sized>(bytes: &B) -> String {
    let mut res = String::with_capacity((bytes.as_ref().len() / 3 + 1) * 4);
    // Writing to a string never fails.
    let _ = display(bytes, &mut res);
    res
}

//============ Constants =====================================================

const ENCODE_ALPHABET: [char; 64] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', // 0x00 .. 0x07
    'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', // 0x08 .. 0x0F
    'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', // 0x10 .. 0x17
    'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', // 0x18 .. 0x1F
    'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', // 0x20 .. 0x27
    'o', 'p', 'q', 'r', 's', 't', 'u', 'v', // 0x28 .. 0x2F
    'w', 'x', 'y', 'z', '0', '1', '2', '3', // 0x30 .. 0x37
    '4', '5', '6', '7', '8', '9', '+', '/', // 0x38 .. 0x3F
];

/// The padding character
const PAD: char = '=';

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode() {
        assert_eq!(encode_string(b""), "");
        assert_eq!(encode_string(b"f"), "Zg==");
        assert_eq!(encode_string(b"fo"), "Zm8=");
        assert_eq!(encode_string(b"foo"), "Zm9v");
        assert_eq!(encode_string(b"foob"), "Zm9vYg==");
        assert_eq!(encode_string(b"fooba"), "Zm9vYmE=");
        assert_eq!(encode_string(b"foobar"), "Zm9vYmFy");
        assert_eq!(encode_string(b"\xff\xfe"), "//4=");
    }
}
