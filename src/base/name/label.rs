//! Walking and printing the labels of a name.

use core::cmp::Ordering;
use core::fmt;

//------------ Labels --------------------------------------------------------

/// An iterator over the labels of a name.
///
/// Items are the label contents without the length octet. The last one is
/// always the empty root label. The iterator relies on the wire data having
/// been checked when the name was created.
#[derive(Clone, Debug)]
pub struct Labels<'a> {
    wire: &'a [u8],
}

impl<'a> Labels<'a> {
    pub(super) fn new(wire: &'a [u8]) -> Self {
        Labels { wire }
    }
}

impl<'a> Iterator for Labels<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, tail) = self.wire.split_first()?;
        let (label, rest) = tail.split_at(usize::from(len));
        self.wire = rest;
        Some(label)
    }
}

impl<'a> DoubleEndedIterator for Labels<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let mut start = 0;
        loop {
            let end = start + 1 + usize::from(*self.wire.get(start)?);
            if end == self.wire.len() {
                let label = &self.wire[start + 1..];
                self.wire = &self.wire[..start];
                return Some(label);
            }
            start = end;
        }
    }
}

//------------ Helpers -------------------------------------------------------

/// Compares two labels ignoring ASCII case.
pub(super) fn cmp_labels(left: &[u8], right: &[u8]) -> Ordering {
    left.iter()
        .map(u8::to_ascii_lowercase)
        .cmp(right.iter().map(u8::to_ascii_lowercase))
}

/// Writes a label in presentation format.
pub(super) fn fmt_label(label: &[u8], f: &mut fmt::Formatter) -> fmt::Result {
    for &ch in label {
        match ch {
            b'.' | b'\\' => write!(f, "\\{}", char::from(ch))?,
            0x21..=0x7e => write!(f, "{}", char::from(ch))?,
            _ => write!(f, "\\{:03}", ch)?,
        }
    }
    Ok(())
}
