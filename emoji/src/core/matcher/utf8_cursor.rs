// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Lenient `UTF-8` decoding. A byte buffer from the outside world (a file, a socket, a
//! terminal) isn't always valid `UTF-8`, and dropping or replacing the bad bytes would
//! lose data. Instead every byte that isn't part of a valid encoding is reported as a
//! single [`Decoded::Invalid`] unit, and the caller decides what to do with it.

/// One unit decoded from a byte buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// A valid codepoint, and the number of bytes (1 to 4) that encode it.
    Char(char, usize),
    /// A byte that doesn't start a valid encoding. Always 1 byte long.
    Invalid(usize),
}

impl Decoded {
    #[must_use]
    pub fn byte_len(self) -> usize {
        match self {
            Decoded::Char(_, it) | Decoded::Invalid(it) => it,
        }
    }

    #[must_use]
    pub fn as_char(self) -> Option<char> {
        match self {
            Decoded::Char(it, _) => Some(it),
            Decoded::Invalid(_) => None,
        }
    }
}

/// Width of the encoding that `lead` starts, or `None` if it can't start one.
fn encoded_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        // Continuation bytes, overlong leads (C0, C1), and leads past U+10FFFF.
        _ => None,
    }
}

/// Decode the unit that starts at `bytes[pos]`. Returns `None` only at (or past) the end
/// of the buffer.
///
/// Overlong encodings, surrogates, and truncated sequences all decode as
/// [`Decoded::Invalid`], one byte at a time.
#[must_use]
pub fn decode_at(bytes: &[u8], pos: usize) -> Option<Decoded> {
    let lead = *bytes.get(pos)?;
    if lead.is_ascii() {
        return Some(Decoded::Char(char::from(lead), 1));
    }

    let decoded = encoded_width(lead)
        .and_then(|width| bytes.get(pos..pos + width))
        .and_then(|slice| std::str::from_utf8(slice).ok())
        .and_then(|str| str.chars().next().map(|ch| Decoded::Char(ch, str.len())));

    Some(decoded.unwrap_or(Decoded::Invalid(1)))
}

/// Walks a byte buffer one [`Decoded`] unit at a time, yielding `(byte_offset, unit)`.
#[derive(Debug, Clone)]
pub struct Utf8Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Utf8Cursor<'a> {
    /// A cursor whose first unit starts at `bytes[pos]`.
    #[must_use]
    pub fn at(bytes: &'a [u8], pos: usize) -> Self { Self { bytes, pos } }
}

impl Iterator for Utf8Cursor<'_> {
    type Item = (usize, Decoded);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let decoded = decode_at(self.bytes, start)?;
        self.pos += decoded.byte_len();
        Some((start, decoded))
    }
}

impl std::iter::FusedIterator for Utf8Cursor<'_> {}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(b"a", Decoded::Char('a', 1) ; "ascii")]
    #[test_case("é".as_bytes(), Decoded::Char('é', 2) ; "two bytes")]
    #[test_case("一".as_bytes(), Decoded::Char('一', 3) ; "three bytes")]
    #[test_case("😀".as_bytes(), Decoded::Char('😀', 4) ; "four bytes")]
    #[test_case(&[0x80], Decoded::Invalid(1) ; "lone continuation")]
    #[test_case(&[0xC0, 0x80], Decoded::Invalid(1) ; "overlong nul")]
    #[test_case(&[0xED, 0xA0, 0x80], Decoded::Invalid(1) ; "surrogate")]
    #[test_case(&[0xF0, 0x9F, 0x98], Decoded::Invalid(1) ; "truncated four byte")]
    #[test_case(&[0xF5, 0x80, 0x80, 0x80], Decoded::Invalid(1) ; "past max codepoint")]
    #[test_case(&[0xFF], Decoded::Invalid(1) ; "ff")]
    fn test_decode_at(bytes: &[u8], expected: Decoded) {
        assert_eq2!(decode_at(bytes, 0), Some(expected));
    }

    #[test]
    fn test_as_char() {
        assert_eq2!(Decoded::Char('é', 2).as_char(), Some('é'));
        assert_eq2!(Decoded::Invalid(1).as_char(), None);
    }

    #[test]
    fn test_decode_at_end() {
        assert_eq2!(decode_at(b"", 0), None);
        assert_eq2!(decode_at(b"ab", 2), None);
        assert_eq2!(decode_at(b"ab", 7), None);
    }

    #[test]
    fn test_cursor_resyncs_after_invalid_bytes() {
        // "a", a truncated 😀, then "b".
        let bytes = [b'a', 0xF0, 0x9F, 0x98, b'b'];
        let units: Vec<_> = Utf8Cursor::at(&bytes, 0).collect();
        assert_eq2!(
            units,
            vec![
                (0, Decoded::Char('a', 1)),
                (1, Decoded::Invalid(1)),
                (2, Decoded::Invalid(1)),
                (3, Decoded::Invalid(1)),
                (4, Decoded::Char('b', 1)),
            ]
        );
        let total: usize = units.iter().map(|(_, it)| it.byte_len()).sum();
        assert_eq2!(total, bytes.len());
    }

    #[test]
    fn test_cursor_at_offset() {
        let text = "x😀y";
        let mut cursor = Utf8Cursor::at(text.as_bytes(), 1);
        assert_eq2!(cursor.next(), Some((1, Decoded::Char('😀', 4))));
        assert_eq2!(cursor.next(), Some((5, Decoded::Char('y', 1))));
        assert_eq2!(cursor.next(), None);
        assert_eq2!(cursor.next(), None);
    }
}
