// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Conversions between encoded text and the codepoint slices that the
//! matching operations work on.
//!
//! All offsets reported by a `Matcher` count codepoints, so text is decoded
//! into a `Vec<char>` once and matched against as many times as needed.

use encode_unicode::{CharExt, Utf8Char};

use crate::error::{Error, Result};

/// Decode utf8 encoded `bytes` into codepoints.
///
/// # Errors
///
/// Returns `Error::InvalidUtf8` with the byte offset of the first invalid or
/// truncated sequence.
pub fn decode_utf8(bytes: &[u8]) -> Result<Vec<char>> {
    let mut chars = Vec::with_capacity(bytes.len());
    let mut offset = 0;
    while offset < bytes.len() {
        let (c, len) = Utf8Char::from_slice_start(&bytes[offset..])
            .map_err(|_| Error::InvalidUtf8 { offset })?;
        chars.push(c.to_char());
        offset += len;
    }
    Ok(chars)
}

/// Convert raw codepoint values into `char`s.
///
/// # Errors
///
/// Returns `Error::InvalidCodepoint` for the first value that is a surrogate
/// or is above `0x10ffff`.
pub fn decode_codepoints(values: &[u32]) -> Result<Vec<char>> {
    values
        .iter()
        .map(|&value| char::from_u32_detailed(value).map_err(|_| Error::InvalidCodepoint(value)))
        .collect()
}

/// Encode codepoints as a utf8 `String`.
pub fn encode_utf8(chars: &[char]) -> String {
    chars.iter().collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_utf8_yields_one_char_per_codepoint() {
        let result = decode_utf8("a秋水😀".as_bytes());

        assert_matches!(result, Ok(ref chars) if chars == &['a', '秋', '水', '😀']);
    }

    #[test]
    fn decode_utf8_empty_input_is_empty() {
        let result = decode_utf8(&[]);

        assert_matches!(result, Ok(ref chars) if chars.is_empty());
    }

    #[test]
    fn decode_utf8_continuation_byte_fails_at_its_offset() {
        let result = decode_utf8(&[b'a', b'b', 0x80]);

        assert_matches!(result, Err(Error::InvalidUtf8 { offset: 2 }));
    }

    #[test]
    fn decode_utf8_truncated_sequence_fails() {
        let mut bytes = b"ok".to_vec();
        bytes.extend_from_slice(&"秋".as_bytes()[..2]);

        let result = decode_utf8(&bytes);

        assert_matches!(result, Err(Error::InvalidUtf8 { offset: 2 }));
    }

    #[test]
    fn decode_codepoints_accepts_scalar_values() {
        let result = decode_codepoints(&[0x61, 0x79cb, 0x1f600]);

        assert_matches!(result, Ok(ref chars) if chars == &['a', '秋', '😀']);
    }

    #[test]
    fn decode_codepoints_rejects_surrogate() {
        let result = decode_codepoints(&[0x61, 0xd800]);

        assert_matches!(result, Err(Error::InvalidCodepoint(0xd800)));
    }

    #[test]
    fn decode_codepoints_rejects_value_past_max() {
        let result = decode_codepoints(&[0x11_0000]);

        assert_matches!(result, Err(Error::InvalidCodepoint(0x11_0000)));
    }

    #[test]
    fn encode_utf8_inverts_decode() {
        let text = "落霞与孤鹜齐飞";

        let chars = decode_utf8(text.as_bytes()).unwrap();

        assert_eq!(encode_utf8(&chars), text);
    }
}
