use crate::error::{StegoError, StegoResult};

// Bit codec
//------------------------------------------------------------------------------

/// Expands text into its payload bit sequence: one byte per character, most
/// significant bit first, concatenated in character order.
///
/// Only single-byte characters (code points 0–255) can be carried; anything
/// above fails with [`StegoError::UnencodableChar`] before any pixel work
/// happens.
pub fn text_to_bits(text: &str) -> StegoResult<Vec<bool>> {
    let mut bits = Vec::with_capacity(text.len() << 3);
    for c in text.chars() {
        let cp = c as u32;
        if cp > 255 {
            return Err(StegoError::UnencodableChar(c));
        }
        for i in (0..8).rev() {
            bits.push(cp >> i & 1 == 1);
        }
    }
    Ok(bits)
}

/// Collapses a bit sequence back into text, consuming 8 bits per character
/// left to right.
///
/// A length that is not a multiple of 8 fails with
/// [`StegoError::TruncatedBits`]; a partial trailing group is never guessed
/// at. Callers that knowingly hold a clipped read must drop the partial
/// group themselves.
pub fn bits_to_text(bits: &[bool]) -> StegoResult<String> {
    if bits.len() & 7 != 0 {
        return Err(StegoError::TruncatedBits(bits.len()));
    }

    let text = bits
        .chunks_exact(8)
        .map(|group| group.iter().fold(0u8, |byte, &b| byte << 1 | b as u8) as char)
        .collect();
    Ok(text)
}

#[cfg(test)]
mod bit_codec_tests {
    use super::{bits_to_text, text_to_bits};
    use crate::error::StegoError;

    fn bit_string(bits: &[bool]) -> String {
        bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }

    #[test]
    fn test_msb_first_expansion() {
        // 'A' = 65 = 01000001, 'B' = 66 = 01000010
        let bits = text_to_bits("AB").unwrap();
        assert_eq!(bit_string(&bits), "0100000101000010");
    }

    #[test]
    fn test_full_byte_range() {
        let bits = text_to_bits("\u{0}\u{FF}").unwrap();
        assert_eq!(bit_string(&bits), "0000000011111111");
    }

    #[test]
    fn test_round_trip() {
        let text = "Stay along the edges!";
        let bits = text_to_bits(text).unwrap();
        assert_eq!(bits.len(), text.len() << 3);
        assert_eq!(bits_to_text(&bits).unwrap(), text);
    }

    #[test]
    fn test_empty_text() {
        assert!(text_to_bits("").unwrap().is_empty());
        assert_eq!(bits_to_text(&[]).unwrap(), "");
    }

    #[test]
    fn test_multi_byte_char_rejected() {
        let res = text_to_bits("ok🌍");
        assert!(matches!(res, Err(StegoError::UnencodableChar('🌍'))));
    }

    #[test]
    fn test_partial_group_rejected() {
        let bits = text_to_bits("A").unwrap();
        let res = bits_to_text(&bits[..5]);
        assert!(matches!(res, Err(StegoError::TruncatedBits(5))));
    }
}
