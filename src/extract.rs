use std::path::Path;

use image::{GrayImage, RgbImage};
use log::debug;

use crate::bits::bits_to_text;
use crate::carrier::{blue_channel, read_carrier};
use crate::edges::EdgeMap;
use crate::error::StegoResult;

// Channel extractor
//------------------------------------------------------------------------------

/// Reads back the least significant blue bit at each of the first `n`
/// coordinates. A request past the end of the coordinate list is clamped,
/// not an error; the carrier cannot yield more sites than it has.
pub fn extract_bits(blue: &GrayImage, coords: &[(u32, u32)], n: usize) -> Vec<bool> {
    coords[..n.min(coords.len())]
        .iter()
        .map(|&(row, col)| blue.get_pixel(col, row)[0] & 1 == 1)
        .collect()
}

/// Recovers `bits_to_decode` bits of hidden text from a stego image held in
/// memory.
///
/// The edge map is recomputed from the given image, so the coordinate list
/// lines up with the one used at embed time. On a clamped read the trailing
/// partial character group is dropped; an exact read of a length that is not
/// a multiple of 8 fails with [`crate::StegoError::TruncatedBits`] instead.
pub fn extract(img: &RgbImage, bits_to_decode: usize) -> StegoResult<String> {
    let edges = EdgeMap::of(img);
    let coords = edges.coordinates();
    debug!("reading {} of {} requested bits", bits_to_decode.min(coords.len()), bits_to_decode);

    let mut bits = extract_bits(&blue_channel(img), &coords, bits_to_decode);
    if bits.len() < bits_to_decode {
        // Degraded read: the request ran past the carrier's sites.
        bits.truncate(bits.len() & !7);
    }
    bits_to_text(&bits)
}

/// Recovers hidden text from the stego image at `input`.
///
/// `bits_to_decode` must be supplied by the caller: the image carries no
/// length field, so decoding cannot self-terminate. Callers that do not know
/// the exact payload length read at most `8 * capacity` bits and trim.
pub fn decode(input: impl AsRef<Path>, bits_to_decode: usize) -> StegoResult<String> {
    let img = read_carrier(input)?;
    extract(&img, bits_to_decode)
}

#[cfg(test)]
mod extractor_tests {
    use image::{GrayImage, Rgb, RgbImage};

    use super::{extract, extract_bits};
    use crate::embed::embed;
    use crate::error::StegoError;

    /// Black field with a centered white square of the given side.
    fn white_square_carrier(size: u32, side: u32) -> RgbImage {
        let lo = (size - side) / 2;
        let hi = lo + side;
        RgbImage::from_fn(size, size, |x, y| {
            if (lo..hi).contains(&x) && (lo..hi).contains(&y) {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        })
    }

    #[test]
    fn test_extract_bits_reads_lsbs() {
        let blue = GrayImage::from_fn(4, 1, |x, _| image::Luma([[0, 1, 254, 255][x as usize]]));
        let coords = [(0, 0), (0, 1), (0, 2), (0, 3)];
        assert_eq!(extract_bits(&blue, &coords, 4), [false, true, false, true]);
    }

    #[test]
    fn test_extract_bits_clamps_to_sites() {
        let blue = GrayImage::from_pixel(2, 1, image::Luma([1]));
        let coords = [(0, 0), (0, 1)];
        assert_eq!(extract_bits(&blue, &coords, 100).len(), 2);
    }

    #[test]
    fn test_extract_recovers_embedded_text() {
        let img = white_square_carrier(100, 10);
        let (stego, bits_used) = embed(&img, "AB").unwrap();
        assert_eq!(extract(&stego, bits_used).unwrap(), "AB");
    }

    #[test]
    fn test_overlong_read_degrades_without_failing() {
        // 36 sites; a huge request clamps to 36 and drops the 4-bit tail,
        // returning 4 characters that lead with the payload.
        let img = white_square_carrier(100, 10);
        let (stego, _) = embed(&img, "AB").unwrap();

        let text = extract(&stego, 10_000).unwrap();
        assert_eq!(text.chars().count(), 4);
        assert!(text.starts_with("AB"));
    }

    #[test]
    fn test_exact_unaligned_read_fails() {
        let img = white_square_carrier(100, 10);
        let (stego, _) = embed(&img, "AB").unwrap();

        let res = extract(&stego, 12);
        assert!(matches!(res, Err(StegoError::TruncatedBits(12))));
    }

    #[test]
    fn test_zero_bit_read_is_empty() {
        let img = white_square_carrier(100, 10);
        assert_eq!(extract(&img, 0).unwrap(), "");
    }
}
