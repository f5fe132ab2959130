use std::path::Path;

use image::{GrayImage, RgbImage};
use log::debug;

use crate::bits::text_to_bits;
use crate::carrier::{blue_channel, merge_blue, read_carrier, write_carrier};
use crate::edges::EdgeMap;
use crate::error::{StegoError, StegoResult};

// Channel embedder
//------------------------------------------------------------------------------

/// Writes payload bits into a copy of the blue channel, one bit per
/// coordinate, overwriting the least significant bit. Coordinates beyond the
/// payload are untouched.
///
/// The payload must fit: a bit count above the coordinate count fails with
/// [`StegoError::CapacityExceeded`] before anything is written. Nothing is
/// silently clipped.
pub fn embed_bits(
    blue: &GrayImage,
    coords: &[(u32, u32)],
    bits: &[bool],
) -> StegoResult<GrayImage> {
    if bits.len() > coords.len() {
        return Err(StegoError::CapacityExceeded { needed: bits.len(), available: coords.len() });
    }

    let mut out = blue.clone();
    for (&(row, col), &bit) in coords.iter().zip(bits) {
        let p = out.get_pixel_mut(col, row);
        p[0] = p[0] & !1 | bit as u8;
    }
    Ok(out)
}

/// Embeds `text` into a carrier held in memory. Returns the stego image and
/// the number of bits written.
///
/// Red and green are carried over untouched; so is every blue value off the
/// payload's edge coordinates.
pub fn embed(img: &RgbImage, text: &str) -> StegoResult<(RgbImage, usize)> {
    let bits = text_to_bits(text)?;

    let edges = EdgeMap::of(img);
    let coords = edges.coordinates();
    debug!("payload is {} bits, carrier has {} edge pixels", bits.len(), coords.len());

    let blue = embed_bits(&blue_channel(img), &coords, &bits)?;
    Ok((merge_blue(img, &blue), bits.len()))
}

/// Embeds `text` into the carrier at `input` and writes the stego image to
/// `output`. Returns the number of bits written.
///
/// All bit writes complete in memory before the output file is opened, so a
/// failure never leaves a partially written image behind. The carrier file
/// itself is never modified.
pub fn encode(
    input: impl AsRef<Path>,
    text: &str,
    output: impl AsRef<Path>,
) -> StegoResult<usize> {
    let img = read_carrier(input)?;
    let (stego, bits_used) = embed(&img, text)?;
    write_carrier(&stego, output)?;
    Ok(bits_used)
}
