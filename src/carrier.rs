use std::path::Path;

use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::error::{StegoError, StegoResult};

// Carrier I/O
//------------------------------------------------------------------------------

/// Reads a carrier image from disk, normalized to 8-bit RGB.
pub fn read_carrier(path: impl AsRef<Path>) -> StegoResult<RgbImage> {
    let img = image::open(path).map_err(StegoError::ImageRead)?;
    Ok(img.to_rgb8())
}

/// Persists a stego image. The format is taken from the file extension;
/// only lossless formats preserve the embedded bits.
pub fn write_carrier(img: &RgbImage, path: impl AsRef<Path>) -> StegoResult<()> {
    img.save(path).map_err(StegoError::ImageWrite)
}

// Channel split & merge
//------------------------------------------------------------------------------

/// Copies the blue channel out of a carrier.
pub fn blue_channel(img: &RgbImage) -> GrayImage {
    let (w, h) = img.dimensions();
    GrayImage::from_fn(w, h, |x, y| Luma([img.get_pixel(x, y)[2]]))
}

/// Reassembles a carrier from its original red and green channels and a
/// (possibly modified) blue channel.
pub fn merge_blue(img: &RgbImage, blue: &GrayImage) -> RgbImage {
    let (w, h) = img.dimensions();
    RgbImage::from_fn(w, h, |x, y| {
        let p = img.get_pixel(x, y);
        Rgb([p[0], p[1], blue.get_pixel(x, y)[0]])
    })
}

#[cfg(test)]
mod carrier_tests {
    use image::{Rgb, RgbImage};

    use super::{blue_channel, merge_blue, read_carrier};
    use crate::error::StegoError;

    #[test]
    fn test_split_and_merge_is_identity() {
        let img = RgbImage::from_fn(8, 5, |x, y| Rgb([x as u8, y as u8, (x * y) as u8]));
        let blue = blue_channel(&img);
        assert_eq!(merge_blue(&img, &blue), img);
    }

    #[test]
    fn test_merge_keeps_red_and_green() {
        let img = RgbImage::from_fn(6, 6, |x, y| Rgb([10, 20, (x + y) as u8]));
        let mut blue = blue_channel(&img);
        for p in blue.pixels_mut() {
            p[0] = 255 - p[0];
        }

        let merged = merge_blue(&img, &blue);
        for (x, y, p) in merged.enumerate_pixels() {
            assert_eq!((p[0], p[1]), (10, 20));
            assert_eq!(p[2], 255 - (x + y) as u8);
        }
    }

    #[test]
    fn test_read_missing_carrier_fails() {
        let res = read_carrier("no/such/carrier.png");
        assert!(matches!(res, Err(StegoError::ImageRead(_))));
    }
}
