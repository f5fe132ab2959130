use std::path::Path;

use image::{GrayImage, Luma, RgbImage};
use imageproc::filter::filter3x3;
use imageproc::map::map_colors;
use log::debug;

use crate::carrier::read_carrier;
use crate::error::StegoResult;

/// Grayscale intensity at or above this binarizes to white.
pub const BINARIZE_THRESHOLD: u8 = 128;

/// 3x3 Laplacian kernel applied to the binarized carrier. A positive
/// response marks an edge pixel.
///
/// The kernel, [`BINARIZE_THRESHOLD`] and the row-major scan in
/// [`EdgeMap::coordinates`] are the fixed contract of the scheme: encode and
/// decode must derive bit-for-bit identical coordinate lists from the same
/// carrier, so none of the three is a tunable.
const EDGE_KERNEL: [i16; 9] = [-1, -1, -1, -1, 8, -1, -1, -1, -1];

// Edge map
//------------------------------------------------------------------------------

/// Boolean edge mask of a carrier. Every true cell is an embedding site
/// carrying one payload bit in its blue channel value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMap {
    mask: Vec<bool>,
    w: u32,
    h: u32,
}

impl EdgeMap {
    /// Derives the edge map of a carrier: grayscale, binarize at
    /// [`BINARIZE_THRESHOLD`], then the Laplacian pass. Deterministic and
    /// side-effect free; the same carrier always yields the same map.
    pub fn of(img: &RgbImage) -> Self {
        let gray = image::imageops::grayscale(img);
        let binary = binarize(&gray, BINARIZE_THRESHOLD);
        let edges = filter3x3::<Luma<u8>, i16, u8>(&binary, &EDGE_KERNEL);

        let (w, h) = edges.dimensions();
        let mask = edges.pixels().map(|p| p[0] > 0).collect();
        Self { mask, w, h }
    }

    /// Embedding sites as `(row, col)` pairs in row-major scan order, the
    /// canonical embedding order shared by encode and decode.
    pub fn coordinates(&self) -> Vec<(u32, u32)> {
        let w = self.w as usize;
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, &edge)| edge)
            .map(|(i, _)| ((i / w) as u32, (i % w) as u32))
            .collect()
    }

    /// Number of edge pixels, one embeddable bit each.
    pub fn len(&self) -> usize {
        self.mask.iter().filter(|&&edge| edge).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum embeddable characters, at 8 edge pixels per character.
    pub fn capacity(&self) -> usize {
        self.len() >> 3
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.w, self.h)
    }
}

/// Thresholds a grayscale image into pure black and white.
pub fn binarize(gray: &GrayImage, threshold: u8) -> GrayImage {
    map_colors(gray, |p| if p[0] < threshold { Luma([0]) } else { Luma([255]) })
}

// Capacity inspector
//------------------------------------------------------------------------------

/// Reports how many characters the carrier at `path` can hold, without
/// modifying anything.
pub fn inspect(path: impl AsRef<Path>) -> StegoResult<usize> {
    let img = read_carrier(path)?;
    let edges = EdgeMap::of(&img);
    debug!("{} edge pixels in {}x{} carrier", edges.len(), edges.w, edges.h);
    Ok(edges.capacity())
}
