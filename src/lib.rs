//! # edgestego
//!
//! A Rust library for hiding text inside an image along its detected edges.
//! One payload bit is written into the least significant bit of the blue
//! channel at each edge pixel, so the modification concentrates where visual
//! noise already masks it.
//!
//! ## How it works
//!
//! The carrier is converted to grayscale, binarized at a fixed threshold and
//! run through a Laplacian edge filter. The edge pixels, scanned in row-major
//! order, form the canonical coordinate list: bit `i` of the payload lands in
//! the blue LSB at coordinate `i`. Decoding recomputes the same list from the
//! stego image and reads the bits back.
//!
//! The scheme is deliberately unlabeled: the image carries no magic bytes and
//! no payload length. The caller of [`decode`] supplies the bit count to read
//! back, and both sides must agree on the carrier.
//!
//! ## Hiding and recovering text
//!
//! ```rust,no_run
//! # fn main() -> Result<(), edgestego::StegoError> {
//! let capacity = edgestego::inspect("photo.png")?;
//! assert!(capacity >= 6);
//!
//! let bits_used = edgestego::encode("photo.png", "hidden", "stego.png")?;
//! let recovered = edgestego::decode("stego.png", bits_used)?;
//! assert_eq!(recovered, "hidden");
//! # Ok(())
//! # }
//! ```
//!
//! ## Working on images in memory
//!
//! ```rust
//! use edgestego::{embed, extract, EdgeMap};
//! use image::{Rgb, RgbImage};
//!
//! # fn main() -> Result<(), edgestego::StegoError> {
//! // A black carrier with a white square: the square's 36-pixel boundary
//! // ring holds 4 characters.
//! let carrier = RgbImage::from_fn(100, 100, |x, y| {
//!     if (45..55).contains(&x) && (45..55).contains(&y) {
//!         Rgb([255, 255, 255])
//!     } else {
//!         Rgb([0, 0, 0])
//!     }
//! });
//! assert_eq!(EdgeMap::of(&carrier).capacity(), 4);
//!
//! let (stego, bits_used) = embed(&carrier, "AB")?;
//! assert_eq!(extract(&stego, bits_used)?, "AB");
//! # Ok(())
//! # }
//! ```
//!
//! ## Limits
//!
//! - Payload characters must fit in a single byte (code points 0–255).
//! - The stego image must be saved losslessly; recompression destroys LSBs.
//! - A carrier whose luminance sits exactly on the binarization threshold at
//!   an embedding site can flip its own edge map when written to. Typical
//!   carriers are nowhere near this: a blue LSB moves luminance by well under
//!   one level.

pub mod bits;
pub mod carrier;
pub mod edges;
pub mod embed;
pub mod error;
pub mod extract;

pub use edges::{binarize, inspect, EdgeMap, BINARIZE_THRESHOLD};
pub use embed::{embed, encode};
pub use error::{StegoError, StegoResult};
pub use extract::{decode, extract};
