use std::fmt::{Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug)]
pub enum StegoError {
    // Payload
    UnencodableChar(char),
    CapacityExceeded { needed: usize, available: usize },
    TruncatedBits(usize),

    // Carrier I/O
    ImageRead(image::ImageError),
    ImageWrite(image::ImageError),
}

impl Display for StegoError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            Self::UnencodableChar(c) => write!(f, "Character {c:?} outside single-byte range"),
            Self::CapacityExceeded { needed, available } => {
                write!(f, "Payload needs {needed} edge pixels, carrier has {available}")
            }
            Self::TruncatedBits(len) => write!(f, "Bit count {len} is not a multiple of 8"),
            Self::ImageRead(e) => write!(f, "Cannot read carrier image: {e}"),
            Self::ImageWrite(e) => write!(f, "Cannot write stego image: {e}"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageRead(e) | Self::ImageWrite(e) => Some(e),
            _ => None,
        }
    }
}

pub type StegoResult<T> = Result<T, StegoError>;
