use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use edgestego::{decode, encode, inspect};

#[derive(Parser)]
#[command(name = "edgestego", version, about = "Hide text in an image along its detected edges")]
struct Cli {
    #[command(subcommand)]
    operation: Operation,
}

#[derive(Subcommand)]
enum Operation {
    /// Encode text into an image
    Encode {
        /// Path to the carrier image
        #[arg(short, long)]
        input: PathBuf,
        /// Text to hide
        #[arg(short, long)]
        text: String,
        /// Path for the stego image
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Decode text from an image
    Decode {
        /// Path to the stego image
        #[arg(short, long)]
        input: PathBuf,
        /// Number of bits to read back
        #[arg(short, long)]
        bits: usize,
    },
    /// Report the number of characters an image can hold
    Inspect {
        /// Path to the carrier image
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn validate_input_path(path: &Path) -> Result<(), String> {
    if !path.is_file() {
        return Err(format!("Input file {} does not exist or is not a file.", path.display()));
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.operation {
        Operation::Encode { input, text, output } => {
            validate_input_path(&input)?;
            let bits_used = encode(&input, &text, &output)?;
            println!("Number of bits taken to encode: {bits_used}");
            println!("Encoded image saved to {}", output.display());
        }
        Operation::Decode { input, bits } => {
            validate_input_path(&input)?;
            let text = decode(&input, bits)?;
            println!("Decoded Text: {text}");
        }
        Operation::Inspect { input } => {
            validate_input_path(&input)?;
            let capacity = inspect(&input)?;
            println!("Number of characters that can be encoded: {capacity}");
        }
    }
    Ok(())
}
