//! Command line interface for the `tracelift` binary.
//!
//! Declares the arguments shared by the binary entry point and the man
//! page generation in the build script.

use std::path::PathBuf;

use clap::Parser;

/// Command line arguments for the `tracelift` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tracelift",
    version,
    about = "Rebuild a flashed memory image from a UDS bus trace capture"
)]
pub struct Cli {
    /// Trace capture to decode.
    pub trace: PathBuf,

    /// Where to write the reconstructed image.
    #[arg(short, long, default_value = "image.bin")]
    pub output: PathBuf,
}
