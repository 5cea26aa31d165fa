#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

pub mod aligner;
pub mod alphabet;
mod error;
pub mod guide;
mod msa;
pub mod profile;
mod quality;

pub use aligner::{Aligner, CostMatrix};
pub use alphabet::Nucleotide;
pub use error::MsaError;
pub use guide::{Guide, GuideOrder};
pub use msa::{align, Msa, MsaConfig};
pub use profile::{Profile, Representative};

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
