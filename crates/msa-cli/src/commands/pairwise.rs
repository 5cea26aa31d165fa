//! The `pairwise` subcommand.

use clap::Args;
use dna_msa::Aligner;

use super::Costs;

/// Arguments for the `pairwise` subcommand.
#[derive(Args, Debug)]
pub struct PairwiseArgs {
    /// The first sequence.
    a: String,

    /// The second sequence.
    b: String,

    /// The costs of the edit operations.
    #[command(flatten)]
    pub(super) costs: Costs,

    /// Convert the sequences to uppercase before aligning them.
    #[arg(short('u'), long)]
    uppercase: bool,
}

/// Aligns the two sequences and prints both rows followed by the distance.
///
/// # Errors
///
/// - If either sequence has a symbol outside of `ACGTN`.
pub fn run(args: &PairwiseArgs) -> Result<(), String> {
    let sequences = super::normalize(vec![args.a.clone(), args.b.clone()], args.uppercase);
    for (i, seq) in sequences.iter().enumerate() {
        dna_msa::alphabet::encode(i, seq).map_err(|e| e.to_string())?;
    }

    let aligner = Aligner::new(&args.costs.cost_matrix());
    let (distance, [a, b]) = aligner.align_str(&sequences[0], &sequences[1]);
    ftlog::info!("Aligned a pair of sequences at distance {distance}");

    println!("{a}");
    println!("{b}");
    println!("{distance}");

    Ok(())
}
