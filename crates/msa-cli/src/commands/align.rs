//! The `align` subcommand.

use std::path::PathBuf;

use clap::Args;
use dna_msa::{GuideOrder, MsaConfig, Representative};

use super::Costs;

/// Arguments for the `align` subcommand.
#[derive(Args, Debug)]
pub struct AlignArgs {
    /// The sequences to align.
    #[arg(required_unless_present = "inp_path", conflicts_with = "inp_path")]
    sequences: Vec<String>,

    /// Path to a FASTA file with the sequences to align.
    #[arg(short('i'), long)]
    inp_path: Option<PathBuf>,

    /// The order in which sequences are merged.
    #[arg(short('g'), long, default_value = "input-order")]
    guide: Guide,

    /// The profile row each new sequence is aligned against.
    #[arg(short('r'), long, default_value = "first-row")]
    representative: Rep,

    /// The costs of the edit operations.
    #[command(flatten)]
    pub(super) costs: Costs,

    /// Convert the sequences to uppercase before aligning them.
    #[arg(short('u'), long)]
    uppercase: bool,

    /// Print the rows as FASTA records instead of one row per line.
    #[arg(short('f'), long)]
    fasta: bool,

    /// Print quality measures of the alignment to stderr.
    #[arg(short('s'), long)]
    stats: bool,
}

/// The order in which sequences are merged.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum Guide {
    /// Merge in input order, starting with the first sequence.
    #[clap(name = "input-order")]
    InputOrder,
    /// Start with the sequence closest to all others.
    #[clap(name = "center-star")]
    CenterStar,
}

impl From<Guide> for GuideOrder {
    fn from(guide: Guide) -> Self {
        match guide {
            Guide::InputOrder => Self::InputOrder,
            Guide::CenterStar => Self::CenterStar,
        }
    }
}

/// The profile row each new sequence is aligned against.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum Rep {
    /// The first row of the profile.
    #[clap(name = "first-row")]
    FirstRow,
    /// The column-wise consensus of the profile.
    #[clap(name = "consensus")]
    Consensus,
}

impl From<Rep> for Representative {
    fn from(rep: Rep) -> Self {
        match rep {
            Rep::FirstRow => Self::FirstRow,
            Rep::Consensus => Self::Consensus,
        }
    }
}

/// Aligns the sequences and prints the rows.
///
/// # Errors
///
/// - If the FASTA file cannot be read.
/// - If any sequence has a symbol outside of `ACGTN`.
pub fn run(args: &AlignArgs) -> Result<(), String> {
    let (ids, sequences) = match &args.inp_path {
        Some(path) => crate::fasta::read(path)?,
        None => (
            (0..args.sequences.len()).map(|i| format!("seq_{i}")).collect(),
            args.sequences.clone(),
        ),
    };
    let sequences = super::normalize(sequences, args.uppercase);

    let config = MsaConfig::default()
        .with_cost_matrix(&args.costs.cost_matrix())
        .with_guide(args.guide.into())
        .with_representative(args.representative.into());

    let msa = dna_msa::align(&sequences, &config).map_err(|e| e.to_string())?;

    for (id, row) in ids.iter().zip(msa.strings()) {
        if args.fasta {
            println!(">{id}");
        }
        println!("{row}");
    }

    if args.stats {
        let (mean_pd, max_pd) = msa.par_p_distance_stats();
        eprintln!("rows: {}", msa.len());
        eprintln!("width: {}", msa.width());
        eprintln!("percent gaps: {:.4}", msa.percent_gaps());
        eprintln!("sum of pairs: {}", msa.par_sum_of_pairs(1, 1));
        eprintln!("p-distance: mean {mean_pd:.4}, max {max_pd:.4}");
    }

    Ok(())
}
