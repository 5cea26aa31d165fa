//! The subcommands of the `dna-msa` CLI.

pub mod align;
pub mod pairwise;

use clap::{builder::RangedU64ValueParser, Args, Subcommand};
use dna_msa::CostMatrix;

/// The largest cost accepted for any edit operation.
///
/// Distances are sums of at most `len(a) + len(b)` costs, so this keeps them
/// far from overflowing.
pub const MAX_COST: u64 = 1_000_000;

/// The subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Align many sequences and print one aligned row per line.
    Align(align::AlignArgs),
    /// Align two sequences and print both rows and their distance.
    Pairwise(pairwise::PairwiseArgs),
}

/// The costs of the edit operations.
#[derive(Args, Debug, Clone)]
pub struct Costs {
    /// The cost of substituting one base for a different one.
    #[arg(long, default_value = "1", value_parser = cost_parser())]
    mismatch: usize,

    /// The cost of an insertion.
    #[arg(long, default_value = "1", value_parser = cost_parser())]
    ins: usize,

    /// The cost of a deletion.
    #[arg(long, default_value = "1", value_parser = cost_parser())]
    del: usize,
}

impl Costs {
    /// Get the cost matrix.
    pub const fn cost_matrix(&self) -> CostMatrix<usize> {
        CostMatrix::new(self.mismatch, self.ins, self.del)
    }
}

/// Parses a cost in `0..=MAX_COST`.
fn cost_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(..=MAX_COST)
}

/// Upper-cases the sequences if asked to.
fn normalize(sequences: Vec<String>, uppercase: bool) -> Vec<String> {
    if uppercase {
        sequences.into_iter().map(|s| s.to_ascii_uppercase()).collect()
    } else {
        sequences
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use dna_msa::{GuideOrder, Representative};

    use super::{align, normalize, Commands, MAX_COST};
    use crate::Args;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(core::iter::once("dna-msa").chain(args.iter().copied()))
    }

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn uppercase_only_when_asked() {
        let sequences = vec!["acgt".to_string(), "AcGn".to_string(), String::new()];
        assert_eq!(normalize(sequences.clone(), true), vec!["ACGT", "ACGN", ""]);
        assert_eq!(normalize(sequences.clone(), false), sequences);
    }

    #[test]
    fn value_enums_map_to_library_types() {
        assert_eq!(GuideOrder::from(align::Guide::InputOrder), GuideOrder::InputOrder);
        assert_eq!(GuideOrder::from(align::Guide::CenterStar), GuideOrder::CenterStar);
        assert_eq!(Representative::from(align::Rep::FirstRow), Representative::FirstRow);
        assert_eq!(Representative::from(align::Rep::Consensus), Representative::Consensus);
    }

    #[test]
    fn costs_default_to_unit() {
        let args = parse(&["pairwise", "ACGT", "AGT"]).unwrap_or_else(|e| unreachable!("{e}"));
        let Commands::Pairwise(action) = args.command else {
            unreachable!("Parsed the wrong subcommand")
        };
        let matrix = action.costs.cost_matrix();
        assert_eq!((matrix.mismatch_cost(), matrix.ins_cost(), matrix.del_cost()), (1, 1, 1));
    }

    #[test]
    fn costs_are_bounded() {
        let max = MAX_COST.to_string();
        let args = parse(&["align", "--mismatch", &max, "--ins", "0", "--del", "7", "ACGT"]);
        let args = args.unwrap_or_else(|e| unreachable!("{e}"));
        let Commands::Align(action) = args.command else {
            unreachable!("Parsed the wrong subcommand")
        };
        let matrix = action.costs.cost_matrix();
        assert_eq!((matrix.mismatch_cost(), matrix.ins_cost(), matrix.del_cost()), (1_000_000, 0, 7));

        let too_big = (MAX_COST + 1).to_string();
        for flag in ["--mismatch", "--ins", "--del"] {
            assert!(parse(&["align", flag, &too_big, "ACGT"]).is_err(), "{flag} accepted {too_big}");
        }
        assert!(parse(&["pairwise", "--del", &u64::MAX.to_string(), "A", "C"]).is_err());
        assert!(parse(&["pairwise", "--ins", "-1", "A", "C"]).is_err());
    }

    #[test]
    fn sequences_or_fasta_but_not_both() {
        assert!(parse(&["align"]).is_err());
        assert!(parse(&["align", "-i", "seqs.fasta", "ACGT"]).is_err());
        assert!(parse(&["align", "-i", "seqs.fasta"]).is_ok());
        assert!(parse(&["align", "-g", "center-star", "-r", "consensus", "ACGT", "AGT"]).is_ok());
        assert!(parse(&["align", "-g", "tree", "ACGT"]).is_err());
    }
}
