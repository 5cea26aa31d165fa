//! Tests for the merge order in `dna_msa::guide`.

mod common;

use dna_msa::{
    guide::{distance_matrix, par_distance_matrix},
    Aligner, Guide, GuideOrder,
};
use test_case::test_case;

/// Whether `order` is a permutation of `0..n`.
fn is_permutation(order: &[usize], n: usize) -> bool {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    sorted == (0..n).collect::<Vec<_>>()
}

#[test_case(0; "none")]
#[test_case(1; "one")]
#[test_case(2; "two")]
#[test_case(7; "seven")]
#[test_case(20; "twenty")]
fn orders_are_permutations(n: usize) {
    let aligner = Aligner::<usize>::default();
    let sequences = common::gen_family(n, 30, 4, n as u64);

    let guide = Guide::new(&sequences, GuideOrder::InputOrder, &aligner);
    assert_eq!(guide.order(), (0..n).collect::<Vec<_>>());

    let guide = Guide::new(&sequences, GuideOrder::CenterStar, &aligner);
    assert_eq!(guide.len(), n);
    assert!(is_permutation(guide.order(), n));
}

#[test]
fn center_star_follows_distance_to_center() {
    let aligner = Aligner::<usize>::default();
    let sequences = common::gen_family(12, 40, 6, 11);

    let distances = distance_matrix(&sequences, &aligner);
    assert_eq!(distances, par_distance_matrix(&sequences, &aligner));

    let guide = Guide::center_star(&sequences, &aligner);
    let center = guide.seed().unwrap_or_else(|| unreachable!("There are sequences"));

    let sums = distances.iter().map(|row| row.iter().sum::<usize>()).collect::<Vec<_>>();
    let min_sum = sums.iter().copied().min().unwrap_or(0);
    assert_eq!(sums[center], min_sum);
    assert!(sums[..center].iter().all(|&s| s > min_sum));

    let to_center = guide.order()[1..]
        .iter()
        .map(|&i| distances[center][i])
        .collect::<Vec<_>>();
    assert!(to_center.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn distance_matrix_is_symmetric() {
    let aligner = Aligner::<usize>::default();
    let sequences = common::gen_dna(9, 0, 20, 5);
    let distances = par_distance_matrix(&sequences, &aligner);

    for (i, row) in distances.iter().enumerate() {
        assert_eq!(row[i], 0);
        for (j, &d) in row.iter().enumerate() {
            assert_eq!(d, distances[j][i]);
            assert_eq!(d, aligner.score(&sequences[i], &sequences[j]));
        }
    }
}
