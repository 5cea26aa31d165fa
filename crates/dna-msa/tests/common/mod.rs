//! Helpers shared by the integration tests.

#![allow(dead_code)]

use rand::prelude::*;

/// The bases used to generate random sequences.
const BASES: [u8; 5] = *b"ACGTN";

/// Generates `n` random DNA sequences with lengths in `min_len..=max_len`.
pub fn gen_dna(n: usize, min_len: usize, max_len: usize, seed: u64) -> Vec<String> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let len = rng.gen_range(min_len..=max_len);
            (0..len).map(|_| char::from(BASES[rng.gen_range(0..BASES.len())])).collect()
        })
        .collect()
}

/// Generates `n` random point-mutants of one random DNA sequence, so that the
/// sequences are similar enough for alignment to be interesting.
pub fn gen_family(n: usize, len: usize, num_edits: usize, seed: u64) -> Vec<String> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let ancestor = (0..len)
        .map(|_| BASES[rng.gen_range(0..4)])
        .collect::<Vec<_>>();

    (0..n)
        .map(|_| {
            let mut seq = ancestor.clone();
            for _ in 0..num_edits {
                let base = BASES[rng.gen_range(0..4)];
                match rng.gen_range(0..3) {
                    0 if !seq.is_empty() => {
                        let i = rng.gen_range(0..seq.len());
                        seq[i] = base;
                    }
                    1 if !seq.is_empty() => {
                        let i = rng.gen_range(0..seq.len());
                        seq.remove(i);
                    }
                    _ => {
                        let i = rng.gen_range(0..=seq.len());
                        seq.insert(i, base);
                    }
                }
            }
            seq.into_iter().map(char::from).collect()
        })
        .collect()
}
