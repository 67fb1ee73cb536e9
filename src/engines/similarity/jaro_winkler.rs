use crate::engines::genome::{genes_match, Gene};

/// Only the leading genes of long genomes are compared
pub const MAX_GENES_TO_COMPARE: usize = 20;

const MAX_PREFIX_LENGTH: usize = 4;
const WINKLER_SCALING: f64 = 0.1;

/// Jaro-Winkler similarity adapted to gene sequences, in `0.0..=1.0`.
///
/// Tolerant of gaps, relocated genes and unequal lengths. Genes match only
/// when [`genes_match`] holds. A gene in `a` may pair with a gene in `b` whose
/// position lies within `max(len_a, len_b) / 2 - 1` of its own; each gene of
/// `b` pairs at most once, first come first served in the order of `a`.
///
/// Genomes longer than [`MAX_GENES_TO_COMPARE`] are approximated by their
/// first genes. Returns 0.0 if either genome is empty or nothing matches.
pub fn jaro_winkler_similarity(a: &[Gene], b: &[Gene]) -> f64 {
    let a = &a[..a.len().min(MAX_GENES_TO_COMPARE)];
    let b = &b[..b.len().min(MAX_GENES_TO_COMPARE)];

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let range = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_claimed = vec![false; a.len()];
    let mut b_claimed = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, gene) in a.iter().enumerate() {
        let start = i.saturating_sub(range);
        let end = (i + range + 1).min(b.len());
        for j in start..end {
            if !b_claimed[j] && genes_match(gene, &b[j]) {
                b_claimed[j] = true;
                a_claimed[i] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let transpositions = count_transpositions(a, b, &a_claimed, &b_claimed);

    let m = matches as f64;
    let jaro = (m / a.len() as f64 + m / b.len() as f64 + (m - transpositions as f64) / m) / 3.0;

    let prefix = a
        .iter()
        .zip(b)
        .take(MAX_PREFIX_LENGTH)
        .take_while(|(x, y)| genes_match(x, y))
        .count();
    let bonus = WINKLER_SCALING * prefix as f64 * (1.0 - jaro);

    (jaro + bonus).min(1.0)
}

/// Half the number of claimed pairs that disagree once both sides are read
/// in order
fn count_transpositions(a: &[Gene], b: &[Gene], a_claimed: &[bool], b_claimed: &[bool]) -> usize {
    let claimed_a = a.iter().zip(a_claimed).filter(|&(_, &c)| c).map(|(g, _)| g);
    let claimed_b = b.iter().zip(b_claimed).filter(|&(_, &c)| c).map(|(g, _)| g);

    let out_of_order = claimed_a
        .zip(claimed_b)
        .filter(|(x, y)| !genes_match(x, y))
        .count();

    out_of_order / 2
}
