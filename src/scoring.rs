//! Minimum-entropy dynamic program (spec §4g) -- the heart of coverage
//! selection. Builds the cheapest (lowest total entropy) sequence of
//! matches that covers the whole password, filling any gaps with
//! synthetic brute-force spans.
//!
//! This replaces the teacher crate's guesses-multiplicative,
//! sequence-length-indexed DP (`Optimal { m, pi, g }`, `factorial(l)`,
//! `MIN_GUESSES_BEFORE_GROWING_SEQUENCE`) with the simpler single-
//! dimension additive-entropy recurrence the older entropy-bits model
//! calls for -- one `E[k]`/`best[k]` array, no sequence-length dimension,
//! no combinatorial-ordering penalty. The teacher's own technique of
//! bucketing matches by `j` before scanning is kept (`matches_by_j`
//! below is literally the teacher's name for the same structure).

use crate::entropy::password_cardinality;
use crate::matching::{char_len, Match};

#[derive(Debug, Clone)]
pub struct GuessCalculation {
    pub entropy: f64,
    pub sequence: Vec<Match>,
}

/// Runs the DP over `password` given every candidate `matches` found by
/// the orchestrator, returning the optimal covering sequence and its
/// total entropy (spec §4g).
pub fn minimum_entropy_match_sequence(password: &str, matches: &[Match]) -> GuessCalculation {
    let n = char_len(password);
    if n == 0 {
        return GuessCalculation { entropy: 0.0, sequence: Vec::new() };
    }

    let cardinality = password_cardinality(password).max(1);
    let brute_force_bits_per_char = (cardinality as f64).log2();

    // bucket candidate matches by ending index j, for a tight inner loop.
    let mut matches_by_j: Vec<Vec<&Match>> = (0..n).map(|_| Vec::new()).collect();
    for m in matches {
        if m.j < n {
            matches_by_j[m.j].push(m);
        }
    }

    // E[k]: minimum total entropy covering password[0..=k].
    // best[k]: the match chosen at k, if any (None means "extend with one
    // brute-force character" rather than close out with a real match).
    let mut e = vec![0.0f64; n];
    let mut best: Vec<Option<&Match>> = vec![None; n];

    e[0] = brute_force_bits_per_char;
    for candidate in &matches_by_j[0] {
        if candidate.i == 0 {
            let cand_entropy = candidate.entropy;
            if cand_entropy < e[0] {
                e[0] = cand_entropy;
                best[0] = Some(candidate);
            }
        }
    }

    for k in 1..n {
        e[k] = e[k - 1] + brute_force_bits_per_char;
        best[k] = None;
        for candidate in &matches_by_j[k] {
            let prefix = if candidate.i == 0 { 0.0 } else { e[candidate.i - 1] };
            let cand_entropy = prefix + candidate.entropy;
            if cand_entropy < e[k] {
                e[k] = cand_entropy;
                best[k] = Some(candidate);
            }
        }
    }

    let mut chosen: Vec<Match> = Vec::new();
    let mut k = n - 1;
    loop {
        match best[k] {
            Some(m) => {
                chosen.push((*m).clone());
                if m.i == 0 {
                    break;
                }
                k = m.i - 1;
            }
            None => {
                if k == 0 {
                    break;
                }
                k -= 1;
            }
        }
    }
    chosen.reverse();

    let sequence = fill_gaps(password, n, chosen, cardinality);

    GuessCalculation { entropy: e[n - 1], sequence }
}

/// Inserts a synthetic `bruteforce` match for every maximal uncovered
/// span, so the final sequence satisfies `seq[0].i == 0`,
/// `seq[-1].j == N - 1`, and contiguity between consecutive matches.
fn fill_gaps(password: &str, n: usize, chosen: Vec<Match>, cardinality: u64) -> Vec<Match> {
    let mut sequence = Vec::with_capacity(chosen.len() + 2);
    let mut cursor = 0usize;

    for m in chosen {
        if m.i > cursor {
            sequence.push(Match::bruteforce(password, cursor, m.i - 1, cardinality));
        }
        cursor = m.j + 1;
        sequence.push(m);
    }
    if cursor < n {
        sequence.push(Match::bruteforce(password, cursor, n - 1, cardinality));
    }
    sequence
}
