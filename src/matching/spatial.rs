//! Spatial (keyboard-adjacency) matcher (spec §4d). Detects maximal runs
//! where each character is adjacent, on some keyboard graph, to the
//! previous one, counting direction changes ("turns") and shift-key use.

use std::collections::HashMap;

use crate::adjacency_graphs::{self, Graph};
use crate::entropy::binomial;
use crate::matching::{Match, MatchPayload, Pattern, SpatialPayload};

const MIN_RUN_LENGTH: usize = 3;

pub fn matches(password: &str, graphs: &[(&'static str, &'static Graph)]) -> Vec<Match> {
    let mut out = Vec::new();
    for &(name, graph) in graphs {
        let shift_map = adjacency_graphs::shift_map_for(name);
        out.extend(matches_on_graph(password, name, graph, shift_map));
    }
    out
}

fn reverse_shift_map(shift_map: Option<&HashMap<char, char>>) -> HashMap<char, char> {
    shift_map
        .map(|m| m.iter().map(|(&k, &v)| (v, k)).collect())
        .unwrap_or_default()
}

/// Resolves a password character to its unshifted graph key and whether
/// producing it required the shift key.
fn base_key(c: char, reverse_shift: &HashMap<char, char>) -> (char, bool) {
    match reverse_shift.get(&c) {
        Some(&unshifted) => (unshifted, true),
        None => (c, false),
    }
}

fn matches_on_graph(
    password: &str,
    graph_name: &'static str,
    graph: &Graph,
    shift_map: Option<&HashMap<char, char>>,
) -> Vec<Match> {
    let reverse = reverse_shift_map(shift_map);
    let chars: Vec<char> = password.chars().collect();
    let n = chars.len();
    let mut out = Vec::new();

    let (starts, degree) = graph_stats(graph);
    if starts == 0 {
        return out;
    }

    let mut i = 0;
    while i < n {
        let mut j = i;
        let mut turns: u32 = 0;
        let mut last_direction: Option<usize> = None;

        while j + 1 < n {
            let (prev_base, _) = base_key(chars[j], &reverse);
            let (cur_base, _) = base_key(chars[j + 1], &reverse);
            let neighbors = match graph.get(&prev_base) {
                Some(v) => v,
                None => break,
            };
            let direction = neighbors.iter().position(|slot| *slot == Some(cur_base));
            match direction {
                Some(d) => {
                    match last_direction {
                        Some(last) if last == d => {}
                        _ => turns += 1,
                    }
                    last_direction = Some(d);
                    j += 1;
                }
                None => break,
            }
        }

        let length = j - i + 1;
        if length >= MIN_RUN_LENGTH {
            let token: String = chars[i..=j].iter().collect();
            let shifted_count = chars[i..=j]
                .iter()
                .filter(|&&c| base_key(c, &reverse).1)
                .count() as u32;
            let entropy = spatial_entropy(length as u32, turns.max(1), shifted_count, starts, degree);
            out.push(Match {
                i,
                j,
                token,
                pattern: Pattern::Spatial,
                cardinality: degree,
                entropy,
                payload: MatchPayload::Spatial(SpatialPayload {
                    graph_name,
                    turns: turns.max(1),
                    shifted_count,
                }),
            });
        }
        i = j + 1;
    }

    out
}

fn graph_stats(graph: &Graph) -> (u64, u64) {
    let starts = graph.len() as u64;
    if starts == 0 {
        return (0, 0);
    }
    let sum: u64 = graph
        .values()
        .map(|neighbors| neighbors.iter().filter(|n| n.is_some()).count() as u64)
        .sum();
    (starts, sum / starts)
}

/// `log2(S * D * L)` plus a turn-combination term and a shift-key term,
/// the entropy-space counterpart of the guesses-multiplicative spatial
/// estimator the teacher crate uses (`scoring.rs::SpatialEstimator`).
fn spatial_entropy(length: u32, turns: u32, shifted_count: u32, starts: u64, degree: u64) -> f64 {
    let l = length as u64;
    let turn_term: u64 = (1..=turns as u64)
        .map(|t| binomial(l.saturating_sub(1), t.saturating_sub(1)) * degree.saturating_pow(t as u32).max(1))
        .sum();
    let mut guesses = (starts as f64) * (turn_term.max(1) as f64);

    let unshifted_count = length.saturating_sub(shifted_count);
    if shifted_count > 0 {
        if shifted_count == length || unshifted_count == 0 {
            guesses *= 2.0;
        } else {
            let limit = std::cmp::min(shifted_count, unshifted_count) as u64;
            let combos: u64 = (1..=limit)
                .map(|i| binomial((shifted_count + unshifted_count) as u64, i))
                .sum();
            guesses *= combos.max(1) as f64;
        }
    }

    guesses.max(1.0).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_row_has_one_turn() {
        let found = matches("qwerty", &adjacency_graphs::named_graphs());
        let m = found
            .iter()
            .find(|m| matches!(&m.payload, MatchPayload::Spatial(p) if p.graph_name == "qwerty") && m.token == "qwerty");
        let m = m.expect("expected a qwerty spatial match covering the whole token");
        let MatchPayload::Spatial(p) = &m.payload else {
            unreachable!()
        };
        assert_eq!(p.turns, 1);
    }

    #[test]
    fn short_runs_are_not_matched() {
        let found = matches("qw", &adjacency_graphs::named_graphs());
        assert!(found.iter().all(|m| m.token.chars().count() >= MIN_RUN_LENGTH));
    }
}
