//! Leet-substitution matcher (spec §4c). Enumerates plausible character
//! substitutions, re-runs the dictionary matcher against each translated
//! string, and charges extra combinatorial entropy for the substitutions
//! actually used.
//!
//! Substitution dictionaries are generated so each leet character maps to
//! exactly one normal letter per dictionary -- a leet char fed by two
//! normal letters (e.g. `1` from both `i` and `l`) produces one dictionary
//! per choice via a cartesian product, never a single dictionary that
//! mixes roles for the same leet char. This mirrors a known limitation of
//! the source algorithm; we reproduce it rather than "fix" it (spec §9).

use std::collections::HashMap;

use itertools::Itertools;

use crate::entropy::{binomial, password_cardinality, uppercase_entropy};
use crate::matching::{char_len, dictionary, DictionaryPayload, L33tPayload, Match, MatchPayload, Pattern};

/// letter -> leet forms that can stand in for it.
const LEET_TABLE: &[(char, &[char])] = &[
    ('a', &['4', '@']),
    ('b', &['8']),
    ('c', &['(', '{', '[', '<']),
    ('e', &['3']),
    ('g', &['6', '9']),
    ('i', &['1', '!', '|']),
    ('l', &['1', '|', '7']),
    ('o', &['0']),
    ('s', &['$', '5']),
    ('t', &['+', '7']),
    ('x', &['%']),
    ('z', &['2']),
];

/// Every substitution dictionary (leet-char -> normal-char) applicable to
/// `password`: rows are restricted to leet chars that actually occur, then
/// the cartesian product is taken over leet chars fed by more than one
/// normal letter.
fn substitution_dictionaries(password: &str) -> Vec<HashMap<char, char>> {
    let present: std::collections::HashSet<char> = password.chars().collect();

    // group by leet char -> candidate normal letters
    let mut by_leet_char: HashMap<char, Vec<char>> = HashMap::new();
    for (normal, leets) in LEET_TABLE {
        for &leet in *leets {
            if present.contains(&leet) {
                by_leet_char.entry(leet).or_default().push(*normal);
            }
        }
    }
    if by_leet_char.is_empty() {
        return Vec::new();
    }

    let leet_chars: Vec<char> = by_leet_char.keys().copied().collect();
    let choice_lists: Vec<&Vec<char>> = leet_chars.iter().map(|c| &by_leet_char[c]).collect();

    choice_lists
        .iter()
        .map(|choices| choices.iter().copied())
        .multi_cartesian_product()
        .map(|combo| leet_chars.iter().copied().zip(combo).collect::<HashMap<char, char>>())
        .collect()
}

fn translate(password: &str, subs: &HashMap<char, char>) -> String {
    password
        .chars()
        .map(|c| *subs.get(&c).unwrap_or(&c))
        .collect()
}

/// Runs the leet matcher against every dictionary the factory owns.
pub fn matches(password: &str, dictionaries: &HashMap<String, Vec<String>>) -> Vec<Match> {
    let mut out = Vec::new();
    for (name, words) in dictionaries {
        out.extend(matches_against_list(password, name, words));
    }
    out
}

/// Runs the leet matcher against a single ranked word list.
pub fn matches_against_list(password: &str, dictionary_name: &str, ranked_words: &[String]) -> Vec<Match> {
    if ranked_words.is_empty() || char_len(password) == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for subs in substitution_dictionaries(password) {
        let translated = translate(password, &subs);
        let inner = dictionary::matches_against_list(&translated, dictionary_name, ranked_words);
        for m in inner {
            let original_token = crate::matching::char_slice(password, m.i, m.j);
            let used_subs: Vec<(char, char)> = subs
                .iter()
                .filter(|(leet, _)| original_token.contains(**leet))
                .map(|(leet, normal)| (*leet, *normal))
                .collect();
            if used_subs.is_empty() {
                continue;
            }
            let MatchPayload::Dictionary(inner_payload) = m.payload else {
                continue;
            };

            let l33t_entropy = used_subs
                .iter()
                .map(|(leet, normal)| {
                    let lower = original_token.to_lowercase();
                    let s = lower.chars().filter(|c| c == leet).count() as u64;
                    let u = lower.chars().filter(|c| c == normal).count() as u64;
                    let limit = std::cmp::min(s, u);
                    let sum: u64 = (0..=limit).map(|i| binomial(s + u, i)).sum();
                    (sum.max(1) as f64).log2()
                })
                .sum::<f64>()
                .max(1.0);

            let upper_entropy = uppercase_entropy(&original_token);
            let base_entropy = inner_payload.base_entropy;

            out.push(Match {
                i: m.i,
                j: m.j,
                token: original_token.clone(),
                pattern: Pattern::L33tDictionary,
                cardinality: password_cardinality(&original_token).max(1),
                entropy: base_entropy + upper_entropy + l33t_entropy,
                payload: MatchPayload::Dictionary(DictionaryPayload {
                    dictionary_name: inner_payload.dictionary_name,
                    matched_word: inner_payload.matched_word,
                    rank: inner_payload.rank,
                    base_entropy,
                    uppercase_entropy: upper_entropy,
                    l33t: Some(L33tPayload {
                        subs: used_subs,
                        l33t_entropy,
                    }),
                }),
            });
        }
    }

    out.sort_by(|a, b| (a.i, a.j).cmp(&(b.i, b.j)));
    out.dedup_by(|a, b| a.i == b.i && a.j == b.j && a.token == b.token && (a.entropy - b.entropy).abs() < 1e-9);
    out
}
