//! Dictionary matcher (spec §4b). Finds every substring of the password
//! equal, case-insensitively, to a ranked wordlist entry.

use std::collections::HashMap;

use crate::entropy::{password_cardinality, uppercase_entropy};
use crate::matching::{char_len, char_slice, DictionaryPayload, Match, MatchPayload, Pattern};

/// Runs the dictionary matcher against every dictionary the factory owns.
pub fn matches(password: &str, dictionaries: &HashMap<String, Vec<String>>) -> Vec<Match> {
    let mut out = Vec::new();
    for (name, words) in dictionaries {
        out.extend(matches_against_list(password, name, words));
    }
    out
}

/// Runs the dictionary matcher against a single ranked word list. Exposed
/// separately so the per-evaluation `user_inputs` dictionary (built fresh
/// for each call to `evaluate`, per spec §5) can reuse the same logic
/// without being folded into the factory's shared dictionaries.
pub fn matches_against_list(password: &str, dictionary_name: &str, ranked_words: &[String]) -> Vec<Match> {
    if ranked_words.is_empty() {
        return Vec::new();
    }
    let mut rank_by_word: HashMap<String, u64> = HashMap::with_capacity(ranked_words.len());
    for (idx, word) in ranked_words.iter().enumerate() {
        rank_by_word
            .entry(word.to_lowercase())
            .or_insert((idx + 1) as u64);
    }

    let n = char_len(password);
    let lower_chars: Vec<char> = password.to_lowercase().chars().collect();
    let mut out = Vec::new();

    for i in 0..n {
        for j in i..n {
            let candidate: String = lower_chars[i..=j].iter().collect();
            if let Some(&rank) = rank_by_word.get(&candidate) {
                let token = char_slice(password, i, j);
                let base_entropy = (rank as f64).log2();
                let upper_entropy = uppercase_entropy(&token);
                out.push(Match {
                    i,
                    j,
                    token: token.clone(),
                    pattern: Pattern::Dictionary,
                    cardinality: password_cardinality(&token).max(1),
                    entropy: base_entropy + upper_entropy,
                    payload: MatchPayload::Dictionary(DictionaryPayload {
                        dictionary_name: dictionary_name.to_string(),
                        matched_word: candidate,
                        rank,
                        base_entropy,
                        uppercase_entropy: upper_entropy,
                        l33t: None,
                    }),
                });
            }
        }
    }
    out
}
