//! An entropy-based password strength estimator core, modeled on the
//! well-known zxcvbn algorithm.
//!
//! Given a candidate password and an optional list of user-supplied
//! strings the attacker may know, [`Evaluator::evaluate`] (or the
//! one-shot [`zxcvbn`] function) returns an entropy estimate, a derived
//! crack-time estimate, an ordinal score, the optimal decomposition of
//! the password into recognized weakness patterns, and feedback tags.
//!
//! Loading the bundled wordlists from disk, translating feedback tags
//! into localized strings, and any CLI/benchmark/serialization driver
//! are left to external collaborators -- this crate owns only the
//! matchers, the coverage DP, and the entropy/scoring/feedback model.

#[macro_use]
extern crate lazy_static;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

use std::collections::HashMap;
use std::time::Instant;

pub mod adjacency_graphs;
mod entropy;
pub mod feedback;
pub mod matching;
mod scoring;

pub use feedback::Feedback;
pub use matching::{Match, Pattern};

/// Owns the ranked wordlists and keyboard graphs a matcher suite needs.
/// Built once, immutable, and shared by reference across evaluations
/// (spec §5). Wordlist *loading* is out of scope for this crate (spec
/// §1, §7): `MatcherFactory::new` starts with no dictionaries, and
/// callers that have loaded wordlists from a resource bundle attach them
/// with [`MatcherFactory::with_dictionary`].
#[derive(Debug, Clone)]
pub struct MatcherFactory {
    dictionaries: HashMap<String, Vec<String>>,
    graphs: Vec<(&'static str, &'static adjacency_graphs::Graph)>,
}

impl MatcherFactory {
    /// A factory with the built-in keyboard graphs and no dictionaries.
    pub fn new() -> Self {
        MatcherFactory {
            dictionaries: HashMap::new(),
            graphs: adjacency_graphs::named_graphs(),
        }
    }

    /// Attaches a ranked word list under `name` (rank = 1-based position
    /// in `ranked_words`). Replaces any existing list of the same name.
    pub fn with_dictionary(mut self, name: &str, ranked_words: Vec<String>) -> Self {
        self.dictionaries.insert(name.to_string(), ranked_words);
        self
    }
}

impl Default for MatcherFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// A reusable evaluator built from a [`MatcherFactory`]. Construct once
/// and call [`Evaluator::evaluate`] for every password; the factory's
/// dictionaries and graphs are shared read-only across calls.
#[derive(Debug, Clone)]
pub struct Evaluator {
    factory: MatcherFactory,
}

impl Evaluator {
    pub fn new(factory: MatcherFactory) -> Self {
        Evaluator { factory }
    }

    /// Evaluates a single password against this evaluator's factory plus
    /// a per-evaluation dictionary built from `user_inputs` (spec §5,
    /// §6 Configuration). Total and synchronous: every input, including
    /// the empty password, produces an `Entropy` (spec §7).
    pub fn evaluate(&self, password: &str, user_inputs: &[&str]) -> Entropy {
        let start = Instant::now();

        let matches = matching::all_matches(password, user_inputs, &self.factory);
        let calculation = scoring::minimum_entropy_match_sequence(password, &matches);
        let crack_time = entropy::entropy_to_crack_time(calculation.entropy);
        let score = entropy::crack_time_to_score(crack_time);
        let feedback = feedback::derive(&calculation.sequence, score);

        let calc_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        Entropy {
            password: password.to_string(),
            entropy: calculation.entropy,
            match_sequence: calculation.sequence,
            crack_time,
            crack_time_display: None,
            score,
            feedback,
            calc_time_ms,
        }
    }
}

/// Takes a password and optionally a list of user-supplied inputs (e.g.
/// username, email, first name) and scores the password's strength.
/// Convenience entry point over `Evaluator::new(MatcherFactory::default())`;
/// reach for `Evaluator` directly to reuse dictionaries/graphs across many
/// passwords or to supply loaded wordlists via `MatcherFactory::with_dictionary`.
pub fn zxcvbn(password: &str, user_inputs: &[&str]) -> Entropy {
    Evaluator::new(MatcherFactory::default()).evaluate(password, user_inputs)
}

/// The result of evaluating one password (spec §3).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
pub struct Entropy {
    password: String,
    entropy: f64,
    match_sequence: Vec<Match>,
    crack_time: f64,
    crack_time_display: Option<String>,
    score: u8,
    feedback: Feedback,
    calc_time_ms: f64,
}

impl Entropy {
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Total bits of entropy attributed to the optimal decomposition.
    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// The optimal, gap-free covering of the password (spec §4g, §8
    /// invariant 1).
    pub fn match_sequence(&self) -> &[Match] {
        &self.match_sequence
    }

    /// Expected crack time, in seconds, under the fixed guesses-per-second
    /// model (spec §4a). Rendering this into a human string (`"3 hours"`,
    /// `"centuries"`) is left to an external collaborator (spec §3).
    pub fn crack_time(&self) -> f64 {
        self.crack_time
    }

    /// Human-readable rendering of [`Entropy::crack_time`] (e.g. "3 hours",
    /// "centuries"), part of the result schema but left unset here: turning
    /// seconds into localized prose is an external renderer's job (spec
    /// §3). `Entropy::with_crack_time_display` lets a caller attach one
    /// after the fact.
    pub fn crack_time_display(&self) -> Option<&str> {
        self.crack_time_display.as_deref()
    }

    /// Attaches an externally rendered [`Entropy::crack_time_display`]
    /// string to this result.
    pub fn with_crack_time_display(mut self, display: String) -> Self {
        self.crack_time_display = Some(display);
        self
    }

    /// Ordinal strength score, 0 (weakest) to 6 (strongest).
    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn calc_time_ms(&self) -> f64 {
        self.calc_time_ms
    }
}
