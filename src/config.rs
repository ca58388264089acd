// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use crate::determinize::Table;
use crate::dfa::Dfa;
use crate::error::Result;
use crate::matcher::Matcher;
use crate::nfa::Nfa;
use crate::pattern::Pattern;

/// Options for compiling a `Pattern` into a `Matcher`.
///
/// The subset construction can produce a number of states exponential in the
/// size of the pattern. By default it is unbounded; `state_limit` turns a
/// runaway construction into an `Error::StateLimitExceeded`.
///
/// ```
/// use regdfa::pattern::{literal, range};
/// use regdfa::Config;
///
/// let pattern = range('0', '9').many() + literal("ABC");
/// let matcher = Config::new().state_limit(64).compile(&pattern).unwrap();
///
/// let text: Vec<char> = "42ABC".chars().collect();
/// assert!(matcher.full_match(&text));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    state_limit: Option<usize>,
}

impl Config {
    /// Create a `Config` with no state limit.
    pub fn new() -> Config {
        Config::default()
    }

    /// Limit the number of rows the subset construction may produce.
    pub fn state_limit(self, limit: usize) -> Config {
        Config {
            state_limit: Some(limit),
        }
    }

    /// Compile `pattern` into a `Matcher`.
    ///
    /// # Errors
    ///
    /// Returns `Error::StateLimitExceeded` if a state limit is set and the
    /// subset construction needs more rows than it allows.
    #[tracing::instrument(level = "trace", skip(pattern))]
    pub fn compile(&self, pattern: &Pattern) -> Result<Matcher> {
        let nfa = Nfa::new(pattern);
        let table = Table::new(&nfa, self.state_limit)?;
        let dfa = Dfa::new(&table, &nfa);
        let matcher = Matcher::new(dfa);

        tracing::debug!(
            states = matcher.state_count() as u64,
            symbols = matcher.alphabet().len() as u64,
            "compiled pattern"
        );

        Ok(matcher)
    }
}
