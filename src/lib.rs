// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! A library for compiling regular expressions over Unicode codepoints into
//! deterministic finite automata.
//!
//! Patterns are built as trees with the combinators in the [pattern] module.
//! Compiling a pattern runs a fixed pipeline:
//!
//! 1. a Thompson-style construction turns the tree into an [nfa::Nfa],
//! 2. the subset construction in [determinize] computes the rows of the
//!    deterministic automaton,
//! 3. the rows become a [dfa::Dfa] with dense state ids,
//! 4. the dfa is flattened into the transition matrix of a [Matcher].
//!
//! A `Matcher` answers full-match, windowed match, search and find queries on
//! slices of `char`. All offsets and lengths count codepoints. The line begin
//! and line end assertions hold at the first and at the last codepoint of the
//! matched window.
//!
//! ```
//! use regdfa::pattern::{literal, range};
//!
//! let matcher = (range('0', '9').many() + literal("秋水")).compile();
//!
//! let text: Vec<char> = "落霞与孤鹜齐飞，42秋水共长天一色。".chars().collect();
//! assert_eq!(matcher.search(&text), Some(8));
//!
//! let found = matcher.find(&text).map(|span| span.range());
//! assert_eq!(found, Some(8..12));
//! ```
//!
//! [pattern]: pattern/index.html
//! [nfa::Nfa]: nfa/struct.Nfa.html
//! [determinize]: determinize/index.html
//! [dfa::Dfa]: dfa/struct.Dfa.html
//! [Matcher]: struct.Matcher.html

#![deny(missing_docs)]

extern crate encode_unicode;
#[macro_use]
extern crate failure;
extern crate tracing;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
#[macro_use]
extern crate proptest;

pub mod alphabet;
pub mod determinize;
pub mod dfa;
pub mod dot;
pub mod encoding;
pub mod graph;
pub mod nfa;
pub mod pattern;
pub mod range;

mod config;
mod error;
mod matcher;
mod span;
mod traverse;

#[cfg(test)]
mod testutils;

pub use config::Config;
pub use error::{Error, Result};
pub use matcher::{MatchMode, Matcher, Matches};
pub use pattern::Pattern;
pub use span::Span;
pub use traverse::PatternDfsIter;
