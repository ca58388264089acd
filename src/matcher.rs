// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! The transition matrix and the matching algorithms that run on it.

use crate::alphabet::{Alphabet, SymbolId};
use crate::dfa::{Dfa, StateId};
use crate::error::{Error, Result};
use crate::range::RangeKind;
use crate::span::Span;

/// Whether a match stops at the first accepting position or extends to the
/// last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Keep matching past accepting states and report the longest match.
    Greedy,

    /// Report the match as soon as an accepting state is reached.
    Lazy,
}

/// A compiled pattern.
///
/// The `Matcher` holds a dense `state × symbol` transition matrix built once
/// from a `Dfa`. It is never modified after construction so a single
/// `Matcher` can be shared between threads.
///
/// All matching operations work on slices of codepoints. A match is described
/// by its length in codepoints (or by a `Span`); `None` means there is no
/// match, which is distinct from a match of length 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    matrix: Vec<Option<StateId>>,
    accepting: Vec<bool>,
    alphabet: Alphabet,
}

impl Matcher {
    /// Flatten `dfa` into a transition matrix.
    pub fn new(dfa: Dfa) -> Matcher {
        let columns = dfa.alphabet().len();
        let mut matrix = vec![None; dfa.state_count() * columns];
        for edge in dfa.graph().edges() {
            let symbol = dfa
                .alphabet()
                .id(edge.label())
                .expect("dfa edges are labelled from its own alphabet");
            matrix[edge.from() * columns + symbol] = Some(edge.to());
        }

        let accepting = (0..dfa.state_count())
            .map(|state| dfa.is_accepting(state))
            .collect();

        Matcher {
            matrix,
            accepting,
            alphabet: dfa.alphabet().clone(),
        }
    }

    /// The number of states (rows of the matrix).
    pub fn state_count(&self) -> usize {
        self.accepting.len()
    }

    /// The alphabet (columns of the matrix).
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Iterate over the accepting states in ascending order.
    pub fn accepting_states<'a>(&'a self) -> impl Iterator<Item = StateId> + 'a {
        self.accepting
            .iter()
            .enumerate()
            .filter(|&(_, &accepting)| accepting)
            .map(|(state, _)| state)
    }

    /// Check if `state` is accepting.
    pub fn is_accepting(&self, state: StateId) -> Result<bool> {
        self.accepting
            .get(state)
            .cloned()
            .ok_or(Error::UnknownState(state))
    }

    /// The state reached from `state` on `symbol`, if any.
    pub fn transition(&self, state: StateId, symbol: SymbolId) -> Result<Option<StateId>> {
        if state >= self.state_count() {
            return Err(Error::UnknownState(state));
        }
        if symbol >= self.alphabet.len() {
            return Err(Error::UnknownSymbol(symbol));
        }
        Ok(self.matrix[state * self.alphabet.len() + symbol])
    }

    /// Check if all of `text` matches.
    pub fn full_match(&self, text: &[char]) -> bool {
        self.match_window(text, 0, text.len(), MatchMode::Greedy) == Some(text.len())
    }

    /// Find the leftmost position in `text` at which a match starts.
    ///
    /// Start positions are tried from left to right, including `text.len()`
    /// (where only a pattern accepting the empty string can match), each with
    /// a lazy match that runs to the end of the text.
    pub fn search(&self, text: &[char]) -> Option<usize> {
        // an automaton without states matches the empty string everywhere
        if self.state_count() == 0 {
            return Some(0);
        }
        (0..=text.len()).find(|&start| {
            self.match_window(text, start, text.len(), MatchMode::Lazy)
                .is_some()
        })
    }

    /// Find the leftmost match in `text`, extended to its longest length.
    pub fn find(&self, text: &[char]) -> Option<Span> {
        let start = self.search(text)?;
        let len = self.match_window(text, start, text.len(), MatchMode::Greedy)?;
        Some(Span::new(start, start + len))
    }

    /// Iterate over the successive non-overlapping longest matches in `text`.
    ///
    /// Every match is taken from a fresh window that starts where the
    /// previous match ended and runs to the end of `text`. The line begin
    /// assertion therefore holds again at each of those positions, so
    /// `line_begin() + symbol('a')` finds three matches in `"aaa"`.
    pub fn find_iter<'m, 't>(&'m self, text: &'t [char]) -> Matches<'m, 't> {
        Matches {
            matcher: self,
            text,
            position: 0,
        }
    }

    /// Match the window `text[start..end]` from its beginning and return the
    /// length of the match.
    ///
    /// The line begin assertion holds only at `start` and the line end
    /// assertion only at `end - 1`.
    ///
    /// A window with `end <= start` is empty: the result is `Some(0)` when
    /// the pattern accepts the empty string and `None` otherwise, rather
    /// than an unconditional zero length match.
    ///
    /// # Panics
    ///
    /// Panics if `start < end` and `end > text.len()`.
    pub fn match_window(
        &self,
        text: &[char],
        start: usize,
        end: usize,
        mode: MatchMode,
    ) -> Option<usize> {
        if end <= start {
            self.run(&[], mode)
        } else {
            self.run(&text[start..end], mode)
        }
    }

    fn run(&self, window: &[char], mode: MatchMode) -> Option<usize> {
        // see `search`; compiled patterns always have a start state
        if self.state_count() == 0 {
            return Some(0);
        }

        let mut state = 0;
        let mut last_match = None;
        let mut position = 0;
        // number of zero-width transitions taken since the last codepoint
        let mut zero_width = 0;

        while position < window.len() {
            if self.accepting[state] {
                match mode {
                    MatchMode::Greedy => last_match = Some(position),
                    MatchMode::Lazy => return Some(position),
                }
            }

            let allow_zero_width = zero_width < self.state_count();
            match self.step(state, window, position, allow_zero_width) {
                Some(Step::Consume(next)) => {
                    state = next;
                    position += 1;
                    zero_width = 0;
                }
                Some(Step::Assert(next)) => {
                    state = next;
                    zero_width += 1;
                }
                None => return self.accept_or(state, position, last_match),
            }
        }

        self.accept_or(state, window.len(), last_match)
    }

    fn accept_or(&self, state: StateId, position: usize, last_match: Option<usize>) -> Option<usize> {
        if self.accepting[state] {
            Some(position)
        } else {
            last_match
        }
    }

    // Takes the first transition, in symbol id order, whose label holds at
    // `position`.
    fn step(
        &self,
        state: StateId,
        window: &[char],
        position: usize,
        allow_zero_width: bool,
    ) -> Option<Step> {
        let columns = self.alphabet.len();
        let row = &self.matrix[state * columns..(state + 1) * columns];
        let c = window[position];

        for (range, target) in self.alphabet.ranges().iter().zip(row) {
            let next = match *target {
                Some(next) => next,
                None => continue,
            };
            match range.kind() {
                RangeKind::CharacterRange if range.contains(c) => {
                    return Some(Step::Consume(next));
                }
                RangeKind::LineBegin if allow_zero_width && position == 0 => {
                    return Some(Step::Assert(next));
                }
                RangeKind::LineEnd if allow_zero_width && position + 1 == window.len() => {
                    return Some(Step::Assert(next));
                }
                _ => {}
            }
        }
        None
    }
}

enum Step {
    Consume(StateId),
    Assert(StateId),
}

/// An iterator over the non-overlapping longest matches in a text.
///
/// Each match starts at the first position at or after the end of the
/// previous match where the pattern matches. An empty match advances the
/// search by one codepoint.
///
/// This is the return type of the `Matcher::find_iter()` method.
pub struct Matches<'m, 't> {
    matcher: &'m Matcher,
    text: &'t [char],
    position: usize,
}

impl<'m, 't> Iterator for Matches<'m, 't> {
    type Item = Span;

    fn next(&mut self) -> Option<Self::Item> {
        while self.position <= self.text.len() {
            let start = self.position;
            let found =
                self.matcher
                    .match_window(self.text, start, self.text.len(), MatchMode::Greedy);
            match found {
                Some(0) => {
                    self.position = start + 1;
                    return Some(Span::new(start, start));
                }
                Some(len) => {
                    self.position = start + len;
                    return Some(Span::new(start, start + len));
                }
                None => self.position = start + 1,
            }
        }
        None
    }
}
