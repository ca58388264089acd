// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Edge labels for the automata.
//!
//! A `UnicodeRange` is a concrete pattern label: either an inclusive interval
//! of codepoints or a zero-width assertion. A `Label` is what an NFA edge
//! carries, which adds the distinguished epsilon label to the concrete ones.

use std::fmt::{self, Display};

/// The kind of a `UnicodeRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RangeKind {
    /// Matches one codepoint from an inclusive interval.
    CharacterRange,

    /// Matches the empty string at the start of the matched window.
    LineBegin,

    /// Matches the empty string when positioned on the last codepoint of the
    /// matched window.
    LineEnd,
}

/// A concrete label on an automaton edge.
///
/// Zero-width kinds carry the dummy bounds `'\0'..='\0'` so that all line
/// begin (or line end) labels compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnicodeRange {
    kind: RangeKind,
    lower: char,
    upper: char,
}

impl UnicodeRange {
    /// Creates a new character range.
    ///
    /// If `upper` is less than `lower` then they will be reversed.
    pub fn new(lower: char, upper: char) -> UnicodeRange {
        if upper < lower {
            UnicodeRange::character_range(upper, lower)
        } else {
            UnicodeRange::character_range(lower, upper)
        }
    }

    /// Creates a range matching exactly one codepoint.
    pub fn single(c: char) -> UnicodeRange {
        UnicodeRange::character_range(c, c)
    }

    /// Creates the line begin assertion.
    pub fn line_begin() -> UnicodeRange {
        UnicodeRange::zero_width(RangeKind::LineBegin)
    }

    /// Creates the line end assertion.
    pub fn line_end() -> UnicodeRange {
        UnicodeRange::zero_width(RangeKind::LineEnd)
    }

    fn character_range(lower: char, upper: char) -> UnicodeRange {
        UnicodeRange {
            kind: RangeKind::CharacterRange,
            lower,
            upper,
        }
    }

    fn zero_width(kind: RangeKind) -> UnicodeRange {
        UnicodeRange {
            kind,
            lower: '\0',
            upper: '\0',
        }
    }

    /// The kind of the range.
    pub fn kind(&self) -> RangeKind {
        self.kind
    }

    /// The lower (inclusive) bound of the range.
    pub fn lower(&self) -> char {
        self.lower
    }

    /// The upper (inclusive) bound of the range.
    pub fn upper(&self) -> char {
        self.upper
    }

    /// Check if the label matches without consuming a codepoint.
    pub fn is_zero_width(&self) -> bool {
        self.kind != RangeKind::CharacterRange
    }

    /// Check if `c` falls within a character range.
    ///
    /// Zero-width assertions contain no codepoints.
    pub fn contains(&self, c: char) -> bool {
        match self.kind {
            RangeKind::CharacterRange => self.lower <= c && c <= self.upper,
            RangeKind::LineBegin | RangeKind::LineEnd => false,
        }
    }
}

impl Display for UnicodeRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            RangeKind::LineBegin => write!(f, "^"),
            RangeKind::LineEnd => write!(f, "$"),
            RangeKind::CharacterRange if self.lower == self.upper => write!(f, "{}", self.lower),
            RangeKind::CharacterRange => write!(f, "[{} - {}]", self.lower, self.upper),
        }
    }
}

/// The label of an NFA edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// The edge is taken without consuming input.
    Epsilon,

    /// The edge is taken when the range matches.
    Range(UnicodeRange),
}

impl Label {
    /// Check if this is the epsilon label.
    pub fn is_epsilon(&self) -> bool {
        *self == Label::Epsilon
    }

    /// Get the concrete range of the label (`None` for epsilon).
    pub fn range(&self) -> Option<&UnicodeRange> {
        match self {
            Label::Epsilon => None,
            Label::Range(range) => Some(range),
        }
    }
}

impl From<UnicodeRange> for Label {
    fn from(range: UnicodeRange) -> Label {
        Label::Range(range)
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Epsilon => write!(f, "ε"),
            Label::Range(range) => range.fmt(f),
        }
    }
}
