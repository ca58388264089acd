// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Pattern trees and the combinators that build them.
//!
//! A `Pattern` is an immutable tree with four kinds of node: alternation,
//! concatenation, kleene star and symbol. Trees are only built through the
//! combinators in this module (`symbol`, `range`, `literal`, `line_begin`,
//! `line_end`, `many`, the `repeat_*` family and the `|` and `+` operators),
//! so every tree is well formed.
//!
//! ```
//! use regdfa::pattern::{line_begin, range, symbol};
//!
//! let digits_or_a = range('0', '9').many() | (line_begin() + symbol('a').many());
//! let matcher = digits_or_a.compile();
//!
//! let text: Vec<char> = "aaa".chars().collect();
//! assert!(matcher.full_match(&text));
//! ```

use std::fmt::{self, Display};
use std::mem;
use std::ops::{Add, BitOr};

use crate::config::Config;
use crate::matcher::Matcher;
use crate::range::UnicodeRange;
use crate::traverse::PatternDfsIter;

/// A regular expression tree.
///
/// A `Pattern` exclusively owns its children. It can be compiled any number
/// of times; compiling does not modify it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    kind: Box<PatternKind>,
}

impl Pattern {
    fn new(kind: PatternKind) -> Pattern {
        Pattern {
            kind: Box::new(kind),
        }
    }

    /// Get the kind of the pattern.
    pub fn kind(&self) -> &PatternKind {
        &self.kind
    }

    /// Create a pattern matching zero or more repetitions of `self`.
    pub fn many(self) -> Pattern {
        many(self)
    }

    /// Iterate over the nodes of the tree in post-order (left subtree, right
    /// subtree, node).
    pub fn traverse(&self) -> PatternDfsIter {
        PatternDfsIter::new(self)
    }

    // Moves the children of this node onto `stack`, leaving a leaf behind.
    fn take_children(&mut self, stack: &mut Vec<Pattern>) {
        let leaf = PatternKind::Symbol(UnicodeRange::line_begin());
        match mem::replace(&mut *self.kind, leaf) {
            PatternKind::Alternation(Alternation { first, second })
            | PatternKind::Concatenation(Concatenation { first, second }) => {
                stack.push(first);
                stack.push(second);
            }
            PatternKind::KleeneStar(KleeneStar { inner }) => stack.push(inner),
            PatternKind::Symbol(_) => {}
        }
    }

    /// Compile the pattern into a `Matcher` using the default `Config`.
    pub fn compile(&self) -> Matcher {
        Config::new()
            .compile(self)
            .unwrap_or_else(|err| unreachable!("unbounded compilation failed: {}", err))
    }
}

impl BitOr for Pattern {
    type Output = Pattern;

    fn bitor(self, rhs: Pattern) -> Pattern {
        Pattern::new(PatternKind::Alternation(Alternation {
            first: self,
            second: rhs,
        }))
    }
}

impl Add for Pattern {
    type Output = Pattern;

    fn add(self, rhs: Pattern) -> Pattern {
        Pattern::new(PatternKind::Concatenation(Concatenation {
            first: self,
            second: rhs,
        }))
    }
}

// Trees built by `literal` and `repeat_exactly` are as deep as they are long,
// so dropping unlinks the nodes onto a heap allocated stack instead of
// recursing.
impl Drop for Pattern {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.take_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.take_children(&mut stack);
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.fmt(f)
    }
}

/// The kind of a pattern node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// Matches either of two patterns.
    Alternation(Alternation),

    /// Matches two patterns in sequence.
    Concatenation(Concatenation),

    /// Matches zero or more repetitions of a pattern.
    KleeneStar(KleeneStar),

    /// Matches a single codepoint from a range, or a zero-width assertion.
    Symbol(UnicodeRange),
}

impl Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::PatternKind::*;

        match self {
            Alternation(alt) => write!(f, "Alternation({}, {})", alt.first, alt.second),
            Concatenation(cat) => write!(f, "Concatenation({}, {})", cat.first, cat.second),
            KleeneStar(star) => write!(f, "KleeneStar({})", star.inner),
            Symbol(range) => write!(f, "Symbol({})", range),
        }
    }
}

/// The operands of an alternation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alternation {
    first: Pattern,
    second: Pattern,
}

impl Alternation {
    /// Get the first alternative.
    pub fn first(&self) -> &Pattern {
        &self.first
    }

    /// Get the second alternative.
    pub fn second(&self) -> &Pattern {
        &self.second
    }
}

/// The operands of a concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Concatenation {
    first: Pattern,
    second: Pattern,
}

impl Concatenation {
    /// Gets the pattern matched first.
    pub fn first(&self) -> &Pattern {
        &self.first
    }

    /// Gets the pattern matched second.
    pub fn second(&self) -> &Pattern {
        &self.second
    }
}

/// The operand of a kleene star.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KleeneStar {
    inner: Pattern,
}

impl KleeneStar {
    /// Get the pattern that is being repeated.
    pub fn inner(&self) -> &Pattern {
        &self.inner
    }
}

/// Create a pattern matching exactly the codepoint `c`.
pub fn symbol(c: char) -> Pattern {
    Pattern::new(PatternKind::Symbol(UnicodeRange::single(c)))
}

/// Create a pattern matching one codepoint in `lower..=upper`.
///
/// Reversed bounds are swapped.
pub fn range(lower: char, upper: char) -> Pattern {
    Pattern::new(PatternKind::Symbol(UnicodeRange::new(lower, upper)))
}

/// Create a pattern matching `text` exactly.
///
/// The result is a right-folded concatenation of symbols, so `literal("abc")`
/// is `a + (b + c)`.
///
/// # Panics
///
/// Panics if `text` is empty; a pattern cannot denote only the empty string.
pub fn literal(text: &str) -> Pattern {
    text.chars()
        .rev()
        .map(symbol)
        .fold(None, |rest, head| match rest {
            Some(rest) => Some(head + rest),
            None => Some(head),
        })
        .unwrap_or_else(|| panic!("regdfa: a literal pattern must not be empty"))
}

/// Create the zero-width assertion for the start of the matched window.
pub fn line_begin() -> Pattern {
    Pattern::new(PatternKind::Symbol(UnicodeRange::line_begin()))
}

/// Create the zero-width assertion for the last codepoint of the matched
/// window.
pub fn line_end() -> Pattern {
    Pattern::new(PatternKind::Symbol(UnicodeRange::line_end()))
}

/// Create a pattern matching zero or more repetitions of `inner`.
pub fn many(inner: Pattern) -> Pattern {
    Pattern::new(PatternKind::KleeneStar(KleeneStar { inner }))
}

/// Create a pattern matching exactly `times` repetitions of `x`.
///
/// # Panics
///
/// Panics if `times` is zero.
pub fn repeat_exactly(x: Pattern, times: usize) -> Pattern {
    assert!(times > 0, "regdfa: cannot repeat a pattern zero times");

    let mut result = x.clone();
    for _ in 1..times {
        result = result + x.clone();
    }
    result
}

/// Create a pattern matching `times` or more repetitions of `x`.
pub fn repeat_at_least(x: Pattern, times: usize) -> Pattern {
    if times == 0 {
        many(x)
    } else {
        repeat_exactly(x.clone(), times) + many(x)
    }
}

/// Create a pattern matching between `at_least` and `at_most` (inclusive)
/// repetitions of `x`.
///
/// # Panics
///
/// Panics if `at_least` is zero or if `at_most` is less than `at_least`.
pub fn repeat(x: Pattern, at_least: usize, at_most: usize) -> Pattern {
    assert!(
        at_least <= at_most,
        "regdfa: invalid repetition bounds {{{}, {}}}",
        at_least,
        at_most
    );

    let mut result = repeat_exactly(x.clone(), at_least);
    for times in at_least + 1..=at_most {
        result = result | repeat_exactly(x.clone(), times);
    }
    result
}
