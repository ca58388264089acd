// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::ops::Range;

/// The location of a match within a slice of codepoints.
///
/// `start` is the offset of the first matched codepoint and `end` is one past
/// the last one. Offsets count codepoints, not bytes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new `Span` for a given start and end offset.
    ///
    /// # Panics
    ///
    /// Panics if `end` is less than `start`.
    pub fn new(start: usize, end: usize) -> Span {
        assert!(start <= end, "span end {} is before its start {}", end, start);
        Span { start, end }
    }

    /// Gets the start offset of the `Span`.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Gets the end offset of the `Span`.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The number of codepoints covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the `Span` covers no codepoints.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The `Span` as a range, suitable for slicing the matched text.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}
