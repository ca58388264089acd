// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::result;

/// The error type for compiling patterns and for inspecting compiled automata.
///
/// A failed match is not an error; the matching operations report it with
/// `None`.
#[derive(Debug, Fail, PartialEq, Eq)]
pub enum Error {
    /// A symbol id did not name an entry in the alphabet of the automaton.
    /// This indicates an inconsistency between the alphabet and the transition
    /// matrix.
    #[fail(display = "The symbol id {} is not part of the alphabet.", _0)]
    UnknownSymbol(usize),

    /// A state id did not name a state of the automaton.
    #[fail(display = "The state id {} is not a state of the automaton.", _0)]
    UnknownState(usize),

    /// The subset construction produced more rows than the configured limit
    /// allows.
    #[fail(display = "The subset construction exceeded the limit of {} states.", _0)]
    StateLimitExceeded(usize),

    /// The input was not valid utf8. The offset is the position of the first
    /// byte of the invalid sequence.
    #[fail(display = "The input contains invalid utf8 at byte offset {}.", offset)]
    InvalidUtf8 {
        /// The byte offset of the invalid sequence.
        offset: usize,
    },

    /// The input contained a value that is not a Unicode scalar value.
    #[fail(display = "The value {:#x} is not a valid Unicode codepoint.", _0)]
    InvalidCodepoint(u32),
}

/// A specialized Result type for regdfa operations.
pub type Result<T> = result::Result<T, Error>;
