// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

// The patterns in this module are used by the tests of more than one stage
// of the compiler.

use crate::pattern::{line_begin, range, symbol, Pattern};

/// `(ab)|(ba)`
pub fn alternating_pairs() -> Pattern {
    (symbol('a') + symbol('b')) | (symbol('b') + symbol('a'))
}

/// `a*b*`
pub fn a_many_b_many() -> Pattern {
    symbol('a').many() + symbol('b').many()
}

/// `([0-9]|a)*`
pub fn digits_or_a_many() -> Pattern {
    (range('0', '9') | symbol('a')).many()
}

/// `[0-9]*|(^a*)`
pub fn digits_or_anchored_a() -> Pattern {
    range('0', '9').many() | (line_begin() + symbol('a').many())
}
