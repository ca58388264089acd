// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::ptr;

use crate::pattern::{Pattern, PatternKind};

/// Iterator to visit the nodes of a pattern tree.
///
/// The resulting traversal of the tree is a post-order, depth-first search
/// that visits the left operand of a binary node before the right one. The
/// traversal uses an explicit stack so its depth is not limited by the call
/// stack.
pub struct PatternDfsIter<'a> {
    stack: Vec<&'a Pattern>,
    node: Option<&'a Pattern>,
    last_node: Option<&'a Pattern>,
}

impl<'a> PatternDfsIter<'a> {
    pub(crate) fn new(root: &'a Pattern) -> PatternDfsIter<'a> {
        PatternDfsIter {
            stack: Vec::new(),
            node: Some(root),
            last_node: None,
        }
    }

    fn pop(&mut self) -> Option<&'a Pattern> {
        self.last_node = self.stack.pop();
        self.last_node
    }

    // Equal subtrees may occur more than once in a tree so nodes are compared
    // by address.
    fn is_last(&self, node: &Pattern) -> bool {
        match self.last_node {
            None => false,
            Some(last) => ptr::eq(last, node),
        }
    }
}

impl<'a> Iterator for PatternDfsIter<'a> {
    type Item = &'a Pattern;

    fn next(&mut self) -> Option<Self::Item> {
        use crate::pattern::PatternKind::*;

        // Handle the right children on the way up
        let top = self.stack.last().cloned();
        if let (None, Some(node)) = (self.node, top) {
            match node.kind() {
                Alternation(alt) if !self.is_last(alt.second()) => {
                    self.node = Some(alt.second());
                }
                Concatenation(cat) if !self.is_last(cat.second()) => {
                    self.node = Some(cat.second());
                }
                _ => {}
            };
        }

        // Handle the left children
        while let Some(node) = self.node {
            self.stack.push(node);
            self.node = match node.kind() {
                Alternation(alt) => Some(alt.first()),
                Concatenation(cat) => Some(cat.first()),
                KleeneStar(star) => Some(star.inner()),
                PatternKind::Symbol(_) => None,
            };
        }

        self.pop()
    }
}

#[cfg(test)]
mod test {
    use crate::pattern::*;

    #[test]
    fn traverse_symbol_has_symbol_term() {
        let sut = symbol('a');

        let result: Vec<_> = sut.traverse().collect();

        assert_eq!(result, vec![&sut]);
    }

    #[test]
    fn traverse_many_has_two_terms() {
        let sut = symbol('a').many();

        let result: Vec<_> = sut.traverse().cloned().collect();

        assert_eq!(result, vec![symbol('a'), sut.clone()]);
    }

    #[test]
    fn traverse_concat_two_symbols_has_three_terms() {
        let sut = symbol('a') + symbol('b');

        let result: Vec<_> = sut.traverse().cloned().collect();

        assert_eq!(result, vec![symbol('a'), symbol('b'), sut.clone()]);
    }

    #[test]
    fn traverse_alternation_of_equal_subtrees_visits_both() {
        let sut = symbol('a') | symbol('a');

        let result: Vec<_> = sut.traverse().cloned().collect();

        assert_eq!(result, vec![symbol('a'), symbol('a'), sut.clone()]);
    }

    #[test]
    fn traverse_alternation_of_repetitions_has_five_terms() {
        let rep1 = symbol('a').many();
        let rep2 = range('c', 'd').many();

        let sut = rep1.clone() | rep2.clone();
        let result: Vec<_> = sut.traverse().cloned().collect();

        assert_eq!(
            result,
            vec![symbol('a'), rep1, range('c', 'd'), rep2, sut.clone()]
        );
    }

    #[test]
    fn traverse_deep_literal_does_not_recurse() {
        let text: String = ::std::iter::repeat('x').take(100_000).collect();
        let sut = literal(&text);

        assert_eq!(sut.traverse().count(), 2 * 100_000 - 1);
    }
}
