//! Mock semantic analyzer producing parse results from query text
//!
//! Recognizes only `FUNCTION Name(params) AS (body)` declarations at the head
//! of a query; everything after them becomes the command tree.

use esql::{ParseResult, ParseResultBuilder, Result};
use std::sync::Arc;

/// Resolved command tree as seen by tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockTree {
    pub statement: String,
}

/// Resolved lambda as seen by tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockLambda {
    pub params: String,
    pub body: String,
}

pub struct MockAnalyzer;

impl MockAnalyzer {
    pub fn analyze(&self, query: &str) -> Result<ParseResult<MockTree, MockLambda>> {
        let chars: Vec<char> = query.chars().collect();
        let mut builder = ParseResultBuilder::new();
        let mut pos = skip_whitespace(&chars, 0);

        while starts_with(&chars, pos, "FUNCTION ") {
            let start = pos;
            let name_start = pos + "FUNCTION ".len();
            let open = find(&chars, name_start, '(').expect("parameter list");
            let close = matching_paren(&chars, open).expect("closed parameter list");
            let body_open = find(&chars, close, '(').expect("function body");
            let body_close = matching_paren(&chars, body_open).expect("closed function body");
            let end = body_close + 1;

            let lambda = MockLambda {
                params: collect(&chars, open + 1, close),
                body: collect(&chars, body_open + 1, body_close),
            };
            builder.define_function(collect(&chars, name_start, open), Arc::new(lambda), start, end)?;
            pos = skip_whitespace(&chars, end);
        }

        builder.command_tree(Arc::new(MockTree {
            statement: collect(&chars, pos, chars.len()),
        }))?;
        builder.build()
    }
}

fn starts_with(chars: &[char], pos: usize, prefix: &str) -> bool {
    prefix.chars().enumerate().all(|(i, c)| chars.get(pos + i) == Some(&c))
}

fn skip_whitespace(chars: &[char], mut pos: usize) -> usize {
    while chars.get(pos).is_some_and(|c| c.is_whitespace()) {
        pos += 1;
    }
    pos
}

fn find(chars: &[char], from: usize, target: char) -> Option<usize> {
    (from..chars.len()).find(|&i| chars[i] == target)
}

fn matching_paren(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &c) in chars.iter().enumerate().skip(open) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn collect(chars: &[char], from: usize, to: usize) -> String {
    chars[from..to].iter().collect()
}
