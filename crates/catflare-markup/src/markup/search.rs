//! Closer lookup for the scanner.
//!
//! Matchers look ahead for their closing delimiter. Searching afresh on
//! every attempt is quadratic on input like `"||a"` repeated many times,
//! since each unterminated opener scans to the end of the text. [`Closers`]
//! remembers the last answer per needle so that overlapping searches are
//! answered without rescanning, which keeps a whole parse linear.

use std::collections::HashMap;

use super::kinds::FileEmbed;

/// Last search for one needle: started at `from`, answered `hit`.
struct Memo {
    needle: &'static [u8],
    from: usize,
    hit: Option<usize>,
}

/// Per-parse memo of delimiter positions.
pub struct Closers<'a> {
    hay: &'a [u8],
    memos: Vec<Memo>,
    parens: Option<HashMap<usize, usize>>,
}

impl<'a> Closers<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            hay: s.as_bytes(),
            memos: Vec::new(),
            parens: None,
        }
    }

    /// Position of the first occurrence of `needle` at or after `from`.
    pub fn find(&mut self, needle: &'static [u8], from: usize) -> Option<usize> {
        if let Some(memo) = self.memos.iter().find(|m| m.needle == needle) {
            match memo.hit {
                // Nothing from an earlier start means nothing from a later one.
                None if from >= memo.from => return None,
                // No occurrence lies between the earlier start and its hit.
                Some(hit) if memo.from <= from && from <= hit => return Some(hit),
                _ => {}
            }
        }

        let hit = scan(self.hay, needle, from);
        match self.memos.iter_mut().find(|m| m.needle == needle) {
            Some(memo) => {
                memo.from = from;
                memo.hit = hit;
            }
            None => self.memos.push(Memo { needle, from, hit }),
        }
        hit
    }

    /// Position of the `)` balancing the `(` at `at`.
    ///
    /// Equivalent to scanning forward from `at` with a depth counter; the
    /// table of all pairs is built once, on first use.
    pub fn matching_paren(&mut self, at: usize) -> Option<usize> {
        let hay = self.hay;
        let pairs = self.parens.get_or_insert_with(|| {
            pair_table(hay, FileEmbed::PAREN_OPEN, FileEmbed::PAREN_CLOSE)
        });
        pairs.get(&at).copied()
    }
}

fn scan(hay: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || from > hay.len() {
        return None;
    }
    hay[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| from + p)
}

fn pair_table(hay: &[u8], open: u8, close: u8) -> HashMap<usize, usize> {
    let mut pairs = HashMap::new();
    let mut stack = Vec::new();
    for (i, &b) in hay.iter().enumerate() {
        if b == open {
            stack.push(i);
        } else if b == close
            && let Some(o) = stack.pop()
        {
            pairs.insert(o, i);
        }
    }
    pairs
}
