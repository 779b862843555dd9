//! Recursive character splitter with overlap.
//!
//! Splits on a priority-ordered list of separators, most structural first.
//! A separator stays attached to the segment that follows it, so heading
//! markers are never lost at a chunk boundary. The final empty-string
//! separator falls back to character-level splitting, which guarantees
//! termination. Lengths are measured in chars, not bytes.

use std::collections::VecDeque;

pub const DEFAULT_CHUNK_SIZE: usize = 2000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 400;

/// Separators in priority order: H2/H3/H4 headings, paragraphs, sentences,
/// lines, clauses, words, characters.
const DEFAULT_SEPARATORS: [&str; 9] =
    ["\n## ", "\n### ", "\n#### ", "\n\n", ". ", "\n", ", ", " ", ""];

#[derive(Debug, Clone)]
pub struct RecursiveSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<&'static str>,
}

impl Default for RecursiveSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP)
    }
}

impl RecursiveSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self::with_separators(chunk_size, chunk_overlap, DEFAULT_SEPARATORS.to_vec())
    }

    pub fn with_separators(
        chunk_size: usize,
        chunk_overlap: usize,
        separators: Vec<&'static str>,
    ) -> Self {
        assert!(
            chunk_overlap < chunk_size,
            "chunk_overlap ({chunk_overlap}) must be smaller than chunk_size ({chunk_size})"
        );
        Self {
            chunk_size,
            chunk_overlap,
            separators,
        }
    }

    /// Split `text` into ordered chunks of at most `chunk_size` chars, with
    /// consecutive chunks sharing up to `chunk_overlap` chars of trailing
    /// context. Empty input yields no chunks. An atomic unit longer than
    /// `chunk_size` with no remaining split points is emitted oversized
    /// rather than dropped.
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        self.split_with(text, &self.separators)
    }

    fn split_with(&self, text: &str, separators: &[&'static str]) -> Vec<String> {
        let (separator, rest) = pick_separator(text, separators);
        let splits = split_keeping_separator(text, separator);

        let mut final_chunks = Vec::new();
        let mut good: Vec<String> = Vec::new();
        for piece in splits {
            if char_len(&piece) < self.chunk_size {
                good.push(piece);
            } else {
                if !good.is_empty() {
                    final_chunks.extend(self.merge(&good));
                    good.clear();
                }
                if rest.is_empty() {
                    // No finer separator left: emit the oversized unit as-is.
                    final_chunks.push(piece);
                } else {
                    final_chunks.extend(self.split_with(&piece, rest));
                }
            }
        }
        if !good.is_empty() {
            final_chunks.extend(self.merge(&good));
        }
        final_chunks
    }

    /// Greedily merge accepted pieces into chunks. When a chunk closes,
    /// whole trailing pieces are retained as overlap while their combined
    /// length stays within `chunk_overlap` (and within `chunk_size` once
    /// the incoming piece is counted); if even the most recent piece
    /// exceeds the budget, no overlap is carried.
    fn merge(&self, splits: &[String]) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current: VecDeque<&str> = VecDeque::new();
        let mut total = 0usize;
        for piece in splits {
            let len = char_len(piece);
            if total + len > self.chunk_size && !current.is_empty() {
                chunks.push(current.iter().copied().collect::<String>());
                while total > self.chunk_overlap
                    || (total + len > self.chunk_size && total > 0)
                {
                    let Some(dropped) = current.pop_front() else {
                        break;
                    };
                    total -= char_len(dropped);
                }
            }
            current.push_back(piece);
            total += len;
        }
        if !current.is_empty() {
            chunks.push(current.iter().copied().collect::<String>());
        }
        chunks
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// First separator that occurs in `text` (the empty string always does),
/// together with the lower-priority separators left for recursion. When no
/// separator matches at all, the last one is kept with nothing left to
/// recurse into, so an unbreakable unit surfaces as a single oversized piece.
fn pick_separator<'s>(
    text: &str,
    separators: &'s [&'static str],
) -> (&'static str, &'s [&'static str]) {
    for (i, &sep) in separators.iter().enumerate() {
        if sep.is_empty() || text.contains(sep) {
            return (sep, &separators[i + 1..]);
        }
    }
    (separators.last().copied().unwrap_or(""), &[])
}

/// Split `text` on `separator`, keeping each separator attached to the
/// segment that follows it. Empty segments are dropped; the concatenation
/// of the result reproduces `text` exactly.
fn split_keeping_separator(text: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return text.chars().map(String::from).collect();
    }
    let mut boundaries = vec![0usize];
    boundaries.extend(text.match_indices(separator).map(|(i, _)| i));
    boundaries.push(text.len());
    boundaries
        .windows(2)
        .filter(|w| w[1] > w[0])
        .map(|w| text[w[0]..w[1]].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_separator_on_following_segment() {
        let splits = split_keeping_separator("intro\n## One\n## Two", "\n## ");
        assert_eq!(splits, vec!["intro", "\n## One", "\n## Two"]);
    }

    #[test]
    fn empty_separator_splits_to_chars() {
        let splits = split_keeping_separator("abc", "");
        assert_eq!(splits, vec!["a", "b", "c"]);
    }
}
