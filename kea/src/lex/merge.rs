// kea - a rule-based tokenizer for French.
// Copyright (C) 2011, 2025 Florian Boudin
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <http://www.gnu.org/licenses/>.

//! Lexicon-driven token merging.
//!
//! Segmentation splits text wherever punctuation or a change of character
//! class suggests a token boundary, which over-segments units such as
//! *aujourd'hui* (`aujourd`, `'`, `hui`) or *J.-C.* (`J`, `.-`, `C`, `.`).
//! Merging repairs this by joining each run of raw tokens whose concatenation,
//! lowercased, is an entry in a [Lexicon].
//!
//! Merging proceeds from left to right.  At each position, it tries runs of
//! increasing length, starting with the single token at that position, and
//! takes the first (that is, the shortest) run that spells a lexicon entry.
//! A token that begins no such run is copied to the output unchanged.

use log::trace;

use crate::lexicon::Lexicon;

use super::token::Token;

/// The result of merging tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MergeResult<'a> {
    /// Copy one token literally from input to output.
    Copy,

    /// Merge `n` tokens from the input into `token` in the output.
    Expand {
        /// Number of tokens to merge.
        n: usize,

        /// Replacement token.
        token: Token<'a>,
    },
}

/// Decides how to merge the tokens at the beginning of `tokens`, given
/// `lexicon`.  Returns `None` if `tokens` is empty.
///
/// Candidates are formed by concatenating `tokens[..n]` with no separator, for
/// `n` from 1 upward.  The first candidate whose lowercased form is in
/// `lexicon` wins, even if a longer candidate would also match.  No candidate
/// longer than the longest lexicon entry is considered, since it cannot
/// match.
pub fn merge_at<'a>(tokens: &[Token<'a>], lexicon: &Lexicon) -> Option<MergeResult<'a>> {
    let first = tokens.first()?;
    let mut candidate = String::new();
    for (index, token) in tokens.iter().enumerate() {
        candidate.push_str(&token.text);

        // Lowercasing is length-monotonic, so once the candidate is too long,
        // every extension of it is too.
        let folded = candidate.to_lowercase();
        if folded.len() > lexicon.max_entry_len() {
            break;
        }

        if lexicon.contains(&folded) {
            let n = index + 1;
            if n == 1 {
                return Some(MergeResult::Copy);
            }
            trace!("merging {n} tokens into {candidate:?}");
            return Some(MergeResult::Expand {
                n,
                token: Token::new(candidate, first.span.start..token.span.end),
            });
        }
    }
    Some(MergeResult::Copy)
}

/// Merges runs of `tokens` that spell entries in `lexicon`.
///
/// Every input token contributes to exactly one output token, in order.
pub fn merge<'a>(tokens: &[Token<'a>], lexicon: &Lexicon) -> Vec<Token<'a>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut rest = tokens;
    while let Some(result) = merge_at(rest, lexicon) {
        match result {
            MergeResult::Copy => {
                output.push(rest[0].clone());
                rest = &rest[1..];
            }
            MergeResult::Expand { n, token } => {
                output.push(token);
                rest = &rest[n..];
            }
        }
    }
    output
}
