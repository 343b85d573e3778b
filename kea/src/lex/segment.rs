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

//! Text segmentation.
//!
//! kea divides tokenization into two phases: a lower-level phase called
//! "segmentation" and a higher-level phase called "merging".  This module
//! implements the segmentation phase.  [`super::merge`] contains the merging
//! phase.
//!
//! Segmentation accepts a UTF-8 string as input.  It outputs a label (a
//! segment type) for each contiguous sequence of characters in the input.  At
//! each position, the first of the following rules that matches determines
//! the segment:
//!
//! 1. [Segment::Contraction]: one of `l c d j m n t s` or `qu`, in any case,
//!    followed by an apostrophe (`'` or `’`), e.g. `l'` or `Qu’`.
//!
//! 2. [Segment::Url]: `http:` followed by non-white-space characters that end
//!    in a dot and 2 or 3 word characters.
//!
//! 3. [Segment::Number]: digits, `.` or `,`, and more digits, e.g. `3,14`.
//!
//! 4. [Segment::Punct]: a run of `.` and `-`, e.g. `...` or `--`.
//!
//! 5. [Segment::Word]: a run of word characters (letters, digits, and `_`).
//!
//! 6. [Segment::Symbol]: any other single character that is not white space.
//!
//! White space becomes [Segment::Spaces], which does not correspond to any
//! token.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use super::token::Token;

/// The type of a segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Contraction,
    Url,
    Number,
    Punct,
    Word,
    Symbol,
    Spaces,
}

impl Segment {
    /// Returns true if this kind of segment becomes a token.
    pub fn is_token(self) -> bool {
        self != Self::Spaces
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contraction => "contraction",
            Self::Url => "url",
            Self::Number => "number",
            Self::Punct => "punct",
            Self::Word => "word",
            Self::Symbol => "symbol",
            Self::Spaces => "spaces",
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Character classes used by segmentation.
pub trait SegmentChar {
    /// Returns true if `self` is a word character: a letter, a digit, or `_`.
    fn is_word_char(self) -> bool;

    /// Returns true if `self` is a decimal digit in any script.
    fn is_decimal_digit(self) -> bool;

    /// Returns true if `self` is a straight or typographic apostrophe.
    fn is_apostrophe(self) -> bool;

    /// Returns true if `self` may begin a single-letter contraction.
    fn is_elided_consonant(self) -> bool;

    /// Returns true if `self` may appear in a run of [Segment::Punct].
    fn is_punct_run_char(self) -> bool;
}

impl SegmentChar for char {
    fn is_word_char(self) -> bool {
        self.is_alphanumeric() || self == '_'
    }

    fn is_decimal_digit(self) -> bool {
        if self.is_ascii() {
            self.is_ascii_digit()
        } else {
            self.general_category() == GeneralCategory::DecimalNumber
        }
    }

    fn is_apostrophe(self) -> bool {
        matches!(self, '\'' | '’')
    }

    fn is_elided_consonant(self) -> bool {
        matches!(
            self.to_ascii_lowercase(),
            'l' | 'c' | 'd' | 'j' | 'm' | 'n' | 't' | 's'
        )
    }

    fn is_punct_run_char(self) -> bool {
        matches!(self, '.' | '-')
    }
}

/// Splits text into segments.
///
/// The segmenter holds no state between segments, so one segmenter may be
/// reused for any number of inputs.
#[derive(Copy, Clone, Debug, Default)]
pub struct Segmenter;

impl Segmenter {
    pub fn new() -> Self {
        Self
    }

    /// Returns the length in bytes of the segment at the start of `input` and
    /// its type, or `None` if `input` is empty.
    pub fn push(&self, input: &str) -> Option<(usize, Segment)> {
        let (c, rest) = take(input)?;
        let (rest, segment) = if c.is_whitespace() {
            (skip_matching(char::is_whitespace, input), Segment::Spaces)
        } else if let Some(rest) = parse_contraction(input) {
            (rest, Segment::Contraction)
        } else if let Some(rest) = parse_url(input) {
            (rest, Segment::Url)
        } else if let Some(rest) = parse_number(input) {
            (rest, Segment::Number)
        } else if let Some(rest) = skip_matching_1(SegmentChar::is_punct_run_char, input) {
            (rest, Segment::Punct)
        } else if let Some(rest) = skip_matching_1(SegmentChar::is_word_char, input) {
            (rest, Segment::Word)
        } else {
            (rest, Segment::Symbol)
        };
        Some((input.len() - rest.len(), segment))
    }
}

fn take(input: &str) -> Option<(char, &str)> {
    let mut iter = input.chars();
    iter.next().map(|c| (c, iter.as_str()))
}

fn match_char<F>(f: F, input: &str) -> Option<&str>
where
    F: Fn(char) -> bool,
{
    take(input).and_then(|(c, rest)| f(c).then_some(rest))
}

fn skip_matching<F>(f: F, input: &str) -> &str
where
    F: Fn(char) -> bool,
{
    input.trim_start_matches(f)
}

/// Like [skip_matching], but fails unless at least one character matches.
fn skip_matching_1<F>(f: F, input: &str) -> Option<&str>
where
    F: Fn(char) -> bool,
{
    let rest = skip_matching(f, input);
    (rest.len() < input.len()).then_some(rest)
}

fn strip_prefix_ignore_ascii_case<'a>(input: &'a str, pattern: &str) -> Option<&'a str> {
    input.get(..pattern.len()).and_then(|prefix| {
        prefix
            .eq_ignore_ascii_case(pattern)
            .then(|| &input[pattern.len()..])
    })
}

fn parse_contraction(input: &str) -> Option<&str> {
    let rest = match_char(SegmentChar::is_elided_consonant, input)
        .or_else(|| strip_prefix_ignore_ascii_case(input, "qu"))?;
    match_char(SegmentChar::is_apostrophe, rest)
}

/// Matches `http:[^\s]+\.\w{2,3}`, backtracking the way a regular expression
/// would: the final dot is the last one in the run of non-white-space that is
/// followed by at least two word characters.
fn parse_url(input: &str) -> Option<&str> {
    let body = strip_prefix_ignore_ascii_case(input, "http:")?;
    let run = &body[..body.find(char::is_whitespace).unwrap_or(body.len())];

    // At least one character has to precede the final dot.
    let (first, _) = take(run)?;
    let min_dot = first.len_utf8();

    run.char_indices()
        .rev()
        .filter(|&(pos, c)| c == '.' && pos >= min_dot)
        .find_map(|(pos, _)| {
            let (n, len) = run[pos + 1..]
                .chars()
                .take(3)
                .take_while(|c| c.is_word_char())
                .fold((0, 0), |(n, len), c| (n + 1, len + c.len_utf8()));

            // `run` is a prefix of `body`, so its offsets are valid in `body`.
            (n >= 2).then(|| &body[pos + 1 + len..])
        })
}

fn parse_number(input: &str) -> Option<&str> {
    let rest = skip_matching_1(SegmentChar::is_decimal_digit, input)?;
    let rest = match_char(|c| c == '.' || c == ',', rest)?;
    skip_matching_1(SegmentChar::is_decimal_digit, rest)
}

/// An iterator over the raw tokens in a string.
pub struct StringSegmenter<'a> {
    input: &'a str,
    offset: usize,
    segmenter: Segmenter,
}

impl<'a> StringSegmenter<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            segmenter: Segmenter::new(),
        }
    }
}

impl<'a> Iterator for StringSegmenter<'a> {
    type Item = (Token<'a>, Segment);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (seg_len, seg_type) = self.segmenter.push(self.input)?;
            let (s, rest) = self.input.split_at(seg_len);
            let start = self.offset;
            self.input = rest;
            self.offset += seg_len;

            if seg_type.is_token() {
                return Some((Token::new(s, start..self.offset), seg_type));
            }
        }
    }
}

/// Splits `input` into raw tokens.
pub fn segment(input: &str) -> Vec<Token<'_>> {
    StringSegmenter::new(input).map(|(token, _)| token).collect()
}
