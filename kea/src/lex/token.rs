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

use std::{
    borrow::Cow,
    fmt::{Display, Formatter, Result as FmtResult},
    ops::Range,
};

use serde::Serialize;

/// A token of French text.
///
/// A raw token produced by segmentation borrows its text from the input.  A
/// token produced by merging owns its text, because the raw tokens it joins
/// may have been separated by whitespace that segmentation discarded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    /// The token's text, with its original case.
    pub text: Cow<'a, str>,

    /// Byte range of the input covered by this token.  For a merged token,
    /// this extends from the start of its first raw token to the end of its
    /// last one.
    pub span: Range<usize>,
}

impl<'a> Token<'a> {
    pub fn new(text: impl Into<Cow<'a, str>>, span: Range<usize>) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_owned(self) -> Token<'static> {
        Token {
            text: Cow::Owned(self.text.into_owned()),
            span: self.span,
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.text)
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl From<Token<'_>> for String {
    fn from(token: Token<'_>) -> Self {
        token.text.into_owned()
    }
}
