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

//! The kea tokenizer.

use std::path::Path;

use thiserror::Error as ThisError;

use crate::{
    config::{ConfigError, TokenizerConfig},
    lex::{merge::merge, segment::segment, token::Token},
    lexicon::{Lexicon, LexiconError},
};

#[derive(ThisError, Debug)]
pub enum TokenizerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

/// A rule-based tokenizer for French.
///
/// A tokenizer owns its [Lexicon], which cannot change once the tokenizer is
/// constructed.  [Tokenizer::tokenize] takes `&self`, so a single tokenizer
/// may be shared among threads.
#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
    lexicon: Lexicon,
}

impl Tokenizer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Constructs a tokenizer whose lexicon has an entry for each nonblank line
    /// in each of `sources`.
    pub fn from_sources<I, L, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::new();
        for source in sources {
            lexicon.extend_from_lines(source);
        }
        Self::new(lexicon)
    }

    /// Constructs a tokenizer with the lexicon lists compiled into the library
    /// (see [Lexicon::bundled]).
    pub fn bundled() -> Self {
        Self::new(Lexicon::bundled())
    }

    /// Constructs a tokenizer from the lexicon files in `paths`.
    pub fn from_files<I, P>(paths: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Lexicon::load(paths).map(Self::new)
    }

    /// Constructs a tokenizer from the standard lexicon lists in resource
    /// directory `dir`.
    pub fn from_resource_dir(dir: impl AsRef<Path>) -> Result<Self, LexiconError> {
        Lexicon::from_resource_dir(dir).map(Self::new)
    }

    pub fn from_config(config: &TokenizerConfig) -> Result<Self, LexiconError> {
        Self::from_files(config.lexicon_files())
    }

    /// Constructs a tokenizer from the configuration file at `path`.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, TokenizerError> {
        let config = TokenizerConfig::from_file(path)?;
        Ok(Self::from_config(&config)?)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Splits `text` into tokens.
    ///
    /// Concatenating the tokens yields `text` without its white space.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        merge(&segment(text), &self.lexicon)
    }

    /// Like [Tokenizer::tokenize], but returns just the tokens' text.
    pub fn tokenize_str(&self, text: &str) -> Vec<String> {
        self.tokenize(text).into_iter().map(String::from).collect()
    }
}

#[cfg(test)]
mod test;
