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

//! Lexicon of multi-token units.
//!
//! A lexicon is a set of strings, such as fixed contractions (*aujourd'hui*),
//! abbreviations (*etc.*), and place names (*Saint-Étienne*), that
//! segmentation splits into several raw tokens but that should come out of
//! tokenization as a single token.  Entries are stored lowercased.
//!
//! Lexicon files are UTF-8 text with one entry per line.  By convention, a
//! resource directory holds two of them, [ABBREVIATIONS_LIST] and
//! [CITIES_LIST], which [Lexicon::from_resource_dir] loads into a single
//! lexicon.

use std::{
    fs,
    io::Error as IoError,
    path::{Path, PathBuf},
};

use encoding_rs::UTF_8;
use hashbrown::HashSet;
use log::debug;
use thiserror::Error as ThisError;

use crate::text::{DecodeError, decode};

/// File name of the abbreviations and contractions list in a resource
/// directory.
pub const ABBREVIATIONS_LIST: &str = "abbrs.list";

/// File name of the city names list in a resource directory.
pub const CITIES_LIST: &str = "villes.list";

/// The lists that [Lexicon::from_resource_dir] loads, in order.
pub const RESOURCE_LISTS: [&str; 2] = [ABBREVIATIONS_LIST, CITIES_LIST];

/// The standard lists compiled into the library, in the order of
/// [RESOURCE_LISTS].
static BUNDLED_LISTS: [&str; 2] = [
    include_str!("../resources/abbrs.list"),
    include_str!("../resources/villes.list"),
];

#[derive(ThisError, Debug)]
pub enum LexiconError {
    /// The lexicon file could not be read.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// The lexicon file is not valid UTF-8.
    #[error("{}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

impl LexiconError {
    /// Returns the lexicon file that caused the error.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Decode { path, .. } => path,
        }
    }
}

/// A set of lowercased multi-token units.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: HashSet<String>,

    /// Length in bytes of the longest entry.
    max_entry_len: usize,
}

impl Lexicon {
    /// Returns an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a lexicon with an entry for each nonblank line in `lines`.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        lexicon.extend_from_lines(lines);
        lexicon
    }

    /// Adds an entry for each nonblank line in `lines`.
    pub fn extend_from_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.insert(line.as_ref());
        }
    }

    /// Adds `line`, trimmed and lowercased, to the lexicon.  Returns true if
    /// this added a new entry, false if `line` is blank or already present.
    pub fn insert(&mut self, line: &str) -> bool {
        let entry = line.trim();
        if entry.is_empty() {
            return false;
        }
        let entry = entry.to_lowercase();
        self.max_entry_len = self.max_entry_len.max(entry.len());
        self.entries.insert(entry)
    }

    /// Reads the lexicon file at `path` and adds its entries.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), LexiconError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LexiconError::Io {
            path: path.into(),
            source,
        })?;
        let text = decode(&bytes, UTF_8).map_err(|source| LexiconError::Decode {
            path: path.into(),
            source,
        })?;

        let before = self.len();
        self.extend_from_lines(text.lines());
        debug!(
            "{}: loaded {} new lexicon entries",
            path.display(),
            self.len() - before
        );
        Ok(())
    }

    /// Returns a lexicon with the entries of all the files in `paths`.  Fails
    /// if any of them cannot be loaded.
    pub fn load<I, P>(paths: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut lexicon = Self::new();
        for path in paths {
            lexicon.load_file(path)?;
        }
        Ok(lexicon)
    }

    /// Returns a lexicon with the entries from [RESOURCE_LISTS] in directory
    /// `dir`.
    pub fn from_resource_dir(dir: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let dir = dir.as_ref();
        Self::load(RESOURCE_LISTS.iter().map(|name| dir.join(name)))
    }

    /// Returns a lexicon with the standard lists that are compiled into this
    /// library.  These are the same lists that [Lexicon::from_resource_dir]
    /// loads from the `resources` directory of the source distribution.
    pub fn bundled() -> Self {
        let mut lexicon = Self::new();
        for list in BUNDLED_LISTS {
            lexicon.extend_from_lines(list.lines());
        }
        debug!("loaded {} bundled lexicon entries", lexicon.len());
        lexicon
    }

    /// Returns true if the lexicon contains `entry`, which must already be
    /// lowercased.
    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the length in bytes of the longest entry, or 0 if the lexicon
    /// is empty.  No string longer than this can be an entry.
    pub fn max_entry_len(&self) -> usize {
        self.max_entry_len
    }

    /// Returns an iterator over the entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl<S> FromIterator<S> for Lexicon
where
    S: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_lines(iter)
    }
}

impl<S> Extend<S> for Lexicon
where
    S: AsRef<str>,
{
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.extend_from_lines(iter)
    }
}
