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

//! Tokenizer configuration files.
//!
//! A configuration file is TOML that names the lexicons to load, e.g.:
//!
//! ```toml
//! # Loads abbrs.list and villes.list from this directory.
//! resources = "resources"
//!
//! # Additional lexicon files.
//! lexicons = ["sigles.list", "/usr/share/kea/prenoms.list"]
//! ```
//!
//! Relative paths are relative to the directory that contains the
//! configuration file.

use std::{
    fs,
    io::Error as IoError,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    #[error("{}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Which lexicons a [Tokenizer](crate::tokenizer::Tokenizer) loads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TokenizerConfig {
    /// Resource directory holding the standard lexicon lists.
    #[serde(default)]
    pub resources: Option<PathBuf>,

    /// Additional lexicon files.
    #[serde(default)]
    pub lexicons: Vec<PathBuf>,
}

impl TokenizerConfig {
    /// Reads a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.into(),
            source,
        })?;
        let config: Self = toml::from_str(&source).map_err(|source| ConfigError::Toml {
            path: path.into(),
            source,
        })?;
        Ok(config.relative_to(path.parent().unwrap_or(Path::new(""))))
    }

    /// Returns this configuration with relative paths resolved against
    /// `base`.
    pub fn relative_to(self, base: &Path) -> Self {
        Self {
            resources: self.resources.map(|dir| base.join(dir)),
            lexicons: self
                .lexicons
                .into_iter()
                .map(|path| base.join(path))
                .collect(),
        }
    }

    /// Returns true if this configuration names no lexicon at all.
    pub fn is_empty(&self) -> bool {
        self.resources.is_none() && self.lexicons.is_empty()
    }

    /// Returns the lexicon files to load, in order: first the standard lists
    /// from [resources](Self::resources), then [lexicons](Self::lexicons).
    pub fn lexicon_files(&self) -> Vec<PathBuf> {
        let resources = self.resources.iter().flat_map(|dir| {
            crate::lexicon::RESOURCE_LISTS
                .iter()
                .map(move |name| dir.join(name))
        });
        resources.chain(self.lexicons.iter().cloned()).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::TokenizerConfig;

    #[test]
    fn parse() {
        let config: TokenizerConfig = toml::from_str(
            r#"
resources = "res"
lexicons = ["extra.list", "/abs/more.list"]
"#,
        )
        .unwrap();
        let config = config.relative_to(Path::new("/etc/kea"));
        assert_eq!(
            config,
            TokenizerConfig {
                resources: Some(PathBuf::from("/etc/kea/res")),
                lexicons: vec![
                    PathBuf::from("/etc/kea/extra.list"),
                    PathBuf::from("/abs/more.list")
                ],
            }
        );
        assert_eq!(
            config.lexicon_files(),
            [
                PathBuf::from("/etc/kea/res/abbrs.list"),
                PathBuf::from("/etc/kea/res/villes.list"),
                PathBuf::from("/etc/kea/extra.list"),
                PathBuf::from("/abs/more.list"),
            ]
        );
    }

    #[test]
    fn empty() {
        let config: TokenizerConfig = toml::from_str("").unwrap();
        assert!(config.is_empty());
        assert!(config.lexicon_files().is_empty());
    }

    #[test]
    fn unknown_field() {
        assert!(toml::from_str::<TokenizerConfig>("lexicon = []").is_err());
    }
}
