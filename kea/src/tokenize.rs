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

use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::Args;
use kea::{config::TokenizerConfig, lex::token::Token, lexicon::Lexicon, tokenizer::Tokenizer};
use log::{debug, warn};

use crate::{InputOutput, OutputFormat};

/// Split French text into tokens.
#[derive(Args, Clone, Debug)]
pub struct Tokenize {
    #[command(flatten)]
    io: InputOutput,

    /// Configuration file naming the lexicons to load.
    #[arg(short, long, help_heading = "Lexicon options")]
    config: Option<PathBuf>,

    /// Resource directory with `abbrs.list` and `villes.list` lexicons, to use
    /// instead of the lists built into kea.
    #[arg(short, long, help_heading = "Lexicon options")]
    resources: Option<PathBuf>,

    /// Don't use the lexicon lists built into kea.  Without `--resources`,
    /// `--lexicon`, or a configuration file, this tokenizes with an empty
    /// lexicon, so that no tokens are merged.
    #[arg(long, help_heading = "Lexicon options")]
    no_bundled: bool,

    /// Additional lexicon file, one entry per line.  May be given more than
    /// once.
    #[arg(short, long = "lexicon", help_heading = "Lexicon options")]
    lexicons: Vec<PathBuf>,
}

impl Tokenize {
    fn config(&self) -> Result<TokenizerConfig> {
        let mut config = match &self.config {
            Some(path) => TokenizerConfig::from_file(path)?,
            None => TokenizerConfig::default(),
        };
        if let Some(resources) = &self.resources {
            config.resources = Some(resources.clone());
        }
        config.lexicons.extend(self.lexicons.iter().cloned());
        Ok(config)
    }

    /// Returns the lexicon to tokenize with: the bundled lists, unless a
    /// resource directory replaces them or `--no-bundled` drops them, plus any
    /// additional lexicon files.
    fn lexicon(&self) -> Result<Lexicon> {
        let config = self.config()?;
        let mut lexicon = if config.resources.is_none() && !self.no_bundled {
            Lexicon::bundled()
        } else {
            Lexicon::new()
        };
        for path in config.lexicon_files() {
            lexicon.load_file(path)?;
        }
        Ok(lexicon)
    }

    pub fn run(self) -> Result<()> {
        let lexicon = self.lexicon()?;
        if lexicon.is_empty() {
            warn!("lexicon is empty, so tokens will not be merged");
        }
        debug!("lexicon has {} entries", lexicon.len());
        let tokenizer = Tokenizer::new(lexicon);

        let text = self.io.read()?;
        let tokens = tokenizer.tokenize(&text);
        write_tokens(self.io.writer()?, self.io.format, &tokens)
    }
}

fn write_tokens(
    mut writer: impl Write,
    format: OutputFormat,
    tokens: &[Token<'_>],
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(writer, "{token}")?;
            }
        }
        OutputFormat::Json => {
            let texts = tokens.iter().map(Token::as_str).collect::<Vec<_>>();
            serde_json::to_writer(&mut writer, &texts)?;
            writeln!(writer)?;
        }
        OutputFormat::Ndjson => {
            for token in tokens {
                serde_json::to_writer(&mut writer, token)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
