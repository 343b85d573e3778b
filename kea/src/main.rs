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
    fs::File,
    io::{BufWriter, Read, Write, stdin, stdout},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use encoding_rs::Encoding;
use thiserror::Error as ThisError;

use crate::{segment::Segment, tokenize::Tokenize};

mod segment;
mod tokenize;

/// kea, a rule-based tokenizer for French.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone, Debug)]
enum Command {
    Tokenize(Tokenize),
    Segment(Segment),
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Command::Tokenize(tokenize) => tokenize.run(),
            Command::Segment(segment) => segment.run(),
        }
    }
}

#[derive(ThisError, Debug)]
#[error("{0}: unknown encoding")]
struct UnknownEncodingError(String);

fn parse_encoding(arg: &str) -> Result<&'static Encoding, UnknownEncodingError> {
    match Encoding::for_label_no_replacement(arg.as_bytes()) {
        Some(encoding) => Ok(encoding),
        None => Err(UnknownEncodingError(arg.to_string())),
    }
}

/// Output format.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One token per line.
    #[default]
    Text,

    /// A single JSON array.
    Json,

    /// One JSON object per line, with each token's text and byte span.
    Ndjson,
}

/// Input and output options shared by all commands.
#[derive(Args, Clone, Debug)]
struct InputOutput {
    /// Input file name.  If omitted, input is read from stdin.
    input: Option<PathBuf>,

    /// Output file name.  If omitted, output is written to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The encoding to use for reading the input.  A byte order mark in the
    /// input overrides it.
    #[arg(short = 'e', long, value_parser = parse_encoding, default_value = "UTF-8")]
    encoding: &'static Encoding,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value_t)]
    format: OutputFormat,
}

impl InputOutput {
    fn input_name(&self) -> Cow<'_, str> {
        match &self.input {
            Some(path) => path.to_string_lossy(),
            None => Cow::from("<stdin>"),
        }
    }

    /// Reads and decodes the whole input.
    fn read(&self) -> Result<String> {
        let mut bytes = Vec::new();
        match &self.input {
            Some(path) => File::open(path)
                .and_then(|mut file| file.read_to_end(&mut bytes))
                .with_context(|| format!("{}: read failed", path.display()))?,
            None => stdin()
                .read_to_end(&mut bytes)
                .context("<stdin>: read failed")?,
        };
        let text = kea::text::decode(&bytes, self.encoding)
            .with_context(|| self.input_name().into_owned())?;
        Ok(text.into_owned())
    }

    fn writer(&self) -> Result<Box<dyn Write>> {
        Ok(match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("{}: create failed", path.display()))?,
            )),
            None => Box::new(BufWriter::new(stdout().lock())),
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();
    Cli::parse().command.run()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use encoding_rs::{UTF_8, WINDOWS_1252};
    use tempfile::tempdir;

    use super::{Cli, Command, InputOutput, OutputFormat, parse_encoding};

    fn input(args: &[&str]) -> InputOutput {
        let cli = Cli::try_parse_from(["kea", "segment"].iter().chain(args).copied()).unwrap();
        let Command::Segment(segment) = cli.command else {
            unreachable!()
        };
        segment.io
    }

    #[test]
    fn encoding() {
        assert_eq!(parse_encoding("utf8").unwrap(), UTF_8);
        assert_eq!(parse_encoding("latin1").unwrap(), WINDOWS_1252);
        assert_eq!(
            parse_encoding("klingon").unwrap_err().to_string(),
            "klingon: unknown encoding"
        );
        assert!(Cli::try_parse_from(["kea", "segment", "-e", "klingon"]).is_err());
    }

    #[test]
    fn read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, b"caf\xe9 cr\xe8me").unwrap();
        let path = path.to_str().unwrap();

        let io = input(&[path]);
        assert_eq!(io.encoding, UTF_8);
        assert_eq!(io.format, OutputFormat::Text);
        let error = io.read().unwrap_err();
        assert!(error.to_string().contains("input.txt"));

        let io = input(&[path, "--encoding", "windows-1252", "-f", "ndjson"]);
        assert_eq!(io.read().unwrap(), "café crème");
        assert_eq!(io.format, OutputFormat::Ndjson);

        let missing = dir.path().join("missing.txt");
        assert!(input(&[missing.to_str().unwrap()]).read().is_err());
    }
}
