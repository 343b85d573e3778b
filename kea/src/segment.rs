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

use std::io::Write;

use anyhow::Result;
use clap::Args;
use kea::lex::{segment::StringSegmenter, token::Token};
use serde::Serialize;

use crate::{InputOutput, OutputFormat};

/// Show how text splits into raw tokens, before any lexicon is consulted.
#[derive(Args, Clone, Debug)]
pub struct Segment {
    #[command(flatten)]
    pub(crate) io: InputOutput,
}

#[derive(Serialize)]
struct Record<'a> {
    #[serde(flatten)]
    token: &'a Token<'a>,
    segment: kea::lex::segment::Segment,
}

impl Segment {
    pub fn run(self) -> Result<()> {
        let text = self.io.read()?;
        write_segments(self.io.writer()?, self.io.format, &text)
    }
}

fn write_segments(mut writer: impl Write, format: OutputFormat, text: &str) -> Result<()> {
    let segments = StringSegmenter::new(text).collect::<Vec<_>>();
    let records = segments
        .iter()
        .map(|(token, segment)| Record {
            token,
            segment: *segment,
        })
        .collect::<Vec<_>>();

    match format {
        OutputFormat::Text => {
            for Record { token, segment } in &records {
                writeln!(writer, "{segment}\t{token}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &records)?;
            writeln!(writer)?;
        }
        OutputFormat::Ndjson => {
            for record in &records {
                serde_json::to_writer(&mut writer, record)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
