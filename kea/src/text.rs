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

//! Decoding text at the boundary of the system.

use std::borrow::Cow;

use encoding_rs::Encoding;
use thiserror::Error as ThisError;

#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
#[error("Input is not valid {encoding}.")]
pub struct DecodeError {
    /// Name of the encoding that the input failed to decode as.
    pub encoding: &'static str,
}

/// Decodes `bytes` as text.
///
/// A byte order mark at the start of `bytes` selects the encoding it
/// indicates and is removed.  Otherwise, `bytes` are decoded as `encoding`.
/// Malformed sequences are an error, not replaced.
pub fn decode<'a>(
    bytes: &'a [u8],
    encoding: &'static Encoding,
) -> Result<Cow<'a, str>, DecodeError> {
    let (encoding, bytes) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (encoding, bytes),
    };
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or(DecodeError {
            encoding: encoding.name(),
        })
}
