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

//! Lexical analysis for French text.
//!
//! kea divides tokenization into two phases:
//!
//! 1. A low level called "segmentation", implemented in the [segment] module.
//!    This splits text into raw [Token](token::Token)s labeled with the
//!    [Segment](segment::Segment) rule that produced them.
//!
//! 2. A higher level called "merging", implemented in the [merge] module.
//!    This rejoins runs of raw tokens that together spell a lexicon entry.

pub mod merge;
pub mod segment;
pub mod token;
