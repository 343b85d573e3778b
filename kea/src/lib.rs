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

//! A rule-based tokenizer for French.
//!
//! Tokenization happens in two steps:
//!
//! 1. [Segmentation](lex::segment) splits text into raw tokens, using
//!    punctuation and character classes as an indication of token boundaries.
//!
//! 2. [Merging](lex::merge) uses a large-coverage [Lexicon](lexicon::Lexicon)
//!    to rejoin over-segmented units, so that fixed contractions such as
//!    *aujourd'hui* come out as one token.
//!
//! [Tokenizer](tokenizer::Tokenizer) ties the two steps together:
//!
//! ```
//! use kea::tokenizer::Tokenizer;
//!
//! let tokenizer = Tokenizer::from_sources([["aujourd'hui"]]);
//! let tokens = tokenizer.tokenize_str("Aujourd'hui, le Kea est le seul perroquet alpin au monde.");
//! assert_eq!(
//!     tokens,
//!     [
//!         "Aujourd'hui", ",", "le", "Kea", "est", "le", "seul", "perroquet",
//!         "alpin", "au", "monde", "."
//!     ]
//! );
//! ```

pub mod config;
pub mod lex;
pub mod lexicon;
pub mod text;
pub mod tokenizer;
