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

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::Tokenizer;

fn tokenizer() -> Tokenizer {
    Tokenizer::from_sources([
        vec!["aujourd'hui", "c'est-à-dire", "etc.", "J.-C."],
        vec!["Saint-Étienne", "Aix-en-Provence"],
    ])
}

#[track_caller]
fn check_tokenize(tokenizer: &Tokenizer, input: &str, expected: &[&str]) {
    let tokens = tokenizer.tokenize_str(input);
    if tokens != expected {
        eprintln!("tokens differ from expected:");
        let tokens = tokens.iter().map(String::as_str).collect::<Vec<_>>();
        let difference = diff::slice(expected, &tokens);
        for result in difference {
            match result {
                diff::Result::Left(left) => eprintln!("-{left:?}"),
                diff::Result::Both(left, _right) => eprintln!(" {left:?}"),
                diff::Result::Right(right) => eprintln!("+{right:?}"),
            }
        }
        panic!();
    }
}

#[test]
fn test_sentences() {
    let tokenizer = tokenizer();
    check_tokenize(
        &tokenizer,
        "Le Kea est le seul perroquet alpin au monde.",
        &[
            "Le",
            "Kea",
            "est",
            "le",
            "seul",
            "perroquet",
            "alpin",
            "au",
            "monde",
            ".",
        ],
    );
    check_tokenize(
        &tokenizer,
        "Aujourd'hui, le Kea est le seul perroquet alpin au monde.",
        &[
            "Aujourd'hui",
            ",",
            "le",
            "Kea",
            "est",
            "le",
            "seul",
            "perroquet",
            "alpin",
            "au",
            "monde",
            ".",
        ],
    );
    check_tokenize(
        &tokenizer,
        "D’où le repli des penseurs républicains sur la forme nécessaire d’une « identité nationale », seul lieu possible d’une démocratie comme auto-détermination collective contre les périls du libéralisme et du communautarisme.",
        &[
            "D’",
            "où",
            "le",
            "repli",
            "des",
            "penseurs",
            "républicains",
            "sur",
            "la",
            "forme",
            "nécessaire",
            "d’",
            "une",
            "«",
            "identité",
            "nationale",
            "»",
            ",",
            "seul",
            "lieu",
            "possible",
            "d’",
            "une",
            "démocratie",
            "comme",
            "auto",
            "-",
            "détermination",
            "collective",
            "contre",
            "les",
            "périls",
            "du",
            "libéralisme",
            "et",
            "du",
            "communautarisme",
            ".",
        ],
    );
}

#[test]
fn test_rules() {
    let tokenizer = tokenizer();
    check_tokenize(&tokenizer, "l'oiseau", &["l'", "oiseau"]);
    check_tokenize(&tokenizer, "123'456", &["123", "'", "456"]);
    check_tokenize(&tokenizer, "3,14 est pi", &["3,14", "est", "pi"]);
    check_tokenize(&tokenizer, "Attends...", &["Attends", "..."]);
    check_tokenize(
        &tokenizer,
        "De Saint-Étienne à Aix-en-Provence, c'est-à-dire loin.",
        &[
            "De",
            "Saint-Étienne",
            "à",
            "Aix-en-Provence",
            ",",
            "c'est-à-dire",
            "loin",
            ".",
        ],
    );
}

#[test]
fn test_minimal_input() {
    let tokenizer = tokenizer();
    check_tokenize(&tokenizer, "", &[]);
    check_tokenize(&tokenizer, " \t\r\n ", &[]);
    check_tokenize(&tokenizer, "perroquet", &["perroquet"]);
    check_tokenize(&tokenizer, "  perroquet\n", &["perroquet"]);
}

#[test]
fn test_empty_lexicon() {
    check_tokenize(
        &Tokenizer::default(),
        "Aujourd'hui, etc.",
        &["Aujourd", "'", "hui", ",", "etc", "."],
    );
}

#[test]
fn test_bundled() {
    check_tokenize(
        &Tokenizer::bundled(),
        "Aujourd'hui, M. Dupont est à Saint-Étienne, etc.",
        &[
            "Aujourd'hui",
            ",",
            "M.",
            "Dupont",
            "est",
            "à",
            "Saint-Étienne",
            ",",
            "etc.",
        ],
    );
}

#[test]
fn test_deterministic() {
    let tokenizer = tokenizer();
    let input = "Aujourd'hui, en l'an 2011 ap. J.-C., il fait 3,5 degrés... etc.";
    let first = tokenizer.tokenize(input);
    let second = tokenizer.tokenize(input);
    assert_eq!(first, second);
}

#[test]
fn test_shared_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Tokenizer>();

    let tokenizer = tokenizer();
    let inputs = [
        "Aujourd'hui il pleut.",
        "Saint-Étienne, etc.",
        "l'an 52 av. J.-C.",
        "« Qu’il vienne ! »",
    ];
    let expected = inputs
        .iter()
        .map(|input| tokenizer.tokenize_str(input))
        .collect::<Vec<_>>();
    let tokenizer = &tokenizer;
    let actual = std::thread::scope(|scope| {
        let handles = inputs
            .iter()
            .map(|input| scope.spawn(move || tokenizer.tokenize_str(input)))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });
    assert_eq!(actual, expected);
}

/// Checks that, for random input, the tokens reproduce the input's
/// non-white-space characters in order, and that each token covers its span.
#[test]
fn test_coverage() {
    const FRAGMENTS: &[&str] = &[
        "l'", "qu’", "d", "'", "’", "aujourd", "hui", "http:", "//", "www", ".fr", ".html",
        "3", "14", ",", ".", "...", "-", "J", "C", "etc", "Saint", "Étienne", "«", "»", "!",
        "_", "œ", "ΣΑΣ", "٣", " ", "  ", "\t", "\n", "\u{a0}",
    ];

    let tokenizer = tokenizer();
    let mut rng = StdRng::seed_from_u64(0x6b6561);
    for _ in 0..500 {
        let n = rng.random_range(0..24);
        let input = (0..n)
            .map(|_| FRAGMENTS[rng.random_range(0..FRAGMENTS.len())])
            .collect::<String>();

        let tokens = tokenizer.tokenize(&input);
        let joined = tokens.iter().map(|token| token.as_str()).collect::<String>();
        let expected = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();
        assert_eq!(joined, expected, "input {input:?}");

        let mut end = 0;
        for token in &tokens {
            assert!(!token.text.is_empty(), "input {input:?}");
            assert!(token.span.start >= end, "input {input:?}");
            let covered = input[token.span.clone()]
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>();
            assert_eq!(covered, token.as_str(), "input {input:?}");
            end = token.span.end;
        }
    }
}
