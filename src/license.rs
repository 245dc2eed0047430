// License notice clues: SPDX identifier tags and well-known notice phrases
//
// These are hints found in headers, not a license classification.

use crate::text::numbered_lines;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// An `SPDX-License-Identifier` tag and the license ids in its expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpdxClue {
    pub expression: String,
    pub license_ids: Vec<String>,
    pub line: usize,
}

/// A well-known license notice phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseHint {
    pub key: &'static str,
    pub matched: String,
    pub line: usize,
}

/// (key, phrase pattern) pairs; the first matching pattern of a line wins
const NOTICE_PHRASES: &[(&str, &str)] = &[
    ("apache-2.0", r"(?i)licensed under the apache license,? version 2\.0"),
    ("lgpl", r"(?i)gnu (?:lesser|library) general public license"),
    ("gpl", r"(?i)gnu general public license"),
    ("mpl-2.0", r"(?i)mozilla public license,? (?:v\.?|version) ?2\.0"),
    ("bsd-style", r"(?i)\bbsd-style\b"),
    ("mit", r"(?i)permission is hereby granted, free of charge"),
    ("unlicense", r"(?i)this is free and unencumbered software released into the public domain"),
];

/// Words of an SPDX expression that are operators, not license ids
const SPDX_OPERATORS: &[&str] = &["AND", "OR", "WITH", "and", "or", "with"];

static SPDX_TAG: OnceLock<Regex> = OnceLock::new();
static PHRASES: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();

fn spdx_tag() -> &'static Regex {
    SPDX_TAG.get_or_init(|| {
        Regex::new(r"(?i)spdx-license-identifier\s*:\s*(.+)$").expect("Invalid SPDX regex")
    })
}

fn phrases() -> &'static [(&'static str, Regex)] {
    PHRASES.get_or_init(|| {
        NOTICE_PHRASES
            .iter()
            .map(|(key, pattern)| (*key, Regex::new(pattern).expect("Invalid notice phrase regex")))
            .collect()
    })
}

/// Collect SPDX identifier tags with their parsed license ids.
pub fn find_spdx_identifiers(text: &str) -> Vec<SpdxClue> {
    numbered_lines(text)
        .filter_map(|(line_number, line)| {
            let caps = spdx_tag().captures(line)?;
            let expression = clean_expression(&caps[1]);
            if expression.is_empty() {
                return None;
            }
            Some(SpdxClue {
                license_ids: license_ids(&expression),
                expression,
                line: line_number,
            })
        })
        .collect()
}

/// Strip comment closers and quotes trailing an SPDX expression.
fn clean_expression(raw: &str) -> String {
    let mut expression = raw.trim();
    for closer in ["*/", "-->", "#}", "--}}"] {
        if let Some(head) = expression.strip_suffix(closer) {
            expression = head.trim_end();
        }
    }
    expression
        .trim_matches(|c: char| c == '"' || c == '\'' || c == ',' || c == ';')
        .trim()
        .to_string()
}

fn license_ids(expression: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for token in expression.replace(['(', ')'], " ").split_whitespace() {
        if SPDX_OPERATORS.contains(&token) {
            continue;
        }
        if !ids.iter().any(|id| id == token) {
            ids.push(token.to_string());
        }
    }
    ids
}

/// Collect well-known license notice phrases, at most one per line.
pub fn find_license_hints(text: &str) -> Vec<LicenseHint> {
    let mut hints = Vec::new();
    for (line_number, line) in numbered_lines(text) {
        if let Some((key, m)) = phrases()
            .iter()
            .find_map(|(key, regex)| regex.find(line).map(|m| (*key, m)))
        {
            hints.push(LicenseHint {
                key,
                matched: m.as_str().to_string(),
                line: line_number,
            });
        }
    }
    hints
}
