//! Copyright statement and authorship detection.
//!
//! Detection runs in two passes. [`candidates::candidate_lines`] first picks
//! out the few lines of a source text that mention a copyright or authorship
//! marker, together with a little surrounding context. Each group of lines is
//! then prepared (comment markers and decoration removed, copyright signs
//! normalized) and split into statements.
//!
//! A statement starts at a marker (`Copyright`, `Copr.`, `(c)` or `©`) and
//! runs until an "All rights reserved" clause, a license notice phrase such
//! as "Licensed under" or "Use of this", the next statement, or the end of
//! the line. A statement left dangling on `by`, `,` or `and` continues on the
//! next line of the group.
//!
//! # Example
//!
//! ```
//! use noticescan::copyright::CopyrightDetector;
//!
//! let detector = CopyrightDetector::new(1960, 2099);
//! let found = detector.detect("// Copyright 2014 The Go Authors. All rights reserved.\n");
//! assert_eq!(found.copyrights[0].holders, vec!["The Go Authors"]);
//! assert_eq!(found.copyrights[0].years, vec!["2014"]);
//! ```

pub mod candidates;
pub mod refine;

use crate::config::CopyrightConfig;
use crate::text::{normalize_spaces, numbered_lines, prepare_text_line, strip_markup};
use candidates::{candidate_lines, NumberedLine};
use refine::{is_junk, refine_author, refine_copyright, refine_date, refine_holder};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::debug;

/// A copyright statement with the holders and years it names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyrightDetection {
    pub statement: String,
    pub holders: Vec<String>,
    pub years: Vec<String>,
    pub start_line: usize,
    pub end_line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorDetection {
    pub author: String,
    pub start_line: usize,
    pub end_line: usize,
}

/// Everything found in one source text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Detections {
    pub copyrights: Vec<CopyrightDetection>,
    pub authors: Vec<AuthorDetection>,
}

impl Detections {
    pub fn is_empty(&self) -> bool {
        self.copyrights.is_empty() && self.authors.is_empty()
    }
}

/// Lowercase words that, right after a marker, show the marker is a reference
/// to copyright in general ("copyright notice", "(c) of this section").
const REFERENCE_WORDS: &[&str] = &[
    "notice", "notices", "holder", "holders", "owner", "owners", "law", "laws", "statement",
    "statements", "and", "or", "license", "licenses", "protection", "infringement", "of", "to",
    "is", "in", "on", "for", "the", "interest", "information", "disclaimer", "assignment", "file",
    "files", "claim", "claims", "transfer", "sign", "symbol", "message", "header", "year", "years",
    "date", "line", "lines", "text", "as", "if", "are", "may", "shall", "will",
];

static MARKER: OnceLock<Regex> = OnceLock::new();
static TERMINATOR: OnceLock<Regex> = OnceLock::new();
static YEAR: OnceLock<Regex> = OnceLock::new();
static AUTHOR: OnceLock<Regex> = OnceLock::new();

fn marker() -> &'static Regex {
    MARKER.get_or_init(|| {
        Regex::new(r"(?i)\bcopyright\b|\bcopr\b\.?|\(c\)").expect("Invalid marker regex")
    })
}

fn terminator() -> &'static Regex {
    TERMINATOR.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?P<phrase>all\s+rights?\s+reserved|licensed\s+(?:under|to|by|as)|use of this|permission\s+(?:is|to)|redistributions?\s+(?:and|of|in)|this (?:program|file|library|software|code|header)|spdx-license-identifier|released under|distributed under|is free software|you may|see the|under the terms)\b|(?:^|[.;,:]\s*)(?P<word>licensed|permission|redistribution)\b",
        )
        .expect("Invalid terminator regex")
    })
}

/// Start of the first terminator at or after `from`.
///
/// Bare words such as "Licensed" only end a statement at a sentence boundary,
/// so holder names like "The Licensed Software Co" survive.
fn find_terminator(line: &str, from: usize) -> Option<usize> {
    let caps = terminator().captures_at(line, from)?;
    caps.name("phrase")
        .or_else(|| caps.name("word"))
        .map(|m| m.start())
}

fn year() -> &'static Regex {
    YEAR.get_or_init(|| {
        Regex::new(r"\b((?:19|20)\d{2})(?:\s*[-–]\s*((?:19|20)?\d{2}))?\b").expect("Invalid year regex")
    })
}

fn author() -> &'static Regex {
    AUTHOR.get_or_init(|| {
        Regex::new(
            r"(?i)^(?:@?authors?(?:\(s\))?\s*:?|(?:originally\s+)?(?:written|contributed|developed|maintained)\s+by\s*:?)\s+(.+)$",
        )
        .expect("Invalid author regex")
    })
}

/// A statement located inside one prepared line
struct Span {
    start: usize,
    end: usize,
    /// Ended on a terminator or the next statement rather than the line end
    closed: bool,
}

pub struct CopyrightDetector {
    min_year: i32,
    max_year: i32,
}

impl CopyrightDetector {
    pub fn new(min_year: i32, max_year: i32) -> Self {
        Self { min_year, max_year }
    }

    pub fn from_config(config: &CopyrightConfig) -> Self {
        Self::new(config.min_year, config.max_year)
    }

    /// Detect copyrights and authors in `text`.
    pub fn detect(&self, text: &str) -> Detections {
        let groups = candidate_lines(numbered_lines(text));
        debug!(groups = groups.len(), "copyright candidate groups");

        let mut found = Detections::default();
        for group in &groups {
            self.detect_group(group, &mut found);
        }
        found
    }

    fn detect_group(&self, group: &[NumberedLine<'_>], found: &mut Detections) {
        let lines: Vec<(usize, String)> = group
            .iter()
            .map(|(number, line)| (*number, normalize_spaces(&strip_markup(&prepare_text_line(line)))))
            .filter(|(_, line)| !line.is_empty())
            .collect();

        let mut i = 0;
        while i < lines.len() {
            let (number, line) = &lines[i];
            let mut last_consumed = i;

            if let Some(author) = find_author(line) {
                found.authors.push(AuthorDetection {
                    author,
                    start_line: *number,
                    end_line: *number,
                });
            }

            for span in statement_spans(line) {
                let mut text = line[span.start..span.end].trim().to_string();
                let mut end_line = *number;
                let mut open = !span.closed;

                while open && self.needs_continuation(&text) && last_consumed + 1 < lines.len() {
                    let (next_number, next) = &lines[last_consumed + 1];
                    if starts_new_clause(next) {
                        break;
                    }
                    let (cut, closed) = match find_terminator(next, 0) {
                        Some(pos) => (pos, true),
                        None => (next.len(), false),
                    };
                    text.push(' ');
                    text.push_str(next[..cut].trim());
                    end_line = *next_number;
                    last_consumed += 1;
                    open = !closed;
                }

                if let Some(detection) = self.build_detection(&text, *number, end_line) {
                    debug!(statement = %detection.statement, "copyright detected");
                    found.copyrights.push(detection);
                }
            }

            i = last_consumed + 1;
        }
    }

    /// A statement without a holder or ending on a connective word continues.
    fn needs_continuation(&self, text: &str) -> bool {
        let trimmed = text.trim_end();
        let lower = trimmed.to_lowercase();
        if lower.ends_with(" by")
            || lower.ends_with(',')
            || lower.ends_with(" and")
            || lower.ends_with('&')
        {
            return true;
        }
        self.holder_words(trimmed).is_empty()
    }

    fn build_detection(&self, text: &str, start_line: usize, end_line: usize) -> Option<CopyrightDetection> {
        let statement = refine_copyright(text);
        if statement.is_empty() || is_junk(&statement) {
            return None;
        }

        let body = marker().replace_all(&statement, " ");
        let first_word = body
            .split_whitespace()
            .find(|w| w.chars().any(|c| c.is_alphanumeric()))?
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if REFERENCE_WORDS.contains(&first_word.as_str()) {
            return None;
        }

        let years = self.years_in(&body);
        let holder_words = self.holder_words(&statement);
        let holders = if holder_words.is_empty() {
            Vec::new()
        } else {
            let holder = refine_holder(&holder_words.join(" "));
            if holder.chars().any(|c| c.is_alphabetic()) {
                vec![holder]
            } else {
                Vec::new()
            }
        };

        if years.is_empty() && holders.is_empty() {
            return None;
        }

        Some(CopyrightDetection {
            statement,
            holders,
            years,
            start_line,
            end_line,
        })
    }

    fn years_in(&self, body: &str) -> Vec<String> {
        year()
            .captures_iter(body)
            .filter(|caps| {
                let in_window = |y: i32| (self.min_year..=self.max_year).contains(&y);
                let first_ok = caps[1].parse::<i32>().map(in_window).unwrap_or(false);
                let last_ok = match caps.get(2) {
                    Some(end) if end.as_str().len() == 4 => {
                        end.as_str().parse::<i32>().map(in_window).unwrap_or(false)
                    }
                    _ => true,
                };
                first_ok && last_ok
            })
            .map(|caps| refine_date(&caps[0]))
            .collect()
    }

    /// Words of a statement left once markers, years and connectives are gone.
    fn holder_words(&self, statement: &str) -> Vec<String> {
        let without_markers = marker().replace_all(statement, " ");
        let without_years = year().replace_all(&without_markers, " ");
        let mut words: Vec<String> = without_years
            .split_whitespace()
            .filter(|w| w.chars().any(|c| c.is_alphanumeric()))
            .map(|w| w.to_string())
            .collect();
        while words
            .first()
            .is_some_and(|w| w.trim_end_matches(':').eq_ignore_ascii_case("by"))
        {
            words.remove(0);
        }
        words
    }
}

impl Default for CopyrightDetector {
    fn default() -> Self {
        Self::from_config(&CopyrightConfig::default())
    }
}

/// Split a prepared line into statements starting at copyright markers.
fn statement_spans(line: &str) -> Vec<Span> {
    // (statement start, end of its leading markers)
    let mut starts: Vec<(usize, usize)> = Vec::new();
    for m in marker().find_iter(line) {
        match starts.last_mut() {
            // adjacent markers as in "Copyright (c)" open a single statement
            Some((_, markers_end))
                if !line[*markers_end..m.start()].chars().any(|c| c.is_alphabetic()) =>
            {
                *markers_end = m.end();
            }
            _ => starts.push((m.start(), m.end())),
        }
    }

    let mut spans = Vec::with_capacity(starts.len());
    for (k, (start, markers_end)) in starts.iter().enumerate() {
        let limit = starts.get(k + 1).map(|(next, _)| *next).unwrap_or(line.len());
        let terminated_at = find_terminator(line, *markers_end).filter(|pos| *pos < limit);
        let (end, closed) = match terminated_at {
            Some(pos) => (pos, true),
            None => (limit, limit < line.len()),
        };
        spans.push(Span {
            start: *start,
            end,
            closed,
        });
    }
    spans
}

fn starts_new_clause(line: &str) -> bool {
    marker().find(line).is_some_and(|m| m.start() == 0)
        || find_terminator(line, 0) == Some(0)
        || author().is_match(line)
}

fn find_author(line: &str) -> Option<String> {
    let caps = author().captures(line)?;
    let mut who = caps[1].to_string();
    if let Some(m) = marker().find(&who) {
        who.truncate(m.start());
    }
    let who = refine_author(&who);
    let plausible = who.contains('@') || who.chars().next().is_some_and(|c| c.is_uppercase());
    plausible.then_some(who)
}
