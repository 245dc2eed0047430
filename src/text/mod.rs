//! Text line preparation shared by the clue detectors.
//!
//! Source headers wrap their notices in comment markers, ASCII decoration and
//! assorted copyright sign spellings. Everything here normalizes a raw line
//! into plain words so the detectors only deal with one spelling of each.

use regex::Regex;
use std::sync::OnceLock;

static COMMENT_PREFIX: OnceLock<Regex> = OnceLock::new();
static MULTI_QUOTES: OnceLock<Regex> = OnceLock::new();
static DEBIAN_TAGS: OnceLock<Regex> = OnceLock::new();
static IGNORED_PUNCTUATION: OnceLock<Regex> = OnceLock::new();
static WHITESPACE: OnceLock<Regex> = OnceLock::new();
static MARKUP_TAG: OnceLock<Regex> = OnceLock::new();
static NON_WORD: OnceLock<Regex> = OnceLock::new();

// SAFETY (all getters below): compile-time constant patterns, covered by
// `test_all_patterns_compile`.

fn comment_prefix() -> &'static Regex {
    // dos `rem`, autotools `dnl`, man page `."`
    COMMENT_PREFIX
        .get_or_init(|| Regex::new(r#"^(?:rem |@rem |dnl |\.\\")"#).expect("Invalid comment prefix regex"))
}

fn multi_quotes() -> &'static Regex {
    MULTI_QUOTES.get_or_init(|| Regex::new(r"'{2,}").expect("Invalid quotes regex"))
}

fn debian_tags() -> &'static Regex {
    DEBIAN_TAGS.get_or_init(|| Regex::new(r"</?s>").expect("Invalid debian tag regex"))
}

fn ignored_punctuation() -> &'static Regex {
    IGNORED_PUNCTUATION
        .get_or_init(|| Regex::new(r#"[*#"%\[\]{}`]+"#).expect("Invalid punctuation regex"))
}

fn whitespace() -> &'static Regex {
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace regex"))
}

fn markup_tag() -> &'static Regex {
    MARKUP_TAG.get_or_init(|| {
        Regex::new(r#"<[?!%/]?[a-zA-Z0-9#"=\s.;:%&?!,+*\-_/]+/?>"#).expect("Invalid markup regex")
    })
}

fn non_word() -> &'static Regex {
    NON_WORD.get_or_init(|| Regex::new(r"\W+").expect("Invalid non-word regex"))
}

/// Characters treated as comment markers at either end of a line
const COMMENT_CHARS: &[char] = &['\\', '/', '*', '#', '%', ';'];

/// Spellings of the copyright sign normalized to ` (c) `
const COPYRIGHT_SIGNS: &[&str] = &["(C)", "(c)", "\u{a9}", "&copy;", "&#169;", "&#xa9;"];

/// Prepare a line of text for clue detection.
pub fn prepare_text_line(line: &str) -> String {
    let line = line.trim().trim_matches(COMMENT_CHARS);
    let mut line = comment_prefix().replace(line, " ").into_owned();

    // pipes show up in ascii art boxes
    line = line.replace('|', " ");

    for sign in COPYRIGHT_SIGNS {
        line = line.replace(sign, " (c) ");
    }
    line = line.replace('\u{c2}', "");

    // CR LF entities
    line = line.replace("&#13;&#10;", " ");
    line = line.replace("&#13;", " ");
    line = line.replace("&#10;", " ");

    line = line.replace('`', "'").replace('"', "'");
    line = multi_quotes().replace_all(&line, "'").into_owned();
    line = line.replace("')", "  ");

    line = debian_tags().replace_all(&line, "").into_owned();
    line = ignored_punctuation().replace_all(&line, " ").into_owned();
    line = line.replace('\t', " ");
    line = line.replace(" , ", ", ");

    whitespace().replace_all(&line, " ").trim().to_string()
}

/// Replace markup tags such as `<p>` or `<br/>` with a space.
pub fn strip_markup(text: &str) -> String {
    markup_tag().replace_all(text, " ").into_owned()
}

/// Replace unbalanced `open`/`close` characters with a space.
///
/// Balanced pairs are kept as-is: `"This )(is a (c) string)("` becomes
/// `"This  (is a (c) string) "`.
pub fn strip_unbalanced_parens(s: &str, open: char, close: char) -> String {
    if !s.contains(open) && !s.contains(close) {
        return s.to_string();
    }

    let chars: Vec<char> = s.chars().collect();
    let mut stack = Vec::new();
    let mut unbalanced = Vec::new();
    for (i, c) in chars.iter().enumerate() {
        if *c == open {
            stack.push(i);
        } else if *c == close && stack.pop().is_none() {
            unbalanced.push(i);
        }
    }
    unbalanced.extend(stack);

    chars
        .iter()
        .enumerate()
        .map(|(i, c)| if unbalanced.contains(&i) { ' ' } else { *c })
        .collect()
}

/// True if the line holds anything besides whitespace and punctuation.
pub fn has_content(line: &str) -> bool {
    !non_word().replace_all(line, "").is_empty()
}

/// Collapse internal whitespace runs to single spaces.
pub fn normalize_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lines of `text` paired with their 1-based line number.
pub fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().map(|(i, line)| (i + 1, line))
}
