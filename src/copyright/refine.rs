// Cleanup of detected copyright, author and year strings

use crate::text::{normalize_spaces, strip_unbalanced_parens};

const BRACKETS: &[(char, char)] = &[('(', ')'), ('<', '>'), ('[', ']'), ('{', '}')];

/// Statements that contain a marker but never name a real holder
const JUNK_STATEMENTS: &[&str] = &[
    "copyrighted by their authors",
    "copyrighted by their authors.",
    "copyright holder or other authorized",
    "copyright holder who authorizes",
    "copyright holder has authorized",
    "copyright holder nor the author",
    "copyright holder(s) or the author(s)",
    "copyright owner or entity authorized",
    "copyright owner or contributors",
    "copyright holder or said author",
    "copyright holder, or any author",
    "copyright notices, authorship",
    "copyright holder means the original author(s)",
    "(c) if you bring a patent claim against any contributor",
];

/// Drop words made only of digits.
pub fn strip_numbers(s: &str) -> String {
    s.split(' ')
        .filter(|w| w.is_empty() || !w.chars().all(|c| c.is_ascii_digit()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip some leading and trailing punctuation.
pub fn strip_some_punct(s: &str) -> String {
    s.trim_matches(&[',', '\'', '"', '}', ';'][..])
        .trim_start_matches(')')
        .trim_end_matches(&['&', '(', '-', '_'][..])
        .to_string()
}

/// Turn a trailing `" ."` into `"."`.
pub fn fix_trailing_space_dot(s: &str) -> String {
    match s.strip_suffix(" .") {
        Some(head) => format!("{head}."),
        None => s.to_string(),
    }
}

fn strip_all_unbalanced(s: &str) -> String {
    BRACKETS
        .iter()
        .fold(s.to_string(), |acc, (open, close)| strip_unbalanced_parens(&acc, *open, *close))
}

pub fn refine_copyright(c: &str) -> String {
    let mut c = strip_some_punct(c);
    c = fix_trailing_space_dot(&c);
    c = strip_all_unbalanced(&c);

    // markup artifacts
    for doubled in [
        "Copyright Copyright",
        "Copyright copyright",
        "copyright copyright",
        "copyright Copyright",
    ] {
        c = c.replace(doubled, "Copyright");
    }

    let mut words: Vec<&str> = c.split_whitespace().collect();
    if matches!(words.last(), Some(&"Parts") | Some(&"Any")) {
        words.pop();
    }
    if words.last() == Some(&"Author") {
        words.pop();
    }
    // dangling comment closers such as `-->` leave dashes behind
    strip_some_punct(&words.join(" ")).trim().to_string()
}

pub fn refine_author(a: &str) -> String {
    let mut a = strip_some_punct(a);
    a = strip_numbers(&a);
    a = strip_all_unbalanced(&a);
    let mut words: Vec<&str> = a.split_whitespace().collect();
    if words
        .first()
        .is_some_and(|w| {
            w.trim_start_matches('@')
                .trim_end_matches(':')
                .eq_ignore_ascii_case("author")
        })
    {
        words.remove(0);
    }
    strip_some_punct(&words.join(" ")).trim().to_string()
}

pub fn refine_date(d: &str) -> String {
    normalize_spaces(&strip_some_punct(d))
}

/// Refine a holder name, keeping the dot of a trailing abbreviation like `Inc.`
pub fn refine_holder(h: &str) -> String {
    let mut h = refine_author(h);
    h = h
        .trim_start_matches(|c: char| c == ',' || c == ':' || c == '-' || c.is_whitespace())
        .trim_end_matches(|c: char| c == ',' || c == ':' || c == ';' || c.is_whitespace())
        .to_string();

    if let Some(head) = h.strip_suffix('.') {
        let last = head.rsplit(' ').next().unwrap_or(head);
        let is_abbreviation = last.len() <= 4
            && last.chars().next().is_some_and(|c| c.is_uppercase())
            && !last.chars().all(|c| c.is_uppercase());
        if !is_abbreviation {
            h = head.to_string();
        }
    }
    h.trim().to_string()
}

/// True for statements that cannot name a holder.
pub fn is_junk(c: &str) -> bool {
    let lower = c.to_lowercase();
    JUNK_STATEMENTS.contains(&lower.as_str())
}
