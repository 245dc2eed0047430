// Candidate line grouping for copyright detection
//
// A candidate line mentions a copyright or authorship marker. Groups keep one
// content line before a candidate and up to two content lines after it, so
// statements wrapped over several lines are detected as a whole.

use crate::text::{has_content, prepare_text_line};

/// Lowercase markers that make a line worth parsing
const STATEMENT_MARKERS: &[&str] = &[
    "copyright",
    "(c)",
    "copr",
    "author",
    "written by",
    "contributed by",
    "developed by",
    "maintained by",
    "all rights reserved",
];

/// Lines kept after the last candidate of a group
const TRAILING_LINES: u8 = 2;

/// A 1-based line number with the raw line text
pub type NumberedLine<'a> = (usize, &'a str);

pub fn is_candidate(line: &str) -> bool {
    let prepared = prepare_text_line(&line.to_lowercase());
    has_content(&prepared) && STATEMENT_MARKERS.iter().any(|m| prepared.contains(m))
}

/// True if a line ends with an "all rights reserved"-like statement.
pub fn is_all_rights_reserved(line: &str) -> bool {
    let prepared = prepare_text_line(line);
    let letters: String = prepared
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect::<String>()
        .to_lowercase();
    letters.ends_with("rightreserved") || letters.ends_with("rightsreserved")
}

/// Group lines into runs of candidate lines with their immediate context.
pub fn candidate_lines<'a, I>(lines: I) -> Vec<Vec<NumberedLine<'a>>>
where
    I: IntoIterator<Item = NumberedLine<'a>>,
{
    let mut groups = Vec::new();
    let mut candidates: Vec<NumberedLine<'a>> = Vec::new();
    let mut previous: Option<NumberedLine<'a>> = None;
    // remaining trailing context lines; zero means "not in a statement"
    let mut in_copyright: u8 = 0;

    for numbered in lines {
        let (_, line) = numbered;
        if is_candidate(line) {
            in_copyright = TRAILING_LINES;
            if let Some(prev) = previous.take() {
                candidates.push(prev);
            }
            candidates.push(numbered);
            if is_all_rights_reserved(line) {
                groups.push(std::mem::take(&mut candidates));
                in_copyright = 0;
            }
        } else if in_copyright > 0 {
            if has_content(line) {
                candidates.push(numbered);
                in_copyright -= 1;
            } else {
                if !candidates.is_empty() {
                    groups.push(std::mem::take(&mut candidates));
                }
                in_copyright = 0;
            }
        } else {
            if !candidates.is_empty() {
                groups.push(std::mem::take(&mut candidates));
            }
            previous = if has_content(line) { Some(numbered) } else { None };
        }
    }

    if !candidates.is_empty() {
        groups.push(candidates);
    }
    groups
}
