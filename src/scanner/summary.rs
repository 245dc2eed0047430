// Summary of copyright holders and years across many reports

use super::ScanReport;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolderTally {
    pub holder: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Holders by number of statements naming them, most frequent first
    pub holders: Vec<HolderTally>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_year: Option<i32>,
    /// Sources with no copyright statement at all
    pub without_copyright: Vec<String>,
}

impl ScanSummary {
    pub fn from_reports(reports: &[ScanReport]) -> Self {
        // spelling variants share a letters-only key; the longest spelling wins
        let mut clusters: HashMap<String, (&str, usize)> = HashMap::new();
        let mut years: Vec<i32> = Vec::new();
        let mut without_copyright = Vec::new();

        for report in reports {
            if report.copyrights.is_empty() {
                without_copyright.push(report.name.clone());
            }
            for holder in report.holders() {
                let (name, count) = clusters.entry(holder_key(holder)).or_insert((holder, 0));
                if holder.len() > name.len() || (holder.len() == name.len() && holder < *name) {
                    *name = holder;
                }
                *count += 1;
            }
            for detection in &report.copyrights {
                years.extend(detection.years.iter().flat_map(|y| years_of(y)));
            }
        }

        let mut holders: Vec<HolderTally> = clusters
            .into_values()
            .map(|(holder, count)| HolderTally {
                holder: holder.to_string(),
                count,
            })
            .collect();
        holders.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.holder.cmp(&b.holder)));

        ScanSummary {
            holders,
            earliest_year: years.iter().min().copied(),
            latest_year: years.iter().max().copied(),
            without_copyright,
        }
    }
}

/// Lowercase letters of a holder name, ignoring spacing and punctuation.
fn holder_key(holder: &str) -> String {
    holder
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Both ends of a year or year range; two digit range ends follow the start year.
fn years_of(year: &str) -> Vec<i32> {
    let mut parts = year.split(|c: char| c == '-' || c == '–').map(str::trim);
    let first = match parts.next().and_then(|p| p.parse::<i32>().ok()) {
        Some(first) => first,
        None => return Vec::new(),
    };
    match parts.next() {
        Some(end) if end.len() == 2 => match end.parse::<i32>() {
            Ok(short) => {
                let mut last = first / 100 * 100 + short;
                if last < first {
                    last += 100;
                }
                vec![first, last]
            }
            Err(_) => vec![first],
        },
        Some(end) => match end.parse::<i32>() {
            Ok(last) => vec![first, last],
            Err(_) => vec![first],
        },
        None => vec![first],
    }
}
