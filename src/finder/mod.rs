// Email and URL clue finders
//
// Matches go through an ordered chain of cleaners and filters; a filter
// returning None drops the match.

pub mod junk;

use crate::text::numbered_lines;
use http::uri::Authority;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::OnceLock;
use tracing::trace;

/// A found value and the 1-based line it was found on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clue {
    pub value: String,
    pub line: usize,
}

const SCHEMES: &str = r"https?\+git|https?\+svn|https?\+hg|https?|ftps?|sftp|rsync|ssh|svn|git|hg";

/// Scheme-less matches that become empty after cleanup
const EMPTY_URLS: &[&str] = &["https", "http", "ftp", "www"];

static EMAIL: OnceLock<Regex> = OnceLock::new();
static URL: OnceLock<Regex> = OnceLock::new();
static HAS_SCHEME: OnceLock<Regex> = OnceLock::new();
static INVALID_URL: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL.get_or_init(|| {
        Regex::new(r"(?i)\b[A-Z0-9._%-]+@[A-Z0-9.-]+\.[A-Z]{2,4}\b").expect("Invalid email regex")
    })
}

fn url_regex() -> &'static Regex {
    URL.get_or_init(|| {
        let body = r#"[^\s<>\[\]"]"#;
        let pattern = format!(
            r"(?i)(?:{SCHEMES})://{body}+|(?:www|ftp)\.{body}+|git@{body}+:{body}+\.git"
        );
        Regex::new(&pattern).expect("Invalid url regex")
    })
}

fn has_scheme_regex() -> &'static Regex {
    HAS_SCHEME.get_or_init(|| {
        Regex::new(&format!(r"(?i)^(?:{SCHEMES})://")).expect("Invalid scheme regex")
    })
}

fn invalid_url_regex() -> &'static Regex {
    INVALID_URL.get_or_init(|| {
        Regex::new(&format!(r"(?i)^(?:{SCHEMES})://[$%*/_]+")).expect("Invalid url filter regex")
    })
}

/// Find emails in `text`, skipping local, example and test domains.
pub fn find_emails(text: &str, unique: bool) -> Vec<Clue> {
    let mut clues = Vec::new();
    for (line_number, line) in numbered_lines(text) {
        for m in email_regex().find_iter(line) {
            let email = m.as_str();
            let domain = email.rsplit('@').next().unwrap_or_default();
            if !is_good_host(domain) || junk::is_junk_email(email) {
                trace!(email, "filtered email");
                continue;
            }
            clues.push(Clue {
                value: email.to_string(),
                line: line_number,
            });
        }
    }
    if unique {
        unique_filter(clues)
    } else {
        clues
    }
}

/// Find URLs in `text`, cleaned, canonicalized and stripped of junk.
pub fn find_urls(text: &str, unique: bool) -> Vec<Clue> {
    let mut clues = Vec::new();
    for (line_number, line) in numbered_lines(text) {
        for m in url_regex().find_iter(line) {
            match clean_url(m.as_str()) {
                Some(url) => clues.push(Clue {
                    value: url,
                    line: line_number,
                }),
                None => trace!(url = m.as_str(), "filtered url"),
            }
        }
    }
    if unique {
        unique_filter(clues)
    } else {
        clues
    }
}

/// Run the cleanup chain over one raw URL match. Order matters.
pub fn clean_url(raw: &str) -> Option<String> {
    let url = strip_verbatim_crlf(raw);
    let url = clean_end_of_url(&url);
    if is_empty_url(&url) {
        return None;
    }
    if !is_filterable(&url) {
        // git@host:path.git style URLs skip host based filtering
        return Some(url);
    }

    let url = add_fake_scheme(&url);
    if invalid_url_regex().is_match(&url) {
        return None;
    }
    let parts = UrlParts::parse(&url)?;
    if !parts.has_good_host() || junk::is_junk_url(&parts.canonical()) {
        return None;
    }
    Some(parts.canonical())
}

fn unique_filter(clues: Vec<Clue>) -> Vec<Clue> {
    let mut seen = HashSet::new();
    clues
        .into_iter()
        .filter(|clue| seen.insert(clue.value.clone()))
        .collect()
}

/// Remove literal `\n` and `\r` escapes left inside a URL.
fn strip_verbatim_crlf(url: &str) -> String {
    if url.ends_with('/') {
        return url.to_string();
    }
    url.replace(r"\n", "").replace(r"\r", "")
}

/// Drop junk commonly glued to the end of a URL in prose and markup.
fn clean_end_of_url(url: &str) -> String {
    if url.ends_with('/') {
        return url.to_string();
    }
    let url = url.replace("&lt;", "<").replace("&gt;", ">").replace("&amp;", "&");
    let url = url.trim_end_matches(|c: char| c.is_ascii_punctuation());
    let cut = url
        .find(|c: char| matches!(c, '\\' | '<' | '>' | '(' | ')' | '[' | ']' | '"' | '\''))
        .unwrap_or(url.len());
    url[..cut].to_string()
}

fn is_empty_url(url: &str) -> bool {
    let junk = url
        .to_lowercase()
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .trim()
        .to_string();
    junk.is_empty() || EMPTY_URLS.contains(&junk.as_str())
}

fn is_filterable(url: &str) -> bool {
    !url.starts_with("git@")
}

fn add_fake_scheme(url: &str) -> String {
    if has_scheme_regex().is_match(url) {
        url.to_string()
    } else {
        format!("http://{}", url.trim_start_matches(&[':', '/'][..]).trim())
    }
}

fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" => Some(80),
        "https" => Some(443),
        "ftp" => Some(21),
        "ssh" | "sftp" => Some(22),
        _ => None,
    }
}

/// A URL split into the pieces needed for filtering and canonicalization
struct UrlParts {
    scheme: String,
    host: String,
    port: Option<u16>,
    rest: String,
}

impl UrlParts {
    fn parse(url: &str) -> Option<Self> {
        let (scheme, after) = url.split_once("://")?;
        let authority_end = after.find(&['/', '?', '#'][..]).unwrap_or(after.len());
        let (authority, rest) = after.split_at(authority_end);
        let authority: Authority = authority.parse().ok()?;

        let host = authority.host().trim_matches(&['[', ']'][..]).to_lowercase();
        if host.is_empty() {
            return None;
        }
        let scheme = scheme.to_lowercase();
        let port = authority
            .port_u16()
            .filter(|port| Some(*port) != default_port(&scheme));

        Some(Self {
            scheme,
            host,
            port,
            rest: rest.to_string(),
        })
    }

    /// Scheme and host lowercased, user info and default port dropped.
    fn canonical(&self) -> String {
        let host = if self.host.contains(':') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        match self.port {
            Some(port) => format!("{}://{}:{}{}", self.scheme, host, port, self.rest),
            None => format!("{}://{}{}", self.scheme, host, self.rest),
        }
    }

    fn has_good_host(&self) -> bool {
        if !is_good_host(&self.host) {
            return false;
        }
        is_ip(&self.host) || is_good_host(&registrable_domain(&self.host))
    }
}

/// The last two labels of a host name.
fn registrable_domain(host: &str) -> String {
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() <= 2 {
        return host.to_string();
    }
    labels[labels.len() - 2..].join(".")
}

fn is_ip(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}

fn is_private_ip(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            v4.is_private()
                || v4.is_loopback()
                || v4.is_link_local()
                || v4.is_multicast()
                || v4.is_unspecified()
                || v4.is_broadcast()
                || v4.is_documentation()
        }
        IpAddr::V6(v6) => {
            let first = v6.segments()[0];
            v6.is_loopback()
                || v6.is_multicast()
                || v6.is_unspecified()
                || (first & 0xfe00) == 0xfc00
                || (first & 0xffc0) == 0xfe80
        }
    }
}

/// True if the host is not some local or uninteresting host.
pub fn is_good_host(host: &str) -> bool {
    if host.is_empty() {
        return false;
    }
    if let Ok(ip) = host.parse::<IpAddr>() {
        return !is_private_ip(&ip) && !junk::is_junk_ip(host);
    }
    // dotless names such as localhost are private
    host.contains('.') && !junk::is_junk_host(host)
}
