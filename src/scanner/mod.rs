// Scanner facade tying the clue detectors together

pub mod summary;

use crate::config::ScanConfig;
use crate::copyright::{AuthorDetection, CopyrightDetection, CopyrightDetector};
use crate::error::ScanError;
use crate::finder::{find_emails, find_urls, Clue};
use crate::header::SourceHeader;
use crate::license::{find_license_hints, find_spdx_identifiers, LicenseHint, SpdxClue};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

pub use summary::ScanSummary;

/// Bytes inspected when deciding whether content is binary
const BINARY_SNIFF_LEN: usize = 8 * 1024;

/// A named source text held in memory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceText {
    pub name: String,
    pub content: String,
}

impl SourceText {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Clues found in one source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<SourceHeader>,
    /// SHA-256 of the normalized comment header text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fingerprint: Option<String>,
    pub copyrights: Vec<CopyrightDetection>,
    pub authors: Vec<AuthorDetection>,
    pub emails: Vec<Clue>,
    pub urls: Vec<Clue>,
    pub spdx: Vec<SpdxClue>,
    pub license_hints: Vec<LicenseHint>,
}

impl ScanReport {
    pub fn holders(&self) -> impl Iterator<Item = &str> {
        self.copyrights
            .iter()
            .flat_map(|c| c.holders.iter().map(String::as_str))
    }

    pub fn to_json(&self) -> Result<String, ScanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct Scanner {
    config: ScanConfig,
    copyrights: CopyrightDetector,
}

impl Scanner {
    /// Create a scanner, rejecting invalid configuration.
    pub fn new(config: ScanConfig) -> Result<Self, ScanError> {
        config.validate()?;
        let copyrights = CopyrightDetector::from_config(&config.copyrights);
        Ok(Self { config, copyrights })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan one source text.
    pub fn scan(&self, name: &str, text: &str) -> ScanReport {
        let config = &self.config;

        let header = config
            .header
            .enabled
            .then(|| SourceHeader::parse(name, text, config.header.max_lines));
        let header_fingerprint = header
            .as_ref()
            .and_then(|h| h.comment.as_ref())
            .map(|comment| fingerprint(&comment.normalized_text()));

        let (copyrights, authors) = if config.copyrights.enabled {
            let found = self.copyrights.detect(text);
            (found.copyrights, found.authors)
        } else {
            (Vec::new(), Vec::new())
        };

        let emails = if config.emails.enabled {
            limit(find_emails(text, config.emails.unique), config.emails.max)
        } else {
            Vec::new()
        };
        let urls = if config.urls.enabled {
            limit(find_urls(text, config.urls.unique), config.urls.max)
        } else {
            Vec::new()
        };

        let hints = &config.license_hints;
        let spdx = if hints.enabled && hints.spdx {
            find_spdx_identifiers(text)
        } else {
            Vec::new()
        };
        let license_hints = if hints.enabled {
            find_license_hints(text)
        } else {
            Vec::new()
        };

        debug!(
            name,
            copyrights = copyrights.len(),
            authors = authors.len(),
            emails = emails.len(),
            urls = urls.len(),
            "scan complete"
        );

        ScanReport {
            name: name.to_string(),
            header,
            header_fingerprint,
            copyrights,
            authors,
            emails,
            urls,
            spdx,
            license_hints,
        }
    }

    /// Scan raw bytes, refusing content that looks binary.
    pub fn scan_bytes(&self, name: &str, bytes: &[u8]) -> Result<ScanReport, ScanError> {
        if is_binary(bytes) {
            return Err(ScanError::BinaryContent(name.to_string()));
        }
        let text = String::from_utf8_lossy(bytes);
        Ok(self.scan(name, &text))
    }

    /// Scan many sources in parallel; reports keep the input order.
    pub fn scan_batch(&self, sources: &[SourceText]) -> Vec<ScanReport> {
        info!(sources = sources.len(), "scanning batch");
        sources
            .par_iter()
            .map(|source| self.scan(&source.name, &source.content))
            .collect()
    }
}

fn limit(mut clues: Vec<Clue>, max: usize) -> Vec<Clue> {
    if max > 0 {
        clues.truncate(max);
    }
    clues
}

fn is_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(BINARY_SNIFF_LEN).any(|b| *b == 0)
}

/// Hex SHA-256 of `text`.
pub fn fingerprint(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}
