// Fixture scanning tests
// Real-world source headers under tests/fixtures/

use noticescan::header::Language;
use noticescan::{ScanConfig, Scanner};

const OAUTH2: &str = include_str!("../fixtures/oauth2_header.go.txt");
const CLASSIFIER: &str = include_str!("../fixtures/licenseclassifier_header.go.txt");
const BITCOIN: &str = include_str!("../fixtures/bitcoin_header.php.txt");

fn scanner() -> Scanner {
    Scanner::new(ScanConfig::default()).expect("default config is valid")
}

#[test]
fn test_oauth2_header_is_well_formed_fixture() {
    let report = scanner().scan("oauth2.go", OAUTH2);
    let header = report.header.as_ref().expect("header enabled by default");

    assert_eq!(header.language, Language::Go);
    assert!(header.has_license_header);
    assert_eq!(header.packages.len(), 1);
    assert_eq!(header.packages[0].name, "oauth2");
    assert_eq!(header.packages[0].line, 9);
    assert_eq!(header.imports.len(), 8);
    assert_eq!(header.imports[7].path, "golang.org/x/oauth2/internal");
    assert!(header.is_well_formed_fixture());

    let comment = header.comment.as_ref().unwrap();
    assert_eq!((comment.start_line, comment.end_line), (1, 8));
}

#[test]
fn test_oauth2_header_clues() {
    let report = scanner().scan("oauth2.go", OAUTH2);

    assert_eq!(report.copyrights.len(), 1);
    let copyright = &report.copyrights[0];
    assert_eq!(copyright.statement, "Copyright 2014 The Go Authors.");
    assert_eq!(copyright.holders, vec!["The Go Authors"]);
    assert_eq!(copyright.years, vec!["2014"]);
    assert!(report.authors.is_empty());

    let urls: Vec<_> = report.urls.iter().map(|u| (u.value.as_str(), u.line)).collect();
    assert_eq!(urls, vec![("https://golang.org/x/oauth2", 8)]);

    assert_eq!(report.license_hints.len(), 1);
    assert_eq!(report.license_hints[0].key, "bsd-style");
    assert!(report.spdx.is_empty());
}

#[test]
fn test_licenseclassifier_header() {
    let report = scanner().scan("classifier.go", CLASSIFIER);
    let header = report.header.as_ref().unwrap();

    assert_eq!(header.packages[0].name, "licenseclassifier");
    assert_eq!(header.imports.len(), 14);
    assert_eq!(header.imports[0].path, "archive/tar");
    assert!(header.is_well_formed_fixture());

    assert_eq!(report.copyrights.len(), 1);
    assert_eq!(report.copyrights[0].holders, vec!["Google Inc."]);
    assert_eq!(report.copyrights[0].years, vec!["2017"]);

    assert_eq!(report.urls.len(), 1);
    assert_eq!(report.urls[0].value, "http://www.apache.org/licenses/LICENSE-2.0");
    assert_eq!(report.urls[0].line, 7);

    let keys: Vec<_> = report.license_hints.iter().map(|h| h.key).collect();
    assert_eq!(keys, vec!["apache-2.0"]);
}

#[test]
fn test_fixtures_have_distinct_header_fingerprints() {
    let scanner = scanner();
    let a = scanner.scan("oauth2.go", OAUTH2).header_fingerprint.unwrap();
    let b = scanner.scan("classifier.go", CLASSIFIER).header_fingerprint.unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_comment_style_does_not_change_fingerprint() {
    let scanner = scanner();
    let line_comments = "// Copyright 2014 The Go Authors. All rights reserved.\n\
                         // Use of this source code is governed by a BSD-style\n\
                         package a\n";
    let block_comment = "/*\n\
                         * Copyright 2014 The Go Authors. All rights reserved.\n\
                         * Use of this source code is governed by a BSD-style\n\
                         */\n\
                         package a\n";
    let a = scanner.scan("a.go", line_comments).header_fingerprint;
    let b = scanner.scan("a.go", block_comment).header_fingerprint;
    assert!(a.is_some());
    assert_eq!(a, b);
}

#[test]
fn test_bitcoin_php_authors_and_urls() {
    let report = scanner().scan("bitcoin.php", BITCOIN);
    let header = report.header.as_ref().unwrap();

    assert_eq!(header.language, Language::Php);
    assert!(header.packages.is_empty());
    assert!(!header.is_well_formed_fixture());
    assert!(report.copyrights.is_empty());

    assert_eq!(report.authors.len(), 2);
    assert!(report.authors[0].author.starts_with("Mike Gogulski"));
    assert_eq!(report.authors[0].start_line, 12);

    let urls: Vec<_> = report.urls.iter().map(|u| u.value.as_str()).collect();
    assert!(urls.contains(&"http://www.unlicense.org/"));
    assert!(urls.contains(&"http://bitcoin.org/smf"));
}
