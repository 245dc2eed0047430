// Scanner facade tests

use noticescan::{ScanConfig, ScanError, ScanSummary, Scanner, SourceText};
use rstest::rstest;

fn scanner() -> Scanner {
    Scanner::new(ScanConfig::default()).unwrap()
}

#[test]
fn test_invalid_config_rejected_by_scanner() {
    let mut config = ScanConfig::default();
    config.copyrights.min_year = 2050;
    config.copyrights.max_year = 2000;
    assert!(matches!(Scanner::new(config), Err(ScanError::Config(_))));
}

#[test]
fn test_scan_bytes_rejects_binary() {
    let result = scanner().scan_bytes("logo.png", b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR");
    assert!(matches!(result, Err(ScanError::BinaryContent(name)) if name == "logo.png"));
}

#[test]
fn test_scan_bytes_decodes_text() {
    let report = scanner()
        .scan_bytes("a.c", "/* Copyright \u{a9} 2003 Acme Corp. */\n".as_bytes())
        .unwrap();
    assert_eq!(report.copyrights[0].holders, vec!["Acme Corp."]);
    assert_eq!(report.copyrights[0].years, vec!["2003"]);
}

#[test]
fn test_scan_batch_keeps_input_order() {
    let sources: Vec<SourceText> = (0..20)
        .map(|i| SourceText::new(format!("file{i}.go"), format!("// Copyright {} Holder{i} Inc.\npackage p\n", 2000 + i)))
        .collect();
    let reports = scanner().scan_batch(&sources);
    assert_eq!(reports.len(), 20);
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.name, format!("file{i}.go"));
        assert_eq!(report.copyrights[0].holders, vec![format!("Holder{i} Inc.")]);
    }
}

#[test]
fn test_email_limit_applies() {
    let mut config = ScanConfig::default();
    config.emails.max = 1;
    let scanner = Scanner::new(config).unwrap();
    let report = scanner.scan("AUTHORS", "jane@roe.org\njohn@doe.net\n");
    assert_eq!(report.emails.len(), 1);
    assert_eq!(report.emails[0].value, "jane@roe.org");
}

#[test]
fn test_spdx_can_be_disabled() {
    let mut config = ScanConfig::default();
    config.license_hints.spdx = false;
    let scanner = Scanner::new(config).unwrap();
    let report = scanner.scan("a.rs", "// SPDX-License-Identifier: MIT\n");
    assert!(report.spdx.is_empty());
}

#[rstest]
#[case("// SPDX-License-Identifier: Apache-2.0 OR MIT\n", vec!["Apache-2.0", "MIT"])]
#[case("# SPDX-License-Identifier: GPL-2.0-or-later\n", vec!["GPL-2.0-or-later"])]
fn test_spdx_ids_in_report(#[case] text: &str, #[case] expected: Vec<&str>) {
    let report = scanner().scan("x", text);
    assert_eq!(report.spdx[0].license_ids, expected);
}

#[test]
fn test_report_serializes_to_json() {
    let report = scanner().scan("a.go", "// Copyright 2014 The Go Authors. All rights reserved.\npackage a\n");
    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["name"], "a.go");
    assert_eq!(value["copyrights"][0]["holders"][0], "The Go Authors");
    assert_eq!(value["header"]["language"], "go");
    assert_eq!(value["header"]["packages"][0]["name"], "a");
}

#[test]
fn test_summary_over_batch() {
    let sources = vec![
        SourceText::new("a.go", "// Copyright 2012 The Go Authors. All rights reserved.\n"),
        SourceText::new("b.go", "// Copyright 2014 The Go Authors. All rights reserved.\n"),
        SourceText::new("c.go", "package c\n"),
    ];
    let reports = scanner().scan_batch(&sources);
    let summary = ScanSummary::from_reports(&reports);
    assert_eq!(summary.holders.len(), 1);
    assert_eq!(summary.holders[0].count, 2);
    assert_eq!(summary.earliest_year, Some(2012));
    assert_eq!(summary.latest_year, Some(2014));
    assert_eq!(summary.without_copyright, vec!["c.go"]);
}
