// Copyright detection tests over assorted header styles

use noticescan::copyright::CopyrightDetector;
use rstest::rstest;

fn detector() -> CopyrightDetector {
    CopyrightDetector::new(1960, 2099)
}

#[rstest]
#[case("# Copyright (c) 2015 nexB Inc. and others. All rights reserved.", "nexB Inc. and others", "2015")]
#[case(" * Copyright (C) 1998 Free Software Foundation, Inc.", "Free Software Foundation, Inc.", "1998")]
#[case("<!-- Copyright &copy; 2010 Acme Widgets -->", "Acme Widgets", "2010")]
#[case("dnl Copyright 2001-2004 Gary V. Vaughan", "Gary V. Vaughan", "2001-2004")]
#[case("// Copr. 1999 Sun Microsystems, Inc.", "Sun Microsystems, Inc.", "1999")]
fn test_single_line_statements(#[case] line: &str, #[case] holder: &str, #[case] year: &str) {
    let found = detector().detect(line);
    assert_eq!(found.copyrights.len(), 1, "statement in {line:?}");
    assert_eq!(found.copyrights[0].holders, vec![holder]);
    assert_eq!(found.copyrights[0].years, vec![year]);
}

#[test]
fn test_statement_without_year() {
    let found = detector().detect("Copyright Acme Corporation\n");
    assert_eq!(found.copyrights[0].holders, vec!["Acme Corporation"]);
    assert!(found.copyrights[0].years.is_empty());
}

#[test]
fn test_mit_license_body_has_no_statement() {
    let text = "Permission is hereby granted, free of charge, to any person obtaining a copy\n\
                of this software and associated documentation files (the \"Software\").\n\
                \n\
                The above copyright notice and this permission notice shall be included in\n\
                all copies or substantial portions of the Software.\n";
    assert!(detector().detect(text).copyrights.is_empty());
}

#[test]
fn test_holder_on_next_line() {
    let text = "/*\n * Copyright (c) 2009\n *   The Regents of the University of California.\n */\n";
    let found = detector().detect(text);
    assert_eq!(found.copyrights.len(), 1);
    let c = &found.copyrights[0];
    assert_eq!(c.holders, vec!["The Regents of the University of California"]);
    assert_eq!((c.start_line, c.end_line), (2, 3));
}

#[test]
fn test_written_by_author() {
    let found = detector().detect("/* Written by Jean-loup Gailly. */\n");
    assert_eq!(found.authors.len(), 1);
    assert_eq!(found.authors[0].author, "Jean-loup Gailly.");
}

#[test]
fn test_lowercase_author_word_is_not_an_author() {
    let found = detector().detect("authors of this file disclaim everything\n");
    assert!(found.authors.is_empty());
}

#[rstest]
#[case("COPYRIGHT NOTICE")]
#[case(" * Copyright Notice:")]
#[case("// Copyright holders: see AUTHORS")]
fn test_reference_word_after_marker_is_not_a_statement(#[case] line: &str) {
    assert!(detector().detect(line).copyrights.is_empty(), "{line:?}");
}
