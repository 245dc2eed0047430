// Source header structure tests

use noticescan::header::{Language, SourceHeader};

#[test]
fn test_java_package_and_imports() {
    let text = "/*\n * Copyright 2016 Acme Inc.\n * SPDX-License-Identifier: Apache-2.0\n */\n\
                package com.acme.auth;\n\n\
                import java.util.List;\n\
                import static org.junit.Assert.*;\n";
    let header = SourceHeader::parse("Token.java", text, 200);
    assert_eq!(header.language, Language::Java);
    assert_eq!(header.packages[0].name, "com.acme.auth");
    let paths: Vec<_> = header.imports.iter().map(|i| i.path.as_str()).collect();
    assert_eq!(paths, vec!["java.util.List", "org.junit.Assert.*"]);
    assert!(header.is_well_formed_fixture());
}

#[test]
fn test_two_package_clauses_are_not_a_fixture() {
    let text = "// Copyright 2020 Acme Inc.\npackage a\npackage b\nimport \"fmt\"\n";
    let header = SourceHeader::parse("a.go", text, 200);
    assert_eq!(header.packages.len(), 2);
    assert!(!header.is_well_formed_fixture());
}

#[test]
fn test_comment_without_license_is_not_license_header() {
    let text = "// Package util has helpers.\npackage util\nimport \"fmt\"\n";
    let header = SourceHeader::parse("util.go", text, 200);
    assert!(header.comment.is_some());
    assert!(!header.has_license_header);
    assert!(!header.is_well_formed_fixture());
}

#[test]
fn test_license_hint_alone_marks_license_header() {
    let text = "# This program is free software; you can redistribute it under the terms of\n\
                # the GNU General Public License as published by the FSF.\n\
                import sys\n";
    let header = SourceHeader::parse("tool.py", text, 200);
    assert!(header.has_license_header);
}

#[test]
fn test_shebang_is_skipped() {
    let text = "#!/bin/sh\n# Copyright 1999 Acme\necho hi\n";
    let header = SourceHeader::parse("run.sh", text, 200);
    let comment = header.comment.unwrap();
    assert_eq!(comment.start_line, 2);
    assert_eq!(comment.lines, vec!["# Copyright 1999 Acme"]);
}

#[test]
fn test_doc_comment_mentioning_authorization_is_not_license_header() {
    let text = "// Package oauth2 provides support for making\n\
                // OAuth2 authorized and authenticated HTTP requests.\n\
                package oauth2\n\n\
                import \"fmt\"\n";
    let header = SourceHeader::parse("oauth2.go", text, 200);
    assert!(header.comment.is_some());
    assert!(!header.has_license_header);
    assert!(!header.is_well_formed_fixture());
}

#[test]
fn test_kotlin_package_and_imports_without_semicolons() {
    let text = "/*\n * Copyright 2021 Acme Inc.\n */\n\
                package com.acme.auth\n\n\
                import kotlinx.coroutines.flow.Flow\n\
                import java.time.Instant as JInstant\n";
    let header = SourceHeader::parse("Token.kt", text, 200);
    assert_eq!(header.language, Language::Kotlin);
    assert_eq!(header.packages[0].name, "com.acme.auth");
    assert_eq!(header.packages[0].line, 4);
    let paths: Vec<_> = header.imports.iter().map(|i| i.path.as_str()).collect();
    assert_eq!(paths, vec!["kotlinx.coroutines.flow.Flow", "java.time.Instant"]);
    assert_eq!(header.imports[1].alias.as_deref(), Some("JInstant"));
    assert!(header.is_well_formed_fixture());
}

#[test]
fn test_package_inside_block_comment_is_ignored() {
    let text = "// Copyright 2020 Acme Inc.\n\n/*\nExample:\n\n\tpackage main\n*/\n\
                package real\n\nimport \"fmt\"\n";
    let header = SourceHeader::parse("doc.go", text, 200);
    assert_eq!(header.packages.len(), 1);
    assert_eq!(header.packages[0].name, "real");
    assert_eq!(header.packages[0].line, 8);
    assert!(header.is_well_formed_fixture());
}
