//! Source file header structure.
//!
//! A typical source file opens with a comment block carrying its copyright
//! and license notice, followed by a package declaration and an import list.
//! [`SourceHeader::parse`] extracts those three parts without interpreting
//! the rest of the file.

use crate::license::{find_license_hints, find_spdx_identifiers};
use crate::text::prepare_text_line;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Source language of a header.
///
/// Shell scripts have no package or import syntax, so for them only the
/// comment header is extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
    Java,
    Kotlin,
    Php,
    Python,
    C,
    Cpp,
    Rust,
    Shell,
    Unknown,
}

impl Language {
    /// Guess the language from a file name hint such as `token.go`.
    pub fn from_name(name: &str) -> Self {
        let extension = match name.rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => return Language::Unknown,
        };
        match extension.as_str() {
            "go" => Language::Go,
            "java" => Language::Java,
            "kt" | "kts" => Language::Kotlin,
            "php" | "inc" => Language::Php,
            "py" => Language::Python,
            "c" | "h" => Language::C,
            "cc" | "cpp" | "cxx" | "hh" | "hpp" => Language::Cpp,
            "rs" => Language::Rust,
            "sh" | "bash" => Language::Shell,
            _ => Language::Unknown,
        }
    }

    /// Guess the language from the text itself.
    pub fn sniff(text: &str) -> Self {
        let trimmed = text.trim_start();
        if trimmed.starts_with("<?php") {
            return Language::Php;
        }
        if let Some(first) = text.lines().next() {
            if first.starts_with("#!") {
                if first.contains("python") {
                    return Language::Python;
                }
                if first.contains("sh") {
                    return Language::Shell;
                }
            }
        }
        for line in text.lines().map(str::trim) {
            if line.starts_with("package ") {
                return if line.ends_with(';') {
                    Language::Java
                } else {
                    Language::Go
                };
            }
            if line.starts_with("#include") {
                return Language::C;
            }
            if line.starts_with("from ") && line.contains(" import ") {
                return Language::Python;
            }
            if line.starts_with("use ") && line.contains("::") {
                return Language::Rust;
            }
        }
        Language::Unknown
    }

    fn detect(name: &str, text: &str) -> Self {
        match Language::from_name(name) {
            Language::Unknown => Language::sniff(text),
            known => known,
        }
    }
}

/// A declaration line with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub name: String,
    pub line: usize,
}

/// One imported module, optionally aliased
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Import {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub line: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommentHeader {
    /// Raw comment lines as written
    pub lines: Vec<String>,
    pub start_line: usize,
    pub end_line: usize,
}

impl CommentHeader {
    /// Comment text with markers and decoration removed, one line per line.
    pub fn normalized_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| prepare_text_line(line))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceHeader {
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentHeader>,
    pub packages: Vec<Declaration>,
    pub imports: Vec<Import>,
    pub has_license_header: bool,
}

static GO_PACKAGE: OnceLock<Regex> = OnceLock::new();
static JAVA_PACKAGE: OnceLock<Regex> = OnceLock::new();
static PHP_NAMESPACE: OnceLock<Regex> = OnceLock::new();
static GO_IMPORT_SPEC: OnceLock<Regex> = OnceLock::new();
static JAVA_IMPORT: OnceLock<Regex> = OnceLock::new();
static KOTLIN_PACKAGE: OnceLock<Regex> = OnceLock::new();
static KOTLIN_IMPORT: OnceLock<Regex> = OnceLock::new();
static RUST_USE: OnceLock<Regex> = OnceLock::new();
static LICENSE_MARKER: OnceLock<Regex> = OnceLock::new();
static PY_IMPORT: OnceLock<Regex> = OnceLock::new();
static PY_FROM_IMPORT: OnceLock<Regex> = OnceLock::new();
static PHP_USE: OnceLock<Regex> = OnceLock::new();
static C_INCLUDE: OnceLock<Regex> = OnceLock::new();

fn re(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    // SAFETY: every pattern passed here is a literal checked by the tests below
    cell.get_or_init(|| Regex::new(pattern).expect("Invalid header regex"))
}

fn go_package() -> &'static Regex {
    re(&GO_PACKAGE, r"^package\s+([A-Za-z_][A-Za-z0-9_]*)\s*(?://.*)?$")
}

fn java_package() -> &'static Regex {
    re(&JAVA_PACKAGE, r"^package\s+([A-Za-z_][\w.]*)\s*;")
}

fn php_namespace() -> &'static Regex {
    re(&PHP_NAMESPACE, r"^namespace\s+([A-Za-z_][\w\\]*)\s*[;{]")
}

fn go_import_spec() -> &'static Regex {
    re(&GO_IMPORT_SPEC, r#"^(?:([A-Za-z_][A-Za-z0-9_]*|\.|_)\s+)?"([^"]+)"\s*(?://.*)?$"#)
}

fn java_import() -> &'static Regex {
    re(&JAVA_IMPORT, r"^import\s+(?:static\s+)?([A-Za-z_][\w.]*(?:\.\*)?)\s*;")
}

fn kotlin_package() -> &'static Regex {
    re(&KOTLIN_PACKAGE, r"^package\s+([A-Za-z_][\w.]*)\s*;?\s*(?://.*)?$")
}

fn kotlin_import() -> &'static Regex {
    re(
        &KOTLIN_IMPORT,
        r"^import\s+([A-Za-z_][\w.]*(?:\.\*)?)(?:\s+as\s+(\w+))?\s*;?\s*(?://.*)?$",
    )
}

fn rust_use() -> &'static Regex {
    re(&RUST_USE, r"^(?:pub(?:\([^)]*\))?\s+)?use\s+([^;]+?)(?:\s+as\s+(\w+))?\s*;")
}

/// Whole-word copyright markers; plain "author" mentions do not count
fn license_marker() -> &'static Regex {
    re(
        &LICENSE_MARKER,
        r"(?i)\bcopyright(?:s|ed)?\b|\bcopr\b|\(c\)|©|\ball\s+rights\s+reserved\b",
    )
}

fn py_import() -> &'static Regex {
    re(&PY_IMPORT, r"^import\s+([\w.]+(?:\s+as\s+\w+)?(?:\s*,\s*[\w.]+(?:\s+as\s+\w+)?)*)\s*(?:#.*)?$")
}

fn py_from_import() -> &'static Regex {
    re(&PY_FROM_IMPORT, r"^from\s+([\w.]+)\s+import\s+")
}

fn php_use() -> &'static Regex {
    re(&PHP_USE, r"^use\s+([A-Za-z_\\][\w\\]*)(?:\s+as\s+(\w+))?\s*;")
}

fn c_include() -> &'static Regex {
    re(&C_INCLUDE, r#"^#\s*include\s*[<"]([^>"]+)[>"]"#)
}

impl SourceHeader {
    /// Parse the header of `text`, looking at no more than `max_lines` lines.
    pub fn parse(name: &str, text: &str, max_lines: usize) -> Self {
        let language = Language::detect(name, text);
        let lines: Vec<&str> = text.lines().take(max_lines).collect();

        let comment = leading_comment(&lines, language);
        let (packages, imports) = declarations(&lines, language);
        let has_license_header = comment
            .as_ref()
            .is_some_and(|c| is_license_comment(&c.lines));

        SourceHeader {
            language,
            comment,
            packages,
            imports,
            has_license_header,
        }
    }

    /// Exactly one package declaration, a license header and an import list.
    pub fn is_well_formed_fixture(&self) -> bool {
        self.packages.len() == 1 && self.has_license_header && !self.imports.is_empty()
    }
}

fn is_license_comment(lines: &[String]) -> bool {
    let text = lines.join("\n");
    license_marker().is_match(&text)
        || !find_spdx_identifiers(&text).is_empty()
        || !find_license_hints(&text).is_empty()
}

fn is_line_comment(line: &str, language: Language) -> bool {
    match language {
        Language::Python | Language::Shell => line.starts_with('#'),
        Language::Php => line.starts_with("//") || line.starts_with('#'),
        _ => line.starts_with("//"),
    }
}

/// The first comment block of the file, skipping shebang and `<?php` lines.
fn leading_comment(lines: &[&str], language: Language) -> Option<CommentHeader> {
    let mut collected = Vec::new();
    let mut start_line = 0;
    let mut end_line = 0;
    let mut in_block = false;

    for (index, raw) in lines.iter().enumerate() {
        let number = index + 1;
        let line = raw.trim();

        if in_block {
            collected.push(raw.to_string());
            end_line = number;
            if line.contains("*/") {
                in_block = false;
            }
            continue;
        }

        if collected.is_empty() && (line.starts_with("#!") || line.starts_with("<?php") || line.is_empty()) {
            continue;
        }

        if line.starts_with("/*") {
            if collected.is_empty() {
                start_line = number;
            }
            collected.push(raw.to_string());
            end_line = number;
            in_block = !line[2..].contains("*/");
        } else if is_line_comment(line, language) && !line.starts_with("#include") {
            if collected.is_empty() {
                start_line = number;
            }
            collected.push(raw.to_string());
            end_line = number;
        } else if line.is_empty() {
            // a blank line may separate a license block from a doc comment
            continue;
        } else {
            break;
        }
    }

    if collected.is_empty() {
        return None;
    }
    Some(CommentHeader {
        lines: collected,
        start_line,
        end_line,
    })
}

fn declarations(lines: &[&str], language: Language) -> (Vec<Declaration>, Vec<Import>) {
    let mut packages = Vec::new();
    let mut imports = Vec::new();
    let mut in_go_group = false;
    let mut in_block = false;

    for (index, raw) in lines.iter().enumerate() {
        let number = index + 1;
        let line = raw.trim();

        // example code inside comments is not a declaration
        if in_block {
            in_block = !line.contains("*/");
            continue;
        }
        if line.starts_with("/*") {
            in_block = !line[2..].contains("*/");
            continue;
        }
        if is_line_comment(line, language) && !line.starts_with("#include") {
            continue;
        }

        if in_go_group {
            if line.starts_with(')') {
                in_go_group = false;
            } else if let Some(caps) = go_import_spec().captures(line) {
                imports.push(Import {
                    path: caps[2].to_string(),
                    alias: caps.get(1).map(|m| m.as_str().to_string()),
                    line: number,
                });
            }
            continue;
        }

        match language {
            Language::Go => {
                if let Some(caps) = go_package().captures(line) {
                    packages.push(Declaration {
                        name: caps[1].to_string(),
                        line: number,
                    });
                } else if let Some(spec) = line.strip_prefix("import") {
                    let spec = spec.trim();
                    if spec.starts_with('(') {
                        in_go_group = true;
                        let rest = spec[1..].trim();
                        if let Some(caps) = go_import_spec().captures(rest.trim_end_matches(')').trim()) {
                            imports.push(Import {
                                path: caps[2].to_string(),
                                alias: caps.get(1).map(|m| m.as_str().to_string()),
                                line: number,
                            });
                        }
                        if rest.ends_with(')') {
                            in_go_group = false;
                        }
                    } else if let Some(caps) = go_import_spec().captures(spec) {
                        imports.push(Import {
                            path: caps[2].to_string(),
                            alias: caps.get(1).map(|m| m.as_str().to_string()),
                            line: number,
                        });
                    }
                }
            }
            Language::Kotlin => {
                if let Some(caps) = kotlin_package().captures(line) {
                    packages.push(Declaration {
                        name: caps[1].to_string(),
                        line: number,
                    });
                } else if let Some(caps) = kotlin_import().captures(line) {
                    imports.push(Import {
                        path: caps[1].to_string(),
                        alias: caps.get(2).map(|m| m.as_str().to_string()),
                        line: number,
                    });
                }
            }
            Language::Java => {
                if let Some(caps) = java_package().captures(line) {
                    packages.push(Declaration {
                        name: caps[1].to_string(),
                        line: number,
                    });
                } else if let Some(caps) = java_import().captures(line) {
                    imports.push(Import {
                        path: caps[1].to_string(),
                        alias: None,
                        line: number,
                    });
                }
            }
            Language::Php => {
                if let Some(caps) = php_namespace().captures(line) {
                    packages.push(Declaration {
                        name: caps[1].to_string(),
                        line: number,
                    });
                } else if let Some(caps) = php_use().captures(line) {
                    imports.push(Import {
                        path: caps[1].trim_start_matches('\\').to_string(),
                        alias: caps.get(2).map(|m| m.as_str().to_string()),
                        line: number,
                    });
                }
            }
            Language::Python => {
                if let Some(caps) = py_from_import().captures(line) {
                    imports.push(Import {
                        path: caps[1].to_string(),
                        alias: None,
                        line: number,
                    });
                } else if let Some(caps) = py_import().captures(line) {
                    for item in caps[1].split(',') {
                        let mut parts = item.split_whitespace();
                        let path = parts.next().unwrap_or_default().to_string();
                        let alias = match (parts.next(), parts.next()) {
                            (Some("as"), Some(alias)) => Some(alias.to_string()),
                            _ => None,
                        };
                        imports.push(Import {
                            path,
                            alias,
                            line: number,
                        });
                    }
                }
            }
            Language::C | Language::Cpp => {
                if let Some(caps) = c_include().captures(line) {
                    imports.push(Import {
                        path: caps[1].to_string(),
                        alias: None,
                        line: number,
                    });
                }
            }
            // Rust has no package clause; `use` items are its imports
            Language::Rust => {
                if let Some(caps) = rust_use().captures(line) {
                    imports.push(Import {
                        path: caps[1].trim().to_string(),
                        alias: caps.get(2).map(|m| m.as_str().to_string()),
                        line: number,
                    });
                }
            }
            Language::Shell | Language::Unknown => {}
        }
    }

    (packages, imports)
}
