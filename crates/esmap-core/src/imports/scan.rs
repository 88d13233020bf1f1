//! Import specifier scanner.
//!
//! Scans source text for the textual shape of ES import declarations
//! without parsing. Each supported form has its own pattern; at every
//! search position the leftmost match across all forms wins and the scan
//! resumes after it.

use regex_lite::Regex;
use std::sync::OnceLock;
use tracing::trace;

/// Whitespace tolerated between tokens.
const WS: &str = r"[ \t\r\n]";

/// A default or namespace binding: anything up to whitespace or punctuation.
const BINDING: &str = r#"[^ \t\r\n*{},;'"]+"#;

/// A brace-delimited named import list. Contents are skipped, not parsed.
const NAMED: &str = r#"\{[^{}'"]*\}"#;

/// A quoted specifier. Opening and closing quotes must agree.
const QUOTED: &str = r#"(?:'(?P<single>[^'\r\n]*)'|"(?P<double>[^"\r\n]*)")"#;

/// Syntactic form of an import declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportForm {
    /// `import x from 's'`
    Default,
    /// `import { a, b } from 's'`
    Named,
    /// `import x, { a } from 's'`
    DefaultAndNamed,
    /// `import * as x from 's'`
    Namespace,
    /// `import 's';`
    SideEffect,
}

impl ImportForm {
    /// All forms, in the order ties are broken.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::Named,
        Self::DefaultAndNamed,
        Self::Namespace,
        Self::SideEffect,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Named => "named",
            Self::DefaultAndNamed => "default_and_named",
            Self::Namespace => "namespace",
            Self::SideEffect => "side_effect",
        }
    }

    fn pattern(self) -> String {
        match self {
            Self::Default => {
                format!(r"\bimport{WS}+{BINDING}{WS}+from{WS}*{QUOTED}")
            }
            Self::Named => format!(r"\bimport{WS}*{NAMED}{WS}*from{WS}*{QUOTED}"),
            Self::DefaultAndNamed => {
                format!(r"\bimport{WS}+{BINDING}{WS}*,{WS}*{NAMED}{WS}*from{WS}*{QUOTED}")
            }
            Self::Namespace => {
                format!(r"\bimport{WS}*\*{WS}*as{WS}+{BINDING}{WS}+from{WS}*{QUOTED}")
            }
            Self::SideEffect => format!(r"\bimport{WS}*{QUOTED}(?:{WS}*;)?"),
        }
    }
}

/// An import declaration found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedImport {
    /// Specifier exactly as written between the quotes.
    pub specifier: String,
    /// Which declaration form matched.
    pub form: ImportForm,
    /// Byte offset of the `import` keyword.
    pub offset: usize,
}

struct FormPattern {
    form: ImportForm,
    regex: Regex,
}

#[derive(Clone, Copy)]
struct Candidate<'h> {
    form: ImportForm,
    start: usize,
    end: usize,
    specifier: &'h str,
}

impl FormPattern {
    fn find_from<'h>(&self, source: &'h str, pos: usize) -> Option<Candidate<'h>> {
        let caps = self.regex.captures_at(source, pos)?;
        let whole = caps.get(0)?;
        let specifier = caps
            .name("single")
            .or_else(|| caps.name("double"))
            .map_or("", |m| m.as_str());

        Some(Candidate {
            form: self.form,
            start: whole.start(),
            end: whole.end(),
            specifier,
        })
    }
}

fn patterns() -> &'static [FormPattern] {
    static PATTERNS: OnceLock<Vec<FormPattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        ImportForm::ALL
            .iter()
            .filter_map(|&form| {
                Regex::new(&form.pattern())
                    .ok()
                    .map(|regex| FormPattern { form, regex })
            })
            .collect()
    })
}

/// Scan source text for import declarations.
///
/// Returns every non-overlapping match in order of appearance. Duplicates
/// are kept; empty specifiers are dropped. Never fails.
#[must_use]
pub fn scan_specifiers(source: &str) -> Vec<ScannedImport> {
    let patterns = patterns();
    let mut pending: Vec<Option<Candidate<'_>>> =
        patterns.iter().map(|p| p.find_from(source, 0)).collect();
    let mut results = Vec::new();
    let mut pos = 0;

    loop {
        // A candidate that starts before `pos` overlaps the last match.
        for (slot, pattern) in pending.iter_mut().zip(patterns) {
            if matches!(slot, Some(c) if c.start < pos) {
                *slot = pattern.find_from(source, pos);
            }
        }

        let Some(best) = pending.iter().flatten().min_by_key(|c| c.start).copied() else {
            break;
        };
        pos = best.end;

        if best.specifier.is_empty() {
            trace!(offset = best.start, form = best.form.as_str(), "skipping empty specifier");
            continue;
        }

        trace!(
            offset = best.start,
            form = best.form.as_str(),
            specifier = best.specifier,
            "matched import"
        );
        results.push(ScannedImport {
            specifier: best.specifier.to_string(),
            form: best.form,
            offset: best.start,
        });
    }

    results
}
