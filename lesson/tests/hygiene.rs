//! Source hygiene for the lesson crate.
//!
//! Library code propagates errors and never panics. Each antipattern below
//! has a budget of zero in `src/`; `*_test.rs` files are exempt.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
}

const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0 };
const EXPECT: Budget = Budget { pattern: ".expect(", max: 0 };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0 };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0 };
const TODO: Budget = Budget { pattern: "todo!(", max: 0 };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0 };
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 0 };
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 0 };
const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0 };

fn library_sources(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            library_sources(&path, out);
            continue;
        }
        let is_rust = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rust && !is_test {
            if let Ok(text) = fs::read_to_string(&path) {
                out.push((path, text));
            }
        }
    }
}

fn check(budget: &Budget) {
    let mut files = Vec::new();
    library_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let hits: Vec<(String, usize)> = files
        .iter()
        .map(|(path, text)| (path.display().to_string(), text.lines().filter(|l| l.contains(budget.pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect();
    let found: usize = hits.iter().map(|(_, n)| n).sum();
    let listing: Vec<String> = hits.iter().map(|(path, n)| format!("  {path}: {n}")).collect();
    assert!(
        found <= budget.max,
        "`{}` budget exceeded: found {found}, max {}.\n{}",
        budget.pattern,
        budget.max,
        listing.join("\n")
    );
}

#[test]
fn no_unwrap() {
    check(&UNWRAP);
}

#[test]
fn no_expect() {
    check(&EXPECT);
}

#[test]
fn no_panic() {
    check(&PANIC);
}

#[test]
fn no_unreachable() {
    check(&UNREACHABLE);
}

#[test]
fn no_todo() {
    check(&TODO);
}

#[test]
fn no_unimplemented() {
    check(&UNIMPLEMENTED);
}

#[test]
fn no_silent_discard() {
    check(&SILENT_DISCARD);
}

#[test]
fn no_dot_ok() {
    check(&DOT_OK);
}

#[test]
fn no_allow_dead_code() {
    check(&ALLOW_DEAD_CODE);
}
