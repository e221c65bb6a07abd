//! Hygiene: source rules checked at test time
//!
//! Scans production files under `src/` (not `*_test.rs`, not the scripted test
//! provider). Budgets only ever shrink. The session rules keep the three-way
//! access guard the single place that interprets sign-in state.

use std::fs;
use std::path::Path;

/// (pattern, budget, what goes wrong)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "aborts the WASM instance"),
    (".expect(", 0, "aborts the WASM instance"),
    ("panic!(", 0, "aborts the WASM instance"),
    ("unreachable!(", 0, "aborts the WASM instance"),
    ("todo!(", 0, "aborts the WASM instance"),
    ("unimplemented!(", 0, "aborts the WASM instance"),
    ("let _ =", 0, "drops a result without looking at it"),
    (".ok()", 0, "drops an error without logging it"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

/// Files allowed to interpret `Session` directly.
const SESSION_OWNERS: &[&str] = &["src/state/auth.rs", "src/util/auth.rs", "src/components/protected_route.rs"];

/// Browser-only crates that must sit behind the `csr` feature.
const BROWSER_PATHS: &[&str] = &["web_sys::", "js_sys::", "gloo_net::", "gloo_timers::"];

struct SourceFile {
    path: String,
    content: String,
}

impl SourceFile {
    /// `(line number, line)` for every line containing `pattern`.
    fn hits<'a>(&'a self, pattern: &'a str) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        self.content
            .lines()
            .enumerate()
            .filter(move |(_, line)| line.contains(pattern))
            .map(|(index, line)| (index + 1, line.trim()))
    }

    fn is_one_of(&self, paths: &[&str]) -> bool {
        paths.iter().any(|path| self.path.replace('\\', "/") == *path)
    }
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        let production = name.ends_with(".rs") && !name.ends_with("_test.rs") && !name.ends_with("test_support.rs");
        if !production {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: name, content });
        }
    }
}

fn report(hits: &[String]) -> String {
    hits.iter().map(|hit| format!("  {hit}")).collect::<Vec<_>>().join("\n")
}

#[test]
fn scan_finds_sources() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
    assert!(!files.iter().any(|f| f.path.ends_with("_test.rs")));
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let hits: Vec<String> = files
            .iter()
            .flat_map(|file| file.hits(pattern).map(move |(line, text)| format!("{}:{line}: {text}", file.path)))
            .collect();
        if hits.len() > *budget {
            failures.push(format!("`{pattern}` {why}: found {}, max {budget}\n{}", hits.len(), report(&hits)));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n\n"));
}

/// A branch on `Unauthenticated` that ignores `Initializing` would treat a
/// session still being restored as signed out.
#[test]
fn session_branches_cover_initializing() {
    let offenders: Vec<String> = source_files()
        .iter()
        .filter(|file| file.content.contains("Session::Unauthenticated"))
        .filter(|file| !file.content.contains("Session::Initializing"))
        .map(|file| file.path.clone())
        .collect();
    assert!(offenders.is_empty(), "two-way session branches:\n{}", report(&offenders));
}

/// Absence of an identity is not "signed out" while the session initializes.
#[test]
fn identity_absence_is_not_checked_outside_the_store() {
    let mut hits = Vec::new();
    for file in source_files().iter().filter(|file| !file.is_one_of(SESSION_OWNERS)) {
        for pattern in [".identity().is_none()", ".identity().is_some()"] {
            hits.extend(file.hits(pattern).map(|(line, text)| format!("{}:{line}: {text}", file.path)));
        }
    }
    assert!(hits.is_empty(), "identity presence used as an auth check:\n{}", report(&hits));
}

#[test]
fn guard_decision_stays_in_the_guard() {
    let allowed = ["src/util/auth.rs", "src/components/protected_route.rs"];
    let offenders: Vec<String> = source_files()
        .iter()
        .filter(|file| file.content.contains("guard_decision") && !file.is_one_of(&allowed))
        .map(|file| file.path.clone())
        .collect();
    assert!(offenders.is_empty(), "routes must go through ProtectedRoute:\n{}", report(&offenders));
}

/// Native builds run the unit tests, so browser calls need a `csr` gate.
#[test]
fn browser_calls_are_feature_gated() {
    let offenders: Vec<String> = source_files()
        .iter()
        .filter(|file| BROWSER_PATHS.iter().any(|path| file.content.contains(path)))
        .filter(|file| !file.content.contains("feature = \"csr\""))
        .map(|file| file.path.clone())
        .collect();
    assert!(offenders.is_empty(), "browser APIs without a csr gate:\n{}", report(&offenders));
}
