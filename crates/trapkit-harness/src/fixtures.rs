//! Fixture specs and manifest loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use trapkit_core::Verdict;

use crate::error::HarnessError;

/// Outcome a fixture is expected to produce.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// Clean exit with status 0.
    #[default]
    GoodTrap,
    /// A failed check, through either trap channel.
    BadTrap,
}

impl Expectation {
    /// Whether `verdict` satisfies this expectation.
    #[must_use]
    pub const fn matches(self, verdict: Verdict) -> bool {
        match self {
            Self::GoodTrap => verdict.passed(),
            Self::BadTrap => verdict.trapped(),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GoodTrap => "good_trap",
            Self::BadTrap => "bad_trap",
        }
    }
}

/// A single fixture executable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureSpec {
    /// Display name.
    pub name: String,
    /// Executable path.
    pub path: PathBuf,
    /// Expected outcome.
    #[serde(default)]
    pub expect: Expectation,
}

impl FixtureSpec {
    /// Build a spec named after the executable's file stem.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, expect: Expectation) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path, expect }
    }

    /// Parse the inline CLI form `PATH`, `PATH=good` or `PATH=bad`.
    pub fn parse_inline(raw: &str) -> Result<Self, HarnessError> {
        let raw = raw.trim();
        let (path, expect) = match raw.rsplit_once('=') {
            Some((path, "good")) => (path, Expectation::GoodTrap),
            Some((path, "bad")) => (path, Expectation::BadTrap),
            _ => (raw, Expectation::GoodTrap),
        };
        if path.is_empty() {
            return Err(HarnessError::InvalidSpec(raw.to_string()));
        }
        Ok(Self::new(path, expect))
    }
}

/// A list of fixtures to run, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureManifest {
    /// Schema version.
    pub version: String,
    /// Fixtures, run in the listed order.
    pub fixtures: Vec<FixtureSpec>,
}

impl FixtureManifest {
    /// Load manifest from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize manifest to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a manifest file. Relative fixture paths resolve against the
    /// manifest's directory.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        let mut manifest = Self::from_json(&content)?;
        if let Some(base) = path.parent() {
            for fixture in &mut manifest.fixtures {
                if fixture.path.is_relative() {
                    fixture.path = base.join(&fixture.path);
                }
            }
        }
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_spec_defaults_to_good_trap() {
        let spec = FixtureSpec::parse_inline("target/debug/ackermann").unwrap();
        assert_eq!(spec.name, "ackermann");
        assert_eq!(spec.path, PathBuf::from("target/debug/ackermann"));
        assert_eq!(spec.expect, Expectation::GoodTrap);
    }

    #[test]
    fn inline_spec_reads_expectation_suffix() {
        let bad = FixtureSpec::parse_inline("bin/ackermann-bad-base=bad").unwrap();
        assert_eq!(bad.expect, Expectation::BadTrap);
        assert_eq!(bad.name, "ackermann-bad-base");

        let good = FixtureSpec::parse_inline("bin/shift=good").unwrap();
        assert_eq!(good.expect, Expectation::GoodTrap);
        assert_eq!(good.path, PathBuf::from("bin/shift"));
    }

    #[test]
    fn inline_spec_keeps_unrecognized_equals_in_path() {
        let spec = FixtureSpec::parse_inline("dir/a=b").unwrap();
        assert_eq!(spec.path, PathBuf::from("dir/a=b"));
        assert_eq!(spec.expect, Expectation::GoodTrap);
    }

    #[test]
    fn inline_spec_rejects_empty_path() {
        assert!(matches!(
            FixtureSpec::parse_inline("=bad"),
            Err(HarnessError::InvalidSpec(_))
        ));
        assert!(FixtureSpec::parse_inline("  ").is_err());
    }

    #[test]
    fn expectation_matches_verdicts() {
        assert!(Expectation::GoodTrap.matches(Verdict::GoodTrap));
        assert!(!Expectation::GoodTrap.matches(Verdict::BadTrap));
        assert!(Expectation::BadTrap.matches(Verdict::BadTrap));
        assert!(Expectation::BadTrap.matches(Verdict::Aborted));
        assert!(!Expectation::BadTrap.matches(Verdict::Signaled(11)));
        assert!(!Expectation::BadTrap.matches(Verdict::UnexpectedStatus(2)));
        assert!(!Expectation::BadTrap.matches(Verdict::GoodTrap));
        assert!(!Expectation::BadTrap.matches(Verdict::Unknown));
    }

    #[test]
    fn manifest_parses_with_default_expectation() {
        let manifest = FixtureManifest::from_json(
            r#"{
                "version":"v1",
                "fixtures":[
                    {"name":"ackermann","path":"bin/ackermann"},
                    {"name":"broken","path":"bin/ackermann-bad-base","expect":"bad_trap"}
                ]
            }"#,
        )
        .expect("valid manifest json");
        assert_eq!(manifest.fixtures.len(), 2);
        assert_eq!(manifest.fixtures[0].expect, Expectation::GoodTrap);
        assert_eq!(manifest.fixtures[1].expect, Expectation::BadTrap);

        let again = FixtureManifest::from_json(&manifest.to_json().unwrap()).unwrap();
        assert_eq!(again.fixtures, manifest.fixtures);
    }

    #[cfg(unix)]
    #[test]
    fn manifest_file_resolves_relative_paths() {
        let dir = std::env::temp_dir().join(format!("trapkit-manifest-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("fixtures.json");
        std::fs::write(
            &path,
            r#"{"version":"v1","fixtures":[
                {"name":"rel","path":"bin/shift"},
                {"name":"abs","path":"/opt/fixtures/dummy"}
            ]}"#,
        )
        .unwrap();

        let manifest = FixtureManifest::from_file(&path).unwrap();
        assert_eq!(manifest.fixtures[0].path, dir.join("bin/shift"));
        assert_eq!(manifest.fixtures[1].path, PathBuf::from("/opt/fixtures/dummy"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn manifest_rejects_unknown_expectation() {
        let err = FixtureManifest::from_json(
            r#"{"version":"v1","fixtures":[{"name":"x","path":"x","expect":"maybe"}]}"#,
        );
        assert!(err.is_err());
    }
}
