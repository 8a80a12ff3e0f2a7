//! Feature matrix runner
//!
//! This module provides the `feature-matrix` subcommand, which runs the test
//! suite once per supported feature combination so that every `cfg(feature)`
//! branch is compiled and tested.

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::Command;

/// One feature combination of the `railway` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSet {
    /// Short name used on the command line and in the report
    pub name: &'static str,
    /// Features passed to `--features`; empty means none
    pub features: &'static [&'static str],
    /// Whether the default features stay enabled
    pub default_features: bool,
}

/// Every combination the crate is expected to build and pass under.
pub const FEATURE_SETS: &[FeatureSet] = &[
    FeatureSet { name: "minimal", features: &[], default_features: false },
    FeatureSet { name: "default", features: &[], default_features: true },
    FeatureSet { name: "serde", features: &["serde"], default_features: false },
    FeatureSet { name: "async-tracing", features: &["async", "tracing"], default_features: false },
    FeatureSet { name: "full", features: &["full"], default_features: false },
];

/// Cargo subcommand to run for each combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Check {
    /// `cargo test`
    Test,
    /// `cargo clippy --all-targets -- -D warnings`
    Clippy,
    /// `cargo doc --no-deps`
    Doc,
}

/// Arguments for the feature-matrix subcommand
#[derive(Args, Debug)]
pub struct FeatureMatrixArgs {
    /// Which cargo subcommand to run
    #[arg(long, value_enum, default_value = "test")]
    pub check: Check,

    /// Only run the named feature sets (repeatable)
    #[arg(long = "only", short = 'o')]
    pub only: Vec<String>,

    /// Print the commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Keep going after a failing combination
    #[arg(long)]
    pub keep_going: bool,
}

impl FeatureSet {
    /// Builds the cargo arguments for this combination.
    pub fn cargo_args(&self, check: Check) -> Vec<String> {
        let mut arguments: Vec<String> = match check {
            Check::Test => vec!["test".into(), "--package".into(), "railway".into()],
            Check::Clippy => vec!["clippy".into(), "--package".into(), "railway".into(), "--all-targets".into()],
            Check::Doc => vec!["doc".into(), "--package".into(), "railway".into(), "--no-deps".into()],
        };

        if !self.default_features {
            arguments.push("--no-default-features".into());
        }
        if !self.features.is_empty() {
            arguments.push("--features".into());
            arguments.push(self.features.join(","));
        }
        if check == Check::Clippy {
            arguments.extend(["--".into(), "-D".into(), "warnings".into()]);
        }

        arguments
    }
}

/// Resolves `--only` names against the known sets, rejecting unknown names.
pub fn select<'a>(sets: &'a [FeatureSet], only: &[String]) -> Result<Vec<&'a FeatureSet>> {
    if only.is_empty() {
        return Ok(sets.iter().collect());
    }

    only.iter()
        .map(|name| {
            sets.iter()
                .find(|set| set.name == name)
                .with_context(|| format!("Unknown feature set: {name}"))
        })
        .collect()
}

/// Run the feature-matrix subcommand
pub fn run(args: FeatureMatrixArgs) -> Result<()> {
    let workspace = workspace_root()?;
    let selected = select(FEATURE_SETS, &args.only)?;
    let mut failures = Vec::new();

    for set in selected {
        let arguments = set.cargo_args(args.check);
        println!("==> [{}] cargo {}", set.name, arguments.join(" "));

        if args.dry_run {
            continue;
        }

        let status = Command::new(cargo())
            .args(&arguments)
            .current_dir(&workspace)
            .status()
            .with_context(|| format!("Failed to run cargo for feature set {}", set.name))?;

        if !status.success() {
            if !args.keep_going {
                bail!("Feature set {} failed", set.name);
            }
            failures.push(set.name);
        }
    }

    if !failures.is_empty() {
        bail!("Feature sets failed: {}", failures.join(", "));
    }

    println!("==> feature matrix passed");
    Ok(())
}

fn cargo() -> String {
    std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string())
}

fn workspace_root() -> Result<PathBuf> {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR is not set")?;
    Path::new(&manifest_dir)
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_set_disables_defaults() {
        let arguments = FEATURE_SETS[0].cargo_args(Check::Test);
        assert_eq!(arguments, vec!["test", "--package", "railway", "--no-default-features"]);
    }

    #[test]
    fn clippy_denies_warnings() {
        let full = FEATURE_SETS.iter().find(|set| set.name == "full").unwrap();
        let arguments = full.cargo_args(Check::Clippy);
        assert_eq!(arguments[arguments.len() - 3..], ["--", "-D", "warnings"]);
        assert!(arguments.contains(&"full".to_string()));
    }

    #[test]
    fn select_rejects_unknown_names() {
        assert!(select(FEATURE_SETS, &["nope".to_string()]).is_err());
        assert_eq!(select(FEATURE_SETS, &["serde".to_string()]).unwrap().len(), 1);
        assert_eq!(select(FEATURE_SETS, &[]).unwrap().len(), FEATURE_SETS.len());
    }
}
