// src/main.rs
mod extractors;
mod output;
mod utils;

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use extractors::SectionExtractor;
use output::OutputTarget;
use utils::AppError;

/// Extract one version's release notes from a Markdown changelog
#[derive(Parser, Debug)]
#[command(author, about, long_about = None, disable_version_flag = true)]
struct Args {
    /// Release tag or version (e.g. v1.2.3 or 1.2.3)
    #[arg(short = 'v', long)]
    version: String,

    /// Path to the changelog file
    #[arg(short, long, default_value = "CHANGELOG.md")]
    changelog: PathBuf,

    /// Workflow output file to append to; prints to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Key name used in the workflow output format
    #[arg(short, long, default_value = "body")]
    key: String,

    /// Write the value as the output file's entire contents instead of
    /// the workflow append format
    #[arg(long)]
    plain: bool,

    /// What to emit when no matching section is found
    #[arg(long, value_enum, default_value = "empty")]
    fallback: FallbackPolicy,

    /// Fail when the changelog file is missing instead of emitting the fallback
    #[arg(long)]
    strict: bool,
}

/// Text emitted when the changelog has no section for the requested version.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum FallbackPolicy {
    /// An empty string
    Empty,
    /// The tag plus a pointer at the changelog file
    Placeholder,
}

impl FallbackPolicy {
    fn render(self, tag: &str) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Placeholder => format!("{tag}\n\nSee CHANGELOG.md for details."),
        }
    }
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!(
        "Extracting release notes for '{}' from {}",
        args.version,
        args.changelog.display()
    );

    // 3. Read the changelog
    let document = read_changelog(&args)?;

    // 4. Extract the section, falling back per policy when absent
    let extractor = SectionExtractor::new();
    let value = match extractor.extract(&document, &args.version)? {
        Some(notes) => {
            tracing::info!(
                "Found section for version {} ({} bytes)",
                notes.version,
                notes.body.len()
            );
            notes.body
        }
        None => {
            tracing::warn!(
                "No changelog section found for '{}', using {:?} fallback",
                args.version,
                args.fallback
            );
            args.fallback.render(args.version.trim())
        }
    };

    // 5. Write the value to the chosen destination
    let target = match args.output {
        Some(path) if args.plain => OutputTarget::File(path),
        Some(path) => OutputTarget::Workflow { path, key: args.key },
        None => OutputTarget::Stdout,
    };
    target.write(&value)?;

    Ok(())
}

/// Reads the changelog file. A missing file is an empty document unless
/// `--strict` was given, in which case it is a fatal configuration error.
fn read_changelog(args: &Args) -> Result<String, AppError> {
    match fs::read_to_string(&args.changelog) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if args.strict {
                return Err(AppError::Config(format!(
                    "Changelog file not found: {}",
                    args.changelog.display()
                )));
            }
            tracing::warn!(
                "Changelog file not found: {}, treating as empty",
                args.changelog.display()
            );
            Ok(String::new())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fallback_renders_empty_string() {
        assert_eq!(FallbackPolicy::Empty.render("v1.0.0"), "");
    }

    #[test]
    fn test_placeholder_fallback_includes_tag() {
        assert_eq!(
            FallbackPolicy::Placeholder.render("v1.0.0"),
            "v1.0.0\n\nSee CHANGELOG.md for details."
        );
    }

    #[test]
    fn test_missing_changelog_is_empty_by_default() {
        let args = Args::parse_from([
            "changelog_extractor",
            "--version",
            "v1.0.0",
            "--changelog",
            "does/not/exist/CHANGELOG.md",
        ]);
        let document = read_changelog(&args).unwrap();
        assert_eq!(document, "");
    }

    #[test]
    fn test_missing_changelog_is_fatal_in_strict_mode() {
        let args = Args::parse_from([
            "changelog_extractor",
            "--version",
            "v1.0.0",
            "--changelog",
            "does/not/exist/CHANGELOG.md",
            "--strict",
        ]);
        assert!(matches!(read_changelog(&args), Err(AppError::Config(_))));
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["changelog_extractor", "--version", "1.2.3"]);
        assert_eq!(args.changelog, PathBuf::from("CHANGELOG.md"));
        assert_eq!(args.key, "body");
        assert!(args.output.is_none());
        assert!(!args.plain);
        assert!(!args.strict);
    }
}
