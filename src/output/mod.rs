// src/output/mod.rs
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::utils::error::OutputError;

/// Where the extracted value ends up.
#[derive(Debug)]
pub enum OutputTarget {
    /// Print the value to stdout (no output path given).
    Stdout,
    /// Append `<key><<'__EOF__' ... __EOF__` to a workflow output file.
    Workflow { path: PathBuf, key: String },
    /// Write the value as the file's entire contents.
    File(PathBuf),
}

impl OutputTarget {
    /// Writes the extracted value to the target, creating parent
    /// directories as needed.
    pub fn write(&self, value: &str) -> Result<(), OutputError> {
        match self {
            Self::Stdout => {
                println!("{value}");
                Ok(())
            }
            Self::Workflow { path, key } => {
                ensure_parent_dir(path)?;

                // Append so earlier workflow outputs in the same file survive.
                let mut file = fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)?;
                write!(file, "{key}<<'__EOF__'\n{value}\n__EOF__\n")?;

                tracing::info!("Appended output key '{}' to {}", key, path.display());
                Ok(())
            }
            Self::File(path) => {
                ensure_parent_dir(path)?;
                fs::write(path, value)?;

                tracing::info!("Wrote output to {}", path.display());
                Ok(())
            }
        }
    }
}

fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_output_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");

        let target = OutputTarget::Workflow {
            path: path.clone(),
            key: "body".to_string(),
        };
        target.write("Fixed bug.").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "body<<'__EOF__'\nFixed bug.\n__EOF__\n");
    }

    #[test]
    fn test_workflow_output_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");
        fs::write(&path, "tag=v1.2.3\n").unwrap();

        let target = OutputTarget::Workflow {
            path: path.clone(),
            key: "body".to_string(),
        };
        target.write("Notes.").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "tag=v1.2.3\nbody<<'__EOF__'\nNotes.\n__EOF__\n");
    }

    #[test]
    fn test_workflow_output_with_empty_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");

        let target = OutputTarget::Workflow {
            path: path.clone(),
            key: "body".to_string(),
        };
        target.write("").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "body<<'__EOF__'\n\n__EOF__\n");
    }

    #[test]
    fn test_plain_file_write_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "stale contents").unwrap();

        OutputTarget::File(path.clone()).write("Fresh notes.").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Fresh notes.");
    }

    #[test]
    fn test_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/output.txt");

        let target = OutputTarget::Workflow {
            path: path.clone(),
            key: "body".to_string(),
        };
        target.write("Notes.").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_plain_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("release/notes.md");

        OutputTarget::File(path.clone()).write("Notes.").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Notes.");
    }
}
