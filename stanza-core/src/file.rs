use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::{Error, Result};

/// Build the banner placed at the top of every generated file.
pub fn banner(date: NaiveDate) -> String {
    format!(
        "/// Generated code by stanza on {} - DO NOT EDIT!",
        date.format("%m/%d/%Y")
    )
}

/// Banner stamped with today's local date.
pub fn banner_today() -> String {
    banner(Local::now().date_naive())
}

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file body, without the header
    fn render(&self) -> String;

    /// Render the file body with the header from [`FileRules`] prepended
    fn contents(&self) -> String {
        with_header(self.rules().header.as_deref(), &self.render())
    }

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let rules = self.rules();

        match rules.overwrite {
            Overwrite::Always => {
                write_file(&path, &self.contents())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    tracing::debug!("Skipping existing file {}", path.display());
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.contents())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn with_header(header: Option<&str>, body: &str) -> String {
    match header {
        Some(header) => format!("{}\n\n{}", header, body),
        None => body.to_string(),
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| Error::io(path, e))?;
    tracing::debug!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
    /// Line placed above the body, followed by a blank line
    pub header: Option<String>,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist (stubs)
    IfMissing,
}
