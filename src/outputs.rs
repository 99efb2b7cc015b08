use crate::error::Result;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// GitHub Actions step output writer.
///
/// Appends `name=value` lines to the file named by `GITHUB_OUTPUT` when the
/// runtime provides one, and falls back to the legacy `::set-output` stdout
/// command otherwise.
pub struct ActionOutputs {
    path: Option<PathBuf>,
}

impl ActionOutputs {
    /// Build from the `GITHUB_OUTPUT` environment variable.
    pub fn from_env() -> Self {
        ActionOutputs {
            path: env::var_os("GITHUB_OUTPUT").map(PathBuf::from),
        }
    }

    /// Build with an explicit outputs file (or None for stdout fallback).
    pub fn new(path: Option<PathBuf>) -> Self {
        ActionOutputs { path }
    }

    /// Emit a named output.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        match &self.path {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{}={}", name, value)?;
            }
            None => {
                println!("::set-output name={}::{}", name, value);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_appends_to_outputs_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outputs");

        let mut outputs = ActionOutputs::new(Some(path.clone()));
        outputs.set("bumped", "true").unwrap();
        outputs.set("tag", "v1.1.0").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "bumped=true\ntag=v1.1.0\n");
    }

    #[test]
    fn test_stdout_fallback_does_not_fail() {
        let mut outputs = ActionOutputs::new(None);
        outputs.set("bumped", "false").unwrap();
    }
}
