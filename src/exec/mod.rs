//! External command abstraction layer
//!
//! The workflow never spawns processes directly; it goes through the
//! [CommandRunner] trait so tests can substitute a recording fake.
//!
//! - [process::ProcessRunner]: real implementation via `std::process::Command`
//! - [mock::MockRunner]: recording implementation for tests

pub mod mock;
pub mod process;

pub use mock::MockRunner;
pub use process::ProcessRunner;

use crate::error::{Result, VersionBumpError};

/// Captured output of a successfully finished external command.
///
/// Carries no exit code: a non-zero exit is reported as an error by the
/// runner, so an output only ever exists for exit code 0.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Capability for running external commands.
///
/// Implementations run the command to completion and return its captured
/// output. A command that exits non-zero is an error, not an output; the
/// workflow treats any command failure as fatal.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, waiting for completion.
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput>;
}

/// Renders the bump command template into a program and argument list.
///
/// `@OLD_VERSION@` and `@NEW_VERSION@` are substituted, then the rendered
/// string is split on whitespace. There is no shell-quoting support:
/// arguments containing spaces cannot be expressed through the template.
///
/// # Returns
/// * `Ok((program, args))` - Program name and remaining arguments
/// * `Err` - If the rendered template is empty
pub fn render_bump_command(
    template: &str,
    old_version: &str,
    new_version: &str,
) -> Result<(String, Vec<String>)> {
    let rendered = template
        .replace("@OLD_VERSION@", old_version)
        .replace("@NEW_VERSION@", new_version);

    let mut parts = rendered.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| VersionBumpError::command("Bump command template is empty"))?
        .to_string();
    let args = parts.map(str::to_string).collect();

    Ok((program, args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_both_placeholders() {
        let (program, args) =
            render_bump_command("tool set --from @OLD_VERSION@ --to @NEW_VERSION@", "1.0.0", "1.1.0")
                .unwrap();
        assert_eq!(program, "tool");
        assert_eq!(args, vec!["set", "--from", "1.0.0", "--to", "1.1.0"]);
    }

    #[test]
    fn test_render_default_maven_template() {
        let template = "mvn org.codehaus.mojo:versions-maven-plugin:set -DnewVersion=@NEW_VERSION@";
        let (program, args) = render_bump_command(template, "1.0.0", "2.0.0").unwrap();
        assert_eq!(program, "mvn");
        assert_eq!(
            args,
            vec![
                "org.codehaus.mojo:versions-maven-plugin:set",
                "-DnewVersion=2.0.0"
            ]
        );
    }

    #[test]
    fn test_render_collapses_whitespace() {
        let (program, args) = render_bump_command("cmd   a  b", "1.0.0", "1.0.1").unwrap();
        assert_eq!(program, "cmd");
        assert_eq!(args, vec!["a", "b"]);
    }

    #[test]
    fn test_render_empty_template_fails() {
        assert!(render_bump_command("   ", "1.0.0", "1.0.1").is_err());
    }
}
