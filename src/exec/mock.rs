use crate::error::{Result, VersionBumpError};
use crate::exec::{CommandOutput, CommandRunner};
use std::sync::Mutex;

/// A single recorded command invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Render as a single command line for easy assertions.
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Mock runner for testing without spawning real processes.
///
/// Records every invocation in order. Individual programs can be scripted
/// to fail with a given message.
pub struct MockRunner {
    invocations: Mutex<Vec<Invocation>>,
    failures: Mutex<Vec<(String, String)>>,
}

impl MockRunner {
    /// Create a new mock runner where every command succeeds.
    pub fn new() -> Self {
        MockRunner {
            invocations: Mutex::new(Vec::new()),
            failures: Mutex::new(Vec::new()),
        }
    }

    /// Script the named program to fail with the given message.
    pub fn fail_on(&self, program: impl Into<String>, message: impl Into<String>) {
        self.failures
            .lock()
            .unwrap()
            .push((program.into(), message.into()));
    }

    /// All invocations recorded so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// All recorded invocations rendered as command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations()
            .iter()
            .map(Invocation::command_line)
            .collect()
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        self.invocations.lock().unwrap().push(Invocation {
            program: program.to_string(),
            args: args.to_vec(),
        });

        let failures = self.failures.lock().unwrap();
        if let Some((_, message)) = failures.iter().find(|(p, _)| p == program) {
            return Err(VersionBumpError::command(message.clone()));
        }

        Ok(CommandOutput {
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}
