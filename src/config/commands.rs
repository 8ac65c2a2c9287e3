// src/config/commands.rs

use std::fmt;

/// A program plus its arguments. Run directly, never through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Which commands the fetchers run.
///
/// Production always uses [`FetchConfig::default`]; tests point the
/// fetchers at scripted commands instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Lists every installed locale, one per line.
    pub list_command: CommandSpec,
    /// Prints the active `KEY=VALUE` locale settings.
    pub detail_command: CommandSpec,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            list_command: CommandSpec::new("localectl").arg("list-locales"),
            detail_command: CommandSpec::new("locale"),
        }
    }
}
