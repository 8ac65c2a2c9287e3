use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use get_locale::config::CommandSpec;
use get_locale::exec::{CommandOutput, CommandRunner, RunFuture};

/// What the fake does when a program is run.
#[derive(Debug, Clone)]
enum Script {
    Output(CommandOutput),
    SpawnError(io::ErrorKind),
}

/// One entry in the runner's shared start/finish log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    Started(String),
    Finished(String),
}

#[derive(Debug, Clone)]
struct Entry {
    script: Script,
    delay: Duration,
}

/// A fake runner that:
/// - returns canned output per program name
/// - optionally sleeps before answering, to control completion order
/// - records starts and finishes of every command in one ordered log.
///
/// Programs without a script behave like a missing binary.
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    scripts: HashMap<String, Entry>,
    events: Arc<Mutex<Vec<RunEvent>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Program exits 0 with `stdout`.
    pub fn with_stdout(self, program: &str, stdout: impl Into<Vec<u8>>) -> Self {
        self.with_output(program, CommandOutput::success(stdout))
    }

    /// Program exits with `code` and writes `stderr`.
    pub fn with_exit_code(self, program: &str, code: i32, stderr: &str) -> Self {
        self.with_output(program, CommandOutput::failure(code, stderr))
    }

    /// Program cannot be spawned.
    pub fn with_spawn_error(mut self, program: &str, kind: io::ErrorKind) -> Self {
        self.scripts.insert(
            program.to_string(),
            Entry {
                script: Script::SpawnError(kind),
                delay: Duration::ZERO,
            },
        );
        self
    }

    pub fn with_output(mut self, program: &str, output: CommandOutput) -> Self {
        self.scripts.insert(
            program.to_string(),
            Entry {
                script: Script::Output(output),
                delay: Duration::ZERO,
            },
        );
        self
    }

    /// Delay the answer for an already scripted program.
    pub fn with_delay(mut self, program: &str, delay: Duration) -> Self {
        if let Some(entry) = self.scripts.get_mut(program) {
            entry.delay = delay;
        }
        self
    }

    /// Starts and finishes, interleaved in the order they happened.
    pub fn events(&self) -> Vec<RunEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn started(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RunEvent::Started(p) => Some(p),
                RunEvent::Finished(_) => None,
            })
            .collect()
    }

    pub fn finished(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RunEvent::Finished(p) => Some(p),
                RunEvent::Started(_) => None,
            })
            .collect()
    }

    pub fn run_count(&self) -> usize {
        self.started().len()
    }
}

impl CommandRunner for FakeRunner {
    fn run<'a>(&'a self, command: &'a CommandSpec) -> RunFuture<'a> {
        Box::pin(async move {
            self.events
                .lock()
                .unwrap()
                .push(RunEvent::Started(command.program.clone()));

            let entry = self.scripts.get(&command.program).cloned().unwrap_or(Entry {
                script: Script::SpawnError(io::ErrorKind::NotFound),
                delay: Duration::ZERO,
            });

            if !entry.delay.is_zero() {
                tokio::time::sleep(entry.delay).await;
            }

            self.events
                .lock()
                .unwrap()
                .push(RunEvent::Finished(command.program.clone()));

            match entry.script {
                Script::Output(output) => Ok(output),
                Script::SpawnError(kind) => Err(io::Error::new(
                    kind,
                    format!("fake runner: cannot spawn {}", command.program),
                )),
            }
        })
    }
}
