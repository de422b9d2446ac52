use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl OptionValue {
    pub fn is_set(&self) -> bool {
        matches!(self, OptionValue::Bool(true))
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Int(i) => write!(f, "{}", i),
            OptionValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Int(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Str(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Str(v)
    }
}

pub type Keywords = BTreeMap<String, OptionValue>;

/// A finished invocation of the cluster shell, produced by the dispatcher
/// and handed to a `CommandRunner`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionRequest {
    pub command: String,
    pub argv: Vec<String>,
    pub options: Keywords,
    /// Names of options set to `true`, in table order.
    pub flags: Vec<String>,
}

impl ExecutionRequest {
    /// Renders the argv the tool actually sees. Flags become bare tokens
    /// right after the command name, so `show` with `xml` and filter `vip`
    /// reads `crm configure show xml vip`.
    pub fn command_line(&self) -> Vec<String> {
        let head = self.argv.len().min(3);
        let mut line: Vec<String> = self.argv[..head].to_vec();
        line.extend(self.flags.iter().cloned());
        line.extend(self.argv[head..].iter().cloned());
        line
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            capture_output: true,
            log_level: LogLevel::Trace,
            use_shell: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub capture_output: bool,
    pub log_level: LogLevel,
    pub use_shell: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            capture_output: true,
            log_level: LogLevel::Debug,
            use_shell: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

#[derive(Serialize)]
pub struct RunReport {
    pub command_line: Vec<String>,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Serialize)]
pub struct CommandInfo {
    pub name: String,
    pub usage: String,
    pub requires_coordinator: bool,
    pub options: Vec<String>,
}

#[derive(Serialize)]
pub struct DryRunReport {
    pub command_line: Vec<String>,
    pub options: Keywords,
}
