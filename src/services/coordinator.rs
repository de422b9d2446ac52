use crate::domain::models::{LogLevel, RunOptions};
use crate::services::runner::CommandRunner;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CoordinatorStatus {
    Coordinator { node: String },
    NotCoordinator { node: String, coordinator: String },
    CheckFailed { reason: String },
}

pub trait CoordinatorCheck {
    fn status(&self) -> CoordinatorStatus;

    /// Folds a failed probe into "no": coordinator status is never assumed.
    fn is_coordinator(&self) -> bool {
        match self.status() {
            CoordinatorStatus::Coordinator { .. } => true,
            CoordinatorStatus::NotCoordinator { node, coordinator } => {
                tracing::debug!(%node, %coordinator, "local node is not the DC");
                false
            }
            CoordinatorStatus::CheckFailed { reason } => {
                tracing::warn!(%reason, "DC check failed; treating local node as non-DC");
                false
            }
        }
    }
}

/// Asks the cluster who the designated controller is and compares the
/// answer against the local node name.
pub struct DcQuery<'a> {
    runner: &'a dyn CommandRunner,
    query: Vec<String>,
    node_name: Option<String>,
}

impl<'a> DcQuery<'a> {
    pub fn new(runner: &'a dyn CommandRunner, query: Vec<String>, node_name: Option<String>) -> Self {
        Self {
            runner,
            query,
            node_name,
        }
    }

    fn local_node(&self) -> Result<String, String> {
        if let Some(name) = &self.node_name {
            return Ok(name.clone());
        }
        hostname::get()
            .map_err(|e| format!("hostname lookup failed: {}", e))?
            .into_string()
            .map_err(|raw| format!("hostname is not valid UTF-8: {:?}", raw))
    }

    fn coordinator(&self) -> Result<String, String> {
        let opts = RunOptions {
            capture_output: true,
            log_level: LogLevel::Trace,
            use_shell: false,
        };
        let out = self
            .runner
            .run(&self.query, &opts)
            .map_err(|e| format!("DC query failed: {}", e))?;
        if !out.success() {
            return Err(format!(
                "DC query exited with {}: {}",
                out.exit_code,
                out.stderr.trim()
            ));
        }
        out.stdout
            .split_whitespace()
            .last()
            .map(str::to_string)
            .ok_or_else(|| "DC query produced no output".to_string())
    }
}

impl CoordinatorCheck for DcQuery<'_> {
    fn status(&self) -> CoordinatorStatus {
        let node = match self.local_node() {
            Ok(n) => n,
            Err(reason) => return CoordinatorStatus::CheckFailed { reason },
        };
        match self.coordinator() {
            Ok(dc) if dc == node => CoordinatorStatus::Coordinator { node },
            Ok(coordinator) => CoordinatorStatus::NotCoordinator { node, coordinator },
            Err(reason) => CoordinatorStatus::CheckFailed { reason },
        }
    }
}
