use crate::domain::models::{LogLevel, RunOptions, RunOutput};
use std::process::{Command, Stdio};

/// Executes an argument vector. The dispatcher only builds requests; every
/// process spawn goes through an implementation of this trait.
pub trait CommandRunner {
    fn run(&self, argv: &[String], opts: &RunOptions) -> anyhow::Result<RunOutput>;
}

/// Spawns real processes with `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, argv: &[String], opts: &RunOptions) -> anyhow::Result<RunOutput> {
        let Some((program, args)) = argv.split_first() else {
            anyhow::bail!("refusing to run an empty command");
        };
        log_command_line(opts.log_level, argv);

        let mut cmd = if opts.use_shell {
            let mut c = Command::new("sh");
            c.arg("-c").arg(argv.join(" "));
            c
        } else {
            let mut c = Command::new(program);
            c.args(args);
            c
        };

        if opts.capture_output {
            let out = cmd
                .stdin(Stdio::null())
                .output()
                .map_err(|e| anyhow::anyhow!("failed to run {}: {}", program, e))?;
            let result = RunOutput {
                exit_code: out.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            };
            tracing::debug!(program = %program, exit_code = result.exit_code, "command finished");
            Ok(result)
        } else {
            let status = cmd
                .status()
                .map_err(|e| anyhow::anyhow!("failed to run {}: {}", program, e))?;
            Ok(RunOutput {
                exit_code: status.code().unwrap_or(-1),
                ..RunOutput::default()
            })
        }
    }
}

fn log_command_line(level: LogLevel, argv: &[String]) {
    let line = argv.join(" ");
    match level {
        LogLevel::Trace => tracing::trace!(command = %line, "running"),
        LogLevel::Debug => tracing::debug!(command = %line, "running"),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn captures_stdout_and_exit_code() {
        let out = ProcessRunner
            .run(&argv(&["echo", "configure", "show"]), &RunOptions::default())
            .expect("echo runs");
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "configure show");
    }

    #[test]
    fn arguments_are_not_shell_interpreted() {
        let out = ProcessRunner
            .run(&argv(&["echo", "$HOME;", "*"]), &RunOptions::default())
            .expect("echo runs");
        assert_eq!(out.stdout.trim(), "$HOME; *");
    }

    #[test]
    fn shell_mode_runs_through_sh() {
        let opts = RunOptions {
            use_shell: true,
            ..RunOptions::default()
        };
        let out = ProcessRunner
            .run(&argv(&["exit", "3"]), &opts)
            .expect("sh runs");
        assert_eq!(out.exit_code, 3);
    }

    #[test]
    fn empty_argv_is_an_error() {
        assert!(ProcessRunner.run(&[], &RunOptions::default()).is_err());
    }

    #[test]
    fn missing_program_is_an_error() {
        let res = ProcessRunner.run(
            &argv(&["/nonexistent/crmconf-test-binary"]),
            &RunOptions::default(),
        );
        assert!(res.is_err());
    }
}
