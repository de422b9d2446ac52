#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub bin: PathBuf,
    /// Every fake `crm` invocation appends its argv here.
    pub crm_log: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_dc("Designated Controller is: node1")
    }

    /// `dc_output` is what the fake `crmadmin -D` prints.
    pub fn with_dc(dc_output: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let bin = tmp.path().join("bin");
        fs::create_dir_all(&bin).expect("create bin dir");
        let crm_log = tmp.path().join("crm.log");

        write_script(
            &bin.join("crm"),
            &format!(
                "echo \"$@\" >> '{log}'\n\
                 case \"$*\" in\n\
                 *boom*) echo \"ERROR: object boom does not exist\" >&2; exit 1 ;;\n\
                 esac\n\
                 echo \"crm $*\"\n",
                log = crm_log.display()
            ),
        );
        write_script(&bin.join("crmadmin"), &format!("echo '{}'\n", dc_output));
        write_script(&bin.join("crmadmin-broken"), "echo 'not connected' >&2\nexit 102\n");

        let env = Self {
            _tmp: tmp,
            home,
            bin,
            crm_log,
        };
        env.write_config(&format!(
            "[crm]\ntool = \"{}\"\ndc_query = [\"{}\", \"-D\"]\n",
            env.bin.join("crm").display(),
            env.bin.join("crmadmin").display()
        ));
        env
    }

    pub fn write_config(&self, body: &str) {
        let path = self.home.join(".config/crmconf/config.toml");
        fs::create_dir_all(path.parent().expect("config parent")).expect("create config dir");
        fs::write(path, body).expect("write config");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("crmconf");
        cmd.env("HOME", &self.home).env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Lines the fake `crm` recorded, one per invocation.
    pub fn crm_calls(&self) -> Vec<String> {
        fs::read_to_string(&self.crm_log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

fn write_script(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{}", body)).expect("write script");
    let mut perms = fs::metadata(path).expect("script metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("chmod script");
}
