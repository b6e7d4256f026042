// Isolated HOME and PATH for running the binary against a fake `az`.

#![allow(dead_code)]

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::PathBuf,
};

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use tempfile::TempDir;

pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("home")).expect("home dir");
        fs::create_dir_all(dir.path().join("bin")).expect("bin dir");
        Self { dir }
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    pub fn args_log(&self) -> PathBuf {
        self.dir.path().join("az-args.log")
    }

    /// Install an `az` that records its arguments, one per line, then runs `body`.
    pub fn install_az(&self, body: &str) {
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\n{body}\n",
            self.args_log().display()
        );
        let path = self.dir.path().join("bin").join("az");
        fs::write(&path, script).expect("write fake az");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake az");
    }

    pub fn recorded_args(&self) -> Option<Vec<String>> {
        let content = fs::read_to_string(self.args_log()).ok()?;
        Some(content.lines().map(String::from).collect())
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.home().join(".config").join("nc-devbox");
        fs::create_dir_all(&dir).expect("config dir");
        let path = dir.join("config.yaml");
        fs::write(&path, content).expect("write config");
        path
    }

    /// The binary with HOME, PATH and the group variables pinned to the sandbox.
    pub fn cmd(&self) -> Command {
        let path = std::env::var_os("PATH").unwrap_or_default();
        let mut dirs = vec![self.dir.path().join("bin")];
        dirs.extend(std::env::split_paths(&path));

        let mut cmd = cargo_bin_cmd!("janitor-reset");
        cmd.env("HOME", self.home())
            .env("PATH", std::env::join_paths(dirs).expect("join PATH"))
            .env_remove("AZ_GROUP")
            .env_remove("DB_AZ_RESOURCE_GROUP")
            .env_remove("RUST_LOG");
        cmd
    }
}
