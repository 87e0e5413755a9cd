//! Helpers to run the `plres` binary from integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

const TEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl Run {
    /// The output lines which are neither log messages nor statistics.
    pub(crate) fn trace_lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .filter(|line| !line.starts_with("c "))
            .collect()
    }

    /// The `s ...` line which closes the output.
    pub(crate) fn conclusion(&self) -> Option<&str> {
        self.stdout.lines().find(|line| line.starts_with("s "))
    }
}

pub(crate) fn instance(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("instances")
        .join(name)
}

pub(crate) fn run_plres(args: &[&str]) -> Run {
    run_plres_with_stdin(args, None)
}

/// Run the prover with the given arguments. `stdin` is fed to the process when given.
pub(crate) fn run_plres_with_stdin(args: &[&str], stdin: Option<&str>) -> Run {
    let prover = PathBuf::from(env!("CARGO_BIN_EXE_plres"));
    let output_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));

    let run_name = args
        .iter()
        .map(|arg| {
            arg.chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("-");
    let file_path = |extension: &str| output_dir.join(format!("{run_name}.{extension}"));

    let stdout_path = file_path("log");
    let stderr_path = file_path("err");

    let stdin = match stdin {
        Some(content) => {
            let stdin_path = file_path("in");
            std::fs::write(&stdin_path, content).expect("Failed to write stdin file.");
            Stdio::from(File::open(&stdin_path).expect("Failed to open stdin file."))
        }
        None => Stdio::null(),
    };

    let mut child = Command::new(prover)
        .args(args)
        .stdout(File::create(&stdout_path).expect("Failed to create log file."))
        .stderr(File::create(&stderr_path).expect("Failed to create error file."))
        .stdin(stdin)
        .spawn()
        .expect("Failed to run prover.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("prover took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting prover: {e}"),
    };

    Run {
        status,
        stdout: read_and_remove(&stdout_path),
        stderr: read_and_remove(&stderr_path),
    }
}

fn read_and_remove(path: &Path) -> String {
    let content = std::fs::read_to_string(path).expect("Failed to read output file.");
    std::fs::remove_file(path).expect("Failed to remove output file.");
    content
}
