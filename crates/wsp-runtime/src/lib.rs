use std::path::Path;
use std::process::{Command, ExitStatus, Output};

use anyhow::Context;
use serde::Deserialize;

use wsp_error::{Result, WspError};

/// Blocking package-manager subprocess calls. Output is inherited so the
/// user sees exactly what the package manager prints; a non-zero exit is
/// fatal to the current command, with no retry.

fn command(program: &str) -> Command {
    // Use different command based on OS
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(program);
        cmd
    } else {
        Command::new(program)
    }
}

fn spawn_status(cmd: &mut Command, description: &str) -> anyhow::Result<ExitStatus> {
    cmd.status()
        .with_context(|| format!("{description}: failed to start"))
}

fn spawn_captured(cmd: &mut Command, description: &str) -> anyhow::Result<Output> {
    cmd.output()
        .with_context(|| format!("{description}: failed to start"))
}

fn run_inherited(mut cmd: Command, description: &str) -> Result<()> {
    wsp_logger::verbose(&format!("Running: {description}"));
    let status = spawn_status(&mut cmd, description)?;
    if !status.success() {
        return Err(WspError::Subprocess(format!(
            "{description} exited with code {}",
            status.code().unwrap_or(-1)
        )));
    }
    Ok(())
}

/// Run an arbitrary shell command line in `dir` with inherited output.
/// Used for external generator invocations.
pub fn run_shell(dir: &Path, command_line: &str) -> Result<()> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command_line);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command_line);
        c
    };
    cmd.current_dir(dir);
    run_inherited(cmd, command_line)
}

/// `yarnpkg install` at the workspace root.
pub fn install(root: &Path) -> Result<()> {
    let mut cmd = command("yarnpkg");
    cmd.arg("install").current_dir(root);
    run_inherited(cmd, "yarnpkg install")
}

/// Focus a single workspace member with production-only dependencies.
pub fn focus_production(root: &Path, pkg_name: &str) -> Result<()> {
    let mut cmd = command("yarnpkg");
    cmd.args(["workspaces", "focus", pkg_name, "--production"])
        .current_dir(root);
    run_inherited(cmd, &format!("yarnpkg workspaces focus {pkg_name} --production"))
}

pub struct PublishOptions {
    pub access: Option<String>,
    pub tag: Option<String>,
    pub otp: Option<String>,
    pub dry_run: bool,
}

/// `npm publish <pkg_path>` with optional passthrough flags.
pub fn publish(pkg_path: &Path, options: &PublishOptions) -> Result<()> {
    let mut cmd = command("npm");
    cmd.arg("publish").arg(pkg_path);
    if options.dry_run {
        cmd.arg("--dry-run");
    }
    if let Some(access) = &options.access {
        cmd.args(["--access", access]);
    }
    if let Some(tag) = &options.tag {
        cmd.args(["--tag", tag]);
    }
    if let Some(otp) = &options.otp {
        cmd.args(["--otp", otp]);
    }
    run_inherited(cmd, &format!("npm publish {}", pkg_path.display()))
}

#[derive(Deserialize)]
struct PackReport {
    #[serde(default)]
    files: Vec<PackEntry>,
}

#[derive(Deserialize)]
struct PackEntry {
    path: String,
}

/// The relative paths `npm publish` would include for the package, computed
/// by the package manager itself via `npm pack --dry-run --json`.
pub fn packed_files(pkg_path: &Path) -> Result<Vec<String>> {
    let mut cmd = command("npm");
    cmd.args(["pack", "--dry-run", "--json"]).current_dir(pkg_path);
    let output = spawn_captured(&mut cmd, "npm pack --dry-run")?;

    if !output.status.success() {
        return Err(WspError::Subprocess(format!(
            "npm pack --dry-run exited with code {} for {}",
            output.status.code().unwrap_or(-1),
            pkg_path.display()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_pack_output(&stdout, pkg_path)
}

fn parse_pack_output(stdout: &str, pkg_path: &Path) -> Result<Vec<String>> {
    let reports: Vec<PackReport> =
        serde_json::from_str(stdout).map_err(|e| WspError::Parse {
            path: format!("npm pack output for {}", pkg_path.display()),
            message: e.to_string(),
        })?;

    let Some(report) = reports.into_iter().next() else {
        return Ok(Vec::new());
    };
    Ok(report.files.into_iter().map(|f| f.path).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_npm_pack_json_output() {
        let stdout = r#"[
          {
            "name": "core",
            "version": "1.0.0",
            "files": [
              { "path": "package.json", "size": 120 },
              { "path": "lib/index.js", "size": 512 }
            ]
          }
        ]"#;
        let files = parse_pack_output(stdout, &PathBuf::from("/x")).unwrap();
        assert_eq!(files, vec!["package.json", "lib/index.js"]);
    }

    #[test]
    fn empty_report_yields_no_files() {
        let files = parse_pack_output("[]", &PathBuf::from("/x")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn malformed_output_is_a_parse_error() {
        let err = parse_pack_output("not json", &PathBuf::from("/x")).unwrap_err();
        assert!(matches!(err, WspError::Parse { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn failed_spawn_surfaces_as_an_io_error() {
        let err = run_shell(Path::new("/no/such/working/directory"), "true").unwrap_err();
        assert!(matches!(err, WspError::IoError(_)));
    }
}
