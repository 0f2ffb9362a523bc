use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use wsp_constants::TEMPLATE_MANIFEST;
use wsp_error::Result;
use wsp_fsio::Fs;
use wsp_workspace::Workspace;

/// How a new package comes into being. Selected once at the command
/// boundary; the generator variant shells out and is not graph-aware.
#[derive(Debug, Clone)]
pub enum CreationStrategy {
    TemplateCopy { template: String },
    ExternalGenerator { command: String },
}

/// Declared rename table shipped inside a template, so files that must not
/// be live in the template itself (a `.gitignore`, say) are stored under a
/// placeholder name and moved into place on materialization.
#[derive(Deserialize, Debug, Default)]
pub struct TemplateManifest {
    #[serde(default)]
    pub renames: IndexMap<String, String>,
}

/// Apply the template's rename table at `dest` and drop the table file from
/// the copy. A template without a manifest materializes as a plain copy.
pub fn materialize(fs: &Fs, template_src: &Path, dest: &Path) -> Result<()> {
    let manifest_path = template_src.join(TEMPLATE_MANIFEST);
    if !fs.exists(&manifest_path) {
        return Ok(());
    }

    let manifest: TemplateManifest = fs.read_json(&manifest_path)?;
    for (stored, real) in &manifest.renames {
        fs.rename(&dest.join(stored), &dest.join(real))?;
    }
    fs.remove(&dest.join(TEMPLATE_MANIFEST))
}

/// Run an external generator (e.g. create-react-app) in the packages root,
/// handing it the target directory name.
pub fn run_external_generator(ws: &Workspace, dir_name: &str, command: &str) -> Result<()> {
    let packages_root = ws.packages_root()?;
    let command_line = format!("{command} {dir_name}");
    if ws.fs().dry_run() {
        wsp_logger::info(&format!("[dry-run] Running: {command_line}"));
        return Ok(());
    }
    wsp_runtime::run_shell(&packages_root, &command_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn materialize_applies_the_rename_table() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("template");
        let dest = tmp.path().join("pkg");
        std::fs::create_dir_all(&src).unwrap();
        std::fs::create_dir_all(&dest).unwrap();
        std::fs::write(
            src.join(TEMPLATE_MANIFEST),
            r#"{ "renames": { "gitignore": ".gitignore" } }"#,
        )
        .unwrap();
        // Simulate the copy step: dest holds the template's files.
        std::fs::write(dest.join("gitignore"), "node_modules\n").unwrap();
        std::fs::write(dest.join(TEMPLATE_MANIFEST), "{}").unwrap();

        let fs = Fs::new(false);
        materialize(&fs, &src, &dest).unwrap();

        assert!(dest.join(".gitignore").exists());
        assert!(!dest.join("gitignore").exists());
        assert!(!dest.join(TEMPLATE_MANIFEST).exists());
    }

    #[test]
    fn materialize_without_a_manifest_is_a_noop() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("template");
        let dest = tmp.path().join("pkg");
        std::fs::create_dir_all(&src).unwrap();
        std::fs::create_dir_all(&dest).unwrap();
        std::fs::write(dest.join("index.ts"), "").unwrap();

        let fs = Fs::new(false);
        materialize(&fs, &src, &dest).unwrap();
        assert!(dest.join("index.ts").exists());
    }
}
