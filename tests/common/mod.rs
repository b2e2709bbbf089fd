//! Shared testing utilities for hubble-installer CLI tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ENV_TEMPLATE: &str = "API_BASE_URL            = ''\nAPI_SW_ACCESS_KEY       = ''\n";

/// Fake `npx`: records its arguments and lays out a fresh Nuxt.js project.
const FAKE_NPX: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$HUBBLE_TEST_LOG_DIR/npx.args"
cat > nuxt.config.js <<'CONFIG'
export default {
  // Modules: https://go.nuxtjs.dev/config-modules
  modules: [
  ],

  buildModules: [
  ],
}
CONFIG
mkdir -p pages layouts
echo '<template><Tutorial/></template>' > pages/index.vue
echo '<template><Nuxt/></template>' > layouts/default.vue
"#;

/// Fake `npm`: records its arguments and writes the `.env` the plugin postinstall ships.
const FAKE_NPM: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$HUBBLE_TEST_LOG_DIR/npm.args"
printf "API_BASE_URL            = ''\nAPI_SW_ACCESS_KEY       = ''\n" > .env
"#;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
    log_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with fake `npx` and `npm` on `PATH`.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        let log_dir = root.path().join("logs");
        for dir in [&work_dir, &bin_dir, &log_dir] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }

        let ctx = Self { root, work_dir, bin_dir, log_dir };
        ctx.install_tool("npx", FAKE_NPX);
        ctx.install_tool("npm", FAKE_NPM);
        ctx
    }

    /// Replace a fake tool with a custom shell script body.
    pub fn install_tool(&self, name: &str, script: &str) {
        let path = self.bin_dir.join(name);
        fs::write(&path, script).expect("Failed to write fake tool");
        let mut perms = fs::metadata(&path).expect("Failed to stat fake tool").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to mark fake tool executable");
    }

    /// Make a fake tool fail with `stderr`.
    pub fn fail_tool(&self, name: &str, stderr: &str) {
        self.install_tool(name, &format!("#!/bin/sh\necho '{}' >&2\nexit 1\n", stderr));
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path of a project created by the installer.
    pub fn project(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Arguments a fake tool was last invoked with, one per line.
    pub fn tool_args(&self, name: &str) -> Option<Vec<String>> {
        fs::read_to_string(self.log_dir.join(format!("{}.args", name)))
            .ok()
            .map(|content| content.lines().map(str::to_string).collect())
    }

    /// Write a file into the temp root and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("hubble-installer").expect("Failed to locate hubble-installer binary");
        let path = match env::var_os("PATH") {
            Some(existing) => {
                let mut paths = vec![self.bin_dir.clone()];
                paths.extend(env::split_paths(&existing));
                env::join_paths(paths).expect("Failed to build PATH")
            }
            None => self.bin_dir.clone().into_os_string(),
        };
        cmd.current_dir(&self.work_dir)
            .env("PATH", path)
            .env("HUBBLE_TEST_LOG_DIR", &self.log_dir)
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn read_project_file(&self, project: &str, file: &str) -> String {
        fs::read_to_string(self.project(project).join(file)).expect("Failed to read project file")
    }
}
