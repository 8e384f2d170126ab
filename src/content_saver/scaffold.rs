//! Site generator scaffolding collaborator

use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Creates a page skeleton before the real file is written.
///
/// Failures are never fatal: the direct write that follows is authoritative.
pub trait Scaffolder {
    fn scaffold(&self, target: &str);
}

/// Runs `<program> new <target>` inside the site directory.
#[derive(Debug, Clone)]
pub struct CommandScaffolder {
    program: String,
    site_dir: PathBuf,
}

impl CommandScaffolder {
    pub fn new(program: impl Into<String>, site_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            site_dir: site_dir.into(),
        }
    }
}

impl Scaffolder for CommandScaffolder {
    fn scaffold(&self, target: &str) {
        let result = Command::new(&self.program)
            .args(["new", target])
            .current_dir(&self.site_dir)
            .stdin(Stdio::null())
            .output();

        match result {
            Ok(output) if output.status.success() => {
                log::debug!("{} new {target}: ok", self.program);
            }
            Ok(output) => log::debug!(
                "{} new {target} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
            Err(e) => log::debug!("{} new {target} could not start: {e}", self.program),
        }
    }
}

/// Scaffolding disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScaffold;

impl Scaffolder for NoScaffold {
    fn scaffold(&self, _target: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_swallowed() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        CommandScaffolder::new("wp2hugo-no-such-program", temp.path())
            .scaffold("blog/x/index.md");
        Ok(())
    }
}
