//! Scoped scratch directory for one cycle

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::errors::Result;
use crate::models::Language;

/// Name of the binary gcc produces when no `-o` is given
pub const BINARY_NAME: &str = "a.out";

/// Temporary directory holding the source file and the produced binary.
/// Removed when dropped or closed.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("cppexec-").tempdir()?;
        log::debug!("Created workspace {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write the editor text as the source file for `language`
    pub fn write_source(&self, language: Language, text: &str) -> Result<PathBuf> {
        let source_path = self.dir.path().join(language.source_file_name());
        fs::write(&source_path, text)?;
        Ok(source_path)
    }

    pub fn binary_path(&self) -> PathBuf {
        self.dir.path().join(BINARY_NAME)
    }

    /// Remove the directory now, reporting failures instead of ignoring them
    pub fn close(self) -> Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir.close()?;
        log::debug!("Removed workspace {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_removed_on_close() {
        let workspace = Workspace::new().unwrap();
        let source = workspace
            .write_source(Language::C99, "int main(void){return 0;}")
            .unwrap();
        let root = workspace.path().to_path_buf();

        assert!(source.ends_with("code.c"));
        assert_eq!(fs::read_to_string(&source).unwrap(), "int main(void){return 0;}");
        assert_eq!(workspace.binary_path(), root.join("a.out"));

        workspace.close().unwrap();
        assert!(!root.exists());
    }

    #[test]
    fn test_workspace_removed_on_drop() {
        let root = {
            let workspace = Workspace::new().unwrap();
            workspace.write_source(Language::Cpp98, "x").unwrap();
            workspace.path().to_path_buf()
        };
        assert!(!root.exists());
    }
}
