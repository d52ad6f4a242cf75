// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary state files for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;
use tokio::fs;

/// A temporary directory holding a state file.
///
/// The directory is removed when dropped.
#[derive(Debug)]
pub struct TempState {
    /// Where the state file goes; it does not exist until written.
    pub state_path: PathBuf,

    _dir: TempDir,
}

impl TempState {
    /// Creates a new temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let state_path = dir.path().join("state").join("state");
        Ok(Self {
            state_path,
            _dir: dir,
        })
    }

    /// Writes raw content to the state file, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    #[allow(dead_code)]
    pub async fn write(&self, content: &str) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = self.state_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.state_path, content).await?;
        Ok(())
    }

    /// Reads the state file.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails.
    #[allow(dead_code)]
    pub async fn read(&self) -> Result<String, Box<dyn std::error::Error>> {
        Ok(fs::read_to_string(&self.state_path).await?)
    }
}

/// Sets up a temporary state location for integration tests.
///
/// # Errors
///
/// Returns an error if directory creation fails.
pub fn setup_temp_state() -> Result<TempState, Box<dyn std::error::Error>> {
    TempState::new()
}
