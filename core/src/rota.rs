// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tokio::fs;
use url::Url;

use crate::codec::{DecodeError, encode_with, fragment_of, share_url_with, try_decode_with};
use crate::datetime::today;
use crate::timeline::{TimelineDay, compute_timeline, timeline_start};
use crate::{Config, Roster, RosterError};

/// Rotation calendar application core.
///
/// Holds the single mutable copy of the roster. Every edit goes through the sanitizer and,
/// unless the instance is ephemeral, is persisted as encoded text.
#[derive(Debug, Clone)]
pub struct Rota {
    today: NaiveDate,
    config: Config,
    roster: Roster,
    state_path: Option<PathBuf>,
}

impl Rota {
    /// Creates a new instance, loading the persisted state if there is any.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        let today = today();
        config.normalize()?;

        let state_path = config.state_path.clone();
        let roster = match &state_path {
            Some(path) => load_state(path, today).await?,
            None => Roster::default_with(today),
        };

        Ok(Self {
            today,
            config,
            roster,
            state_path,
        })
    }

    /// Creates an instance working on the given state text, which is never persisted.
    pub fn ephemeral(config: Config, input: &str) -> Self {
        let today = today();
        let roster = match try_decode_with(fragment_of(input), today) {
            Ok(roster) => roster,
            Err(e) => {
                tracing::warn!(error = %e, "failed to decode state, using the default roster");
                Roster::default_with(today)
            }
        };

        Self {
            today,
            config,
            roster,
            state_path: None,
        }
    }

    /// The current date of this instance.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The configuration of this instance.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Whether edits are written back to the state file.
    pub fn is_persistent(&self) -> bool {
        self.state_path.is_some()
    }

    /// The encoded form of the current roster.
    pub fn state(&self) -> String {
        encode_with(&self.roster, self.today)
    }

    /// A share link to `base` carrying the current roster.
    pub fn share_url(&self, base: &Url) -> Url {
        share_url_with(base, &self.roster, self.today)
    }

    /// The timeline starting where the configured policy says.
    pub fn timeline(&self) -> Vec<TimelineDay> {
        let start = timeline_start(&self.roster, self.today, self.config.timeline_start);
        compute_timeline(&self.roster, start)
    }

    /// Replaces the roster with the one carried by `input`, a URL or a bare fragment.
    ///
    /// Unreadable input loads the built-in roster; the reason is returned so it can be shown.
    pub async fn load(&mut self, input: &str) -> Result<Option<DecodeError>, Box<dyn Error>> {
        let (roster, error) = match try_decode_with(fragment_of(input), self.today) {
            Ok(roster) => (roster, None),
            Err(e) => {
                tracing::warn!(error = %e, "failed to decode state, using the default roster");
                (Roster::default_with(self.today), Some(e))
            }
        };

        self.roster = roster;
        self.save().await?;
        Ok(error)
    }

    /// Applies an edit to the roster, then sanitizes and persists the result.
    ///
    /// A failed edit leaves the roster untouched.
    pub async fn edit<F, T>(&mut self, f: F) -> Result<T, Box<dyn Error>>
    where
        F: FnOnce(&mut Roster, NaiveDate) -> Result<T, RosterError>,
    {
        let mut roster = self.roster.clone();
        let output = f(&mut roster, self.today)?;

        self.roster = roster.sanitized_with(self.today);
        self.save().await?;
        Ok(output)
    }

    /// Writes the encoded roster to the state file, if this instance is persistent.
    pub async fn save(&self) -> Result<(), Box<dyn Error>> {
        let Some(path) = &self.state_path else {
            return Ok(());
        };

        prepare(path).await?;
        tracing::debug!(path = %path.display(), "saving state");
        fs::write(path, format!("{}\n", self.state()))
            .await
            .map_err(|e| format!("Failed to write state file {}: {e}", path.display()))?;
        Ok(())
    }
}

async fn load_state(path: &Path, today: NaiveDate) -> Result<Roster, Box<dyn Error>> {
    match fs::read_to_string(path).await {
        Ok(text) => match try_decode_with(&text, today) {
            Ok(roster) => Ok(roster),
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "state file is unreadable, using the default roster");
                Ok(Roster::default_with(today))
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no state file yet, using the default roster");
            Ok(Roster::default_with(today))
        }
        Err(e) => Err(format!("Failed to read state file {}: {e}", path.display()).into()),
    }
}

async fn prepare(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tracing::debug!(path = %parent.display(), "ensuring state directory exists");
        fs::create_dir_all(parent).await?;
    }
    Ok(())
}
