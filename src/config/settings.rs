//! Configuration settings for the simulator

use crate::life::{Topology, MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub board: BoardConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub cols: usize,
    pub rows: usize,
    pub topology: Topology,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Generations to advance in one run.
    pub generations: usize,
    /// Live-cell probability used when seeding the board randomly.
    pub density: f64,
    /// Fixed RNG seed; omit for a fresh board every run.
    pub seed: Option<u64>,
    /// Delay between rendered generations when showing the evolution.
    pub step_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig {
                cols: 60,
                rows: 40,
                topology: Topology::Toroidal,
            },
            simulation: SimulationConfig {
                generations: 100,
                density: 0.25,
                seed: None,
                step_delay_ms: 50,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.board.cols < MIN_COLS || self.board.cols > MAX_COLS {
            anyhow::bail!(
                "Board columns must be within [{}, {}], got {}",
                MIN_COLS,
                MAX_COLS,
                self.board.cols
            );
        }

        if self.board.rows < MIN_ROWS || self.board.rows > MAX_ROWS {
            anyhow::bail!(
                "Board rows must be within [{}, {}], got {}",
                MIN_ROWS,
                MAX_ROWS,
                self.board.rows
            );
        }

        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if !(0.0..=1.0).contains(&self.simulation.density) {
            anyhow::bail!(
                "Seed density must be within [0, 1], got {}",
                self.simulation.density
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(cols) = cli_overrides.cols {
            self.board.cols = cols;
        }
        if let Some(rows) = cli_overrides.rows {
            self.board.rows = rows;
        }
        if let Some(wrap) = cli_overrides.wrap {
            self.board.topology = Topology::from_wrap(wrap);
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(density) = cli_overrides.density {
            self.simulation.density = density;
        }
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub cols: Option<usize>,
    pub rows: Option<usize>,
    pub wrap: Option<bool>,
    pub generations: Option<usize>,
    pub density: Option<f64>,
    pub seed: Option<u64>,
}
