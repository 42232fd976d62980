//! Command-line options and validated game settings

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Smallest playable stack
pub const MIN_DISKS: u32 = 1;

/// Largest stack that still fits three towers side by side in an 80-column terminal
pub const MAX_DISKS: u32 = 10;

pub const DEFAULT_DISKS: u32 = 3;

pub const DEFAULT_STEP_MS: u64 = 500;

/// Tower of Hanoi in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "hanoi-tty")]
#[command(about = "Tower of Hanoi with drag-and-drop moves and an animated solver", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of disks to start with
    #[arg(short, long, default_value_t = DEFAULT_DISKS)]
    pub disks: u32,

    /// Delay between solver moves, in milliseconds
    #[arg(long, default_value_t = DEFAULT_STEP_MS)]
    pub step_ms: u64,

    /// Where to write logs (the terminal is taken by the UI)
    #[arg(long, default_value = "hanoi-tty.log")]
    pub log_file: PathBuf,
}

/// Rejected settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("disk count must be between {min} and {max}, got {got}")]
    DiskCountOutOfRange { got: u32, min: u32, max: u32 },

    #[error("solver step interval must be at least 1 ms")]
    ZeroStepInterval,
}

/// Settings the game runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub disks: u32,
    pub step_interval: Duration,
    pub log_file: PathBuf,
}

impl GameConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let disks = validate_disk_count(cli.disks)?;
        if cli.step_ms == 0 {
            return Err(ConfigError::ZeroStepInterval);
        }
        Ok(GameConfig {
            disks,
            step_interval: Duration::from_millis(cli.step_ms),
            log_file: cli.log_file,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            disks: DEFAULT_DISKS,
            step_interval: Duration::from_millis(DEFAULT_STEP_MS),
            log_file: PathBuf::from("hanoi-tty.log"),
        }
    }
}

/// Check a disk count against `MIN_DISKS..=MAX_DISKS`
pub fn validate_disk_count(disks: u32) -> Result<u32, ConfigError> {
    if (MIN_DISKS..=MAX_DISKS).contains(&disks) {
        Ok(disks)
    } else {
        Err(ConfigError::DiskCountOutOfRange {
            got: disks,
            min: MIN_DISKS,
            max: MAX_DISKS,
        })
    }
}
