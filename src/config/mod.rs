use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::PathBuf;
use std::time::Duration;

/// Runtime constants for a checking run. The tool takes no CLI flags; paths
/// are fixed relative to the program's own location and everything else is a
/// built-in default. Delays live here rather than inline in the runner so
/// tests can run with zero delay.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Directory holding both the input file and the written report.
    pub data_dir: PathBuf,
    pub input_file: String,
    pub output_file: String,
    /// Wait after navigation for client-side rendering to finish.
    pub settle_delay: Duration,
    /// Wait between consecutive record checks.
    pub pacing_delay: Duration,
    pub navigation_timeout: Duration,
    /// Dollar amount of the promotional credit a valid page advertises.
    pub credit_amount: u32,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            input_file: "links.csv".to_string(),
            output_file: "referral_check_results.txt".to_string(),
            settle_delay: Duration::from_secs(3),
            pacing_delay: Duration::from_secs(1),
            navigation_timeout: Duration::from_secs(30),
            credit_amount: 50,
        }
    }
}

impl CheckerConfig {
    /// Resolve the data directory next to the executable, falling back to
    /// the working directory when the executable path is unavailable.
    pub fn from_program_dir() -> Self {
        let base = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            data_dir: base.join("data"),
            ..Self::default()
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.data_dir.join(&self.input_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.output_file)
    }
}

impl Validate for CheckerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data_dir", &self.data_dir.to_string_lossy())?;
        validation::validate_path("input_file", &self.input_file)?;
        validation::validate_path("output_file", &self.output_file)?;
        validation::validate_positive_number("credit_amount", self.credit_amount as usize, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CheckerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_input_file_rejected() {
        let config = CheckerConfig {
            input_file: String::new(),
            ..CheckerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_credit_amount_rejected() {
        let config = CheckerConfig {
            credit_amount: 0,
            ..CheckerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_paths_join_data_dir() {
        let config = CheckerConfig {
            data_dir: PathBuf::from("/tmp/refs"),
            ..CheckerConfig::default()
        };
        assert_eq!(config.input_path(), PathBuf::from("/tmp/refs/links.csv"));
        assert_eq!(
            config.output_path(),
            PathBuf::from("/tmp/refs/referral_check_results.txt")
        );
    }
}
