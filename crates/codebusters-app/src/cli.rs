use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use codebusters_core::config::AgentConfig;

/// Ghost-hunting bot. Speaks the referee protocol on stdin/stdout.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON file with agent tuning; missing keys keep their defaults.
    #[arg(long, env = "CODEBUSTERS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed for exploration targets. Overrides the config file.
    #[arg(long, env = "CODEBUSTERS_SEED")]
    pub seed: Option<u64>,

    /// Log filter for stderr, e.g. `debug` or `codebusters_agent=trace`.
    /// Falls back to RUST_LOG, then `warn`.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Resolve the agent configuration: defaults, then the file, then flags.
    pub fn agent_config(&self) -> Result<AgentConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                parse_config(&text).with_context(|| format!("parsing config {}", path.display()))?
            }
            None => AgentConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}

pub fn parse_config(text: &str) -> Result<AgentConfig> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["codebusters"]).unwrap();
        assert_eq!(cli.agent_config().unwrap(), AgentConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config(r#"{ "explore_weight": 30.0, "round_limit": 200 }"#).unwrap();
        assert_eq!(config.explore_weight, 30.0);
        assert_eq!(config.round_limit, 200);
        assert_eq!(config.seed, AgentConfig::default().seed);
    }

    #[test]
    fn test_seed_flag_overrides_file() {
        let path = std::env::temp_dir().join(format!("codebusters-cli-{}.json", std::process::id()));
        fs::write(&path, r#"{ "seed": 5, "projected_weight": 9.0 }"#).unwrap();

        let cli = Cli::try_parse_from([
            "codebusters",
            "--config",
            path.to_str().unwrap(),
            "--seed",
            "77",
        ])
        .unwrap();
        let config = cli.agent_config().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.seed, 77);
        assert_eq!(config.projected_weight, 9.0);
    }

    #[test]
    fn test_missing_config_file_errors() {
        let cli = Cli::try_parse_from(["codebusters", "--config", "/nonexistent/codebusters.json"])
            .unwrap();
        let err = cli.agent_config().unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
