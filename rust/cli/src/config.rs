//! Layered configuration: defaults, then a TOML file named by
//! `CLASSWAR_CONFIG`, then `CLASSWAR_*` environment variables. Command-line
//! flags are applied on top by the command handlers.

use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "CLASSWAR_CONFIG";
pub const SEED_ENV: &str = "CLASSWAR_SEED";
pub const MAX_ROUNDS_ENV: &str = "CLASSWAR_MAX_ROUNDS";
pub const GAMES_ENV: &str = "CLASSWAR_GAMES";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Seed for the deal and item awards; random when unset
    pub seed: Option<u64>,
    /// Round cap for non-interactive games
    pub max_rounds: u32,
    /// Games played by `sim`
    pub games: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub max_rounds: ValueSource,
    pub games: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            max_rounds: ValueSource::Default,
            games: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            max_rounds: 5_000,
            games: 1,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve(|key| std::env::var(key).ok())
}

/// Resolves the configuration with `lookup` standing in for the environment.
pub fn resolve<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = lookup(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        apply_file(&mut cfg, &mut sources, &s)?;
    }

    if let Some(seed) = lookup(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(rounds) = lookup(MAX_ROUNDS_ENV)
        && !rounds.is_empty()
    {
        cfg.max_rounds = rounds
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max_rounds".into()))?;
        sources.max_rounds = ValueSource::Env;
    }
    if let Some(games) = lookup(GAMES_ENV)
        && !games.is_empty()
    {
        cfg.games = games
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid games".into()))?;
        sources.games = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    max_rounds: Option<u32>,
    #[serde(default)]
    games: Option<u32>,
}

fn apply_file(
    cfg: &mut Config,
    sources: &mut ConfigSources,
    contents: &str,
) -> Result<(), ConfigError> {
    let f: FileConfig = toml::from_str(contents)?;
    if let Some(v) = f.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::File;
    }
    if let Some(v) = f.max_rounds {
        cfg.max_rounds = v;
        sources.max_rounds = ValueSource::File;
    }
    if let Some(v) = f.games {
        cfg.games = v;
        sources.games = ValueSource::File;
    }
    Ok(())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.max_rounds == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_rounds must be >0".into(),
        ));
    }
    if cfg.games == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: games must be >0".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let resolved = resolve(env(&[])).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.seed, ValueSource::Default);
    }

    #[test]
    fn env_values_override_defaults() {
        let resolved = resolve(env(&[(SEED_ENV, "99"), (GAMES_ENV, "4")])).unwrap();
        assert_eq!(resolved.config.seed, Some(99));
        assert_eq!(resolved.config.games, 4);
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.sources.max_rounds, ValueSource::Default);
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let resolved = resolve(env(&[(SEED_ENV, "")])).unwrap();
        assert_eq!(resolved.config.seed, None);
    }

    #[test]
    fn bad_env_value_is_invalid() {
        let err = resolve(env(&[(MAX_ROUNDS_ENV, "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_games_fails_validation() {
        let err = resolve(env(&[(GAMES_ENV, "0")])).unwrap_err();
        assert!(err.to_string().contains("games must be >0"));
    }

    #[test]
    fn file_values_are_tracked() {
        let mut cfg = Config::default();
        let mut sources = ConfigSources::default();
        apply_file(&mut cfg, &mut sources, "seed = 5\nmax_rounds = 100\n").unwrap();
        assert_eq!(cfg.seed, Some(5));
        assert_eq!(cfg.max_rounds, 100);
        assert_eq!(sources.max_rounds, ValueSource::File);
        assert_eq!(sources.games, ValueSource::Default);
    }

    #[test]
    fn unknown_file_key_is_a_parse_error() {
        let mut cfg = Config::default();
        let mut sources = ConfigSources::default();
        let err = apply_file(&mut cfg, &mut sources, "level = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
