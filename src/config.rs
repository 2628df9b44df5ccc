use crate::particles::PARTICLE_COUNT;
use crate::telemetry::LogLevel;
use crate::typing::TypingTimings;
use std::path::PathBuf;

pub const DEFAULT_COMMANDS: [&str; 6] = [
    "python --version",
    "whoami",
    "ls projects/",
    "cat skills.txt",
    "nmap -sS localhost",
    "python security_scanner.py",
];

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub commands: Vec<String>,
    pub typing: TypingTimings,
    pub particle_count: usize,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            commands: DEFAULT_COMMANDS.iter().map(|c| c.to_string()).collect(),
            typing: TypingTimings::default(),
            particle_count: PARTICLE_COUNT,
            log_level: LogLevel::Info,
        }
    }
}

const DEFAULT_PORT: u64 = 8080;
const PORT_BOUNDS: (u64, u64) = (1, 65_535);
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

/// Settings for the local static server, read from `PORT`, `DIST_DIR` and
/// `LOG_LEVEL`. Unset, blank or out-of-range values fall back to defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: LogLevel,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u64_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = parse_non_empty_string(lookup("DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = parse_non_empty_string(lookup("LOG_LEVEL"))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port: u16::try_from(port).unwrap_or(8080),
            dist_dir,
            log_level,
        }
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);

        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.index_file(), PathBuf::from("dist/index.html"));
    }

    #[test]
    fn reads_trimmed_values() {
        let config = config_from(&[("PORT", " 3000 "), ("DIST_DIR", "public"), ("LOG_LEVEL", "debug")]);

        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_range_or_garbage_falls_back() {
        let config = config_from(&[("PORT", "70000"), ("DIST_DIR", "   "), ("LOG_LEVEL", "loud")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, LogLevel::Info);

        assert_eq!(config_from(&[("PORT", "0")]).port, 8080);
        assert_eq!(config_from(&[("PORT", "eighty")]).port, 8080);
    }

    #[test]
    fn page_defaults_cover_every_command() {
        let page = PageConfig::default();

        assert_eq!(page.commands.len(), 6);
        assert_eq!(page.commands[0], "python --version");
        assert_eq!(page.particle_count, 50);
        assert_eq!(page.typing.start.as_millis(), 2_000);
    }
}
