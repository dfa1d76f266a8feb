// Application configuration, loaded from environment variables and CLI flags.

use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Path to the location catalog JSON file.
    pub locations_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables and CLI arguments.
    ///
    /// Environment variables:
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `LOCATIONS_FILE` - Path to the catalog file (default: `data/locations.json`)
    ///
    /// CLI flags:
    /// - `--port <PORT>` - Override the port
    /// - `--locations <PATH>` - Override the catalog file path
    pub fn load() -> Self {
        let args: Vec<String> = std::env::args().collect();

        // Port: CLI flag --port takes precedence, then env var, then default
        let port = Self::parse_cli_value(&args, "--port")
            .and_then(|v| v.parse().ok())
            .or_else(|| std::env::var("PORT").ok().and_then(|v| v.parse().ok()))
            .unwrap_or(3000);

        let locations_file = Self::parse_cli_value(&args, "--locations")
            .map(PathBuf::from)
            .or_else(|| std::env::var("LOCATIONS_FILE").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("data/locations.json"));

        Config {
            port,
            locations_file,
        }
    }

    /// Parse a CLI flag value like `--port 8080`.
    fn parse_cli_value(args: &[String], flag: &str) -> Option<String> {
        args.windows(2).find_map(|pair| {
            if pair[0] == flag {
                Some(pair[1].clone())
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_value() {
        let args: Vec<String> = ["prog", "--port", "8080", "--locations", "custom.json"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            Config::parse_cli_value(&args, "--port"),
            Some("8080".to_string())
        );
        assert_eq!(
            Config::parse_cli_value(&args, "--locations"),
            Some("custom.json".to_string())
        );
        assert_eq!(Config::parse_cli_value(&args, "--missing"), None);
    }
}
