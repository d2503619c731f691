//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "chronograph")]
#[command(about = "A state-managed HTTP server hosting a start/stop/reset stopwatch")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20780")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_joins_host_and_port() {
        let config = Config {
            port: 8080,
            host: "127.0.0.1".to_string(),
            verbose: false,
        };
        assert_eq!(config.address(), "127.0.0.1:8080");
    }

    #[test]
    fn verbose_flag_raises_log_level() {
        let quiet = Config { port: 0, host: String::new(), verbose: false };
        let loud = Config { port: 0, host: String::new(), verbose: true };
        assert_eq!(quiet.log_level(), "info");
        assert_eq!(loud.log_level(), "debug");
    }
}
