use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "safe-call")]
#[command(
    author,
    version,
    about = "Probe a remote API and report the classified outcome of the call"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Perform a single request and print its outcome (success, empty or failure)
    Probe {
        /// Request path, joined onto the configured base URL
        path: String,

        /// HTTP method to use
        #[clap(short = 'X', long, default_value = "GET")]
        method: String,

        /// JSON request body
        #[clap(short = 'd', long)]
        data: Option<String>,

        /// Extra request header as 'Name: value' (can be repeated)
        #[clap(short = 'H', long = "header")]
        headers: Vec<String>,

        /// Configuration file path (defaults to safe-call.toml)
        #[clap(short, long, default_value = "safe-call.toml")]
        config: String,

        /// Base URL to use instead of the configured one
        #[clap(long)]
        base_url: Option<String>,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Create a default configuration file
    Init {
        /// Configuration file path (defaults to safe-call.toml)
        #[clap(short, long, default_value = "safe-call.toml")]
        config: String,

        /// Overwrite an existing file without asking
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_arguments() {
        let cli = Cli::parse_from([
            "safe-call", "probe", "/orders", "-X", "POST", "-d", "{}", "-H", "X-A: 1", "-H", "X-B: 2",
        ]);

        match cli.command {
            Commands::Probe {
                path,
                method,
                data,
                headers,
                config,
                base_url,
                verbose,
            } => {
                assert_eq!(path, "/orders");
                assert_eq!(method, "POST");
                assert_eq!(data.as_deref(), Some("{}"));
                assert_eq!(headers, vec!["X-A: 1", "X-B: 2"]);
                assert_eq!(config, "safe-call.toml");
                assert_eq!(base_url, None);
                assert!(!verbose);
            }
            Commands::Init { .. } => panic!("expected probe"),
        }
    }

    #[test]
    fn test_init_arguments() {
        let cli = Cli::parse_from(["safe-call", "init", "--config", "api.toml", "--force"]);
        assert!(matches!(cli.command, Commands::Init { ref config, force: true } if config == "api.toml"));
    }
}
