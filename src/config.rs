// src/config.rs
use crate::constants::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TREE_DEPTH, MAX_TREE_DEPTH,
    PORT_ENV_VAR,
};
use crate::error::AppError;
use crate::types::ValidationError;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Interface to listen on
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on (defaults to the PORT environment variable, then 8080)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Levels of descendant pages fetched below the requested page
    #[arg(short, long, default_value_t = DEFAULT_TREE_DEPTH)]
    pub depth: u8,

    /// Timeout in seconds for the call to Confluence
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout: u64,

    /// Send GraphQL queries to this URL instead of https://<domain>.atlassian.net/cgraphql
    #[arg(long)]
    pub graphql_endpoint: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub depth: u8,
    pub request_timeout: Duration,
    pub graphql_endpoint: Option<String>,
    pub verbose: bool,
}

impl ServerConfig {
    /// Resolves the configuration from CLI input and the process environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let port_env = std::env::var(PORT_ENV_VAR).ok();
        Self::resolve_with_port_env(cli, port_env.as_deref())
    }

    /// Same as [`resolve`](Self::resolve) with the `PORT` value supplied by the caller.
    pub fn resolve_with_port_env(
        cli: CommandLineInput,
        port_env: Option<&str>,
    ) -> Result<Self, AppError> {
        let port = match (cli.port, port_env) {
            (Some(port), _) => port,
            (None, Some(raw)) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::MissingConfiguration(format!(
                    "{} must be a port number, got {:?}",
                    PORT_ENV_VAR, raw
                ))
            })?,
            (None, None) => DEFAULT_PORT,
        };

        let host: IpAddr = cli.host.parse().map_err(|_| {
            AppError::MissingConfiguration(format!("Invalid listen address: {}", cli.host))
        })?;

        if cli.depth == 0 || cli.depth > MAX_TREE_DEPTH {
            return Err(ValidationError::OutOfBounds {
                value: cli.depth as u32,
                min: 1,
                max: MAX_TREE_DEPTH as u32,
            }
            .into());
        }

        Ok(ServerConfig {
            listen_addr: SocketAddr::new(host, port),
            depth: cli.depth,
            request_timeout: Duration::from_secs(cli.request_timeout),
            graphql_endpoint: cli.graphql_endpoint,
            verbose: cli.verbose,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            depth: DEFAULT_TREE_DEPTH,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            graphql_endpoint: None,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> CommandLineInput {
        let mut argv = vec!["confluence2bookmarks"];
        argv.extend_from_slice(args);
        CommandLineInput::parse_from(argv)
    }

    #[test]
    fn defaults_match_default_config() {
        let config = ServerConfig::resolve_with_port_env(cli(&[]), None).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn port_env_is_used_when_flag_absent() {
        let config = ServerConfig::resolve_with_port_env(cli(&[]), Some("9090")).unwrap();
        assert_eq!(config.listen_addr.port(), 9090);
    }

    #[test]
    fn port_flag_overrides_env() {
        let config =
            ServerConfig::resolve_with_port_env(cli(&["--port", "7000"]), Some("9090")).unwrap();
        assert_eq!(config.listen_addr.port(), 7000);
    }

    #[test]
    fn unparseable_port_env_is_rejected() {
        let err = ServerConfig::resolve_with_port_env(cli(&[]), Some("eighty")).unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(_)));
    }

    #[test]
    fn depth_is_bounded() {
        assert!(ServerConfig::resolve_with_port_env(cli(&["--depth", "0"]), None).is_err());
        assert!(ServerConfig::resolve_with_port_env(cli(&["--depth", "21"]), None).is_err());
        let config = ServerConfig::resolve_with_port_env(cli(&["-d", "8"]), None).unwrap();
        assert_eq!(config.depth, 8);
    }

    #[test]
    fn graphql_endpoint_override_is_carried() {
        let args = ["--graphql-endpoint", "http://127.0.0.1:9999/cgraphql"];
        let config = ServerConfig::resolve_with_port_env(cli(&args), None).unwrap();
        assert_eq!(
            config.graphql_endpoint.as_deref(),
            Some("http://127.0.0.1:9999/cgraphql")
        );
    }

    #[test]
    fn invalid_host_is_rejected() {
        let err =
            ServerConfig::resolve_with_port_env(cli(&["--host", "not-an-ip"]), None).unwrap_err();
        assert!(err.to_string().contains("not-an-ip"));
    }
}
