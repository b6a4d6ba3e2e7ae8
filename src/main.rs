use anyhow::{Context, Result, anyhow};
use clap::Parser;
use riot_requester::commands::{Invocation, execute};
use riot_requester::{Error, Method, Requester, RequesterConfig};

/// riot-requester - issue a single request against a keyed web API
///
/// The API key is appended to every request as the `api_key` query parameter.
/// If --api-key is not given, the RIOT_API_KEY environment variable is used.
///
/// Examples:
///   riot-requester --domain na.api.example.com get /api/v1/champions --arg freeToPlay=true
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Root domain of the API (also via RIOT_ROOT_DOMAIN)
    #[arg(long, env = "RIOT_ROOT_DOMAIN", value_name = "HOST", global = true)]
    domain: Option<String>,

    /// API key (also via RIOT_API_KEY; empty if neither is given)
    #[arg(
        long = "api-key",
        env = "RIOT_API_KEY",
        value_name = "KEY",
        hide_env_values = true,
        global = true
    )]
    api_key: Option<String>,

    /// Use plain http instead of https
    #[arg(long, global = true)]
    http: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Send a GET request and print the response body
    Get(RequestArgs),

    /// Send a PUT request and print the response body
    Put(RequestArgs),

    /// Send a POST request and print the response body
    Post(RequestArgs),
}

#[derive(clap::Args, Debug)]
struct RequestArgs {
    /// Path relative to the root domain, e.g. /api/v1/champions
    #[arg(value_name = "PATH")]
    path: String,

    /// Extra query argument in key=value form, pre-encoded (repeatable)
    #[arg(long = "arg", value_name = "KEY=VALUE")]
    arguments: Vec<String>,

    /// Request body (ignored for GET)
    #[arg(long)]
    body: Option<String>,
}

impl Cli {
    fn invocation(self) -> Invocation {
        let (method, args) = match self.command {
            Commands::Get(args) => (Method::Get, args),
            Commands::Put(args) => (Method::Put, args),
            Commands::Post(args) => (Method::Post, args),
        };
        Invocation {
            method,
            path: args.path,
            arguments: args.arguments,
            use_https: !self.http,
            body: args.body,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let domain = cli
        .domain
        .clone()
        .context("No root domain given. Use --domain or set RIOT_ROOT_DOMAIN.")?;
    let mut config = RequesterConfig::new(domain);
    if let Some(key) = cli.api_key.clone() {
        config = config.api_key(key);
    }
    let requester = Requester::from_config(&config).context("Failed to create requester")?;

    let body = execute(&requester, cli.invocation())
        .await
        .map_err(|e| match e {
            Error::Failure(failure) => anyhow!(
                "{} (status {})",
                failure.message(),
                failure.status().as_u16()
            ),
            other => anyhow::Error::from(other),
        })?;

    println!("{}", body);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};
    use std::ffi::OsStr;

    #[test]
    fn test_cli_get_parsing() {
        let cli = Cli::try_parse_from([
            "riot-requester",
            "--domain",
            "na.api.example.com",
            "get",
            "/api/v1/champions",
            "--arg",
            "freeToPlay=true",
        ])
        .unwrap();
        assert_eq!(cli.domain.as_deref(), Some("na.api.example.com"));

        let invocation = cli.invocation();
        assert_eq!(invocation.method, Method::Get);
        assert_eq!(invocation.path, "/api/v1/champions");
        assert_eq!(invocation.arguments, vec!["freeToPlay=true"]);
        assert!(invocation.use_https);
        assert_eq!(invocation.body, None);
    }

    #[test]
    fn test_cli_post_with_body_and_http() {
        let cli = Cli::try_parse_from([
            "riot-requester",
            "post",
            "/provider",
            "--body",
            "{}",
            "--http",
            "--arg",
            "a=1",
            "--arg",
            "b=2",
        ])
        .unwrap();

        let invocation = cli.invocation();
        assert_eq!(invocation.method, Method::Post);
        assert_eq!(invocation.arguments, vec!["a=1", "b=2"]);
        assert!(!invocation.use_https);
        assert_eq!(invocation.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_cli_global_api_key() {
        let cli =
            Cli::try_parse_from(["riot-requester", "--api-key", "K", "put", "/p"]).unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("K"));
        assert_eq!(cli.invocation().method, Method::Put);
    }

    #[test]
    fn test_cli_api_key_reads_env() {
        let command = Cli::command();
        let api_key = command
            .get_arguments()
            .find(|arg| arg.get_id() == "api_key")
            .unwrap();
        assert_eq!(api_key.get_env(), Some(OsStr::new("RIOT_API_KEY")));
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        let result = Cli::try_parse_from(["riot-requester", "/p"]);
        assert!(result.is_err());
    }
}
