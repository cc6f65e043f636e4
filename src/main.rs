use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;
use url_builder::{ParamKey, UrlBuilder};

/// Build a URL from a template, filling placeholders and query parameters.
#[derive(Parser, Debug)]
#[command(name = "url-builder", version, about)]
struct Cli {
    /// URL or URL template to start from (e.g. "https://github.com/{user}")
    url: Option<String>,

    /// Replace the scheme
    #[arg(long)]
    scheme: Option<String>,

    /// Replace the hostname
    #[arg(long)]
    host: Option<String>,

    /// Fill a path segment: NAME=VALUE for a placeholder, INDEX=VALUE for a position
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_pair)]
    params: Vec<(String, String)>,

    /// Append a literal path segment
    #[arg(short = 'a', long = "append", value_name = "SEGMENT")]
    append: Vec<String>,

    /// Set a query parameter
    #[arg(short = 'q', long = "query", value_name = "KEY=VALUE", value_parser = parse_pair)]
    queries: Vec<(String, String)>,

    /// Remove a query parameter
    #[arg(long = "remove-query", value_name = "KEY")]
    remove_queries: Vec<String>,

    /// Print every part of the result, not just the URL
    #[arg(long)]
    inspect: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_pair(raw: &str) -> Result<(String, String)> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got {:?}", raw))
}

/// Logs go to stderr so stdout carries only the rendered URL.
fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "warn,url_builder=debug",
        _ => "warn,url_builder=trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut builder = UrlBuilder::create(cli.url.as_deref())?;

    if let Some(scheme) = &cli.scheme {
        builder.set_scheme(scheme);
    }
    if let Some(host) = cli.host {
        builder.set_host_name(host);
    }

    builder
        .set_params(
            cli.params
                .iter()
                .map(|(key, value)| (ParamKey::from_token(key), value.as_str())),
        )
        .add_params(cli.append.iter());

    for (key, value) in &cli.queries {
        builder.set_query(key, value);
    }
    for key in &cli.remove_queries {
        builder.remove_query(key);
    }

    println!("{}", builder);

    if cli.inspect {
        println!("scheme: {}", builder.get_scheme());
        println!("host:   {}", builder.get_host_name());
        for (key, value) in builder.get_params() {
            println!("param   {} = {}", key, value);
        }
        for ((key, decoded), (_, raw)) in builder.get_query().iter().zip(builder.get_raw_query()) {
            println!("query   {} = {} (raw: {})", key, decoded, raw);
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("url-builder error: {:#}", err);
        std::process::exit(1);
    }
}
