use std::path::PathBuf;

use clap::Parser;

use mshelf::app::App;
use mshelf::config::Config;
use mshelf::error::AppResult;
use mshelf::logging;

/// Browse the Kitsu manga catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "mshelf", version, about)]
struct Cli {
    /// Config file to read instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs here instead of the configured path.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Search to run once the first popular page has loaded.
    #[arg(long, short = 'q', value_name = "TEXT")]
    query: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    logging::init(&config, cli.log_file)?;

    let mut app = App::new(config)?.with_initial_query(cli.query);
    let result = app.run().await;
    if let Err(err) = &result {
        tracing::error!(error = %err, "session ended with error");
    }
    result
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::Cli;

    #[test]
    fn cli_accepts_no_arguments() {
        let cli = Cli::try_parse_from(["mshelf"]).expect("bare invocation should parse");
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
        assert!(cli.query.is_none());
    }

    #[test]
    fn cli_parses_paths_and_query() {
        let cli = Cli::try_parse_from([
            "mshelf",
            "--config",
            "/tmp/mshelf.toml",
            "--log-file",
            "/tmp/mshelf.log",
            "-q",
            "one piece",
        ])
        .expect("flags should parse");
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/mshelf.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/mshelf.log")));
        assert_eq!(cli.query.as_deref(), Some("one piece"));
    }

    #[test]
    fn cli_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["mshelf", "extra"]).is_err());
    }
}
