use crate::search::{run_featured, run_search, run_show, FeaturedArgs, SearchArgs, ShowArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use premier_listings::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Premier Listings",
    about = "Search the Premier Suite listing catalog or serve it over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Filter and sort the listing catalog
    Search(SearchArgs),
    /// Show a single listing in detail
    Show(ShowArgs),
    /// List featured listings
    Featured(FeaturedArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Listings file (.csv or .json) to serve instead of APP_LISTINGS_PATH
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Search(args) => run_search(args),
        Command::Show(args) => run_show(args),
        Command::Featured(args) => run_featured(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use premier_listings::listings::{PropertyCategory, SortKey};

    #[test]
    fn parses_search_flags() {
        let cli = Cli::try_parse_from([
            "premier-listings-api",
            "search",
            "--type",
            "villa",
            "--min-price",
            "1000000",
            "--sort",
            "price-low",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Search(args)) => {
                assert_eq!(args.category, Some(PropertyCategory::Villa));
                assert_eq!(args.min_price, Some(1_000_000));
                assert_eq!(args.sort, SortKey::PriceAscending);
                assert!(args.location.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_property_type() {
        let result = Cli::try_parse_from(["premier-listings-api", "search", "--type", "castle"]);
        assert!(result.is_err());
    }

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["premier-listings-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
