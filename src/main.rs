use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use aebn::artwork::{FanartSize, PosterSize};
use aebn::{util, AebnProvider, ArtworkType, HttpFetcher, ScrapeOptions, ScraperConfig, SearchQuery};

#[derive(Parser, Debug)]
#[command(name = "aebn", version, about = "Search aebn.net and scrape movie metadata and artwork", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print debug logs
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search movie titles
    Search { query: String },

    /// Show the metadata of a catalog id
    #[command(visible_alias = "get")]
    Detail {
        id: String,
        /// Two-letter country code used for the certification
        #[arg(short, long)]
        country: Option<String>,
        /// Page locale
        #[arg(short, long)]
        language: Option<String>,
    },

    /// List artwork of a catalog id
    Artwork {
        id: String,
        #[arg(short, long, value_enum, default_value_t = Kind::All)]
        kind: Kind,
        #[arg(long, value_enum, default_value_t = Poster::Medium)]
        poster_size: Poster,
        #[arg(long, value_enum, default_value_t = Fanart::Medium)]
        fanart_size: Fanart,
        #[arg(short, long)]
        language: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Poster,
    Disc,
    Background,
    All,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Poster {
    Large,
    Big,
    Medium,
    Small,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Fanart {
    Large,
    Medium,
    Small,
}

impl From<Kind> for ArtworkType {
    fn from(k: Kind) -> Self {
        match k {
            Kind::Poster => ArtworkType::Poster,
            Kind::Disc => ArtworkType::Disc,
            Kind::Background => ArtworkType::Background,
            Kind::All => ArtworkType::All,
        }
    }
}

impl From<Poster> for PosterSize {
    fn from(p: Poster) -> Self {
        match p {
            Poster::Large => PosterSize::Large,
            Poster::Big => PosterSize::Big,
            Poster::Medium => PosterSize::Medium,
            Poster::Small => PosterSize::Small,
        }
    }
}

impl From<Fanart> for FanartSize {
    fn from(f: Fanart) -> Self {
        match f {
            Fanart::Large => FanartSize::Large,
            Fanart::Medium => FanartSize::Medium,
            Fanart::Small => FanartSize::Small,
        }
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "aebn=debug" } else { "aebn=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = ScraperConfig::from_env();
    let provider = AebnProvider::new(HttpFetcher::new(&config)?, config);

    match cli.command {
        Commands::Search { query } => {
            let results = provider.search(&SearchQuery::movie(query)).await?;
            if cli.json {
                util::print_output(&results, true);
            } else {
                util::print_results_table(&results);
            }
        }
        Commands::Detail { id, country, language } => {
            let options = ScrapeOptions { country, language, ..ScrapeOptions::with_id(id) };
            let md = provider.get_metadata(&options).await;
            if cli.json {
                util::print_output(&md, true);
            } else {
                util::print_metadata_human(&md);
            }
        }
        Commands::Artwork { id, kind, poster_size, fanart_size, language } => {
            let options = ScrapeOptions {
                language,
                artwork_type: kind.into(),
                poster_size: poster_size.into(),
                fanart_size: fanart_size.into(),
                ..ScrapeOptions::with_id(id)
            };
            let artwork = provider.get_artwork(&options).await;
            if cli.json {
                util::print_output(&artwork, true);
            } else {
                util::print_artwork_table(&artwork);
            }
        }
    }
    Ok(())
}
