//! CLI entry point for blogcore

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blogcore")]
#[command(version)]
#[command(about = "Post collections and RSS feed for a markdown blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts
    #[command(alias = "ls")]
    List {
        /// Which posts to list (all, published, drafts)
        #[arg(default_value = "published")]
        r#type: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write the RSS feed of published posts
    Feed {
        /// Output file (defaults to <public_dir>/<feed.path>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a single post to HTML
    Render {
        /// Post path, relative (`hello`) or full (`/posts/hello`)
        path: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogcore=debug,info"
    } else {
        "blogcore=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { r#type, json } => {
            let blog = blogcore::Blog::new(&base_dir)?;
            blogcore::commands::list::run(&blog, &r#type, json)?;
        }

        Commands::Feed { output } => {
            let blog = blogcore::Blog::new(&base_dir)?;
            tracing::info!("Generating feed...");
            let path = blogcore::commands::feed::run(&blog, output.as_deref())?;
            println!("Wrote {}", path.display());
        }

        Commands::Render { path } => {
            let blog = blogcore::Blog::new(&base_dir)?;
            blogcore::commands::render::run(&blog, &path)?;
        }

        Commands::Version => {
            println!("blogcore version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
