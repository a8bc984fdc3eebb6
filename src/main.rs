//! CLI entry point for miniblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use miniblog_rs::content::Caller;
use miniblog_rs::helpers::RequestOrigin;

#[derive(Parser)]
#[command(name = "miniblog")]
#[command(version)]
#[command(about = "Render blog posts and derive their display metadata", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Act as this authenticated user (anonymous when omitted)
    #[arg(short, long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Slug for the new post (derived from the title by default)
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// List posts
    List,

    /// Print the display HTML of a post
    #[command(alias = "r")]
    Render {
        /// Slug of the post
        slug: String,
    },

    /// Print SEO and hero image metadata of a post as JSON
    Meta {
        /// Slug of the post
        slug: String,

        /// Request scheme used for the absolute URL
        #[arg(long, default_value = "https")]
        scheme: String,

        /// Request host used for the absolute URL (configured url when omitted)
        #[arg(long)]
        host: Option<String>,
    },

    /// Show whether comments are open and how many are visible
    Comments {
        /// Slug of the post
        slug: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "miniblog_rs=debug,info"
    } else {
        "miniblog_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let caller = match cli.user {
        Some(name) => Caller::authenticated(name),
        None => Caller::anonymous(),
    };

    let blog = miniblog_rs::Blog::new(&base_dir)?;

    match cli.command {
        Commands::New { title, slug } => {
            tracing::info!("Creating new post with title: {}", title);
            miniblog_rs::commands::new::create_post(&blog, &caller, &title, slug.as_deref())?;
        }

        Commands::List => {
            miniblog_rs::commands::list::run(&blog, &caller)?;
        }

        Commands::Render { slug } => {
            tracing::info!("Rendering post {}", slug);
            miniblog_rs::commands::render::run(&blog, &slug)?;
        }

        Commands::Meta { slug, scheme, host } => {
            let origin = host.map(|host| RequestOrigin::new(scheme, host));
            miniblog_rs::commands::meta::run(&blog, &slug, origin.as_ref())?;
        }

        Commands::Comments { slug } => {
            miniblog_rs::commands::comments::run(&blog, &slug, &caller)?;
        }
    }

    Ok(())
}
