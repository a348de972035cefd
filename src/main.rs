//! Command line front end for blog list statistics.
//!
//! # Usage
//!
//! ```bash
//! # Print statistics for a record file
//! bloglist stats --file blogs.json
//!
//! # Same, as JSON
//! bloglist stats --file blogs.json --json
//!
//! # Validate a record file without computing anything
//! bloglist check --file blogs.json
//!
//! # Check a registration against the configured policy and hash the password
//! bloglist users register --username mluukkai --name "Matti Luukkainen" --password salainen
//! ```
//!
//! Without `--file`, the path comes from `BLOGLIST_DATA_FILE`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use bloglist::AppError;
use bloglist::application::dto::RegisterUser;
use bloglist::application::services::{StatsService, UserService};
use bloglist::config;
use bloglist::domain::entities::NewBlog;
use bloglist::domain::list_helper::BlogSummary;
use bloglist::infrastructure::loader::{load_blogs, seed};
use bloglist::infrastructure::persistence::{MemoryBlogRepository, MemoryUserRepository};
use bloglist::telemetry::init_tracing;
use clap::{Parser, Subcommand};
use colored::*;

#[derive(Parser)]
#[command(name = "bloglist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show list statistics
    Stats {
        /// JSON file with an array of blog records
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a blog record file
    Check {
        /// JSON file with an array of blog records
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// User management
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Validate and register a user, printing the stored record
    Register {
        #[arg(short, long)]
        username: String,

        #[arg(short, long, default_value = "")]
        name: String,

        #[arg(short, long)]
        password: Option<String>,

        /// Print errors as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Failed to load configuration")?;
    init_tracing(&config);
    config.print_summary();

    match cli.command {
        Commands::Stats { file, json } => {
            let path = file.unwrap_or_else(|| config.data_file.clone());
            let blogs = load_or_report(&path, json).await?;
            let summary = summarize(blogs).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
        }
        Commands::Check { file } => {
            let path = file.unwrap_or_else(|| config.data_file.clone());
            let blogs = load_or_report(&path, false).await?;
            println!(
                "{} {} valid blog records in {}",
                "✓".green().bold(),
                blogs.len().to_string().bold(),
                path.display()
            );
        }
        Commands::Users { action } => match action {
            UserAction::Register {
                username,
                name,
                password,
                json,
            } => {
                let request = RegisterUser {
                    username,
                    name,
                    password,
                };
                register_user(&config, request, json).await?;
            }
        },
    }

    Ok(())
}

/// Loads records, printing the error details before bailing out.
async fn load_or_report(path: &Path, json: bool) -> Result<Vec<NewBlog>> {
    match load_blogs(path).await {
        Ok(blogs) => Ok(blogs),
        Err(e) => {
            report(&e, json)?;
            Err(e.into())
        }
    }
}

fn report(err: &AppError, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&err.to_body())?);
    } else {
        eprintln!("{} {}", "✗".red().bold(), err.to_string().red());
        eprintln!("  {}", err.details().to_string().dimmed());
    }
    Ok(())
}

async fn register_user(
    config: &config::Config,
    request: RegisterUser,
    json: bool,
) -> Result<()> {
    let service = UserService::new(
        Arc::new(MemoryUserRepository::new()),
        Arc::new(config.password_hasher()?),
        config.registration_policy(),
    );

    match service.register(request).await {
        Ok(user) => {
            println!("{}", serde_json::to_string_pretty(&user)?);
            Ok(())
        }
        Err(e) => {
            report(&e, json)?;
            Err(e.into())
        }
    }
}

async fn summarize(blogs: Vec<NewBlog>) -> Result<BlogSummary> {
    let repository = Arc::new(MemoryBlogRepository::new());
    seed(repository.as_ref(), blogs).await?;

    let service = StatsService::new(repository);
    Ok(service.summary().await?)
}

fn print_summary(summary: &BlogSummary) {
    let none = || "(no blogs)".dimmed().to_string();

    println!("{}", "Blog list statistics".bold().underline());
    println!("  {:<13} {}", "Blogs:", summary.blog_count.to_string().cyan());
    println!(
        "  {:<13} {}",
        "Total likes:",
        summary.total_likes.to_string().cyan()
    );

    let favorite = summary.favorite_blog.as_ref().map_or_else(none, |f| {
        format!(
            "\"{}\" by {} ({} likes)",
            f.title.bold(),
            f.author,
            f.likes.to_string().cyan()
        )
    });
    println!("  {:<13} {}", "Favorite:", favorite);

    let most_blogs = summary.most_blogs.as_ref().map_or_else(none, |m| {
        format!("{} ({} blogs)", m.author.bold(), m.post_count.to_string().cyan())
    });
    println!("  {:<13} {}", "Most blogs:", most_blogs);

    let most_likes = summary.most_likes.as_ref().map_or_else(none, |m| {
        format!(
            "{} ({} likes)",
            m.author.bold(),
            m.total_likes.to_string().cyan()
        )
    });
    println!("  {:<13} {}", "Most likes:", most_likes);
}
