mod api;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api::GatewayClient;

/// Terminal frontend for the resume ranker platform.
///
/// Authenticates against the API gateway, uploads a resume and a job
/// description as PDFs, and renders the similarity score and HR analysis.
#[derive(Parser)]
#[command(name = "ranker-cli", version, about)]
struct Cli {
    /// Base URL of the API gateway.
    #[arg(long, env = "GATEWAY_URL", default_value = "http://localhost:8080")]
    gateway_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an account and print the issued token.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in and print the issued token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Rank a resume against a job description.
    Rank {
        /// Bearer token from `login` or `register`.
        #[arg(long, env = "RANKER_TOKEN")]
        token: String,
        /// Path to the resume PDF.
        #[arg(long)]
        resume: PathBuf,
        /// Path to the job description PDF.
        #[arg(long)]
        job_description: PathBuf,
        /// Also write the raw response JSON to this file.
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Check that the gateway is reachable.
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let client = GatewayClient::new(cli.gateway_url)?;

    match cli.command {
        Command::Register {
            name,
            email,
            password,
        } => {
            let auth = client.register(&name, &email, &password).await?;
            println!("Registration successful. Token:\n{}", auth.token);
        }
        Command::Login { email, password } => {
            let auth = client.login(&email, &password).await?;
            println!("Login successful. Token:\n{}", auth.token);
        }
        Command::Rank {
            token,
            resume,
            job_description,
            json,
        } => {
            let response = client.rank(&token, &resume, &job_description).await?;
            if let Some(path) = &json {
                output::write_json(path, &response)?;
                println!("Raw results written to {}", path.display());
            }
            println!("{}", output::render_report(&response));
        }
        Command::Health => {
            client.health().await?;
            println!("Gateway is reachable");
        }
    }

    Ok(())
}
