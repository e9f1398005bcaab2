//! List the public gists of a user.

#[path = "support/auth.rs"]
mod auth;

use clap::Parser;
use gists::{Gist, Gists};

#[derive(Parser, Debug)]
#[command(about = "List gists for a user")]
struct Cli {
    /// Whose gists to list
    #[arg(long, default_value = "jonschlinkert")]
    user: String,

    #[command(flatten)]
    auth: auth::AuthArgs,
}

#[tokio::main]
async fn main() -> gists::Result<()> {
    auth::init_tracing();
    let cli = Cli::parse();
    let gists = Gists::new(&auth::config(cli.auth))?;

    let listed: Vec<Gist> = serde_json::from_value(gists.list(&cli.user, None).await?)?;
    for gist in listed {
        println!(
            "{}  {}",
            gist.html_url,
            gist.description.unwrap_or_default()
        );
    }
    Ok(())
}
