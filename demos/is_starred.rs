//! Star a gist, check it, unstar it, check again.

#[path = "support/auth.rs"]
mod auth;

use clap::Parser;
use gists::Gists;

#[derive(Parser, Debug)]
#[command(about = "Toggle a star on a gist and report is_starred")]
struct Cli {
    #[arg(long, default_value = "3b7a6e680ea8aa0395d92d18304e575e")]
    gist: String,

    #[command(flatten)]
    auth: auth::AuthArgs,
}

#[tokio::main]
async fn main() -> gists::Result<()> {
    auth::init_tracing();
    let cli = Cli::parse();
    let gists = Gists::new(&auth::config(cli.auth))?;

    gists.star(&cli.gist, None).await?;
    println!("{}", gists.is_starred(&cli.gist, None).await?);
    gists.unstar(&cli.gist, None).await?;
    println!("{}", gists.is_starred(&cli.gist, None).await?);
    Ok(())
}
