//! Create a gist from local files and print its URL.

#[path = "support/auth.rs"]
mod auth;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use gists::{Gist, Gists, NewGist};

#[derive(Parser, Debug)]
#[command(about = "Create a gist from local files")]
struct Cli {
    /// Files to upload
    #[arg(long = "file", required = true)]
    files: Vec<PathBuf>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    public: bool,

    #[command(flatten)]
    auth: auth::AuthArgs,
}

#[tokio::main]
async fn main() -> gists::Result<()> {
    auth::init_tracing();
    let cli = Cli::parse();
    let gists = Gists::new(&auth::config(cli.auth))?;

    let mut gist = NewGist::new().public(cli.public);
    if let Some(description) = cli.description {
        gist = gist.description(description);
    }
    for path in &cli.files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        gist = gist.file(name, fs::read_to_string(path)?);
    }

    let created: Gist = serde_json::from_value(gists.create(&gist.into_options()).await?)?;
    println!("{}", created.html_url);
    Ok(())
}
