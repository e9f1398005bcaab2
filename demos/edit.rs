//! Replace a file of an existing gist with the contents of a local file.

#[path = "support/auth.rs"]
mod auth;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use gists::{Gists, NewGist};

#[derive(Parser, Debug)]
#[command(about = "Upload a local file into an existing gist")]
struct Cli {
    #[arg(long)]
    gist: String,

    /// Local file to upload
    #[arg(long, default_value = "README.md")]
    file: PathBuf,

    /// Name of the file inside the gist (defaults to the local file name)
    #[arg(long)]
    name: Option<String>,

    #[command(flatten)]
    auth: auth::AuthArgs,
}

#[tokio::main]
async fn main() -> gists::Result<()> {
    auth::init_tracing();
    let cli = Cli::parse();
    let gists = Gists::new(&auth::config(cli.auth))?;

    let content = fs::read_to_string(&cli.file)?;
    let name = cli.name.unwrap_or_else(|| {
        cli.file
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_else(|| "readme.md".to_string())
    });

    let options = NewGist::new().file(name, content).into_options();
    let updated = gists.edit(&cli.gist, Some(&options)).await?;
    println!("{}", updated["html_url"]);
    Ok(())
}
