// Shared credential handling for the demo programs.

use std::path::Path;

use clap::Args;
use gists::credentials::{self, CredentialSources, Store};
use gists::{ClientConfig, GistsError};

#[derive(Args, Debug)]
pub struct AuthArgs {
    /// GitHub username
    #[arg(short, long)]
    pub username: Option<String>,

    /// GitHub password or personal access token
    #[arg(short, long)]
    pub password: Option<String>,

    /// Username and password as positional arguments
    pub positional: Vec<String>,
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Resolve credentials or exit with usage instructions.
pub fn config(args: AuthArgs) -> ClientConfig {
    let sources = CredentialSources {
        auth_file: Some(credentials::local_auth_path(Path::new(env!(
            "CARGO_MANIFEST_DIR"
        )))),
        username: args.username,
        password: args.password,
        positional: args.positional,
        ..CredentialSources::new().with_env()
    };

    match credentials::resolve(&sources, Store::open_default().as_ref()) {
        Ok(credentials) => credentials.into_config(),
        Err(GistsError::MissingCredentials) => {
            eprintln!("please specify authentication details");
            eprintln!("--username, -u (or first argument)");
            eprintln!("--password, -p (or second argument)");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("failed to load credentials: {err}");
            std::process::exit(1);
        }
    }
}
