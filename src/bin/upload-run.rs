//! CLI front end for the uploader.
//!
//! Usage:
//!   upload-run <resume.pdf>
//!   upload-run <resume.pdf> --endpoint http://host:5000/upload
//!   upload-run                 (sends an empty `file` field)
//!
//! The pretty-printed JSON reply goes to stdout. A failed upload prints
//! nothing there; set `RUST_LOG` to see why.

use clap::Parser;
use resume_upload::{DEFAULT_ENDPOINT, FileUploader, HttpUploader, SelectedFile};
use std::path::PathBuf;
use std::process;
use std::rc::Rc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Upload one file as multipart/form-data and print the JSON reply.
#[derive(Parser)]
#[command(name = "upload-run")]
struct Cli {
    /// File to upload. Omit to send the `file` field empty.
    file: Option<PathBuf>,

    /// Upload endpoint
    #[arg(short, long, env = "UPLOAD_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resume_upload=warn,upload_run=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let selection = match &cli.file {
        Some(path) => match SelectedFile::read_from(path) {
            Ok(file) => vec![file],
            Err(e) => {
                eprintln!("Error reading file '{}': {e}", path.display());
                process::exit(1);
            }
        },
        None => Vec::new(),
    };

    let uploader = FileUploader::new(Rc::new(HttpUploader::new(&cli.endpoint)));
    uploader.on_file_change(selection);
    uploader.on_upload_click().await;

    match uploader.render().response_dump {
        Some(dump) => println!("{dump}"),
        None => process::exit(1),
    }
}
