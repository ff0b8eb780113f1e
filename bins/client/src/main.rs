//! Thumbnailer Client
//!
//! Terminal front end for the thumbnail service. Pick an image, upload it,
//! and get back a preview of the thumbnail plus download links.
//!
//! Usage: thumbnailer-client [FILE] [--endpoint URL] [--preview-out PATH] [--show-urls]

mod spinner;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::warn;

use spinner::Spinner;
use thumbnailer_client::{
    ACCEPTED_EXTENSIONS, ClientError, DEFAULT_ENDPOINT, ImageSelection, ThumbnailClient, report,
};

/// Upload images to the thumbnail service.
#[derive(Debug, Parser)]
#[command(name = "thumbnailer-client", version, about)]
struct Args {
    /// Image to upload. Without it, paths are read interactively.
    file: Option<PathBuf>,

    /// Thumbnail endpoint.
    #[arg(long, env = "THUMBNAILER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Save the fetched thumbnail to this path.
    #[arg(long)]
    preview_out: Option<PathBuf>,

    /// Also print the raw original and thumbnail URLs.
    #[arg(long)]
    show_urls: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = ThumbnailClient::new(args.endpoint.clone());

    if let Some(file) = &args.file {
        let ok = process(&client, &args, file).await;
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    interactive(&client, &args).await?;
    Ok(ExitCode::SUCCESS)
}

/// Prompt for image paths until EOF or `quit`.
async fn interactive(client: &ThumbnailClient, args: &Args) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let prompt = format!(
        "Image path ({}), or 'quit': ",
        ACCEPTED_EXTENSIONS.join(", ")
    );

    loop {
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            path => {
                process(client, args, Path::new(path)).await;
                println!();
            }
        }
    }
    Ok(())
}

/// Run one upload and print its outcome. Returns whether it succeeded.
async fn process(client: &ThumbnailClient, args: &Args, path: &Path) -> bool {
    match upload(client, args, path).await {
        Ok(()) => true,
        Err(e) => {
            println!("{}", report::render_failure(&e));
            false
        }
    }
}

async fn upload(client: &ThumbnailClient, args: &Args, path: &Path) -> Result<(), ClientError> {
    let selection = ImageSelection::load(path).await?;
    println!("{}", report::render_selection(&selection));

    let spinner = Spinner::start("Generating thumbnail...");
    let result = client.upload(&selection).await;
    spinner.finish().await;
    let urls = result?;

    // The links stay useful even when the preview cannot be fetched.
    let preview = match client.fetch_preview(&urls.thumbnail_url).await {
        Ok(preview) => Some(preview),
        Err(e) => {
            warn!(error = %e, url = %urls.thumbnail_url, "Could not fetch thumbnail preview");
            None
        }
    };

    if let (Some(out), Some(preview)) = (&args.preview_out, &preview) {
        tokio::fs::write(out, &preview.data)
            .await
            .map_err(|source| ClientError::Io {
                path: out.clone(),
                source,
            })?;
        println!("Thumbnail saved to {}", out.display());
    }

    print!("{}", report::render_success(&urls, preview.as_ref(), args.show_urls));
    Ok(())
}
