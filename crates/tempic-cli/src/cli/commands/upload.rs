//! `tempic upload [--lifetime ..] [--title ..] [--description ..] <file>...`

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

use super::report_transport_error;
use crate::cli::{Outcome, RunContext};
use tempic_core::http::HttpResponse;
use tempic_core::multipart::UploadRequest;

/// Uploads the first of `files` as a new album.
///
/// Extra paths are echoed but not sent. A file that cannot be read aborts
/// before any request with an `Err`, so the only stdout output is the
/// parameter echo.
pub fn run_upload(
    ctx: &RunContext,
    lifetime: &str,
    title: &str,
    description: &str,
    files: &[PathBuf],
    out: &mut impl Write,
) -> Result<Outcome> {
    let Some(client) = ctx.client(out)? else {
        return Ok(Outcome::Failure);
    };

    writeln!(out, "album_name = {}", title)?;
    writeln!(out, "album_description = {}", description)?;
    writeln!(out, "lifetime = {}", lifetime)?;
    write!(out, "uploading files: ")?;
    for file in files {
        write!(out, " {}", file.display())?;
    }
    writeln!(out)?;
    writeln!(out, "--")?;

    let Some(first) = files.first() else {
        writeln!(out, "Please specify a file to upload.")?;
        return Ok(Outcome::Failure);
    };
    if files.len() > 1 {
        tracing::warn!(
            "only {} is uploaded; ignoring {} further file(s)",
            first.display(),
            files.len() - 1
        );
    }

    let request = UploadRequest::new(first, lifetime, title, description);
    match client.upload_files(&request) {
        Ok(resp) => {
            print_response(&resp, out)?;
            Ok(if resp.is_success() {
                Outcome::Success
            } else {
                Outcome::Failure
            })
        }
        Err(e) if e.is_transport() => {
            tracing::error!("upload request failed: {}", e);
            report_transport_error(out, &e)?;
            Ok(Outcome::Failure)
        }
        Err(e) => Err(e.into()),
    }
}

fn print_response(resp: &HttpResponse, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "HTTP {}", resp.status)?;
    for (name, value) in &resp.headers {
        writeln!(out, "{}: {}", name, value)?;
    }
    writeln!(out)?;
    out.write_all(&resp.body)?;
    if !resp.body.ends_with(b"\n") {
        writeln!(out)?;
    }
    Ok(())
}
