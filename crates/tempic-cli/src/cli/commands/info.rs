//! `tempic info --album-id <id>` – show an album and its files.

use anyhow::Result;
use std::io::Write;

use super::report_transport_error;
use crate::cli::{Outcome, RunContext};
use tempic_core::api::AlbumInfo;

pub fn run_info(ctx: &RunContext, album_id: &str, out: &mut impl Write) -> Result<Outcome> {
    let Some(client) = ctx.client(out)? else {
        return Ok(Outcome::Failure);
    };

    if album_id.trim().is_empty() {
        writeln!(out, "Please specify an album ID (--album-id).")?;
        return Ok(Outcome::Failure);
    }

    writeln!(out, "album_id = {}", album_id)?;

    match client.fetch_album_info(album_id) {
        Ok(album) => {
            writeln!(out, "ANSWER OK")?;
            print_album(&album, out)?;
            Ok(Outcome::Success)
        }
        Err(e) if e.is_transport() => {
            tracing::warn!(album_id, "info request failed: {}", e);
            report_transport_error(out, &e)?;
            Ok(Outcome::Failure)
        }
        Err(e) => {
            tracing::warn!(album_id, "info rejected: {}", e);
            writeln!(out, "ERROR")?;
            Ok(Outcome::Failure)
        }
    }
}

fn print_album(album: &AlbumInfo, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "* Album name: {}", album.name)?;
    writeln!(out, "* Album description: {}", album.description)?;
    writeln!(out, "* Files in album:")?;
    for (name, file) in &album.files {
        writeln!(
            out,
            "- {}: URL: {} SHA-1: {}",
            name,
            file.url,
            file.sha1().unwrap_or("-")
        )?;
    }
    Ok(())
}
