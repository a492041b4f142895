use std::io::Write;

use anyhow::{Context, Error};

use crate::config::Layout;
use crate::error::DotfilesError;

pub fn handle_list<W: Write>(layout: &Layout, verbose: bool, out: &mut W) -> Result<(), Error> {
    if verbose {
        return Err(DotfilesError::VerboseListNotImplemented.into());
    }

    for name in layout.listed_names()? {
        writeln!(out, "{name}").context("Failed to write repo list")?;
    }

    Ok(())
}
