// src/app.rs
use std::{
    io::{self, BufWriter},
    path::Path,
};

use anyhow::{Context, Result};
use log::info;
use row_index_filter_domain::{FilterSettings, ParseTiming};
use row_index_filter_infra::{SettingsReader, TextRowSource};
use row_index_filter_ports::rows::RowInput;
use row_index_filter_shared_kernel::PresentationError;
use row_index_filter_usecase::SelectRows;

use crate::{cli::Args, filter_from_settings, output::write_selection};

/// Runs one CLI invocation: resolve settings, filter the input, print the kept rows.
pub fn run(args: Args) -> Result<()> {
    let settings = resolve_settings(&args)?;
    let mut filter = filter_from_settings(&settings)?;
    info!("filtering with [{filter}] ({} parse)", settings.parse_timing);

    let input = row_input(args.input.as_deref());
    let source = TextRowSource::new();
    let selection = SelectRows::new(&source).run(&input, &mut filter)?;
    info!(
        "kept {} of {} rows",
        selection.rows.len(),
        selection.evaluated
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_selection(&mut out, &selection, args.format.into())
        .map_err(|source| PresentationError::Output { source })?;
    Ok(())
}

fn resolve_settings(args: &Args) -> Result<FilterSettings> {
    let base = match &args.config {
        Some(path) => SettingsReader::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => FilterSettings::default(),
    };
    let timing = args.eager.then_some(ParseTiming::Eager);
    Ok(base.merged_with(args.indexes.clone(), timing))
}

fn row_input(path: Option<&Path>) -> RowInput {
    match path {
        Some(path) if path != Path::new("-") => RowInput::Path(path.to_path_buf()),
        _ => RowInput::Stdin,
    }
}
