use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::info;

use geocol_catalog::{CatalogSet, load_catalog_set};
use geocol_cli::report::{read_header_row, run_detection};

use crate::cli::{CatalogsArgs, DetectArgs, OutputArg};
use crate::summary::{apply_table_style, print_detections};

pub fn run_detect(args: &DetectArgs) -> Result<()> {
    let catalogs = load_catalogs(args.catalog.as_deref())?;
    let delimiter = delimiter_byte(args.delimiter)?;
    let headers = read_header_row(&args.file, delimiter)?;
    info!(
        file = %args.file.display(),
        header_count = headers.len(),
        "scanning header row"
    );
    let report = run_detection(&catalogs, &headers);
    match args.output {
        OutputArg::Table => print_detections(&report),
        OutputArg::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("serialize detection report")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_catalogs(args: &CatalogsArgs) -> Result<()> {
    let catalogs = load_catalogs(args.catalog.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Semantic", "Special", "Long", "Short"]);
    apply_table_style(&mut table);
    for (semantic, catalog) in catalogs.entries() {
        table.add_row(vec![
            semantic.label().to_string(),
            catalog.special.join(", "),
            catalog.long.join(", "),
            catalog.short.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn load_catalogs(path: Option<&Path>) -> Result<CatalogSet> {
    match path {
        Some(path) => {
            let catalogs = load_catalog_set(path)
                .with_context(|| format!("load catalog file {}", path.display()))?;
            info!(catalog = %path.display(), "using catalog overrides");
            Ok(catalogs)
        }
        None => Ok(CatalogSet::builtin()),
    }
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got '{delimiter}'");
    }
    Ok(delimiter as u8)
}
