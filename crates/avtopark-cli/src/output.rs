//! Output formatting module

use avtopark_domain::model::CreationOutcome;
use avtopark_domain::service::report;
use avtopark_domain::service::registry::known_types;
use avtopark_types::{OutputFormat, Result, VehicleKind};
use serde::Serialize;

/// One wired registry entry, as exposed by `list --format json`
#[derive(Serialize)]
struct KindEntry {
    kind: VehicleKind,
    label: &'static str,
}

pub fn output_outcome(output_format: OutputFormat, outcome: &CreationOutcome) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(outcome)?;
        println!("{}", content);
    } else {
        println!("{}", report::creation_line(outcome));
    }

    Ok(())
}

pub fn output_listing(output_format: OutputFormat) -> Result<()> {
    if output_format == OutputFormat::Json {
        let entries: Vec<KindEntry> = known_types()
            .map(|kind| KindEntry {
                kind,
                label: kind.label(),
            })
            .collect();
        let content = serde_json::to_string_pretty(&entries)?;
        println!("{}", content);
    } else {
        print!("{}", report::registry_listing());
    }

    Ok(())
}
