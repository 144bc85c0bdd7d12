use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use geojson::{FeatureCollection, GeoJson};
use serde_json::Value;
use tracing::info;

use crate::core::polygon::property_text;
use crate::parsing::regions::TABLE_NAME_MEMBER;

/// Properties projected into the table, in column order
pub const TABLE_PROPERTIES: [&str; 4] = ["id", "fqid", "name", "usercode"];

#[derive(Args)]
pub struct PolygonTableArgs {
    /// The regions GeoJSON file
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Execute the polygon-table subcommand: a straight projection of each
/// feature's identifying properties, one CSV row per polygon. When the
/// document carries a `table-name`, the id column is renamed `<name>-id`.
///
/// # Errors
///
/// Returns an error when the document cannot be read or parsed.
pub fn run(args: PolygonTableArgs) -> anyhow::Result<()> {
    info!("loading {}", args.input.display());
    let content = std::fs::read_to_string(&args.input)?;
    let geojson: GeoJson = content.parse()?;
    let collection = FeatureCollection::try_from(geojson)?;
    info!("done loading {}", args.input.display());

    let table_name = collection
        .foreign_members
        .as_ref()
        .and_then(|members| members.get(TABLE_NAME_MEMBER))
        .and_then(Value::as_str);

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = csv::Writer::from_writer(sink);

    let header: Vec<String> = TABLE_PROPERTIES
        .iter()
        .map(|property| match (table_name, *property) {
            (Some(name), "id") => format!("{name}-id"),
            _ => (*property).to_string(),
        })
        .collect();
    writer.write_record(&header)?;

    for feature in &collection.features {
        let row: Vec<String> = TABLE_PROPERTIES
            .iter()
            .map(|property| {
                property_text(feature.properties.as_ref().and_then(|p| p.get(*property)))
            })
            .collect();
        writer.write_record(&row)?;
    }
    writer.flush()?;

    Ok(())
}
