use geo_evidence::{Coordinate, GeoFence, ImageEvidence};
use std::path::Path;

/// Validate a single photo against a ward location and print the outcome as JSON.
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let ward: Coordinate = "SRID=4326;POINT (28.2833 -15.4166)".parse()?;
    let fence = GeoFence::builder().reference(ward).range_km(4.0).build()?;

    let path = Path::new("assets/site_visit.jpg");
    let image = ImageEvidence::from_path(path)?;
    let outcome = fence.validate(&[image]);
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
