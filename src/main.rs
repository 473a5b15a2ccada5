use hexgeo_rs::{HexCellsToFeatures, HexGeoError, HexGrid};

fn main() -> Result<(), HexGeoError> {
    // Alexanderplatz against a Berlin-wide grid of 250 m cells
    let grid = HexGrid::new(52.52, 13.405, 250.0)?;

    let cell = grid.locate(&(13.4132, 52.5219))?;

    println!("Cell ID: {}", cell.id);
    println!("Axial: ({}, {})", cell.q, cell.r);
    println!("Center: ({}, {})", cell.lon(), cell.lat());

    let polygon = cell.to_polygon()?;
    println!("Boundary: {:?}", polygon.exterior());

    let neighborhood = grid.cells_in_range(cell.q, cell.r, 1)?;
    let collection = neighborhood.to_feature_collection()?;
    println!(
        "{} features around the cell",
        collection.features.len()
    );

    Ok(())
}
