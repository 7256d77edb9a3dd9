use geohash_rs::{GeohashCell, GeohashError, bounding_box, decode, distance, encode, neighbors};

fn main() -> Result<(), GeohashError> {
    env_logger::init();

    let lon = 104.061029;
    let lat = 30.543534;

    let hash = encode(lon, lat)?;
    println!("Geohash: {}", hash);

    let center = decode(&hash)?;
    println!("Center: ({}, {})", center.longitude(), center.latitude());

    println!("Neighbors: {:?}", neighbors(&hash)?);

    let meters = distance(104.061029, 30.543533, 104.061029, 30.552567)?;
    println!("Distance: {:.3} m", meters);

    let bbox = bounding_box(1000.0, lon, lat)?;
    println!(
        "1 km box: lng [{}, {}], lat [{}, {}]",
        bbox.min_lng, bbox.max_lng, bbox.min_lat, bbox.max_lat
    );

    let cell = GeohashCell::from_hash(&hash)?;
    println!("Cell polygon: {}", cell.to_wkt());

    Ok(())
}
