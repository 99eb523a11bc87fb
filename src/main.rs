use open_postcode_rs::{OpenPostcodeError, PostcodeCell, decode, encode, validate};

fn main() -> Result<(), OpenPostcodeError> {
    let lat = 53.3498;
    let lon = -6.2603;

    let postcode = encode(lat, lon, 8, true)?;
    println!("Postcode: {}", postcode);
    println!("Grouped: {}", postcode.grouped(4));
    println!("Valid: {}", validate(&postcode.grouped(4))?);

    let [decoded_lat, decoded_lon] = decode(&postcode.to_string())?;
    println!("Center: ({}, {})", decoded_lat, decoded_lon);

    let cell = PostcodeCell::from_postcode(&postcode.to_string())?;
    println!("Polygon: {:?}", cell.to_polygon()?);

    match encode(0.0, 0.0, 6, false) {
        Ok(postcode) => println!("Null Island: {}", postcode),
        Err(err) => println!("Null Island: {}", err),
    }

    Ok(())
}
