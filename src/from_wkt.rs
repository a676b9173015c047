use crate::errors::InputError;
use crate::Coordinate;
use wkt::types;
use wkt::types::Coord;

impl From<Coord<f64>> for Coordinate {
    fn from(coord: Coord<f64>) -> Self {
        Coordinate {
            x: coord.x,
            y: coord.y,
        }
    }
}

fn point_to_position(point: types::Point<f64>) -> Option<Coordinate> {
    Some(point.0?.into())
}

fn linestring_to_positions(linestring: types::LineString<f64>) -> Vec<Coordinate> {
    linestring.0.into_iter().map(Coordinate::from).collect()
}

/**
 * Read taxi locations from a WKT document.
 *
 * Points and multipoints contribute their positions; linestrings contribute
 * their vertices, in order.  Empty points are skipped.  Other geometries are
 * rejected.
 */
pub fn parse_wkt_points(wkt_str: &str) -> Result<Vec<Coordinate>, InputError> {
    let wkt_geoms =
        wkt::Wkt::<f64>::from_str(wkt_str).map_err(|e| InputError::Wkt(e.to_string()))?;
    let mut positions = Vec::new();
    for geom in wkt_geoms.items {
        collect_positions(geom, &mut positions)?;
    }
    Ok(positions)
}

fn collect_positions(
    geom: wkt::Geometry<f64>,
    positions: &mut Vec<Coordinate>,
) -> Result<(), InputError> {
    match geom {
        wkt::Geometry::Point(p) => positions.extend(point_to_position(p)),
        wkt::Geometry::MultiPoint(mp) => {
            positions.extend(mp.0.into_iter().filter_map(point_to_position))
        }
        wkt::Geometry::LineString(ls) => positions.extend(linestring_to_positions(ls)),
        wkt::Geometry::MultiLineString(mls) => positions.extend(
            mls.0
                .into_iter()
                .flat_map(|ls| linestring_to_positions(ls).into_iter()),
        ),
        _ => {
            return Err(InputError::Wkt(
                "only POINT, MULTIPOINT and LINESTRING geometries hold locations".to_string(),
            ))
        }
    }
    Ok(())
}
