//! Demo route files: one `lat,lng` pair per line.

use std::path::Path;

use carsim_errors::ConfigError;
use carsim_geodesy::GeoPoint;

/// Parse a route file body. Blank lines are skipped.
///
/// # Errors
///
/// [`ConfigError::Parse`] naming the first malformed line.
pub fn parse_route(content: &str, path: &Path) -> Result<Vec<GeoPoint>, ConfigError> {
    let parse_error = |line_no: usize, message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        message: format!("line {line_no}: {message}"),
    };

    let mut points = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line_no = index.saturating_add(1);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((lat, lng)) = line.split_once(',') else {
            return Err(parse_error(line_no, format!("expected 'lat,lng', got '{line}'")));
        };
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|e| parse_error(line_no, format!("latitude: {e}")))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|e| parse_error(line_no, format!("longitude: {e}")))?;
        points.push(GeoPoint::new(lat, lng));
    }
    Ok(points)
}

/// Read and parse a route file.
///
/// # Errors
///
/// [`ConfigError::Io`] if the file cannot be read, otherwise as
/// [`parse_route`].
pub fn read_route(path: &Path) -> Result<Vec<GeoPoint>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_route(&content, path)
}
