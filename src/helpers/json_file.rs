use std::{fs, io, path::Path};

use serde::Serialize;
use serde_json::{Map, Value};

/// Reads a JSON file.
///
/// A file that exists but does not hold valid JSON reads as an empty object;
/// callers then fail on the first required key they look up.
pub fn read_json(path: &Path) -> io::Result<Value> {
    let raw = fs::read_to_string(path)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            log::error!("{} is not valid JSON: {}", path.display(), e);
            Ok(Value::Object(Map::new()))
        }
    }
}

/// Replaces the whole file with the JSON encoding of `value`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> io::Result<()> {
    let encoded = serde_json::to_vec(value).map_err(io::Error::other)?;
    fs::write(path, encoded)
}
