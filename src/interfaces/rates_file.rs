use crate::domain::rates::RateTable;
use crate::error::Result;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Loads the initial rate table from a JSON object mapping pair keys to
/// rates, e.g. `{"USD_TO_EUR": 0.92, "USD_TO_KZT": 470.5}`.
pub fn load_rates(path: &Path) -> Result<RateTable> {
    let file = File::open(path)?;
    let table = serde_json::from_reader(BufReader::new(file))?;
    Ok(table)
}
