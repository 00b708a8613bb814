//! Load a set of points from a csv file.
//!
//! The file has no header, one point by line, numeric fields separated by a comma.


use anyhow::{anyhow, Context};

use std::fs::OpenOptions;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::SymNmfError;
use crate::vectors::VectorSet;


/// reads points from any reader. All records must have the same number of fields.
pub fn vectors_from_reader<R: Read>(reader: R) -> anyhow::Result<VectorSet<f64>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    //
    let mut rows = Vec::<Vec<f64>>::new();
    for (nb_record, result) in rdr.deserialize::<Vec<f64>>().enumerate() {
        let record = result.with_context(|| format!("could not decode record {}", nb_record))?;
        if let Some(first) = rows.first() {
            if first.len() != record.len() {
                log::error!(
                    "record {} has {} fields, expected {}",
                    nb_record,
                    record.len(),
                    first.len()
                );
                return Err(anyhow::Error::new(SymNmfError::DimensionMismatch {
                    expected: first.len(),
                    found: record.len(),
                }));
            }
        }
        rows.push(record);
    }
    if rows.is_empty() {
        return Err(anyhow::Error::new(SymNmfError::InvalidDimensions(
            String::from("no point in csv data"),
        )));
    }
    log::debug!("read {} points of dimension {}", rows.len(), rows[0].len());
    let vectors = VectorSet::from_rows(&rows)?;
    Ok(vectors)
} // end of vectors_from_reader


/// load points from a csv file
pub fn load_vectors(filepath: &Path) -> anyhow::Result<VectorSet<f64>> {
    //
    let fileres = OpenOptions::new().read(true).open(filepath);
    if fileres.is_err() {
        log::error!("load_vectors : could not open file {:?}", filepath.as_os_str());
        return Err(anyhow!("load_vectors could not open file {:?}", filepath.as_os_str()));
    }
    let file = fileres?;
    log::info!("loading vectors from {:?}", filepath);
    vectors_from_reader(BufReader::new(file))
} // end of load_vectors


// end of mod tests
