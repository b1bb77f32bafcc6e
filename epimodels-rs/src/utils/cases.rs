use crate::{error::Result, prelude::Real};
use serde::Deserialize;
use std::{io, path::Path};

/// Number of confirmed cases observed at a given day. Missing observations
/// are stored as None.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Observation {
    pub day: usize,
    pub cases: Option<Real>,
}

/// Read observations from a CSV file with a `day,cases` header. Empty or NaN
/// cells are missing observations.
pub fn read_cases<P: AsRef<Path>>(path: P) -> Result<Vec<Observation>> {
    let file = std::fs::File::open(path)?;
    read_cases_from(file)
}

/// Like read_cases(), but from any reader.
pub fn read_cases_from<R: io::Read>(reader: R) -> Result<Vec<Observation>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut out = vec![];
    for res in rdr.deserialize() {
        let mut obs: Observation = res?;
        obs.cases = obs.cases.filter(|x| !x.is_nan());
        out.push(obs);
    }
    Ok(out)
}

/// Difference between simulated and observed values at each day with data.
/// Days past the end of the simulated series are skipped.
pub fn residuals(observed: &[Observation], simulated: &[Real]) -> Vec<(usize, Real)> {
    observed
        .iter()
        .filter_map(|obs| {
            let cases = obs.cases?;
            let sim = simulated.get(obs.day)?;
            Some((obs.day, sim - cases))
        })
        .collect()
}
