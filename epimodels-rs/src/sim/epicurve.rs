use crate::{
    error::Result,
    prelude::{Real, Time},
};
use std::{io, iter, path::Path};

/// Time series of compartment values, one row per recorded step.
#[derive(Clone, Debug, PartialEq)]
pub struct Epicurve<const N: usize> {
    labels: [&'static str; N],
    times: Vec<Time>,
    rows: Vec<[Real; N]>,
}

impl<const N: usize> Epicurve<N> {
    /// Create an empty curve with the given column labels.
    pub fn new(labels: [&'static str; N]) -> Self {
        Epicurve {
            labels,
            times: vec![],
            rows: vec![],
        }
    }

    /// Append a new row.
    pub fn push(&mut self, time: Time, row: [Real; N]) {
        self.times.push(time);
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn labels(&self) -> &[&'static str; N] {
        &self.labels
    }

    /// Time of each row.
    pub fn times(&self) -> &[Time] {
        self.times.as_slice()
    }

    /// Return the i-th row.
    pub fn row(&self, i: usize) -> Option<[Real; N]> {
        self.rows.get(i).copied()
    }

    /// Return the i-th column.
    pub fn col(&self, i: usize) -> Option<Vec<Real>> {
        if i >= N {
            return None;
        }
        Some(self.rows.iter().map(|row| row[i]).collect())
    }

    /// Return the last row.
    pub fn tip(&self) -> Option<[Real; N]> {
        self.rows.last().copied()
    }

    /// Index and value of the maximum of the i-th column. Ties resolve to the
    /// earliest row.
    pub fn peak(&self, i: usize) -> Option<(usize, Real)> {
        if i >= N {
            return None;
        }
        let mut best: Option<(usize, Real)> = None;
        for (k, row) in self.rows.iter().enumerate() {
            let x = row[i];
            match best {
                Some((_, y)) if x <= y => {}
                _ => best = Some((k, x)),
            }
        }
        return best;
    }

    /// Sum of the given columns at each row. With I and R this gives the
    /// cumulated number of cases.
    pub fn cumulative(&self, cols: &[usize]) -> Vec<Real> {
        self.rows
            .iter()
            .map(|row| cols.iter().filter_map(|&c| row.get(c)).sum())
            .collect()
    }

    /// Estimate fatalities as a fixed fraction of the given (removed) column.
    pub fn fatalities(&self, col: usize, mortality_ratio: Real) -> Vec<Real> {
        self.cumulative(&[col])
            .into_iter()
            .map(|x| x * mortality_ratio)
            .collect()
    }

    /// Write curve as CSV with a leading time column.
    pub fn to_writer<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(iter::once("time").chain(self.labels.iter().copied()))?;
        for (t, row) in self.times.iter().zip(self.rows.iter()) {
            let record = iter::once(t.to_string()).chain(row.iter().map(|x| x.to_string()));
            wtr.write_record(record)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Render curve as CSV data.
    pub fn render_csv(&self) -> Result<String> {
        let mut data = Vec::new();
        self.to_writer(&mut data)?;
        Ok(String::from_utf8_lossy(&data).into_owned())
    }

    /// Write CSV data to file.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.to_writer(io::BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> Epicurve<3> {
        let mut curve = Epicurve::new(["S", "I", "R"]);
        curve.push(0.0, [9.0, 1.0, 0.0]);
        curve.push(1.0, [7.0, 2.5, 0.5]);
        curve.push(2.0, [6.0, 2.5, 1.5]);
        curve.push(3.0, [5.5, 1.5, 3.0]);
        curve
    }

    #[test]
    fn rows_and_cols() {
        let curve = curve();
        assert_eq!(curve.len(), 4);
        assert_eq!(curve.row(1), Some([7.0, 2.5, 0.5]));
        assert_eq!(curve.row(4), None);
        assert_eq!(curve.col(2), Some(vec![0.0, 0.5, 1.5, 3.0]));
        assert_eq!(curve.col(3), None);
        assert_eq!(curve.tip(), Some([5.5, 1.5, 3.0]));
        assert_eq!(curve.times(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn peak_prefers_first_maximum() {
        let curve = curve();
        assert_eq!(curve.peak(1), Some((1, 2.5)));
        assert_eq!(curve.peak(7), None);
        assert_eq!(Epicurve::<3>::new(["S", "I", "R"]).peak(1), None);
    }

    #[test]
    fn derived_series() {
        let curve = curve();
        assert_eq!(curve.cumulative(&[1, 2]), vec![1.0, 3.0, 4.0, 4.5]);
        assert_eq!(curve.fatalities(2, 0.5), vec![0.0, 0.25, 0.75, 1.5]);
    }

    #[test]
    fn render_csv() {
        let mut curve = Epicurve::new(["S", "I", "R"]);
        curve.push(0.0, [9.0, 1.0, 0.0]);
        curve.push(1.0, [8.5, 1.25, 0.25]);
        let data = curve.render_csv().unwrap();
        assert_eq!(data, "time,S,I,R\n0,9,1,0\n1,8.5,1.25,0.25\n");
    }

    #[test]
    fn write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("epicurve.csv");
        curve().write_csv(&path).unwrap();
        let data = std::fs::read_to_string(&path).unwrap();
        assert_eq!(data.lines().count(), 5);
        assert!(data.starts_with("time,S,I,R\n"));
    }
}
