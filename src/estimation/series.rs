use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

use serde::Serialize;

use crate::estimation::{Summary, summarize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesFormat {
    Csv,
    Tsv,
    Json,
}

impl SeriesFormat {
    /// Picks a format from the file extension (`csv`, `tsv`, `json`).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "tsv" => Some(Self::Tsv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Ordered estimates from repeated estimator runs, in call order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EstimateSeries {
    estimates: Vec<f64>,
}

impl EstimateSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            estimates: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, estimate: f64) {
        self.estimates.push(estimate)
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.estimates
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.estimates.iter().copied()
    }

    pub fn latest(&self) -> Option<f64> {
        self.estimates.last().copied()
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.estimates)
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: SeriesFormat) -> Result<(), Error> {
        match fmt {
            SeriesFormat::Csv => self.export_with_delimiter(path, ','),
            SeriesFormat::Tsv => self.export_with_delimiter(path, '\t'),
            SeriesFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(w, "index{d}estimate", d = delimiter)?;
        for (i, v) in self.estimates.iter().enumerate() {
            writeln!(w, "{}{d}{:.12}", i, v, d = delimiter)?;
        }
        w.flush()
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut w, self).map_err(Error::other)?;
        writeln!(w)?;
        w.flush()
    }
}

impl From<Vec<f64>> for EstimateSeries {
    fn from(estimates: Vec<f64>) -> Self {
        Self { estimates }
    }
}

impl FromIterator<f64> for EstimateSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            estimates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    fn sample() -> EstimateSeries {
        EstimateSeries::from(vec![3.0, 3.25])
    }

    #[test]
    fn default_is_empty_and_latest_none() {
        let s = EstimateSeries::default();
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
        assert!(s.latest().is_none());
        assert_eq!(s.summary().mean, 0.0);
    }

    #[test]
    fn push_keeps_call_order() {
        let mut s = EstimateSeries::with_capacity(3);
        s.push(3.1);
        s.push(2.9);
        s.push(3.3);
        assert_eq!(s.values(), &[3.1, 2.9, 3.3]);
        assert_eq!(s.latest(), Some(3.3));
        assert_eq!(s.iter().count(), 3);
    }

    #[test]
    fn export_csv_with_two_rows() {
        let tf = NamedTempFile::new().unwrap();
        sample().export(tf.path(), SeriesFormat::Csv).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
index,estimate
0,3.000000000000
1,3.250000000000
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_tsv_with_two_rows() {
        let tf = NamedTempFile::new().unwrap();
        sample().export(tf.path(), SeriesFormat::Tsv).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
index\testimate
0\t3.000000000000
1\t3.250000000000
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_json_with_two_rows() {
        let tf = NamedTempFile::new().unwrap();
        sample().export(tf.path(), SeriesFormat::Json).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        assert_eq!(got, "{\"estimates\":[3.0,3.25]}\n");
    }

    #[test]
    fn export_empty_csv_and_json() {
        let s = EstimateSeries::default();

        let tf_csv = NamedTempFile::new().unwrap();
        s.export(tf_csv.path(), SeriesFormat::Csv).unwrap();
        assert_eq!(fs::read_to_string(tf_csv.path()).unwrap(), "index,estimate\n");

        let tf_json = NamedTempFile::new().unwrap();
        s.export(tf_json.path(), SeriesFormat::Json).unwrap();
        assert_eq!(
            fs::read_to_string(tf_json.path()).unwrap(),
            "{\"estimates\":[]}\n"
        );
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(SeriesFormat::from_path("a/b.csv"), Some(SeriesFormat::Csv));
        assert_eq!(SeriesFormat::from_path("b.TSV"), Some(SeriesFormat::Tsv));
        assert_eq!(SeriesFormat::from_path("b.json"), Some(SeriesFormat::Json));
        assert_eq!(SeriesFormat::from_path("b.txt"), None);
        assert_eq!(SeriesFormat::from_path("noext"), None);
    }
}
