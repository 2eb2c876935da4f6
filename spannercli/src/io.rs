//! reads labelled points from csv.
//!
//! The csv file must have a header line `label,x,y` and one point by record.

use anyhow::{Context, anyhow};
use serde::Deserialize;
use std::fs::OpenOptions;
use std::io::BufReader;
use std::io::prelude::*;
use std::path::Path;

use greedyspanner::prelude::*;

#[derive(Debug, Deserialize)]
struct PointRecord {
    label: String,
    x: f64,
    y: f64,
}

/// reads points from a csv reader. Fails on first malformed record, duplicated label or non finite coordinate.
pub fn read_points_csv(bufreader: &mut dyn Read) -> anyhow::Result<PointSet<f64>> {
    //
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bufreader);
    //
    let mut points = PointSet::<f64>::with_capacity(100);
    for (num_record, result) in rdr.deserialize::<PointRecord>().enumerate() {
        let record = result.with_context(|| format!("decoding record {}", num_record + 1))?;
        points
            .insert(record.label, [record.x, record.y])
            .map_err(|e| anyhow!("record {} : {}", num_record + 1, e))?;
    }
    log::info!("read_points_csv loaded {} points", points.len());
    //
    Ok(points)
} // end of read_points_csv

/// load points from a csv file
pub fn load_points(path: &Path) -> anyhow::Result<PointSet<f64>> {
    log::info!("loading points from {:?}", path);
    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .with_context(|| format!("cannot open points file {:?}", path))?;
    let mut bufreader = BufReader::new(file);
    read_points_csv(&mut bufreader)
}

//========================================================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_read_csv() {
        log_init_test();
        //
        let data = "label,x,y\nBern, 7.44, 46.95\nSt Gallen,9.37,47.42\n";
        let points = read_points_csv(&mut data.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points.get_position("St Gallen"), Some(&[9.37, 47.42]));
        assert_eq!(points.get_rank("Bern"), Some(0));
    }

    #[test]
    fn test_bad_csv() {
        log_init_test();
        //
        let data = "label,x,y\na,0,0\na,1,1\n";
        assert!(read_points_csv(&mut data.as_bytes()).is_err());
        let data = "label,x,y\na,0,zero\n";
        assert!(read_points_csv(&mut data.as_bytes()).is_err());
        let data = "label,x,y\na,NaN,0\n";
        assert!(read_points_csv(&mut data.as_bytes()).is_err());
    }

    #[test]
    fn test_load_towns() {
        log_init_test();
        //
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/towns.csv");
        let points = load_points(&path).unwrap();
        assert_eq!(points.len(), 8);
        let spanner = greedy_spanner(&points, 1.2).unwrap();
        assert!(spanner.is_connected());
        let report = DilationReport::compute(&points, &spanner).unwrap();
        assert!(report.is_t_spanner(1.2, SpannerParams::default().get_tolerance()));
        //
        assert!(load_points(Path::new("no/such/file.csv")).is_err());
    }
} // end of mod tests
