//! Text data file parsing and background loading.
//!
//! Each non-empty, trimmed line is either `y` (x is the 0-based index of the
//! line among non-empty lines) or `x y`. Any malformed token fails the whole
//! load; callers only ever see a complete series or an error.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use super::DataSeries;
use crate::error::{PlotError, Result};

/// A successfully parsed data file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedData {
    /// Points for interpolation, sorted by x.
    pub series: DataSeries,
    /// Raw y-values in file order, for the histogram.
    pub values: Vec<f64>,
}

/// Parse the text of a data file.
pub fn parse(text: &str) -> Result<LoadedData> {
    let mut points = Vec::new();
    let mut values = Vec::new();

    let lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    for (index, (line_no, line)) in lines.enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let (x, y) = match fields.as_slice() {
            [y] => (index as f64, parse_number(line_no, y)?),
            [x, y] => (parse_number(line_no, x)?, parse_number(line_no, y)?),
            _ => {
                return Err(PlotError::Format {
                    line: line_no,
                    fields: fields.len(),
                })
            },
        };
        points.push((x, y));
        values.push(y);
    }

    Ok(LoadedData {
        series: DataSeries::new(points),
        values,
    })
}

fn parse_number(line: usize, token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(PlotError::parse(line, token)),
    }
}

/// Read and parse a data file.
pub fn read_file(path: &Path) -> Result<LoadedData> {
    let text =
        std::fs::read_to_string(path).map_err(|e| PlotError::file_open(path.to_path_buf(), e))?;
    let data = parse(&text)?;
    tracing::info!(
        "Parsed {} points from {}",
        data.series.len(),
        path.display()
    );
    Ok(data)
}

/// A data file being read on a worker thread.
#[derive(Debug)]
pub struct PendingLoad {
    path: PathBuf,
    rx: Receiver<Result<LoadedData>>,
}

impl PendingLoad {
    /// Start reading `path` off the calling thread.
    pub fn spawn(path: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();
        let worker_path = path.clone();
        thread::spawn(move || {
            // The receiver may have been dropped; nothing to do then.
            let _ = tx.send(read_file(&worker_path));
        });
        Self { path, rx }
    }

    /// The file being loaded.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Take the result if the worker has finished.
    pub fn try_take(&self) -> Option<Result<LoadedData>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(PlotError::LoaderDisconnected)),
        }
    }

    /// Block until the worker has finished.
    pub fn wait(self) -> Result<LoadedData> {
        self.rx.recv().map_err(|_| PlotError::LoaderDisconnected)?
    }
}
