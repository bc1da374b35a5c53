use crate::edges::{explicit_edges, linear_edges, log_edges, width_edges};
use histobin_common::{BinningConfig, HistobinError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub range_start: f64,
    pub range_end: f64,
    pub count: u64,
}

/// Fixed set of half-open bins `[edges[i], edges[i + 1])` with a tally per bin.
///
/// Values at or below `vmin` are counted in the first bin and values above
/// `vmax` in the last, so every observation lands somewhere. The layout is
/// fixed at construction; only the counts change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    log_scale: bool,
    bin_width: f64,
    vmin: f64,
    vmax: f64,
    edges: Vec<f64>,
    counts: Vec<u64>,
}

impl Histogram {
    fn new(edges: Vec<f64>, vmin: f64, vmax: f64, bin_width: f64, log_scale: bool) -> Self {
        let bins = edges.len() - 1;
        debug!("histogram: {bins} bins over [{vmin}, {vmax}], log_scale={log_scale}");
        Self {
            log_scale,
            bin_width,
            vmin,
            vmax,
            edges,
            counts: vec![0; bins],
        }
    }

    pub fn with_bin_count(vmin: f64, vmax: f64, bins: usize, log_scale: bool) -> Result<Self> {
        let edges = linear_edges(vmin, vmax, bins)?;
        let width = (vmax - vmin) / bins as f64;
        Ok(Self::new(edges, vmin, vmax, width, log_scale))
    }

    /// Bins exactly `width` wide starting at `vmin`, as many as needed to
    /// reach `vmax`. The last edge may overshoot `vmax`.
    pub fn with_bin_width(vmin: f64, vmax: f64, width: f64, log_scale: bool) -> Result<Self> {
        let edges = width_edges(vmin, vmax, width)?;
        Ok(Self::new(edges, vmin, vmax, width, log_scale))
    }

    /// Bins from caller-supplied edges, sorted and deduplicated first.
    /// `bin_width` reports the first gap only.
    pub fn from_edges(edges: impl IntoIterator<Item = f64>) -> Result<Self> {
        let edges = explicit_edges(edges)?;
        let vmin = edges[0];
        let vmax = edges[edges.len() - 1];
        let width = edges[1] - edges[0];
        Ok(Self::new(edges, vmin, vmax, width, false))
    }

    pub fn from_config(cfg: &BinningConfig, vmin: f64, vmax: f64) -> Result<Self> {
        Self::with_bin_count(vmin, vmax, cfg.bins, cfg.log_scale)
    }

    /// Regular bins spanning the finite min/max of `values`, populated with them.
    pub fn auto_range(values: &[f64], bins: usize) -> Result<Self> {
        let (min, max) = values
            .iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        if min > max {
            return Err(HistobinError::invalid("no finite values to derive a range from"));
        }
        Ok(Self::with_bin_count(min, max, bins, false)?.with_values(values.iter().copied()))
    }

    pub fn with_values(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.observe_all(values);
        self
    }

    /// Index of the bin a value is counted in.
    ///
    /// Bins are lower-inclusive, so a value sitting on an internal edge
    /// belongs to the bin that edge opens. Out-of-domain values clamp to the
    /// first or last bin; NaN clamps to the first.
    pub fn find_index(&self, value: f64) -> usize {
        let last = self.counts.len() - 1;
        if value.is_nan() || value <= self.vmin {
            return 0;
        }
        if value > self.vmax {
            return last;
        }
        // the final edge closes the last bin and never opens one
        let opening = &self.edges[..self.edges.len() - 1];
        let above = opening.partition_point(|&e| e <= value);
        above.saturating_sub(1).min(last)
    }

    pub fn observe(&mut self, value: f64) {
        let idx = self.find_index(value);
        self.counts[idx] += 1;
    }

    pub fn observe_all(&mut self, values: impl IntoIterator<Item = f64>) {
        for v in values {
            self.observe(v);
        }
    }

    pub fn vmin(&self) -> f64 {
        self.vmin
    }

    pub fn vmax(&self) -> f64 {
        self.vmax
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    pub fn log_scale(&self) -> bool {
        self.log_scale
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn edge(&self, idx: usize) -> Option<f64> {
        self.edges.get(idx).copied()
    }

    pub fn count(&self, idx: usize) -> Option<u64> {
        self.counts.get(idx).copied()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn bins(&self) -> Vec<HistogramBin> {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(w, &count)| HistogramBin {
                range_start: w[0],
                range_end: w[1],
                count,
            })
            .collect()
    }

    // log-uniform edges for the same domain; lookup keeps the stored edges
    pub fn log_edges(&self) -> Result<Vec<f64>> {
        log_edges(self.vmin, self.vmax, self.bin_count())
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        crate::export::write_csv(self, path)
    }
}
