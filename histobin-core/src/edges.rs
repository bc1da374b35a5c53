//! Bin-edge generators.
//!
//! Every generator follows one convention: `n` bins are described by `n + 1`
//! strictly increasing edges, and bin `i` is the half-open interval
//! `[edges[i], edges[i + 1])`.

use histobin_common::{HistobinError, Result};
use log::warn;

// Upper bound on width-derived bin counts; edges and counts together cost
// 16 bytes per bin.
const MAX_BINS: usize = 1 << 24;

/// `num + 1` evenly spaced edges from `vmin` to `vmax`, each computed as
/// `vmin + i * h` rather than by accumulation.
pub fn linspace(vmin: f64, vmax: f64, num: usize) -> Vec<f64> {
    if num == 0 {
        return vec![vmin];
    }
    let h = (vmax - vmin) / num as f64;
    (0..=num).map(|i| vmin + i as f64 * h).collect()
}

pub fn logspace(vmin: f64, vmax: f64, num: usize) -> Vec<f64> {
    let lo = vmin.log10();
    if num == 0 {
        return vec![vmin];
    }
    let h = (vmax.log10() - lo) / num as f64;
    (0..=num).map(|i| 10f64.powf(lo + i as f64 * h)).collect()
}

fn check_range(vmin: f64, vmax: f64) -> Result<()> {
    if !vmin.is_finite() || !vmax.is_finite() {
        return Err(HistobinError::invalid(format!(
            "range bounds must be finite, got [{vmin}, {vmax}]"
        )));
    }
    if vmax <= vmin {
        return Err(HistobinError::invalid(format!(
            "vmax must exceed vmin, got [{vmin}, {vmax}]"
        )));
    }
    if !(vmax - vmin).is_finite() {
        return Err(HistobinError::invalid(format!(
            "range [{vmin}, {vmax}] is too wide to split"
        )));
    }
    Ok(())
}

/// Edges for `count` equal-width bins covering `[vmin, vmax]`.
pub fn linear_edges(vmin: f64, vmax: f64, count: usize) -> Result<Vec<f64>> {
    if count == 0 {
        return Err(HistobinError::invalid("bin count must be positive"));
    }
    check_range(vmin, vmax)?;
    let edges = linspace(vmin, vmax, count);
    if edges.windows(2).any(|w| w[1] <= w[0]) {
        return Err(HistobinError::invalid(format!(
            "range [{vmin}, {vmax}] is too narrow for {count} bins"
        )));
    }
    Ok(edges)
}

fn too_many_bins(vmin: f64, vmax: f64, width: f64) -> HistobinError {
    HistobinError::invalid(format!(
        "bin width {width} yields more than {MAX_BINS} bins over [{vmin}, {vmax}]"
    ))
}

/// Number of `width`-sized bins needed to cover `[vmin, vmax]`.
///
/// A quotient pushed just past a whole number by rounding
/// only keeps the extra bin if the smaller count would fall short of `vmax`.
pub fn bins_for_width(vmin: f64, vmax: f64, width: f64) -> Result<usize> {
    if !width.is_finite() || width <= 0.0 {
        return Err(HistobinError::invalid(format!(
            "bin width must be positive, got {width}"
        )));
    }
    check_range(vmin, vmax)?;
    let raw = ((vmax - vmin) / width).ceil().max(1.0);
    if raw > MAX_BINS as f64 {
        return Err(too_many_bins(vmin, vmax, width));
    }
    let mut count = raw as usize;
    if count > 1 && vmin + (count - 1) as f64 * width >= vmax {
        count -= 1;
    }
    Ok(count)
}

/// Edges spaced `width` apart starting at `vmin`; the last edge is at or
/// beyond `vmax`.
pub fn width_edges(vmin: f64, vmax: f64, width: f64) -> Result<Vec<f64>> {
    let mut count = bins_for_width(vmin, vmax, width)?;
    loop {
        let edges = linear_edges(vmin, vmin + count as f64 * width, count)?;
        if edges[count] >= vmax {
            return Ok(edges);
        }
        // regenerated edges can land an ulp short of vmax
        count += 1;
        if count > MAX_BINS {
            return Err(too_many_bins(vmin, vmax, width));
        }
    }
}

/// Log-uniform edges for `count` bins over `[vmin, vmax]`, `vmin > 0`.
pub fn log_edges(vmin: f64, vmax: f64, count: usize) -> Result<Vec<f64>> {
    if count == 0 {
        return Err(HistobinError::invalid("bin count must be positive"));
    }
    check_range(vmin, vmax)?;
    if vmin <= 0.0 {
        return Err(HistobinError::invalid(format!(
            "log-scale edges need a positive lower bound, got {vmin}"
        )));
    }
    Ok(logspace(vmin, vmax, count))
}

/// Normalizes caller-supplied edges: sorted ascending, duplicates collapsed.
/// At least two distinct finite values are required.
pub fn explicit_edges(values: impl IntoIterator<Item = f64>) -> Result<Vec<f64>> {
    let mut edges: Vec<f64> = values.into_iter().collect();
    if let Some(bad) = edges.iter().find(|e| !e.is_finite()) {
        return Err(HistobinError::invalid(format!(
            "edges must be finite, got {bad}"
        )));
    }
    if !edges.windows(2).all(|w| w[0] <= w[1]) {
        edges.sort_by(f64::total_cmp);
    }
    let supplied = edges.len();
    edges.dedup();
    if edges.len() < supplied {
        warn!("collapsed {} duplicate edge(s)", supplied - edges.len());
    }
    if edges.len() < 2 {
        return Err(HistobinError::invalid(format!(
            "need at least two distinct edges, got {}",
            edges.len()
        )));
    }
    Ok(edges)
}
