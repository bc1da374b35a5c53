pub mod edges;
pub mod export;
pub mod histogram;

pub use edges::{
    bins_for_width, explicit_edges, linear_edges, linspace, log_edges, logspace, width_edges,
};
pub use export::{write_csv, write_csv_to_dir, write_csv_with, write_rows};
pub use histobin_common::{BinningConfig, Config, ExportConfig, HistobinError, Result};
pub use histogram::{Histogram, HistogramBin};
