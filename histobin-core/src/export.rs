use crate::histogram::Histogram;
use histobin_common::{ExportConfig, Result};
use log::info;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes the `bins,counts` table: one row per bin, keyed by the bin's lower
/// edge. The closing edge has no counter and gets no row.
pub fn write_rows<W: Write>(
    hist: &Histogram,
    out: &mut W,
    float_precision: Option<usize>,
) -> std::io::Result<()> {
    writeln!(out, "bins,counts")?;
    for (edge, count) in hist.edges().iter().zip(hist.counts()) {
        match float_precision {
            Some(p) => writeln!(out, "{edge:.p$},{count}")?,
            None => writeln!(out, "{edge},{count}")?,
        }
    }
    Ok(())
}

pub fn write_csv(hist: &Histogram, output_path: &Path) -> Result<()> {
    write_csv_with(hist, output_path, &ExportConfig::default())
}

pub fn write_csv_with(hist: &Histogram, output_path: &Path, cfg: &ExportConfig) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    let mut out = BufWriter::new(file);
    write_rows(hist, &mut out, cfg.float_precision)?;
    out.flush()?;
    info!("wrote {} bins to {}", hist.bin_count(), output_path.display());
    Ok(())
}

pub fn write_csv_to_dir(hist: &Histogram, file_name: &str, cfg: &ExportConfig) -> Result<PathBuf> {
    let out_dir = Path::new(&cfg.output_dir);
    std::fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join(file_name);
    write_csv_with(hist, &out_path, cfg)?;
    Ok(out_path)
}
