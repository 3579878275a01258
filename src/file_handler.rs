use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LogoError, Result};
use crate::renderer::Raster;

/// Directory logos are written to unless configured otherwise.
pub const DEFAULT_OUTPUT_DIR: &str = "logos";

/// File name for a logo saved at `timestamp`: `logo_<YYYYMMDD_HHMMSS>.png`.
pub fn default_filename(timestamp: NaiveDateTime) -> String {
    format!("logo_{}.png", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Writes `raster` as a PNG to `<dir>/<filename>`, creating `dir` if needed.
///
/// Returns the path written. Failures are returned as-is, never retried.
pub fn save_png(raster: &Raster, dir: &Path, filename: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|err| LogoError::io(dir, err))?;

    let path = dir.join(filename);
    raster.save_with_format(&path, image::ImageFormat::Png)?;

    log::info!("Saved logo to {}", path.display());
    Ok(path)
}

/// Saves under [`default_filename`] for the current local time.
pub fn save_timestamped(raster: &Raster, dir: &Path) -> Result<PathBuf> {
    let filename = default_filename(chrono::Local::now().naive_local());
    save_png(raster, dir, &filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_filename() {
        let timestamp = NaiveDate::from_ymd_opt(2026, 1, 2)
            .and_then(|d| d.and_hms_opt(3, 4, 5))
            .unwrap();
        assert_eq!(default_filename(timestamp), "logo_20260102_030405.png");
    }
}
