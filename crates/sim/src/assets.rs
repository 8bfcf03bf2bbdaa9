//! Sprite-sheet manifest validation.
//!
//! The simulation itself never touches pixels; it only guarantees at
//! startup that every behavior profile's sheet exists and covers the frame
//! grid its state machines index into. A profile without a valid sheet has
//! no animation to drive, so required-sheet failures are fatal. The map
//! image is cosmetic and merely logs when unavailable.

use std::path::{Path, PathBuf};

use image::ImageReader;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to open sprite sheet {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode sprite sheet {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(
        "sprite sheet {path} is {width}x{height}, smaller than its \
         {columns}x{rows} grid of {frame_width}x{frame_height} frames"
    )]
    GridDoesNotFit {
        path: PathBuf,
        width: u32,
        height: u32,
        columns: u32,
        rows: u32,
        frame_width: u32,
        frame_height: u32,
    },
}

/// One sprite sheet and the frame grid the state machines index into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetSpec {
    pub file: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub columns: u32,
    pub rows: u32,
}

impl SheetSpec {
    pub fn new(file: &str, frame_width: u32, frame_height: u32, columns: u32, rows: u32) -> Self {
        Self {
            file: file.to_string(),
            frame_width,
            frame_height,
            columns,
            rows,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Required; any failure here is fatal.
    pub sheets: Vec<SheetSpec>,
    /// Optional; absence degrades to a warning.
    pub map: Option<String>,
}

impl AssetManifest {
    /// The shipped sheet set: one per actor profile, plus the map image.
    pub fn standard() -> Self {
        Self {
            sheets: vec![
                SheetSpec::new("player.png", 48, 48, 8, 3),
                SheetSpec::new("pursuer.png", 18, 18, 4, 4),
                SheetSpec::new("detonator.png", 18, 18, 6, 5),
                SheetSpec::new("jumper.png", 18, 18, 8, 4),
            ],
            map: Some("map.png".to_string()),
        }
    }

    /// Open every declared sheet under `dir` and verify its pixel
    /// dimensions cover the declared frame grid.
    pub fn validate(&self, dir: &Path) -> Result<(), AssetError> {
        for sheet in &self.sheets {
            let path = dir.join(&sheet.file);
            let (width, height) = sheet_dimensions(&path)?;
            if width < sheet.columns * sheet.frame_width
                || height < sheet.rows * sheet.frame_height
            {
                return Err(AssetError::GridDoesNotFit {
                    path,
                    width,
                    height,
                    columns: sheet.columns,
                    rows: sheet.rows,
                    frame_width: sheet.frame_width,
                    frame_height: sheet.frame_height,
                });
            }
        }

        if let Some(map) = &self.map {
            let path = dir.join(map);
            if let Err(error) = sheet_dimensions(&path) {
                warn!(path = %path.display(), %error, "map image unavailable, continuing without it");
            }
        }
        Ok(())
    }
}

fn sheet_dimensions(path: &Path) -> Result<(u32, u32), AssetError> {
    let reader = ImageReader::open(path).map_err(|source| AssetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = reader.decode().map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((decoded.width(), decoded.height()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        RgbaImage::new(width, height)
            .save(dir.join(name))
            .expect("write png");
    }

    fn manifest_one_sheet() -> AssetManifest {
        AssetManifest {
            sheets: vec![SheetSpec::new("pursuer.png", 18, 18, 4, 4)],
            map: Some("map.png".to_string()),
        }
    }

    #[test]
    fn valid_sheet_passes_without_the_optional_map() {
        let dir = TempDir::new().expect("tempdir");
        write_png(dir.path(), "pursuer.png", 72, 72);
        manifest_one_sheet().validate(dir.path()).expect("validate");
    }

    #[test]
    fn missing_required_sheet_is_fatal() {
        let dir = TempDir::new().expect("tempdir");
        let err = manifest_one_sheet().validate(dir.path()).unwrap_err();
        assert!(matches!(err, AssetError::Open { .. }));
    }

    #[test]
    fn undersized_sheet_fails_the_grid_check() {
        let dir = TempDir::new().expect("tempdir");
        write_png(dir.path(), "pursuer.png", 72, 54);
        let err = manifest_one_sheet().validate(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            AssetError::GridDoesNotFit { height: 54, .. }
        ));
    }

    #[test]
    fn standard_set_validates_against_a_full_directory() {
        let dir = TempDir::new().expect("tempdir");
        write_png(dir.path(), "player.png", 384, 144);
        write_png(dir.path(), "pursuer.png", 72, 72);
        write_png(dir.path(), "detonator.png", 108, 90);
        write_png(dir.path(), "jumper.png", 144, 72);
        write_png(dir.path(), "map.png", 64, 64);
        AssetManifest::standard()
            .validate(dir.path())
            .expect("validate");
    }
}
