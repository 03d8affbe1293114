//! Collaborators supplied by the host panel.

use std::path::PathBuf;

use anyhow::Context;
use image::RgbaImage;

/// Opaque row identifier handed out by the host.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RowId(pub i64);

/// The display object behind a row.
pub trait RowObject {
    fn name(&self) -> &str;

    /// Whether the object exposes the marker capability that always shows the icon.
    fn has_marker(&self) -> bool;
}

/// Resolves row ids to display objects.
pub trait Hierarchy {
    type Object: RowObject;

    /// `None` for rows that no longer resolve (destroyed objects, stale ids).
    fn object(&self, row: RowId) -> Option<&Self::Object>;
}

/// Image lookup by asset name.
pub trait AssetSource {
    fn find_image(&self, name: &str) -> anyhow::Result<RgbaImage>;
}

/// Loads `<root>/<name>.png` from disk.
#[derive(Debug, Clone)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssetSource {
    fn find_image(&self, name: &str) -> anyhow::Result<RgbaImage> {
        let path = self.root.join(format!("{name}.png"));
        let image = image::open(&path)
            .with_context(|| format!("image asset {name:?} not found at {}", path.display()))?;
        Ok(image.to_rgba8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rowpaint-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn loads_png_by_name() {
        let dir = scratch_dir("assets");
        RgbaImage::from_pixel(2, 3, image::Rgba([1, 2, 3, 255]))
            .save(dir.join("marker.png"))
            .unwrap();

        let img = DirAssetSource::new(&dir).find_image("marker").unwrap();
        assert_eq!(img.dimensions(), (2, 3));
        assert_eq!(img.get_pixel(1, 1).0, [1, 2, 3, 255]);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_asset_names_the_path() {
        let source = DirAssetSource::new(scratch_dir("empty"));
        let err = source.find_image("absent").unwrap_err();
        assert!(format!("{err:#}").contains("absent.png"));
    }
}
