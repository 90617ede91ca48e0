// SPDX-License-Identifier: MPL-2.0
//! Export of the composed collage to an encoded PNG.
//!
//! The coordinator in the update loop drives three steps (announce, capture,
//! deliver); this module supplies the capture and deliver collaborators. The
//! rasterizer works from an [`ExportScene`] snapshot taken at the canvas's
//! logical size, so the result is independent of the current display scale
//! by construction.

use crate::collage::{layout, CanvasConfig, EntryId, EntryStore, Placement};
use crate::error::{Error, Result};
use crate::media::image::ImageData;
use image_rs::imageops::FilterType;
use image_rs::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::collections::HashMap;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

/// MIME type of exported files.
pub const EXPORT_MIME: &str = "image/png";

/// Generates the export filename from the logical canvas dimensions.
///
/// Format: `collage export {width}x{height}.png`
#[must_use]
pub fn export_file_name(width: u32, height: u32) -> String {
    format!("collage export {width}x{height}.png")
}

/// One decoded image with its computed placement, ready to composite.
#[derive(Debug, Clone)]
pub struct ExportItem {
    pub rgba: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
    pub placement: Placement,
}

/// Frozen inputs for one rasterization pass.
///
/// Captured at export-invocation time so later edits to the canvas or the
/// entry list cannot leak into an in-flight export.
#[derive(Debug, Clone)]
pub struct ExportScene {
    pub width: u32,
    pub height: u32,
    pub background: [u8; 4],
    pub items: Vec<ExportItem>,
}

impl ExportScene {
    /// Snapshots the current collage at the canvas's logical size.
    ///
    /// Placements are recomputed over the full entry list (pending and
    /// failed entries keep their grid slots), but only entries with decoded
    /// pixels become composite items.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // canvas dimensions fit f32 exactly
    pub fn snapshot(
        store: &EntryStore,
        canvas: &CanvasConfig,
        images: &HashMap<EntryId, ImageData>,
    ) -> Self {
        let placements = layout(store.all(), canvas.width as f32, canvas.height as f32);

        let items = store
            .all()
            .iter()
            .zip(placements)
            .filter_map(|(entry, placement)| {
                images.get(&entry.id()).map(|data| ExportItem {
                    rgba: data.rgba_bytes(),
                    width: data.width,
                    height: data.height,
                    placement,
                })
            })
            .collect();

        Self {
            width: canvas.width,
            height: canvas.height,
            background: canvas.background_rgba(),
            items,
        }
    }
}

/// Converts a scene into an encoded raster image of exactly the scene's
/// pixel size.
pub trait Rasterizer {
    /// # Errors
    ///
    /// Returns an error if the scene has no pixels, an item's pixel buffer
    /// is inconsistent, or PNG encoding fails.
    fn rasterize(&self, scene: &ExportScene) -> Result<Vec<u8>>;
}

/// Production rasterizer: composites RGBA buffers with the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollageRasterizer;

impl Rasterizer for CollageRasterizer {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn rasterize(&self, scene: &ExportScene) -> Result<Vec<u8>> {
        if scene.width == 0 || scene.height == 0 {
            return Err(Error::Export("canvas has no pixels".to_string()));
        }

        let mut composed =
            RgbaImage::from_pixel(scene.width, scene.height, Rgba(scene.background));

        for item in &scene.items {
            let target_width = item.placement.width.round().max(0.0) as u32;
            let target_height = item.placement.height.round().max(0.0) as u32;
            if target_width == 0 || target_height == 0 {
                continue;
            }

            let source = RgbaImage::from_raw(item.width, item.height, item.rgba.to_vec())
                .ok_or_else(|| Error::Export("item pixel buffer size mismatch".to_string()))?;

            let resized =
                image_rs::imageops::resize(&source, target_width, target_height, FilterType::Triangle);
            image_rs::imageops::overlay(
                &mut composed,
                &resized,
                item.placement.left.round() as i64,
                item.placement.top.round() as i64,
            );
        }

        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(composed)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| Error::Export(e.to_string()))?;

        Ok(bytes)
    }
}

/// Receives the encoded image and performs the actual save.
pub trait ExportSink {
    /// Delivers the encoded bytes under the given filename and returns the
    /// final location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn deliver(&self, png: &[u8], file_name: &str) -> Result<PathBuf>;
}

/// Production sink: writes into the user's Downloads directory, the desktop
/// analogue of a browser download.
#[derive(Debug, Clone, Default)]
pub struct DownloadsSink {
    directory: Option<PathBuf>,
}

impl DownloadsSink {
    /// Creates a sink targeting an explicit directory instead of Downloads.
    #[must_use]
    pub fn with_directory(directory: PathBuf) -> Self {
        Self {
            directory: Some(directory),
        }
    }

    fn target_directory(&self) -> PathBuf {
        self.directory
            .clone()
            .or_else(dirs::download_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Picks a non-clobbering path by appending ` (n)` before the extension,
/// the way browsers name repeated downloads.
fn unique_path(directory: &std::path::Path, file_name: &str) -> PathBuf {
    let candidate = directory.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let stem = std::path::Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    let extension = std::path::Path::new(file_name)
        .extension()
        .map(|s| s.to_string_lossy().into_owned());

    let mut counter = 1_u32;
    loop {
        let numbered = match &extension {
            Some(ext) => format!("{stem} ({counter}).{ext}"),
            None => format!("{stem} ({counter})"),
        };
        let candidate = directory.join(numbered);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

impl ExportSink for DownloadsSink {
    fn deliver(&self, png: &[u8], file_name: &str) -> Result<PathBuf> {
        let directory = self.target_directory();
        std::fs::create_dir_all(&directory)?;

        let path = unique_path(&directory, file_name);
        std::fs::write(&path, png)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collage::Entry;
    use image_rs::GenericImageView;
    use tempfile::tempdir;

    fn loaded_store_with_image(
        width: u32,
        height: u32,
        pixel: [u8; 4],
    ) -> (EntryStore, HashMap<EntryId, ImageData>) {
        let mut store = EntryStore::new();
        let id = store.append(Entry::new("a.png"));
        store.mark_loaded(id, width, height);

        let pixels = pixel
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        let mut images = HashMap::new();
        images.insert(id, ImageData::from_rgba(width, height, pixels));
        (store, images)
    }

    #[test]
    fn export_file_name_uses_logical_dimensions() {
        assert_eq!(export_file_name(1000, 800), "collage export 1000x800.png");
        assert_eq!(export_file_name(1, 1), "collage export 1x1.png");
    }

    #[test]
    fn export_mime_is_png() {
        assert_eq!(EXPORT_MIME, "image/png");
    }

    #[test]
    fn rasterized_output_has_exactly_the_scene_size() {
        let scene = ExportScene {
            width: 64,
            height: 48,
            background: [255, 0, 0, 255],
            items: Vec::new(),
        };

        let bytes = CollageRasterizer.rasterize(&scene).expect("rasterize");
        let decoded = image_rs::load_from_memory(&bytes).expect("decode png");

        assert_eq!(decoded.width(), 64);
        assert_eq!(decoded.height(), 48);
        let rgba = decoded.to_rgba8();
        assert_eq!(rgba.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(rgba.get_pixel(63, 47), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn rasterizer_composites_item_over_background() {
        let item_pixels = vec![0, 0, 255, 255].repeat(4); // 2x2 blue
        let scene = ExportScene {
            width: 8,
            height: 8,
            background: [0, 0, 0, 255],
            items: vec![ExportItem {
                rgba: Arc::new(item_pixels),
                width: 2,
                height: 2,
                placement: Placement {
                    top: 0.0,
                    left: 0.0,
                    width: 4.0,
                    height: 4.0,
                },
            }],
        };

        let bytes = CollageRasterizer.rasterize(&scene).expect("rasterize");
        let rgba = image_rs::load_from_memory(&bytes)
            .expect("decode png")
            .to_rgba8();

        assert_eq!(rgba.get_pixel(1, 1), &Rgba([0, 0, 255, 255]));
        assert_eq!(rgba.get_pixel(7, 7), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn rasterizer_rejects_empty_canvas() {
        let scene = ExportScene {
            width: 0,
            height: 10,
            background: [255, 255, 255, 255],
            items: Vec::new(),
        };
        assert!(matches!(
            CollageRasterizer.rasterize(&scene),
            Err(Error::Export(_))
        ));
    }

    #[test]
    fn rasterizer_rejects_inconsistent_item_buffer() {
        let scene = ExportScene {
            width: 8,
            height: 8,
            background: [255, 255, 255, 255],
            items: vec![ExportItem {
                rgba: Arc::new(vec![0; 3]), // not 2x2x4 bytes
                width: 2,
                height: 2,
                placement: Placement {
                    top: 0.0,
                    left: 0.0,
                    width: 2.0,
                    height: 2.0,
                },
            }],
        };
        assert!(matches!(
            CollageRasterizer.rasterize(&scene),
            Err(Error::Export(_))
        ));
    }

    #[test]
    fn scene_uses_logical_canvas_size_not_display_size() {
        let (store, images) = loaded_store_with_image(4, 4, [10, 20, 30, 255]);
        let canvas = CanvasConfig {
            width: 300,
            height: 200,
            ..CanvasConfig::default()
        };

        // Whatever the on-screen zoom is, the snapshot never sees it.
        let scene = ExportScene::snapshot(&store, &canvas, &images);
        assert_eq!(scene.width, 300);
        assert_eq!(scene.height, 200);
        assert_eq!(scene.items.len(), 1);
    }

    #[test]
    fn pending_entries_keep_grid_slots_but_do_not_composite() {
        let (mut store, images) = loaded_store_with_image(4, 4, [10, 20, 30, 255]);
        store.append(Entry::new("still-pending.png"));

        let canvas = CanvasConfig {
            width: 100,
            height: 100,
            ..CanvasConfig::default()
        };
        let scene = ExportScene::snapshot(&store, &canvas, &images);

        // Two entries means a 2x2 grid: the loaded item sits in a 50px cell
        // even though the pending one contributes no pixels.
        assert_eq!(scene.items.len(), 1);
        assert_eq!(scene.items[0].placement.width, 50.0);
    }

    #[test]
    fn downloads_sink_writes_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let sink = DownloadsSink::with_directory(temp_dir.path().to_path_buf());

        let path = sink
            .deliver(b"png-bytes", "collage export 10x10.png")
            .expect("deliver should write");

        assert!(path.exists());
        assert_eq!(std::fs::read(&path).expect("read back"), b"png-bytes");
    }

    #[test]
    fn downloads_sink_never_clobbers_existing_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let sink = DownloadsSink::with_directory(temp_dir.path().to_path_buf());

        let first = sink.deliver(b"one", "collage export 5x5.png").expect("first");
        let second = sink.deliver(b"two", "collage export 5x5.png").expect("second");

        assert_ne!(first, second);
        assert_eq!(std::fs::read(&first).expect("read first"), b"one");
        assert_eq!(std::fs::read(&second).expect("read second"), b"two");
        assert!(second.to_string_lossy().contains("(1)"));
    }
}
