use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use egui::Color32;
use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::history::StrokeHistory;
use crate::palette;

/// Curve flattening tolerance for rasterization, in surface units.
const FLATTEN_TOLERANCE: f32 = 0.25;

/// Errors surfaced by drawing export. These stop at the UI boundary as a
/// notification and a log entry; they never affect in-memory drawing state.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("nothing to export: canvas has no size yet")]
    EmptyCanvas,
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), color.a()])
}

/// Stamp a filled disc into the image. Pixels outside the bounds are skipped.
fn stamp_disc(image: &mut RgbaImage, center: egui::Pos2, radius: f32, color: Rgba<u8>) {
    let r = radius.max(0.5);
    let min_x = (center.x - r).floor().max(0.0) as u32;
    let min_y = (center.y - r).floor().max(0.0) as u32;
    let max_x = ((center.x + r).ceil() as i64).clamp(0, i64::from(image.width())) as u32;
    let max_y = ((center.y + r).ceil() as i64).clamp(0, i64::from(image.height())) as u32;

    for y in min_y..max_y {
        for x in min_x..max_x {
            let dx = x as f32 + 0.5 - center.x;
            let dy = y as f32 + 0.5 - center.y;
            if dx * dx + dy * dy <= r * r {
                image.put_pixel(x, y, color);
            }
        }
    }
}

/// Rasterize the stroke history onto a fresh image.
///
/// Strokes are stamped as discs along their flattened polylines, which gives
/// the same round caps and joins the screen renderer draws.
pub fn rasterize(history: &StrokeHistory, width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(width, height, to_rgba(palette::BACKGROUND));

    for stroke in history.strokes() {
        let points = stroke.flatten(FLATTEN_TOLERANCE);
        if points.len() < 2 {
            continue;
        }
        let color = to_rgba(stroke.color());
        let radius = stroke.width() / 2.0;
        let spacing = (radius / 2.0).max(0.5);

        for segment in points.windows(2) {
            let (a, b) = (segment[0], segment[1]);
            let length = a.distance(b);
            let steps = (length / spacing).ceil().max(1.0) as u32;
            for i in 0..=steps {
                let t = i as f32 / steps as f32;
                stamp_disc(&mut image, a.lerp(b, t), radius, color);
            }
        }
    }

    image
}

/// File name for a new export, stamped with the local time.
pub fn timestamped_file_name() -> String {
    format!("Painting_{}.png", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Rasterize the history and write it as a timestamped PNG under `dir`.
///
/// Returns the path of the written file.
pub fn save_drawing(
    history: &StrokeHistory,
    size: egui::Vec2,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let width = size.x.round() as u32;
    let height = size.y.round() as u32;
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyCanvas);
    }

    std::fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(timestamped_file_name());
    let image = rasterize(history, width, height);
    image.save(&path)?;
    log::info!(
        "saved drawing ({} strokes, {}x{}) to {}",
        history.stroke_count(),
        width,
        height,
        path.display()
    );
    Ok(path)
}
