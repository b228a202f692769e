use std::path::Path;

use anyhow::Context as _;
use image::ImageEncoder as _;

use crate::{
    config::model::CaptureScale,
    foundation::error::{PlaneshiftError, PlaneshiftResult},
    projection::ProjectedScene,
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A captured still in straight (non-premultiplied) RGBA8, row-major, top-left origin.
pub struct CapturedFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl CapturedFrame {
    /// Encode as PNG.
    pub fn encode_png(&self) -> PlaneshiftResult<Vec<u8>> {
        self.check_len()?;
        let mut buf = Vec::new();
        image::codecs::png::PngEncoder::new(&mut buf)
            .write_image(
                &self.data,
                self.width,
                self.height,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| PlaneshiftError::capture(format!("encode png: {e}")))?;
        Ok(buf)
    }

    /// Write a PNG file, creating parent directories.
    pub fn save_png(&self, path: &Path) -> PlaneshiftResult<()> {
        self.check_len()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    fn check_len(&self) -> PlaneshiftResult<()> {
        let expected = self.width as usize * self.height as usize * 4;
        if self.data.len() != expected {
            return Err(PlaneshiftError::capture(format!(
                "frame byte length {} does not match {}x{} rgba8",
                self.data.len(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }
}

/// Turns a projected scene into pixels.
///
/// Failures are reported as [`PlaneshiftError::Capture`] and are recoverable: callers keep
/// animating.
pub trait CaptureBackend {
    /// Rasterize `scene` at `scale` times its container size.
    fn capture(
        &mut self,
        scene: &ProjectedScene,
        scale: CaptureScale,
    ) -> PlaneshiftResult<CapturedFrame>;
}

#[cfg(test)]
#[path = "../../tests/unit/capture/backend.rs"]
mod tests;
