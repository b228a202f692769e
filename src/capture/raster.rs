use resvg::tiny_skia;

use crate::{
    capture::backend::{CaptureBackend, CapturedFrame},
    config::model::CaptureScale,
    export::svg::scene_to_svg,
    foundation::error::{PlaneshiftError, PlaneshiftResult},
    projection::ProjectedScene,
};

/// Largest accepted output edge, in pixels.
pub const MAX_DIM: u32 = 16_384;

#[derive(Clone, Copy, Debug, Default)]
/// CPU backend: serializes the scene to SVG and rasterizes it with resvg onto a transparent
/// pixmap.
pub struct SvgRasterBackend;

impl SvgRasterBackend {
    /// A CPU raster backend.
    pub fn new() -> Self {
        Self
    }
}

impl CaptureBackend for SvgRasterBackend {
    #[tracing::instrument(level = "debug", skip(self, scene), fields(items = scene.items.len()))]
    fn capture(
        &mut self,
        scene: &ProjectedScene,
        scale: CaptureScale,
    ) -> PlaneshiftResult<CapturedFrame> {
        let factor = scale.factor();
        let (width, height) = scene.dims.scaled_px(factor);
        if width > MAX_DIM || height > MAX_DIM {
            return Err(PlaneshiftError::capture(format!(
                "capture size {width}x{height} exceeds {MAX_DIM}px"
            )));
        }

        let svg = scene_to_svg(scene)?;
        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())
            .map_err(|e| PlaneshiftError::capture(format!("parse scene svg: {e}")))?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| PlaneshiftError::capture("allocate pixmap"))?;
        let sx = width as f32 / scene.dims.width as f32;
        let sy = height as f32 / scene.dims.height as f32;
        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(sx, sy),
            &mut pixmap.as_mut(),
        );

        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for px in pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }

        Ok(CapturedFrame {
            width,
            height,
            data,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/raster.rs"]
mod tests;
