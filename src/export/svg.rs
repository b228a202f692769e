use std::fmt::{self, Write as _};

use crate::{
    export::fmt_err, foundation::error::PlaneshiftResult, projection::ProjectedScene,
};

/// Escape a value for use inside a double-quoted XML attribute.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn write_svg(out: &mut String, scene: &ProjectedScene) -> fmt::Result {
    let (w, h) = (scene.dims.width, scene.dims.height);
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;
    for item in &scene.items {
        writeln!(
            out,
            r#"  <path d="{}" fill="{}" fill-opacity="{}"/>"#,
            item.outline().to_svg(),
            escape_attr(&item.color),
            item.opacity.clamp(0.0, 1.0),
        )?;
    }
    writeln!(out, "</svg>")
}

/// Serialize a projected scene as an SVG document, one filled polygon per item in paint
/// order. The background is left transparent.
pub fn scene_to_svg(scene: &ProjectedScene) -> PlaneshiftResult<String> {
    let mut out = String::with_capacity(128 + scene.items.len() * 160);
    write_svg(&mut out, scene).map_err(fmt_err)?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
