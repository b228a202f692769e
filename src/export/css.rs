//! Standalone HTML document animating the items with CSS `@keyframes`.
//!
//! Lengths are written in `vw` relative to a fixed reference width so the document scales
//! with the viewport it is opened in. Angles are degrees. Every number carries two decimals.

use std::fmt::{self, Write as _};

use crate::{
    config::model::{Config, PlaybackMode},
    export::fmt_err,
    export::sampler::{SampledAnimation, sample_keyframes},
    foundation::error::{PlaneshiftError, PlaneshiftResult},
    foundation::math::{fmt2, px_to_percent},
};

/// Reference width in pixels that `vw` lengths are expressed against.
pub const REFERENCE_SIZE_PX: f64 = 800.0;
/// Perspective distance of the exported container, in reference pixels.
pub const PERSPECTIVE_PX: f64 = 1500.0;
/// Name of the group keyframes.
pub const WRAPPER_KEYFRAMES: &str = "stackRotation";

fn vw(px: f64) -> String {
    fmt2(px_to_percent(px, REFERENCE_SIZE_PX))
}

/// Timing declarations shared by every animated element, one per line.
pub fn animation_props(cfg: &Config) -> Vec<String> {
    let mut props = vec![
        format!("animation-duration: {}s;", cfg.animation_speed),
        "animation-timing-function: linear;".to_owned(),
    ];
    match cfg.playback_mode {
        PlaybackMode::Bounce => {
            props.push("animation-iteration-count: infinite;".to_owned());
            props.push("animation-direction: alternate;".to_owned());
        }
        PlaybackMode::Loop => {
            props.push("animation-iteration-count: infinite;".to_owned());
            props.push("animation-direction: normal;".to_owned());
        }
        PlaybackMode::Once => {
            props.push("animation-iteration-count: 1;".to_owned());
            props.push("animation-direction: normal;".to_owned());
            props.push("animation-fill-mode: forwards;".to_owned());
        }
    }
    props
}

/// Write the `@keyframes` block of item `index`.
pub fn write_item_keyframes(
    out: &mut String,
    cfg: &Config,
    sampled: &SampledAnimation,
    index: usize,
) -> fmt::Result {
    writeln!(out, "@keyframes {} {{", cfg.item_kind.keyframes_name(index))?;
    for (k, frame) in sampled.frames.iter().enumerate() {
        let pose = &frame.poses[index];
        writeln!(out, "  {}% {{", fmt2(sampled.offset_percent(k)))?;
        writeln!(out, "    transform: translateX({}vw)", vw(pose.position.x))?;
        writeln!(out, "               translateY({}vw)", vw(pose.position.y))?;
        writeln!(out, "               translateZ({}vw)", vw(pose.position.z))?;
        writeln!(out, "               rotateX({}deg)", fmt2(pose.rotation.x))?;
        writeln!(out, "               rotateY({}deg)", fmt2(pose.rotation.y))?;
        writeln!(out, "               rotateZ({}deg);", fmt2(pose.rotation.z))?;
        writeln!(out, "  }}")?;
    }
    writeln!(out, "}}")
}

/// Write the group keyframes. The transform origin follows the stack midpoint per sample.
pub fn write_wrapper_keyframes(out: &mut String, sampled: &SampledAnimation) -> fmt::Result {
    writeln!(out, "@keyframes {WRAPPER_KEYFRAMES} {{")?;
    for (k, frame) in sampled.frames.iter().enumerate() {
        let w = &frame.wrapper;
        writeln!(out, "  {}% {{", fmt2(sampled.offset_percent(k)))?;
        writeln!(out, "    transform-origin: 50% 50% {}vw;", vw(w.origin_z))?;
        writeln!(out, "    transform: translateX({}vw)", vw(w.translation.x))?;
        writeln!(out, "               translateY({}vw)", vw(w.translation.y))?;
        writeln!(out, "               rotateX({}deg)", fmt2(w.rotation.x))?;
        writeln!(out, "               rotateY({}deg)", fmt2(w.rotation.y))?;
        writeln!(out, "               rotateZ({}deg);", fmt2(w.rotation.z))?;
        writeln!(out, "  }}")?;
    }
    writeln!(out, "}}")
}

fn write_styles(out: &mut String, cfg: &Config, sampled: &SampledAnimation) -> fmt::Result {
    let props = animation_props(cfg);
    let class = cfg.item_kind.class_name();
    let size = fmt2(cfg.item_kind.size_ratio() * 100.0);
    let half = fmt2(cfg.item_kind.size_ratio() * 50.0);

    out.push_str(
        "* {\n  margin: 0;\n  padding: 0;\n  box-sizing: border-box;\n}\n\n\
         body {\n  width: 100vw;\n  height: 100vh;\n  overflow: hidden;\n  \
         background: transparent;\n  display: flex;\n  align-items: center;\n  \
         justify-content: center;\n}\n\n",
    );

    writeln!(out, ".animation-container {{")?;
    writeln!(out, "  width: 100%;")?;
    writeln!(out, "  max-width: 100vw;")?;
    writeln!(out, "  aspect-ratio: {};", cfg.aspect_ratio.to_css())?;
    writeln!(out, "  perspective: {}vw;", vw(PERSPECTIVE_PX))?;
    writeln!(out, "  position: relative;")?;
    writeln!(out, "  overflow: hidden;")?;
    writeln!(out, "}}\n")?;

    writeln!(out, ".stack-rotation-wrapper {{")?;
    writeln!(out, "  position: absolute;")?;
    writeln!(out, "  width: 100%;")?;
    writeln!(out, "  height: 100%;")?;
    writeln!(out, "  transform-style: preserve-3d;")?;
    if cfg.is_grouped() {
        let origin = sampled.frames.first().map_or(0.0, |f| f.wrapper.origin_z);
        writeln!(out, "  transform-origin: 50% 50% {}vw;", vw(origin))?;
        writeln!(out, "  animation-name: {WRAPPER_KEYFRAMES};")?;
        for p in &props {
            writeln!(out, "  {p}")?;
        }
    }
    writeln!(out, "}}\n")?;

    out.push_str(
        ".background-plane {\n  position: absolute;\n  width: 300%;\n  height: 300%;\n  \
         left: -100%;\n  top: -100%;\n  background: white;\n  \
         transform: translateZ(-1000vw);\n  pointer-events: none;\n}\n\n",
    );

    writeln!(out, ".{class} {{")?;
    writeln!(out, "  position: absolute;")?;
    writeln!(out, "  width: {size}vw;")?;
    writeln!(out, "  height: {size}vw;")?;
    writeln!(out, "  left: 50%;")?;
    writeln!(out, "  top: 50%;")?;
    writeln!(out, "  margin-left: -{half}vw;")?;
    writeln!(out, "  margin-top: -{half}vw;")?;
    writeln!(out, "  transform-style: preserve-3d;")?;
    writeln!(out, "}}\n")?;

    for i in 0..cfg.item_count() {
        write_item_keyframes(out, cfg, sampled, i)?;
        out.push('\n');
    }
    if cfg.is_grouped() {
        write_wrapper_keyframes(out, sampled)?;
        out.push('\n');
    }

    for i in 0..cfg.item_count() {
        writeln!(out, ".{class}-{i} {{")?;
        writeln!(out, "  background: {};", cfg.item_color(i))?;
        writeln!(out, "  opacity: {};", cfg.item_opacity(i))?;
        writeln!(out, "  animation-name: {};", cfg.item_kind.keyframes_name(i))?;
        for p in &props {
            writeln!(out, "  {p}")?;
        }
        writeln!(out, "}}")?;
    }
    Ok(())
}

fn write_document(out: &mut String, cfg: &Config, css: &str) -> fmt::Result {
    let class = cfg.item_kind.class_name();
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "  <meta charset=\"UTF-8\">")?;
    writeln!(
        out,
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )?;
    writeln!(out, "  <title>{}</title>", cfg.item_kind.document_title())?;
    writeln!(out, "  <style>")?;
    for line in css.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            writeln!(out, "    {line}")?;
        }
    }
    writeln!(out, "  </style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "  <div class=\"animation-container\">")?;
    writeln!(out, "    <div class=\"background-plane\"></div>")?;
    writeln!(out, "    <div class=\"stack-rotation-wrapper\">")?;
    for i in 0..cfg.item_count() {
        writeln!(out, "      <div class=\"{class} {class}-{i}\"></div>")?;
    }
    writeln!(out, "    </div>")?;
    writeln!(out, "  </div>")?;
    writeln!(out, "</body>")?;
    write!(out, "</html>")
}

/// Render the full document from an existing sample set.
pub fn render_html(cfg: &Config, sampled: &SampledAnimation) -> PlaneshiftResult<String> {
    check_css_values(cfg)?;

    let mut css = String::new();
    write_styles(&mut css, cfg, sampled).map_err(fmt_err)?;

    let mut out = String::with_capacity(css.len() + 1024);
    write_document(&mut out, cfg, &css).map_err(fmt_err)?;
    Ok(out)
}

#[tracing::instrument(level = "debug", skip(cfg), fields(items = cfg.item_count()))]
/// Sample `cfg` at its export quality and render the standalone document.
pub fn export_html(cfg: &Config) -> PlaneshiftResult<String> {
    let sampled = sample_keyframes(cfg, cfg.export_quality.frame_count());
    let html = render_html(cfg, &sampled)?;
    tracing::debug!(
        frames = sampled.frames.len(),
        bytes = html.len(),
        "html export rendered"
    );
    Ok(html)
}

fn check_css_values(cfg: &Config) -> PlaneshiftResult<()> {
    for i in 0..cfg.item_count() {
        let color = cfg.item_color(i);
        if color.contains(['{', '}', ';', '<', '>']) {
            return Err(PlaneshiftError::export(format!(
                "item {i} color {color:?} is not a plain CSS value"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/css.rs"]
mod tests;
