use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use kururi_core::color_of;

pub const PAGE_WHEEL_SIZE: u32 = 340;
pub const FULLSCREEN_WHEEL_RATIO: f64 = 0.95;

const RIM_MARGIN: f64 = 8.0;
const LABEL_RADIUS_RATIO: f64 = 0.72;
const LABEL_MIN_PX: f64 = 14.0;
const HUB_RADIUS: f64 = 6.0;
const POINTER_TIP_INSET: f64 = 4.0;
const POINTER_BACK_INSET: f64 = 20.0;
const POINTER_HALF_HEIGHT: f64 = 12.0;

const SEGMENT_STROKE: &str = "#ffffff";
const LABEL_FILL: &str = "#ffffff";
const LABEL_SHADOW: &str = "rgba(0,0,0,0.5)";
const HUB_FILL: &str = "#ffffff";
const HUB_STROKE: &str = "#007AFF";
const POINTER_FILL: &str = "#1d1d1f";
const POINTER_STROKE: &str = "#ffffff";

fn label_font(size: f64) -> String {
    let px = (size / 22.0).max(LABEL_MIN_PX);
    format!("600 {px}px -apple-system, BlinkMacSystemFont, 'Segoe UI', system-ui, sans-serif")
}

/// Clears and redraws the whole wheel. Resizing the canvas every call
/// resets the 2d context, so no transform state survives between frames.
pub fn draw_wheel(
    canvas: &HtmlCanvasElement,
    size: u32,
    entries: &[String],
    rotation_degrees: f64,
    background: Option<&HtmlImageElement>,
) -> Result<(), JsValue> {
    canvas.set_width(size);
    canvas.set_height(size);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let size = size as f64;
    let center = size * 0.5;
    let radius = center - RIM_MARGIN;
    ctx.clear_rect(0.0, 0.0, size, size);
    if entries.is_empty() {
        return Ok(());
    }

    let per = 2.0 * PI / entries.len() as f64;

    ctx.save();
    ctx.translate(center, center)?;
    ctx.rotate(rotation_degrees.to_radians())?;
    ctx.translate(-center, -center)?;

    if let Some(image) = background {
        ctx.save();
        ctx.begin_path();
        ctx.arc(center, center, radius, 0.0, 2.0 * PI)?;
        ctx.clip();
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            center - radius,
            center - radius,
            radius * 2.0,
            radius * 2.0,
        )?;
        ctx.restore();
    }

    for (index, label) in entries.iter().enumerate() {
        let start = index as f64 * per;
        let end = (index as f64 + 1.0) * per;
        ctx.begin_path();
        ctx.move_to(center, center);
        ctx.arc(center, center, radius, start, end)?;
        ctx.close_path();
        if background.is_none() {
            ctx.set_fill_style_str(color_of(index));
            ctx.fill();
        }
        ctx.set_stroke_style_str(SEGMENT_STROKE);
        ctx.set_line_width(2.0);
        ctx.stroke();

        ctx.save();
        ctx.translate(center, center)?;
        ctx.rotate(start + per * 0.5)?;
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(LABEL_FILL);
        ctx.set_font(&label_font(size));
        ctx.set_shadow_color(LABEL_SHADOW);
        ctx.set_shadow_blur(2.0);
        ctx.set_shadow_offset_x(0.0);
        ctx.set_shadow_offset_y(1.0);
        ctx.fill_text(label, radius * LABEL_RADIUS_RATIO, 0.0)?;
        ctx.restore();
    }

    ctx.restore();

    // Hub and pointer are drawn unrotated, on top of the disc.
    ctx.begin_path();
    ctx.arc(center, center, HUB_RADIUS, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(HUB_FILL);
    ctx.fill();
    ctx.set_stroke_style_str(HUB_STROKE);
    ctx.set_line_width(1.5);
    ctx.stroke();

    ctx.begin_path();
    ctx.move_to(center + radius - POINTER_TIP_INSET, center);
    ctx.line_to(center + radius - POINTER_BACK_INSET, center - POINTER_HALF_HEIGHT);
    ctx.line_to(center + radius - POINTER_BACK_INSET, center + POINTER_HALF_HEIGHT);
    ctx.close_path();
    ctx.set_fill_style_str(POINTER_FILL);
    ctx.fill();
    ctx.set_stroke_style_str(POINTER_STROKE);
    ctx.set_line_width(1.5);
    ctx.stroke();

    Ok(())
}

/// Side of the fullscreen spin canvas, sized to the smaller viewport edge.
pub fn fullscreen_wheel_size() -> u32 {
    let Some(window) = web_sys::window() else {
        return PAGE_WHEEL_SIZE;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(PAGE_WHEEL_SIZE as f64);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(PAGE_WHEEL_SIZE as f64);
    (width.min(height) * FULLSCREEN_WHEEL_RATIO) as u32
}

#[cfg(test)]
mod tests {
    use super::label_font;

    #[test]
    fn label_font_scales_with_the_canvas() {
        assert!(label_font(340.0).starts_with("600 15.45"));
        assert!(label_font(880.0).starts_with("600 40px"));
    }

    #[test]
    fn label_font_never_drops_below_the_floor() {
        assert!(label_font(200.0).starts_with("600 14px"));
        assert!(label_font(0.0).starts_with("600 14px"));
    }
}
