// Markup and inline styles for the scene renderer.
// Pure string building; `render.rs` and `overlay.rs` hand the results to the DOM.

use crate::constants::{CLOSE_MODAL_ACTION, RETURN_HOME_ACTION};
use valley_core::{
    Horizontal, MarkerView, ModalContent, Placement, ResolvedRect, SceneView, Toast, TooltipView,
    Vertical,
};

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[inline]
pub fn marker_style(rect: &ResolvedRect, color: &str) -> String {
    format!(
        "top:{}%;left:{}%;width:{}px;height:{}px;--accent:{};",
        rect.top_pct,
        rect.left_pct,
        rect.width_px,
        rect.height_px,
        escape_html(color)
    )
}

pub fn tooltip_style(placement: &Placement, color: &str) -> String {
    let horizontal = match placement.horizontal {
        Horizontal::LeftOf => "right:100%;".to_string(),
        Horizontal::RightOf => "left:100%;".to_string(),
        Horizontal::Centered => "left:50%;transform:translateX(-50%);".to_string(),
        Horizontal::AlignRight => "right:0;".to_string(),
    };
    let vertical = match placement.vertical {
        Vertical::Above | Vertical::WellAbove => {
            format!("bottom:calc(100% + {}px);", placement.offset_px)
        }
        Vertical::Below => format!("top:calc(100% + {}px);", placement.offset_px),
    };
    format!("{horizontal}{vertical}border-color:{};", escape_html(color))
}

pub fn tooltip_markup(tooltip: &TooltipView) -> String {
    format!(
        "<div class='valley-tooltip' role='tooltip' style='{}'><strong>{}</strong><p>{}</p></div>",
        tooltip_style(&tooltip.placement, &tooltip.color),
        escape_html(&tooltip.label),
        escape_html(&tooltip.description)
    )
}

fn marker_markup(marker: &MarkerView, tooltip: Option<&TooltipView>) -> String {
    let inner = tooltip
        .filter(|t| t.hotspot_id == marker.id)
        .map(tooltip_markup)
        .unwrap_or_default();
    format!(
        "<button type='button' class='valley-hotspot{}' data-hotspot-id='{}' aria-label='{}' style='{}'>{}</button>",
        if marker.active { " active" } else { "" },
        escape_html(&marker.id),
        escape_html(&marker.label),
        marker_style(&marker.rect, &marker.color),
        inner
    )
}

pub fn scene_markup(view: &SceneView) -> String {
    let mut html = format!(
        "<div class='valley-stage valley-{}' data-scene='{}' style=\"background-image:url('{}')\">",
        view.viewport_class,
        view.scene,
        escape_html(view.background.as_str())
    );
    html.push_str(&format!(
        "<h2 class='valley-title'>{}</h2>",
        escape_html(&view.title)
    ));
    if view.show_return_home {
        html.push_str(&format!(
            "<button type='button' class='valley-home' data-action='{RETURN_HOME_ACTION}'>Back to the Valley</button>"
        ));
    }
    for marker in &view.markers {
        html.push_str(&marker_markup(marker, view.tooltip.as_ref()));
    }
    html.push_str("</div>");
    html
}

pub fn modal_markup(content: &ModalContent) -> String {
    format!(
        "<div class='valley-modal-backdrop' data-action='{CLOSE_MODAL_ACTION}'></div>\
         <div class='valley-modal-card' role='dialog' aria-modal='true'>\
         <h3>{}</h3><p>{}</p>\
         <button type='button' data-action='{CLOSE_MODAL_ACTION}'>Close</button></div>",
        escape_html(&content.title),
        escape_html(&content.body)
    )
}

pub fn toast_markup(toast: &Toast) -> String {
    format!(
        "<div class='valley-toast' role='status'><strong>{}</strong><p>{}</p></div>",
        escape_html(&toast.title),
        escape_html(&toast.description)
    )
}
