//! Marker and tooltip placement.
//!
//! Everything here is a pure function of the hotspot definition and the
//! viewport class, so the renderer only translates the result to CSS.

use crate::constants::*;
use crate::scene::{HotspotDefinition, ViewportClass};

/// Marker rectangle ready for absolute placement: position in percent of the
/// background, size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedRect {
    pub top_pct: f32,
    pub left_pct: f32,
    pub width_px: u32,
    pub height_px: u32,
}

/// Which side of the marker the tooltip hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Horizontal {
    /// Tooltip sits left of the marker (anchored at `right: 100%`).
    LeftOf,
    /// Tooltip sits right of the marker (anchored at `left: 100%`).
    RightOf,
    /// Tooltip is centered on the marker.
    Centered,
    /// Tooltip's right edge lines up with the marker's right edge.
    AlignRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vertical {
    Above,
    WellAbove,
    Below,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub horizontal: Horizontal,
    pub vertical: Vertical,
    /// Gap between the marker edge and the tooltip, in pixels.
    pub offset_px: u32,
}

#[inline]
fn clamp_pct(pct: f32) -> f32 {
    if pct.is_nan() {
        0.0
    } else {
        pct.clamp(0.0, 100.0)
    }
}

pub fn resolve_rect(def: &HotspotDefinition, viewport: ViewportClass) -> ResolvedRect {
    let rect = def.rect(viewport);
    ResolvedRect {
        top_pct: clamp_pct(rect.top_pct),
        left_pct: clamp_pct(rect.left_pct),
        width_px: rect.width_px,
        height_px: rect.height_px,
    }
}

pub fn resolve_tooltip_placement(def: &HotspotDefinition, viewport: ViewportClass) -> Placement {
    let rect = resolve_rect(def, viewport);
    placement_for(rect.left_pct, rect.top_pct, viewport)
}

/// Tooltip placement rules. Horizontal and vertical choices are independent;
/// within each axis the first matching rule wins.
///
/// Mobile tooltips always render below the marker, even near the bottom
/// edge. The page scrolls the selected hotspot a third of the way down the
/// screen, which leaves room underneath.
pub fn placement_for(left_pct: f32, top_pct: f32, viewport: ViewportClass) -> Placement {
    match viewport {
        ViewportClass::Desktop => {
            let horizontal = if left_pct > DESKTOP_RIGHT_EDGE_PCT {
                Horizontal::LeftOf
            } else if left_pct < DESKTOP_LEFT_EDGE_PCT {
                Horizontal::RightOf
            } else {
                Horizontal::Centered
            };
            let (vertical, offset_px) = if top_pct < DESKTOP_TOP_EDGE_PCT {
                (Vertical::Below, TOOLTIP_BELOW_OFFSET_PX)
            } else if top_pct > DESKTOP_BOTTOM_EDGE_PCT {
                (Vertical::WellAbove, TOOLTIP_FAR_OFFSET_PX)
            } else {
                (Vertical::Above, TOOLTIP_OFFSET_PX)
            };
            Placement {
                horizontal,
                vertical,
                offset_px,
            }
        }
        ViewportClass::Mobile => Placement {
            horizontal: if left_pct > MOBILE_RIGHT_EDGE_PCT {
                Horizontal::AlignRight
            } else {
                Horizontal::Centered
            },
            vertical: Vertical::Below,
            offset_px: MOBILE_TOOLTIP_OFFSET_PX,
        },
    }
}
