//! Frame slicing: pure geometry from sheet dimensions and grid config.

use glam::Vec2;

use crate::api::types::Rect;
use crate::components::sheet::GridConfig;

/// Frame geometry and per-stack draw placements for one sheet.
///
/// Placements are regenerated in full on every computation and never patched
/// element-wise; the fan offset depends on the total stack depth, so a stale
/// entry would be wrong the moment the grid changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackLayout {
    /// Source cell width in sheet pixels (truncating division).
    pub frame_width: u32,
    /// Source cell height in sheet pixels (truncating division).
    pub frame_height: u32,
    /// Destination rectangles, one per stack index in draw order.
    /// `(x, y)` positions the rotation pivot.
    pub placements: Vec<Rect>,
    /// Rotation pivot: the center of a scaled frame.
    pub origin: Vec2,
}

/// Compute the stacked-draw geometry for a sheet.
///
/// Sheets whose dimensions are not exact multiples of the frame counts lose
/// the remainder pixels from the last row/column. Pure and idempotent; cheap
/// enough to run every tick. `grid` is valid by construction, so no error
/// path exists here.
pub fn compute_layout(
    sheet_width: u32,
    sheet_height: u32,
    grid: GridConfig,
    scale: f32,
    canvas: Vec2,
) -> StackLayout {
    let frame_width = grid.frame_width(sheet_width);
    let frame_height = grid.frame_height(sheet_height);
    let h_frames = grid.h_frames();

    let center = canvas * 0.5;
    let size = Vec2::new(frame_width as f32, frame_height as f32) * scale;

    let mut placements = Vec::with_capacity(h_frames as usize);
    for i in 0..h_frames {
        // Slice 0 sits at the bottom of the fan; each layer lifts by 8.
        let lift = (h_frames * 4) as f32 - (i * 8) as f32;
        placements.push(Rect::new(center.x, center.y + lift, size.x, size.y));
    }

    StackLayout {
        frame_width,
        frame_height,
        placements,
        origin: size * 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Vec2 = Vec2::new(500.0, 375.0);

    #[test]
    fn one_placement_per_horizontal_slice() {
        for h in [1, 2, 7, 16] {
            let layout = compute_layout(64, 64, GridConfig::new(h, 1), 1.0, CANVAS);
            assert_eq!(layout.placements.len(), h as usize);
        }
    }

    #[test]
    fn frame_size_uses_truncating_division() {
        let layout = compute_layout(100, 90, GridConfig::new(3, 4), 1.0, CANVAS);
        assert_eq!(layout.frame_width, 33);
        assert_eq!(layout.frame_height, 22);
    }

    #[test]
    fn fan_offsets_follow_stack_depth() {
        let layout = compute_layout(64, 64, GridConfig::new(2, 1), 1.0, CANVAS);
        // h_frames * 4 - i * 8, around the canvas center
        assert_eq!(layout.placements[0].y, 187.5 + 8.0);
        assert_eq!(layout.placements[1].y, 187.5);
        assert_eq!(layout.placements[0].x, 250.0);
    }

    #[test]
    fn upper_layers_rise_past_the_center() {
        let layout = compute_layout(64, 64, GridConfig::new(4, 1), 1.0, CANVAS);
        // lift = 16 - i*8: 16, 8, 0, -8
        assert_eq!(layout.placements[3].y, 187.5 - 8.0);
    }

    #[test]
    fn scale_applies_to_size_and_origin() {
        let layout = compute_layout(64, 32, GridConfig::new(1, 1), 8.0, CANVAS);
        assert_eq!(layout.placements[0].w, 512.0);
        assert_eq!(layout.placements[0].h, 256.0);
        assert_eq!(layout.origin, Vec2::new(256.0, 128.0));
    }

    #[test]
    fn identical_inputs_yield_identical_outputs() {
        let a = compute_layout(100, 90, GridConfig::new(3, 4), 8.0, CANVAS);
        let b = compute_layout(100, 90, GridConfig::new(3, 4), 8.0, CANVAS);
        assert_eq!(a, b);
    }
}
