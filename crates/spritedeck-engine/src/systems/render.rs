//! Frame-plan construction: turns layout + clock + state into draw records.

use crate::components::sheet::SpriteSheet;
use crate::core::clock::AnimationClock;
use crate::core::state::AppState;
use crate::renderer::instance::{FramePlan, StackInstance};
use crate::systems::layout::StackLayout;

/// Fill `plan` with the stacked composite for the current tick.
///
/// Draw order equals stack index order. Instance `i` samples the source cell
/// at column `i` of the current animation row. With no sheet loaded the plan
/// carries zero instances; the background still clears.
pub fn build_frame_plan(
    plan: &mut FramePlan,
    sheet: &SpriteSheet,
    layout: &StackLayout,
    clock: &AnimationClock,
    state: &AppState,
) {
    plan.clear();

    let palette = state.palette();
    plan.background = palette.background;
    plan.text_color = palette.text;
    plan.pixelate = state.pixelate;

    let Some(texture) = sheet.texture() else {
        return;
    };
    plan.texture = Some(texture.handle);

    let frame_w = layout.frame_width as f32;
    let frame_h = layout.frame_height as f32;
    let row_y = clock.frame_index() as f32 * frame_h;

    for (i, dst) in layout.placements.iter().enumerate() {
        plan.sprites.push(StackInstance {
            src_x: i as f32 * frame_w,
            src_y: row_y,
            src_w: frame_w,
            src_h: frame_h,
            dst_x: dst.x,
            dst_y: dst.y,
            dst_w: dst.w,
            dst_h: dst.h,
            origin_x: layout.origin.x,
            origin_y: layout.origin.y,
            rotation: clock.rotation_degrees(),
            alpha: 1.0,
        });
    }
}
