//! Scene composition for the 320x240 room.
//!
//! [`compose`] turns a mood and an animation phase into a display list;
//! nothing in this module touches pixels. The room is static, the dog is a
//! function of `(mood, phase)`, and both are laid out as fractions of the
//! canvas so the numbers below read like the scene they draw.

use std::f32::consts::{FRAC_PI_2, PI};

use biscuit_sim::Mood;

use crate::anim::PHASES;
use crate::color::palette;
use crate::draw::{self, ArcHalf, DrawCmd};
use crate::raster::{Canvas, CANVAS_H, CANVAS_W};

const W: f32 = CANVAS_W as f32;
const H: f32 = CANVAS_H as f32;
/// Top edge of the floor.
const FLOOR_Y: f32 = 156.0;
/// The dog's resting baseline (origin of the whole dog figure).
const DOG_Y: f32 = FLOOR_Y - 10.0;

/// 0, 1, 0, -1 over the four phases.
fn quarter_wave(phase: u8) -> f32 {
    (phase as f32 * FRAC_PI_2).sin()
}

/// The tail runs on a 3-phase cycle so it never syncs with the bounce.
fn tail_wave(phase: u8) -> f32 {
    (phase as f32 * (PI / 1.5)).sin()
}

/// The static room: wall, floor grid, window, plant, bed, food bowl.
pub fn room_scene() -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(48);

    cmds.push(draw::rect(0.0, 0.0, W, FLOOR_Y, palette::WALL));
    cmds.push(draw::rect(0.0, FLOOR_Y, W, H - FLOOR_Y, palette::FLOOR));

    // Tile seams on the floor.
    let mut x = 0.0;
    while x < W {
        cmds.push(draw::line(x, FLOOR_Y, x, H, 1.0, palette::FLOOR_LINE));
        x += 32.0;
    }
    let mut y = FLOOR_Y;
    while y < H {
        cmds.push(draw::line(0.0, y, W, y, 1.0, palette::FLOOR_LINE));
        y += 20.0;
    }

    cmds.push(draw::rect(0.0, FLOOR_Y - 6.0, W, 6.0, palette::BASEBOARD));

    // Window with a four-pane cross and the sun outside.
    let win_x = W * 0.65;
    let win_y = H * 0.08;
    let (win_w, win_h) = (80.0, 70.0);
    cmds.push(draw::rect(win_x, win_y, win_w, win_h, palette::WINDOW_SKY));
    cmds.push(draw::ellipse(win_x + 56.0, win_y + 21.0, 10.0, 10.0, 0.0, palette::SUN));
    cmds.push(draw::rect_outline(win_x, win_y, win_w, win_h, 4.0, palette::WINDOW_FRAME));
    cmds.push(draw::line(
        win_x + win_w / 2.0,
        win_y,
        win_x + win_w / 2.0,
        win_y + win_h,
        3.0,
        palette::WINDOW_FRAME,
    ));
    cmds.push(draw::line(
        win_x,
        win_y + win_h / 2.0,
        win_x + win_w,
        win_y + win_h / 2.0,
        3.0,
        palette::WINDOW_FRAME,
    ));

    // Potted plant by the wall.
    let plant_x = W * 0.82;
    let plant_y = FLOOR_Y - 6.0;
    cmds.push(draw::rect(plant_x - 8.0, plant_y - 16.0, 16.0, 16.0, palette::POT));
    cmds.push(draw::rect(plant_x - 10.0, plant_y - 18.0, 20.0, 4.0, palette::POT_RIM));
    cmds.push(draw::ellipse(plant_x, plant_y - 28.0, 8.0, 12.0, 0.0, palette::LEAF));
    cmds.push(draw::ellipse(plant_x - 6.0, plant_y - 24.0, 6.0, 10.0, -0.4, palette::LEAF_DARK));
    cmds.push(draw::ellipse(plant_x + 6.0, plant_y - 24.0, 6.0, 10.0, 0.4, palette::LEAF_DARK));

    // Dog bed.
    let bed_x = W * 0.12;
    let bed_y = H * 0.70;
    cmds.push(draw::ellipse(bed_x + 28.0, bed_y + 8.0, 32.0, 10.0, 0.0, palette::BED));
    cmds.push(draw::ellipse(bed_x + 28.0, bed_y + 8.0, 24.0, 7.0, 0.0, palette::BED_INNER));

    // Food bowl with a few bits of kibble.
    let bowl_x = W * 0.38;
    let bowl_y = H * 0.75;
    cmds.push(draw::ellipse(bowl_x, bowl_y, 14.0, 6.0, 0.0, palette::BOWL));
    cmds.push(draw::ellipse(bowl_x, bowl_y, 10.0, 4.0, 0.0, palette::BOWL_INNER));
    cmds.push(draw::rect(bowl_x - 4.0, bowl_y - 3.0, 3.0, 3.0, palette::KIBBLE));
    cmds.push(draw::rect(bowl_x + 1.0, bowl_y - 2.0, 3.0, 3.0, palette::KIBBLE));
    cmds.push(draw::rect(bowl_x - 1.0, bowl_y - 4.0, 3.0, 3.0, palette::KIBBLE));

    cmds
}

/// The dog for one `(mood, phase)` pair.
pub fn dog_scene(mood: Mood, phase: u8) -> Vec<DrawCmd> {
    let phase = phase % PHASES;
    let mut cmds = Vec::with_capacity(32);

    let center_x = W * 0.48;
    let bounce = if mood == Mood::Happy { quarter_wave(phase) * 3.0 } else { 0.0 };
    let walk_offset = if mood == Mood::Walking { quarter_wave(phase) * 6.0 } else { 0.0 };
    let leg_anim = if mood == Mood::Walking { quarter_wave(phase) * 3.0 } else { 0.0 };
    let x = center_x + walk_offset;
    let y = DOG_Y - bounce;

    // Shadow stays anchored under the resting spot.
    cmds.push(draw::ellipse(center_x, FLOOR_Y + 2.0, 22.0, 5.0, 0.0, palette::SHADOW));

    // Body and rump spots.
    cmds.push(draw::rect(x - 16.0, y - 20.0, 32.0, 20.0, palette::COAT));
    cmds.push(draw::rect(x - 8.0, y - 18.0, 8.0, 6.0, palette::COAT_SPOT));
    cmds.push(draw::rect(x + 4.0, y - 14.0, 6.0, 8.0, palette::COAT_SPOT));

    // Legs scissor while walking.
    cmds.push(draw::rect(x - 12.0, y, 6.0, 10.0 + leg_anim, palette::COAT));
    cmds.push(draw::rect(x + 6.0, y, 6.0, 10.0 - leg_anim, palette::COAT));
    cmds.push(draw::rect(x - 12.0, y + 8.0 + leg_anim, 6.0, 3.0, palette::COAT_SPOT));
    cmds.push(draw::rect(x + 6.0, y + 8.0 - leg_anim, 6.0, 3.0, palette::COAT_SPOT));

    // Head and ears.
    cmds.push(draw::rect(x - 12.0, y - 36.0, 24.0, 18.0, palette::COAT));
    cmds.push(draw::rect(x - 14.0, y - 42.0, 8.0, 10.0, palette::EAR));
    cmds.push(draw::rect(x + 6.0, y - 42.0, 8.0, 10.0, palette::EAR));
    cmds.push(draw::rect(x - 12.0, y - 40.0, 4.0, 6.0, palette::EAR_INNER));
    cmds.push(draw::rect(x + 8.0, y - 40.0, 4.0, 6.0, palette::EAR_INNER));

    match mood {
        Mood::Sleeping => {
            // Closed lids, plus drifting z's.
            cmds.push(draw::line(x - 7.0, y - 28.0, x - 3.0, y - 28.0, 2.0, palette::FEATURE));
            cmds.push(draw::line(x + 3.0, y - 28.0, x + 7.0, y - 28.0, 2.0, palette::FEATURE));
            let drift = quarter_wave(phase) * 2.0;
            cmds.push(draw::zee(x + 16.0, y - 36.0 - drift, 10.0, palette::SNOOZE));
            cmds.push(draw::zee(x + 22.0, y - 42.0 - drift, 8.0, palette::SNOOZE));
        }
        Mood::Happy => {
            // Closed-from-smiling eye arcs.
            cmds.push(draw::arc(x - 5.0, y - 28.0, 3.0, ArcHalf::Upper, 2.0, palette::FEATURE));
            cmds.push(draw::arc(x + 5.0, y - 28.0, 3.0, ArcHalf::Upper, 2.0, palette::FEATURE));
        }
        _ => {
            cmds.push(draw::rect(x - 7.0, y - 30.0, 4.0, 4.0, palette::FEATURE));
            cmds.push(draw::rect(x + 3.0, y - 30.0, 4.0, 4.0, palette::FEATURE));
            cmds.push(draw::rect(x - 6.0, y - 30.0, 2.0, 2.0, palette::EYE_SHINE));
            cmds.push(draw::rect(x + 4.0, y - 30.0, 2.0, 2.0, palette::EYE_SHINE));
        }
    }

    cmds.push(draw::rect(x - 2.0, y - 24.0, 4.0, 3.0, palette::FEATURE));

    if mood == Mood::Eating {
        cmds.push(draw::rect(x - 4.0, y - 20.0, 8.0, 4.0, palette::MOUTH));
        // A bit of kibble bobbing between two spots.
        let hop = (phase % 2) as f32;
        cmds.push(draw::rect(x - 6.0 + hop * 3.0, y - 22.0 + hop * 2.0, 3.0, 3.0, palette::KIBBLE));
    }
    if mood == Mood::Happy {
        cmds.push(draw::arc(x, y - 20.0, 4.0, ArcHalf::Lower, 2.0, palette::FEATURE));
    }

    // Tail wags about its base at the rump.
    let wag = tail_wave(phase) * 8.0;
    cmds.push(draw::pivot_rect(
        x + 16.0,
        y - 16.0,
        0.0,
        -3.0,
        14.0,
        5.0,
        -30.0 + wag,
        palette::EAR,
    ));

    if mood == Mood::Happy {
        cmds.push(draw::ellipse(x - 10.0, y - 24.0, 4.0, 2.0, 0.0, palette::BLUSH));
        cmds.push(draw::ellipse(x + 10.0, y - 24.0, 4.0, 2.0, 0.0, palette::BLUSH));
        if phase % 2 == 0 {
            cmds.push(draw::heart(x - 20.0, y - 48.0, 6.0, palette::HEART_PINK));
            cmds.push(draw::heart(x + 18.0, y - 44.0, 4.0, palette::HEART_RED));
        }
    }

    cmds
}

/// Room plus dog, back to front.
pub fn compose(mood: Mood, phase: u8) -> Vec<DrawCmd> {
    let mut cmds = room_scene();
    cmds.extend(dog_scene(mood, phase));
    cmds
}

/// Clears and repaints `canvas` for one `(mood, phase)` pair.
pub fn render(canvas: &mut Canvas, mood: Mood, phase: u8) {
    canvas.clear();
    let cmds = compose(mood, phase);
    canvas.paint(&cmds);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Shape;

    fn rendered(mood: Mood, phase: u8) -> Canvas {
        let mut canvas = Canvas::room();
        render(&mut canvas, mood, phase);
        canvas
    }

    #[test]
    fn rendering_is_deterministic() {
        for mood in Mood::ALL {
            for phase in 0..PHASES {
                assert_eq!(
                    rendered(mood, phase).data(),
                    rendered(mood, phase).data(),
                    "{mood:?} phase {phase}"
                );
            }
        }
    }

    #[test]
    fn every_pixel_is_opaque_after_a_render() {
        let canvas = rendered(Mood::Idle, 0);
        assert!(canvas.data().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn render_clears_previous_frames() {
        let mut canvas = Canvas::room();
        render(&mut canvas, Mood::Happy, 1);
        render(&mut canvas, Mood::Idle, 0);
        assert_eq!(canvas.data(), rendered(Mood::Idle, 0).data());
    }

    #[test]
    fn out_of_range_phase_wraps() {
        assert_eq!(rendered(Mood::Walking, 5).data(), rendered(Mood::Walking, 1).data());
    }

    #[test]
    fn moods_produce_distinct_frames() {
        let idle = rendered(Mood::Idle, 0);
        for mood in [Mood::Happy, Mood::Eating, Mood::Sleeping, Mood::Walking] {
            assert_ne!(idle.data(), rendered(mood, 0).data(), "{mood:?}");
        }
    }

    #[test]
    fn walking_moves_the_dog_between_phases() {
        assert_ne!(rendered(Mood::Walking, 1).data(), rendered(Mood::Walking, 3).data());
    }

    #[test]
    fn hearts_blink_on_even_happy_phases() {
        let hearts = |cmds: &[DrawCmd]| {
            cmds.iter()
                .filter(|c| matches!(c.shape, Shape::Heart { .. }))
                .count()
        };
        assert_eq!(hearts(&dog_scene(Mood::Happy, 0)), 2);
        assert_eq!(hearts(&dog_scene(Mood::Happy, 1)), 0);
        assert_eq!(hearts(&dog_scene(Mood::Happy, 2)), 2);
        assert_eq!(hearts(&dog_scene(Mood::Idle, 0)), 0);
    }

    #[test]
    fn only_sleep_gets_snooze_glyphs() {
        let zees = |cmds: &[DrawCmd]| {
            cmds.iter()
                .filter(|c| matches!(c.shape, Shape::Zee { .. }))
                .count()
        };
        assert_eq!(zees(&dog_scene(Mood::Sleeping, 0)), 2);
        for mood in [Mood::Idle, Mood::Happy, Mood::Eating, Mood::Walking] {
            assert_eq!(zees(&dog_scene(mood, 0)), 0, "{mood:?}");
        }
    }

    #[test]
    fn landmark_pixels_land_where_expected() {
        let idle = rendered(Mood::Idle, 0);
        // Bare wall, bare floor, the sun through the window.
        assert_eq!(idle.pixel(10, 10), Some(palette::WALL));
        assert_eq!(idle.pixel(5, 230), Some(palette::FLOOR));
        assert_eq!(idle.pixel(264, 40), Some(palette::SUN));
        assert_eq!(idle.pixel(220, 30), Some(palette::WINDOW_SKY));
        // An open-eye pixel that sleep replaces with plain coat.
        assert_eq!(idle.pixel(149, 119), Some(palette::FEATURE));
        assert_eq!(rendered(Mood::Sleeping, 0).pixel(149, 119), Some(palette::COAT));
    }
}
