//! Per-frame composition: clear, fill and outline every triangle, overlay FPS

use crate::display::Surface;
use crate::scene::Scene;

/// Background color index the surface is cleared to each frame
const BACKGROUND: u8 = 0;
/// Triangle outlines always use this color, whatever the fill
const HIGHLIGHT: u8 = 15;

// FPS readout geometry: solid blocks at a fixed pitch, top-left corner
const OVERLAY_X: i32 = 5;
const OVERLAY_Y: i32 = 5;
const DIGIT_WIDTH: i32 = 6;
const DIGIT_HEIGHT: i32 = 8;
const DIGIT_PITCH: i32 = 8;

/// Render one complete frame into the surface.
///
/// Triangles draw in insertion order - overdraw is the compositing rule.
/// Each is filled first, then its edges AB, BC, CA are outlined.
pub fn render_frame(scene: &Scene, surface: &mut Surface, fps: u32) {
    surface.clear(BACKGROUND);

    for t in scene.triangles() {
        surface.fill_triangle(t.x0, t.y0, t.x1, t.y1, t.x2, t.y2, t.color);
        surface.line(t.x0, t.y0, t.x1, t.y1, HIGHLIGHT);
        surface.line(t.x1, t.y1, t.x2, t.y2, HIGHLIGHT);
        surface.line(t.x2, t.y2, t.x0, t.y0, HIGHLIGHT);
    }

    draw_fps(surface, fps);
}

/// Placeholder frame-rate readout: one solid block per decimal digit.
/// Deliberately not a font renderer - the block count is the indicator.
fn draw_fps(surface: &mut Surface, fps: u32) {
    let digits = fps.to_string().len() as i32;
    for i in 0..digits {
        let x = OVERLAY_X + i * DIGIT_PITCH;
        for row in 0..DIGIT_HEIGHT {
            surface.hline(x, x + DIGIT_WIDTH - 1, OVERLAY_Y + row, HIGHLIGHT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The demo scene from main, reused by the end-to-end test
    fn demo_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_triangle(50, 50, 150, 100, 100, 150, 10);
        scene.add_triangle(120, 30, 200, 80, 170, 160, 12);
        scene.add_triangle(60, 120, 140, 180, 90, 190, 9);
        scene
    }

    #[test]
    fn test_demo_scene_frame() {
        let mut surface = Surface::new();
        render_frame(&demo_scene(), &mut surface, 0);

        // Each triangle's interior holds its own fill color (centroids are
        // well away from every edge and from the other two triangles)
        assert_eq!(surface.get_pixel(100, 100), Some(10));
        assert_eq!(surface.get_pixel(163, 90), Some(12));
        assert_eq!(surface.get_pixel(96, 163), Some(9));

        // Outline vertices not overdrawn by a later triangle are highlight
        assert_eq!(surface.get_pixel(50, 50), Some(HIGHLIGHT));
        assert_eq!(surface.get_pixel(120, 30), Some(HIGHLIGHT));
        assert_eq!(surface.get_pixel(60, 120), Some(HIGHLIGHT));
        assert_eq!(surface.get_pixel(140, 180), Some(HIGHLIGHT));
        assert_eq!(surface.get_pixel(90, 190), Some(HIGHLIGHT));

        // Background everywhere the scene doesn't reach
        assert_eq!(surface.get_pixel(0, 0), Some(BACKGROUND));
        assert_eq!(surface.get_pixel(319, 0), Some(BACKGROUND));
        assert_eq!(surface.get_pixel(319, 199), Some(BACKGROUND));
        assert_eq!(surface.get_pixel(0, 199), Some(BACKGROUND));
    }

    #[test]
    fn test_outline_color_independent_of_fill() {
        let mut scene = Scene::new();
        scene.add_triangle(20, 20, 80, 30, 50, 90, 3);
        let mut surface = Surface::new();
        render_frame(&scene, &mut surface, 0);

        assert_eq!(surface.get_pixel(20, 20), Some(HIGHLIGHT));
        assert_eq!(surface.get_pixel(80, 30), Some(HIGHLIGHT));
        assert_eq!(surface.get_pixel(50, 90), Some(HIGHLIGHT));
        // Interior keeps the fill color
        assert_eq!(surface.get_pixel(50, 45), Some(3));
    }

    #[test]
    fn test_fps_overlay_block_per_digit() {
        let mut surface = Surface::new();
        render_frame(&Scene::new(), &mut surface, 30);

        // Two digits: two blocks at the fixed pitch, a gap between them
        assert_eq!(surface.get_pixel(OVERLAY_X, OVERLAY_Y), Some(HIGHLIGHT));
        assert_eq!(
            surface.get_pixel(OVERLAY_X + DIGIT_PITCH, OVERLAY_Y),
            Some(HIGHLIGHT)
        );
        assert_eq!(
            surface.get_pixel(OVERLAY_X + DIGIT_WIDTH, OVERLAY_Y),
            Some(BACKGROUND)
        );
        // No third block
        assert_eq!(
            surface.get_pixel(OVERLAY_X + 2 * DIGIT_PITCH, OVERLAY_Y),
            Some(BACKGROUND)
        );
        // Block is solid over its full height
        assert_eq!(
            surface.get_pixel(OVERLAY_X, OVERLAY_Y + DIGIT_HEIGHT - 1),
            Some(HIGHLIGHT)
        );
        assert_eq!(
            surface.get_pixel(OVERLAY_X, OVERLAY_Y + DIGIT_HEIGHT),
            Some(BACKGROUND)
        );
    }

    #[test]
    fn test_frame_clears_previous_contents() {
        let mut surface = Surface::new();
        surface.set_pixel(200, 100, 14);
        render_frame(&Scene::new(), &mut surface, 0);
        assert_eq!(surface.get_pixel(200, 100), Some(BACKGROUND));
    }
}
