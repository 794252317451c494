#![allow(missing_docs)]
//! Host-level tests for the cross overlay and per-frame composition.

use joystick_matrix::cross::{CROSS_COLOR, CrossPattern};
use joystick_matrix::frame::{BLACK, Frame};
use joystick_matrix::grid::GridPoint;
use joystick_matrix::scene::{CURSOR_OFF_CROSS, CURSOR_ON_CROSS, CursorScene};

const SIDE: usize = 5;
const LED_COUNT: usize = SIDE * SIDE;

type Scene = CursorScene<SIDE, LED_COUNT>;

fn point(row: u16, col: u16) -> GridPoint<SIDE> {
    GridPoint::new(row, col).unwrap()
}

#[test]
fn cleared_frame_is_all_black() {
    let mut frame = Frame::<LED_COUNT>::new();
    frame.set(3, CROSS_COLOR);
    frame.clear();
    for index in 0..LED_COUNT {
        assert_eq!(frame.get(index), BLACK);
    }
}

#[test]
fn cross_member_indices_match_constants() {
    const CROSS: CrossPattern<SIDE, LED_COUNT> = CrossPattern::new();
    let indices: Vec<usize> = CROSS.indices().collect();
    assert_eq!(indices, [2, 7, 10, 11, 12, 13, 14, 17, 22]);
    assert_eq!(CrossPattern::<SIDE, LED_COUNT>::LEN, 9);
}

#[test]
fn cross_is_deterministic_across_invocations() {
    assert_eq!(
        CrossPattern::<SIDE, LED_COUNT>::new(),
        CrossPattern::<SIDE, LED_COUNT>::new()
    );
}

#[test]
fn painted_cross_cells_are_pure_blue() {
    let cross = CrossPattern::<SIDE, LED_COUNT>::new();
    let mut frame = Frame::new();
    cross.paint(&mut frame);
    for index in cross.indices() {
        assert_eq!(frame.get(index), CROSS_COLOR);
    }
    assert_eq!(frame.get(0), BLACK);
    assert_eq!(frame.get(24), BLACK);
}

#[test]
fn cursor_is_green_on_cross_and_red_off_it() {
    let mut scene = Scene::new();

    let frame = scene.advance(point(2, 2)); // center, on the cross
    assert_eq!(frame.get(12), CURSOR_ON_CROSS);

    let frame = scene.advance(point(0, 4)); // corner, off the cross
    assert_eq!(frame.get(4), CURSOR_OFF_CROSS);
}

#[test]
fn origin_cell_is_trail_marked_on_the_first_frame() {
    // The cursor history starts at index 0, so the first compose paints it.
    let mut scene = Scene::new();
    let frame = scene.advance(point(1, 1));
    assert_eq!(frame.get(0), CURSOR_OFF_CROSS);
    assert_eq!(frame.get(6), CURSOR_OFF_CROSS);
}

#[test]
fn visited_cell_stays_red_after_the_cursor_moves_away() {
    let mut scene = Scene::new();
    scene.advance(point(1, 1)); // cursor at index 6
    scene.advance(point(0, 3)); // cursor leaves; 6 becomes previous, marked

    // Index 6 is off the cross and must stay red on every later frame
    // where it is neither the cursor nor overlay.
    for _ in 0..3 {
        let frame = scene.advance(point(0, 3));
        assert_eq!(frame.get(6), CURSOR_OFF_CROSS);
    }
}

#[test]
fn overlay_wins_over_the_trail_on_cross_cells() {
    let mut scene = Scene::new();
    scene.advance(point(2, 2)); // cursor on the center cell
    let frame = scene.advance(point(0, 0)); // leaving: first visit paints 12 red
    assert_eq!(frame.get(12), CURSOR_OFF_CROSS);

    // From the next frame on, the overlay repaints the marked cell blue.
    let frame = scene.advance(point(0, 1));
    assert_eq!(frame.get(12), CROSS_COLOR);
}

#[test]
fn unvisited_cells_stay_black() {
    let mut scene = Scene::new();
    let frame = scene.advance(point(1, 1));
    assert_eq!(frame.get(24), BLACK);
    assert_eq!(frame.get(20), BLACK);
}

#[test]
fn current_cursor_overrides_the_trail_color_rules() {
    let mut scene = Scene::new();
    scene.advance(point(2, 2));
    // Returning to the marked center cell shows green, not trail red.
    scene.advance(point(0, 0));
    let frame = scene.advance(point(2, 2));
    assert_eq!(frame.get(12), CURSOR_ON_CROSS);
}
