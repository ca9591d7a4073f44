//! Overlay rasterization helpers.
//!
//! All drawing operates on a copy of the acquired frame and is clipped at
//! the frame bounds, so annotations near an edge degrade gracefully
//! instead of panicking or wrapping.

use marker_follow_core::{Frame, Marker, Rgb};
use nalgebra::Point2;

/// Draw a filled circle centered at `center` (pixel coordinates).
pub fn fill_circle(frame: &mut Frame, center: Point2<f32>, radius: i64, color: Rgb) {
    let cx = center.x.round() as i64;
    let cy = center.y.round() as i64;
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                frame.put_pixel(cx + dx, cy + dy, color);
            }
        }
    }
}

/// Draw a line segment between two points (Bresenham).
pub fn draw_line(frame: &mut Frame, from: Point2<f32>, to: Point2<f32>, color: Rgb) {
    let mut x0 = from.x.round() as i64;
    let mut y0 = from.y.round() as i64;
    let x1 = to.x.round() as i64;
    let y1 = to.y.round() as i64;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        frame.put_pixel(x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw the four corner edges of a marker plus a small dot on corner 0.
///
/// The dot marks the detector's corner ordering so a viewer can see the
/// marker orientation, matching what detection libraries draw themselves.
pub fn draw_marker_outline(frame: &mut Frame, marker: &Marker, color: Rgb) {
    for i in 0..4 {
        draw_line(frame, marker.corners[i], marker.corners[(i + 1) % 4], color);
    }
    fill_circle(frame, marker.corners[0], 2, color);
}

/// Render the marker id next to corner 0 with the built-in digit stencil.
pub fn draw_marker_id(frame: &mut Frame, marker: &Marker, color: Rgb) {
    let anchor = marker.corners[0];
    let text = marker.id.to_string();
    let x0 = anchor.x.round() as i64 + 4;
    let y0 = anchor.y.round() as i64 - (DIGIT_ROWS as i64 * DIGIT_SCALE + 4);
    draw_digits(frame, &text, x0, y0, color);
}

const DIGIT_ROWS: usize = 5;
const DIGIT_COLS: usize = 3;
const DIGIT_SCALE: i64 = 2;

// 3x5 stencils for '0'..'9', one row per bit triple.
const DIGITS: [[u8; DIGIT_ROWS]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b111, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b010, 0b010, 0b010], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];

fn draw_digits(frame: &mut Frame, text: &str, x0: i64, y0: i64, color: Rgb) {
    let mut cursor = x0;
    for ch in text.chars() {
        let Some(digit) = ch.to_digit(10) else {
            continue;
        };
        let stencil = &DIGITS[digit as usize];
        for (row, bits) in stencil.iter().enumerate() {
            for col in 0..DIGIT_COLS {
                if bits >> (DIGIT_COLS - 1 - col) & 1 == 1 {
                    for sy in 0..DIGIT_SCALE {
                        for sx in 0..DIGIT_SCALE {
                            frame.put_pixel(
                                cursor + col as i64 * DIGIT_SCALE + sx,
                                y0 + row as i64 * DIGIT_SCALE + sy,
                                color,
                            );
                        }
                    }
                }
            }
        }
        cursor += (DIGIT_COLS as i64 + 1) * DIGIT_SCALE;
    }
}
