//! Bitmap text rendered as quads
//!
//! HUD and banner text goes through the same colored-triangle pipeline as
//! everything else: each lit pixel of a 4x6 glyph becomes one small quad
//! in world space, anchored at a baseline-left raster position.

use glam::Vec3;

use super::vertex::Vertex;

/// World-space size of one font pixel
const GLYPH_PIXEL: f32 = 0.12;
/// Columns advanced per character (4 glyph columns + 1 spacing)
const GLYPH_ADVANCE: u32 = 5;

/// 4x6 pixel font covering printable ASCII (0x20..=0x7E), one nibble of
/// column bits per row, top row first. Row 4 is the baseline; row 5 holds
/// descenders.
#[rustfmt::skip]
static FONT_4X6: [[u8; 6]; 95] = [
    [0x0, 0x0, 0x0, 0x0, 0x0, 0x0], // Space
    [0x4, 0x4, 0x4, 0x0, 0x4, 0x0], // !
    [0xA, 0xA, 0x0, 0x0, 0x0, 0x0], // "
    [0xA, 0xF, 0xA, 0xF, 0xA, 0x0], // #
    [0x4, 0xE, 0xC, 0x6, 0xE, 0x4], // $
    [0x9, 0x2, 0x4, 0x8, 0x9, 0x0], // %
    [0x4, 0xA, 0x4, 0xA, 0x5, 0x0], // &
    [0x4, 0x4, 0x0, 0x0, 0x0, 0x0], // '
    [0x2, 0x4, 0x4, 0x4, 0x2, 0x0], // (
    [0x4, 0x2, 0x2, 0x2, 0x4, 0x0], // )
    [0x0, 0xA, 0x4, 0xA, 0x0, 0x0], // *
    [0x0, 0x4, 0xE, 0x4, 0x0, 0x0], // +
    [0x0, 0x0, 0x0, 0x4, 0x4, 0x8], // ,
    [0x0, 0x0, 0xE, 0x0, 0x0, 0x0], // -
    [0x0, 0x0, 0x0, 0x0, 0x4, 0x0], // .
    [0x1, 0x2, 0x4, 0x8, 0x8, 0x0], // /
    [0x6, 0x9, 0x9, 0x9, 0x6, 0x0], // 0
    [0x4, 0xC, 0x4, 0x4, 0xE, 0x0], // 1
    [0x6, 0x9, 0x2, 0x4, 0xF, 0x0], // 2
    [0xE, 0x1, 0x6, 0x1, 0xE, 0x0], // 3
    [0x2, 0x6, 0xA, 0xF, 0x2, 0x0], // 4
    [0xF, 0x8, 0xE, 0x1, 0xE, 0x0], // 5
    [0x6, 0x8, 0xE, 0x9, 0x6, 0x0], // 6
    [0xF, 0x1, 0x2, 0x4, 0x4, 0x0], // 7
    [0x6, 0x9, 0x6, 0x9, 0x6, 0x0], // 8
    [0x6, 0x9, 0x7, 0x1, 0x6, 0x0], // 9
    [0x0, 0x4, 0x0, 0x4, 0x0, 0x0], // :
    [0x0, 0x4, 0x0, 0x4, 0x4, 0x8], // ;
    [0x1, 0x2, 0x4, 0x2, 0x1, 0x0], // <
    [0x0, 0xE, 0x0, 0xE, 0x0, 0x0], // =
    [0x4, 0x2, 0x1, 0x2, 0x4, 0x0], // >
    [0x6, 0x9, 0x2, 0x0, 0x2, 0x0], // ?
    [0x6, 0x9, 0xB, 0x8, 0x6, 0x0], // @
    [0x6, 0x9, 0xF, 0x9, 0x9, 0x0], // A
    [0xE, 0x9, 0xE, 0x9, 0xE, 0x0], // B
    [0x6, 0x9, 0x8, 0x9, 0x6, 0x0], // C
    [0xE, 0x9, 0x9, 0x9, 0xE, 0x0], // D
    [0xF, 0x8, 0xE, 0x8, 0xF, 0x0], // E
    [0xF, 0x8, 0xE, 0x8, 0x8, 0x0], // F
    [0x6, 0x8, 0xB, 0x9, 0x6, 0x0], // G
    [0x9, 0x9, 0xF, 0x9, 0x9, 0x0], // H
    [0xE, 0x4, 0x4, 0x4, 0xE, 0x0], // I
    [0x7, 0x2, 0x2, 0xA, 0x4, 0x0], // J
    [0x9, 0xA, 0xC, 0xA, 0x9, 0x0], // K
    [0x8, 0x8, 0x8, 0x8, 0xF, 0x0], // L
    [0x9, 0xF, 0xF, 0x9, 0x9, 0x0], // M
    [0x9, 0xD, 0xB, 0x9, 0x9, 0x0], // N
    [0x6, 0x9, 0x9, 0x9, 0x6, 0x0], // O
    [0xE, 0x9, 0xE, 0x8, 0x8, 0x0], // P
    [0x6, 0x9, 0x9, 0xA, 0x5, 0x0], // Q
    [0xE, 0x9, 0xE, 0xA, 0x9, 0x0], // R
    [0x6, 0x8, 0x6, 0x1, 0xE, 0x0], // S
    [0xE, 0x4, 0x4, 0x4, 0x4, 0x0], // T
    [0x9, 0x9, 0x9, 0x9, 0x6, 0x0], // U
    [0x9, 0x9, 0x9, 0x6, 0x6, 0x0], // V
    [0x9, 0x9, 0xF, 0xF, 0x9, 0x0], // W
    [0x9, 0x9, 0x6, 0x9, 0x9, 0x0], // X
    [0x9, 0x9, 0x6, 0x4, 0x4, 0x0], // Y
    [0xF, 0x1, 0x6, 0x8, 0xF, 0x0], // Z
    [0x6, 0x4, 0x4, 0x4, 0x6, 0x0], // [
    [0x8, 0x8, 0x4, 0x2, 0x1, 0x0], // Backslash
    [0x6, 0x2, 0x2, 0x2, 0x6, 0x0], // ]
    [0x4, 0xA, 0x0, 0x0, 0x0, 0x0], // ^
    [0x0, 0x0, 0x0, 0x0, 0xF, 0x0], // _
    [0x4, 0x2, 0x0, 0x0, 0x0, 0x0], // `
    [0x0, 0x6, 0xA, 0xA, 0x5, 0x0], // a
    [0x8, 0xE, 0x9, 0x9, 0xE, 0x0], // b
    [0x0, 0x6, 0x8, 0x8, 0x6, 0x0], // c
    [0x1, 0x7, 0x9, 0x9, 0x7, 0x0], // d
    [0x0, 0x6, 0xF, 0x8, 0x6, 0x0], // e
    [0x2, 0x4, 0xE, 0x4, 0x4, 0x0], // f
    [0x0, 0x7, 0x9, 0x7, 0x1, 0x6], // g
    [0x8, 0xE, 0x9, 0x9, 0x9, 0x0], // h
    [0x4, 0x0, 0x4, 0x4, 0x4, 0x0], // i
    [0x2, 0x0, 0x2, 0x2, 0xA, 0x4], // j
    [0x8, 0xA, 0xC, 0xA, 0x9, 0x0], // k
    [0x4, 0x4, 0x4, 0x4, 0x2, 0x0], // l
    [0x0, 0xA, 0xF, 0x9, 0x9, 0x0], // m
    [0x0, 0xE, 0x9, 0x9, 0x9, 0x0], // n
    [0x0, 0x6, 0x9, 0x9, 0x6, 0x0], // o
    [0x0, 0xE, 0x9, 0xE, 0x8, 0x8], // p
    [0x0, 0x7, 0x9, 0x7, 0x1, 0x1], // q
    [0x0, 0xE, 0x9, 0x8, 0x8, 0x0], // r
    [0x0, 0x6, 0xC, 0x2, 0xC, 0x0], // s
    [0x4, 0xE, 0x4, 0x4, 0x2, 0x0], // t
    [0x0, 0x9, 0x9, 0x9, 0x6, 0x0], // u
    [0x0, 0x9, 0x9, 0x6, 0x6, 0x0], // v
    [0x0, 0x9, 0x9, 0xF, 0x6, 0x0], // w
    [0x0, 0x9, 0x6, 0x6, 0x9, 0x0], // x
    [0x0, 0x9, 0x9, 0x7, 0x1, 0x6], // y
    [0x0, 0xF, 0x2, 0x4, 0xF, 0x0], // z
    [0x2, 0x4, 0x8, 0x4, 0x2, 0x0], // {
    [0x4, 0x4, 0x4, 0x4, 0x4, 0x0], // |
    [0x8, 0x4, 0x2, 0x4, 0x8, 0x0], // }
    [0x0, 0x5, 0xA, 0x0, 0x0, 0x0], // ~
];

/// Emit quads for one line of text. `origin` is the baseline-left raster
/// position; characters outside printable ASCII still advance the cursor
/// but draw nothing.
pub fn text_line(text: &str, origin: Vec3, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for (index, ch) in text.chars().enumerate() {
        let code = ch as u32;
        if !(0x20..=0x7E).contains(&code) {
            continue;
        }
        let glyph = &FONT_4X6[(code - 0x20) as usize];
        let left = origin.x + (index as u32 * GLYPH_ADVANCE) as f32 * GLYPH_PIXEL;

        for (row, &bits) in glyph.iter().enumerate() {
            for col in 0..4u32 {
                if (bits >> (3 - col)) & 1 == 0 {
                    continue;
                }
                let x = left + col as f32 * GLYPH_PIXEL;
                // Row 4 sits on the baseline, row 5 descends below it
                let y = origin.y + (4 - row as i32) as f32 * GLYPH_PIXEL;
                vertices.extend_from_slice(&[
                    Vertex::new(x, y, origin.z, color),
                    Vertex::new(x + GLYPH_PIXEL, y, origin.z, color),
                    Vertex::new(x + GLYPH_PIXEL, y + GLYPH_PIXEL, origin.z, color),
                    Vertex::new(x, y, origin.z, color),
                    Vertex::new(x + GLYPH_PIXEL, y + GLYPH_PIXEL, origin.z, color),
                    Vertex::new(x, y + GLYPH_PIXEL, origin.z, color),
                ]);
            }
        }
    }

    vertices
}
