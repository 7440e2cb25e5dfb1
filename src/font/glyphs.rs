//! 4x6 bitmap glyphs for printable ASCII.
//!
//! One byte per row, top to bottom. Only the low four bits are used; bit 3
//! is the leftmost column.

pub const GLYPH_WIDTH: usize = 4;
pub const GLYPH_HEIGHT: usize = 6;

/// First character code in [`GLYPHS`].
pub const FIRST_CHAR: u8 = 32;

/// Glyphs for character codes 32..=127.
pub static GLYPHS: [[u8; GLYPH_HEIGHT]; 96] = [
    [0b0000, 0b0000, 0b0000, 0b0000, 0b0000, 0b0000], // space
    [0b0100, 0b0100, 0b0100, 0b0000, 0b0100, 0b0000], // !
    [0b1010, 0b1010, 0b0000, 0b0000, 0b0000, 0b0000], // "
    [0b1010, 0b1111, 0b1010, 0b1111, 0b1010, 0b0000], // #
    [0b0100, 0b1110, 0b1100, 0b0010, 0b1110, 0b0100], // $
    [0b1001, 0b0010, 0b0100, 0b1000, 0b1001, 0b0000], // %
    [0b0100, 0b1010, 0b0100, 0b1010, 0b0101, 0b0000], // &
    [0b0100, 0b0100, 0b0000, 0b0000, 0b0000, 0b0000], // '
    [0b0010, 0b0100, 0b0100, 0b0100, 0b0010, 0b0000], // (
    [0b0100, 0b0010, 0b0010, 0b0010, 0b0100, 0b0000], // )
    [0b0000, 0b1010, 0b0100, 0b1010, 0b0000, 0b0000], // *
    [0b0000, 0b0100, 0b1110, 0b0100, 0b0000, 0b0000], // +
    [0b0000, 0b0000, 0b0000, 0b0100, 0b0100, 0b1000], // ,
    [0b0000, 0b0000, 0b1110, 0b0000, 0b0000, 0b0000], // -
    [0b0000, 0b0000, 0b0000, 0b0000, 0b0100, 0b0000], // .
    [0b0001, 0b0010, 0b0100, 0b1000, 0b0000, 0b0000], // /
    [0b0110, 0b1001, 0b1001, 0b1001, 0b0110, 0b0000], // 0
    [0b0100, 0b1100, 0b0100, 0b0100, 0b1110, 0b0000], // 1
    [0b0110, 0b1001, 0b0010, 0b0100, 0b1111, 0b0000], // 2
    [0b1110, 0b0001, 0b0110, 0b0001, 0b1110, 0b0000], // 3
    [0b0010, 0b0110, 0b1010, 0b1111, 0b0010, 0b0000], // 4
    [0b1111, 0b1000, 0b1110, 0b0001, 0b1110, 0b0000], // 5
    [0b0110, 0b1000, 0b1110, 0b1001, 0b0110, 0b0000], // 6
    [0b1111, 0b0001, 0b0010, 0b0100, 0b0100, 0b0000], // 7
    [0b0110, 0b1001, 0b0110, 0b1001, 0b0110, 0b0000], // 8
    [0b0110, 0b1001, 0b0111, 0b0001, 0b0110, 0b0000], // 9
    [0b0000, 0b0100, 0b0000, 0b0100, 0b0000, 0b0000], // :
    [0b0000, 0b0100, 0b0000, 0b0100, 0b0100, 0b1000], // ;
    [0b0010, 0b0100, 0b1000, 0b0100, 0b0010, 0b0000], // <
    [0b0000, 0b1110, 0b0000, 0b1110, 0b0000, 0b0000], // =
    [0b1000, 0b0100, 0b0010, 0b0100, 0b1000, 0b0000], // >
    [0b0110, 0b1001, 0b0010, 0b0000, 0b0100, 0b0000], // ?
    [0b0110, 0b1001, 0b1011, 0b1000, 0b0110, 0b0000], // @
    [0b0110, 0b1001, 0b1111, 0b1001, 0b1001, 0b0000], // A
    [0b1110, 0b1001, 0b1110, 0b1001, 0b1110, 0b0000], // B
    [0b0110, 0b1001, 0b1000, 0b1001, 0b0110, 0b0000], // C
    [0b1110, 0b1001, 0b1001, 0b1001, 0b1110, 0b0000], // D
    [0b1111, 0b1000, 0b1110, 0b1000, 0b1111, 0b0000], // E
    [0b1111, 0b1000, 0b1110, 0b1000, 0b1000, 0b0000], // F
    [0b0110, 0b1000, 0b1011, 0b1001, 0b0110, 0b0000], // G
    [0b1001, 0b1001, 0b1111, 0b1001, 0b1001, 0b0000], // H
    [0b1110, 0b0100, 0b0100, 0b0100, 0b1110, 0b0000], // I
    [0b0111, 0b0001, 0b0001, 0b1001, 0b0110, 0b0000], // J
    [0b1001, 0b1010, 0b1100, 0b1010, 0b1001, 0b0000], // K
    [0b1000, 0b1000, 0b1000, 0b1000, 0b1111, 0b0000], // L
    [0b1001, 0b1111, 0b1111, 0b1001, 0b1001, 0b0000], // M
    [0b1001, 0b1101, 0b1011, 0b1001, 0b1001, 0b0000], // N
    [0b0110, 0b1001, 0b1001, 0b1001, 0b0110, 0b0000], // O
    [0b1110, 0b1001, 0b1110, 0b1000, 0b1000, 0b0000], // P
    [0b0110, 0b1001, 0b1001, 0b1010, 0b0101, 0b0000], // Q
    [0b1110, 0b1001, 0b1110, 0b1010, 0b1001, 0b0000], // R
    [0b0110, 0b1000, 0b0110, 0b0001, 0b1110, 0b0000], // S
    [0b1110, 0b0100, 0b0100, 0b0100, 0b0100, 0b0000], // T
    [0b1001, 0b1001, 0b1001, 0b1001, 0b0110, 0b0000], // U
    [0b1001, 0b1001, 0b1001, 0b0110, 0b0110, 0b0000], // V
    [0b1001, 0b1001, 0b1111, 0b1111, 0b1001, 0b0000], // W
    [0b1001, 0b1001, 0b0110, 0b1001, 0b1001, 0b0000], // X
    [0b1001, 0b1001, 0b0110, 0b0100, 0b0100, 0b0000], // Y
    [0b1111, 0b0001, 0b0110, 0b1000, 0b1111, 0b0000], // Z
    [0b0110, 0b0100, 0b0100, 0b0100, 0b0110, 0b0000], // [
    [0b1000, 0b0100, 0b0010, 0b0001, 0b0000, 0b0000], // backslash
    [0b0110, 0b0010, 0b0010, 0b0010, 0b0110, 0b0000], // ]
    [0b0100, 0b1010, 0b0000, 0b0000, 0b0000, 0b0000], // ^
    [0b0000, 0b0000, 0b0000, 0b0000, 0b1111, 0b0000], // _
    [0b0100, 0b0010, 0b0000, 0b0000, 0b0000, 0b0000], // `
    [0b0000, 0b0110, 0b1001, 0b1011, 0b0101, 0b0000], // a
    [0b1000, 0b1110, 0b1001, 0b1001, 0b1110, 0b0000], // b
    [0b0000, 0b0110, 0b1000, 0b1000, 0b0110, 0b0000], // c
    [0b0001, 0b0111, 0b1001, 0b1001, 0b0111, 0b0000], // d
    [0b0000, 0b0110, 0b1111, 0b1000, 0b0110, 0b0000], // e
    [0b0010, 0b0100, 0b1110, 0b0100, 0b0100, 0b0000], // f
    [0b0000, 0b0111, 0b1001, 0b0111, 0b0001, 0b0110], // g
    [0b1000, 0b1110, 0b1001, 0b1001, 0b1001, 0b0000], // h
    [0b0100, 0b0000, 0b0100, 0b0100, 0b0100, 0b0000], // i
    [0b0010, 0b0000, 0b0010, 0b0010, 0b1010, 0b0100], // j
    [0b1000, 0b1001, 0b1010, 0b1100, 0b1001, 0b0000], // k
    [0b0100, 0b0100, 0b0100, 0b0100, 0b0010, 0b0000], // l
    [0b0000, 0b1010, 0b1111, 0b1001, 0b1001, 0b0000], // m
    [0b0000, 0b1110, 0b1001, 0b1001, 0b1001, 0b0000], // n
    [0b0000, 0b0110, 0b1001, 0b1001, 0b0110, 0b0000], // o
    [0b0000, 0b1110, 0b1001, 0b1110, 0b1000, 0b1000], // p
    [0b0000, 0b0111, 0b1001, 0b0111, 0b0001, 0b0001], // q
    [0b0000, 0b0110, 0b1001, 0b1000, 0b1000, 0b0000], // r
    [0b0000, 0b0111, 0b1100, 0b0011, 0b1110, 0b0000], // s
    [0b0100, 0b1110, 0b0100, 0b0100, 0b0010, 0b0000], // t
    [0b0000, 0b1001, 0b1001, 0b1001, 0b0110, 0b0000], // u
    [0b0000, 0b1001, 0b1001, 0b0110, 0b0110, 0b0000], // v
    [0b0000, 0b1001, 0b1001, 0b1111, 0b0110, 0b0000], // w
    [0b0000, 0b1001, 0b0110, 0b0110, 0b1001, 0b0000], // x
    [0b0000, 0b1001, 0b1001, 0b0111, 0b0001, 0b0110], // y
    [0b0000, 0b1111, 0b0010, 0b0100, 0b1111, 0b0000], // z
    [0b0010, 0b0100, 0b1100, 0b0100, 0b0010, 0b0000], // {
    [0b0100, 0b0100, 0b0100, 0b0100, 0b0100, 0b0000], // |
    [0b1000, 0b0100, 0b0110, 0b0100, 0b1000, 0b0000], // }
    [0b0000, 0b0101, 0b1010, 0b0000, 0b0000, 0b0000], // ~
    [0b1111, 0b1111, 0b1111, 0b1111, 0b1111, 0b1111], // DEL, solid block
];

/// Bitmap for `ch`, or the blank glyph if it is not in the table.
pub fn glyph(ch: char) -> &'static [u8; GLYPH_HEIGHT] {
    let idx = (ch as u32).wrapping_sub(FIRST_CHAR as u32) as usize;
    GLYPHS.get(idx).unwrap_or(&GLYPHS[0])
}
