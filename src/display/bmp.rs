//! Minimal 1-bit-per-pixel BMP writer.

use std::{fs, io, path::Path};

use super::canvas::MonoCanvas;

const FILE_HEADER_LEN: u32 = 14;
const INFO_HEADER_LEN: u32 = 40;
const PALETTE_LEN: u32 = 8;
const PIXELS_PER_METRE: i32 = 2835;

/// Encodes the canvas with a black/white palette. Rows are stored bottom-up,
/// each padded to a multiple of four bytes.
pub fn encode(canvas: &MonoCanvas) -> Vec<u8> {
    let (width, height) = (canvas.width(), canvas.height());
    let stride = width.div_ceil(32) * 4;
    let image_len = stride * height;
    let offset = FILE_HEADER_LEN + INFO_HEADER_LEN + PALETTE_LEN;

    let mut out = Vec::with_capacity((offset + image_len) as usize);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(offset + image_len).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&offset.to_le_bytes());

    out.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&image_len.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METRE.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METRE.to_le_bytes());
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&2u32.to_le_bytes());

    // Index 0 black, index 1 white (BGRA)
    out.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    out.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0x00]);

    for y in (0..height).rev() {
        let mut row = canvas.packed_row(y);
        row.resize(stride as usize, 0);
        out.extend_from_slice(&row);
    }
    out
}

pub fn write(canvas: &MonoCanvas, path: &Path) -> io::Result<()> {
    fs::write(path, encode(canvas))
}
