use embedded_graphics::mono_font::iso_8859_1::{
    FONT_10X20, FONT_6X10, FONT_7X13, FONT_8X13, FONT_9X15, FONT_9X18,
};
use embedded_graphics::mono_font::MonoFont;

/// Latin-1 bitmap fonts, smallest first. Latin-1 covers the degree sign.
static FONTS: [&MonoFont<'static>; 6] = [
    &FONT_6X10,
    &FONT_7X13,
    &FONT_8X13,
    &FONT_9X15,
    &FONT_9X18,
    &FONT_10X20,
];

/// Pixel width of `text` set in `font`.
pub fn text_width(font: &MonoFont, text: &str) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * font.character_size.width + (chars - 1) * font.character_spacing
}

/// Largest font whose glyph height does not exceed `size_px` and in which a
/// line of `chars` characters fits `max_width`. Falls back to the smallest.
pub fn pick(size_px: f32, chars: usize, max_width: u32) -> &'static MonoFont<'static> {
    let sample = "0".repeat(chars);
    FONTS
        .iter()
        .rev()
        .find(|font| {
            font.character_size.height as f32 <= size_px
                && text_width(font, &sample) <= max_width
        })
        .copied()
        .unwrap_or(FONTS[0])
}
