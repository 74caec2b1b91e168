use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use super::canvas::MonoCanvas;
use super::fonts;
use super::view::DisplayView;
use crate::data_mgmt::Trend;

const BORDER_INSET: i32 = 2;
const LINE_GAP: i32 = 5;
const TIME_MARGIN: i32 = 5;

fn temperature_size(width: u32) -> f32 {
    (width as f32 - 4.0) / (10.0 * 0.65)
}

fn time_size(width: u32) -> f32 {
    (width as f32 - 10.0) / (20.0 * 0.65)
}

fn draw_text(canvas: &mut MonoCanvas, text: &str, at: Point, font: &MonoFont) {
    let style = MonoTextStyle::new(font, BinaryColor::On);
    Text::with_baseline(text, at, style, Baseline::Top)
        .draw(canvas)
        .unwrap_or_else(|e| match e {});
}

fn draw_line(canvas: &mut MonoCanvas, from: Point, to: Point) {
    Line::new(from, to)
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 2))
        .draw(canvas)
        .unwrap_or_else(|e| match e {});
}

/// Arrow for a trend, drawn inside one character cell.
fn draw_trend(canvas: &mut MonoCanvas, cell: Rectangle, trend: Trend) {
    let left = cell.top_left.x + 1;
    let mid = cell.top_left.y + cell.size.height as i32 / 2;
    let span = cell.size.width as i32 - 3;
    let head = 3;
    match trend {
        Trend::Up => {
            let tip = Point::new(left + span, mid - span / 2);
            draw_line(canvas, Point::new(left, mid + span / 2), tip);
            draw_line(canvas, tip, tip - Point::new(head, 0));
            draw_line(canvas, tip, tip + Point::new(0, head));
        }
        Trend::Down => {
            let tip = Point::new(left + span, mid + span / 2);
            draw_line(canvas, Point::new(left, mid - span / 2), tip);
            draw_line(canvas, tip, tip - Point::new(head, 0));
            draw_line(canvas, tip, tip - Point::new(0, head));
        }
        Trend::Stable => {
            let tip = Point::new(left + span, mid);
            draw_line(canvas, Point::new(left, mid), tip);
            draw_line(canvas, tip, tip + Point::new(-head, -head));
            draw_line(canvas, tip, tip + Point::new(-head, head));
        }
        Trend::Unknown => {}
    }
}

/// Lays out the view on a white canvas of the given size: a border, three
/// centred lines (indoor, outdoor, rain) and the time in the top-right corner.
pub fn render(view: &DisplayView, size: Size) -> MonoCanvas {
    let mut canvas = MonoCanvas::new(size);
    let (w, h) = (size.width as i32, size.height as i32);

    Rectangle::with_corners(
        Point::new(BORDER_INSET, BORDER_INSET),
        Point::new(w - BORDER_INSET, h - BORDER_INSET),
    )
    .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
    .draw(&mut canvas)
    .unwrap_or_else(|e| match e {});

    let lines = view.lines();
    let widest_chars = lines
        .iter()
        .map(|(text, _)| text.chars().count())
        .max()
        .unwrap_or(0);
    let font = fonts::pick(temperature_size(size.width), widest_chars, size.width);
    let line_h = font.character_size.height as i32;
    let cell_w = font.character_size.width;
    let widest = lines
        .iter()
        .map(|(text, _)| fonts::text_width(font, text))
        .max()
        .unwrap_or(0) as i32;

    let x = (w - widest) / 2;
    let y0 = (h - 3 * line_h - 2 * LINE_GAP) / 2;
    for (i, (text, trend)) in lines.into_iter().enumerate() {
        let y = y0 + i as i32 * (line_h + LINE_GAP);
        draw_text(&mut canvas, text, Point::new(x, y), font);
        if trend != Trend::Unknown {
            let last_cell = fonts::text_width(font, text) as i32 - cell_w as i32;
            let cell = Rectangle::new(
                Point::new(x + last_cell, y),
                Size::new(cell_w, line_h as u32),
            );
            draw_trend(&mut canvas, cell, trend);
        }
    }

    let time_font = fonts::pick(time_size(size.width), view.time.chars().count(), size.width);
    let time_w = fonts::text_width(time_font, &view.time) as i32;
    draw_text(
        &mut canvas,
        &view.time,
        Point::new(w - time_w - TIME_MARGIN, TIME_MARGIN),
        time_font,
    );

    canvas
}
