use gpui::{Pixels, TextRun, Window, font, px};

use crate::render::TextMeasurer;

/// Measures labels with the window's text system. Multi-line labels stack.
pub(crate) struct GpuiTextMeasurer<'a> {
    window: &'a Window,
}

impl<'a> GpuiTextMeasurer<'a> {
    pub(crate) fn new(window: &'a Window) -> Self {
        Self { window }
    }

    fn shape(&self, line: &str, size: Pixels) -> (f32, f32) {
        let run = TextRun {
            len: line.len(),
            font: font(".SystemUIFont"),
            color: gpui::black(),
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        let shaped = self
            .window
            .text_system()
            .shape_line(line.to_string().into(), size, &[run], None);
        (
            f32::from(shaped.width),
            f32::from(shaped.ascent + shaped.descent),
        )
    }
}

impl TextMeasurer for GpuiTextMeasurer<'_> {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let size = font_size as f32;
        let line_height = size * 1.2;
        let (width, height) = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| self.shape(line, px(size)))
            .fold((0.0_f32, 0.0_f32), |(width, height), (w, h)| {
                (width.max(w), height + h.max(line_height))
            });
        (f64::from(width), f64::from(height))
    }
}
