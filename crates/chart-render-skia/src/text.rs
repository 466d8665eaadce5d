// File: crates/chart-render-skia/src/text.rs
// Summary: Text shaper/measurer using Skia textlayout with sensible font fallbacks.

use chart_core::surface::{FontSpec, TextMeasure};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &FontSpec, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(color);
        let style = match (font.bold, font.italic) {
            (true, true) => skia::FontStyle::bold_italic(),
            (true, false) => skia::FontStyle::bold(),
            (false, true) => skia::FontStyle::italic(),
            (false, false) => skia::FontStyle::normal(),
        };
        ts.set_font_style(style);
        if font.mono_numeric {
            // Prefer monospaced/tabular-number families for numeric alignment
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    pub fn layout(&self, text: &str, font: &FontSpec, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw with `origin` on the text baseline.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, origin: (f32, f32), font: &FontSpec, color: skia::Color) {
        let mut p = self.layout(text, font, color);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (origin.0, origin.1 - font.size * 0.8));
    }
}

impl TextMeasure for TextShaper {
    fn measure(&self, text: &str, font: &FontSpec) -> (f32, f32) {
        let p = self.layout(text, font, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        (p.longest_line(), p.height())
    }
}
