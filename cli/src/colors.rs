use colored::*;
use mazepath_core::render::MapGlyph;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn glyph(&self, glyph: MapGlyph) -> ColoredString {
        let text = glyph.as_char().to_string();
        match glyph {
            MapGlyph::Wall => text.bright_black(),
            MapGlyph::Open => text.normal(),
            MapGlyph::Start | MapGlyph::End => text.yellow().bold(),
            MapGlyph::Path => text.green().bold(),
            MapGlyph::Explored => text.cyan(),
        }
    }

    pub fn coord(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn heading(&self, text: &str) -> ColoredString {
        text.bold()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
