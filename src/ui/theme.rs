use ratatui::style::{Color, Modifier, Style};

use crate::engine::config::PaletteConfig;
use crate::highlight::TokenKind;

/// Parses `#RRGGBB` into an RGB color.
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Per-kind foreground colors for highlighted code
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntaxColors {
    pub comment: Color,
    pub tag: Color,
    pub attr_name: Color,
    pub attr_value: Color,
    pub keyword: Color,
    pub function: Color,
    pub string: Color,
    pub number: Color,
    pub boolean: Color,
    pub punctuation: Color,
    pub plain: Color,
}

/// Landing page code block colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
    pub surface: Color,
    pub warning: Color,
    pub syntax: SyntaxColors,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::landing()
    }
}

impl Theme {
    pub fn landing() -> Self {
        Self {
            background: Color::Rgb(17, 24, 39),  // #111827 gray-900
            text: Color::Rgb(243, 244, 246),     // #F3F4F6 gray-100
            accent: Color::Rgb(192, 132, 252),   // #C084FC purple-400
            dimmed: Color::Rgb(107, 114, 128),   // #6B7280 gray-500
            surface: Color::Rgb(31, 41, 55),     // #1F2937 gray-800
            warning: Color::Rgb(248, 113, 113),  // #F87171 red-400
            syntax: SyntaxColors {
                comment: Color::Rgb(107, 114, 128),
                tag: Color::Rgb(192, 132, 252),
                attr_name: Color::Rgb(96, 165, 250),
                attr_value: Color::Rgb(74, 222, 128),
                keyword: Color::Rgb(192, 132, 252),
                function: Color::Rgb(253, 224, 71),
                string: Color::Rgb(74, 222, 128),
                number: Color::Rgb(251, 146, 60),
                boolean: Color::Rgb(251, 146, 60),
                punctuation: Color::Rgb(156, 163, 175),
                plain: Color::Rgb(209, 213, 219),
            },
        }
    }

    /// Builds a theme from configured hex strings. Slots that fail to parse
    /// keep the landing color.
    pub fn from_palette(palette: &PaletteConfig) -> Self {
        let base = Theme::landing();
        let pick = |hex: &str, fallback: Color| parse_hex(hex).unwrap_or(fallback);
        let s = base.syntax;

        Self {
            background: pick(&palette.background, base.background),
            text: pick(&palette.text, base.text),
            accent: pick(&palette.accent, base.accent),
            syntax: SyntaxColors {
                comment: pick(&palette.comment, s.comment),
                tag: pick(&palette.tag, s.tag),
                attr_name: pick(&palette.attr_name, s.attr_name),
                attr_value: pick(&palette.attr_value, s.attr_value),
                keyword: pick(&palette.keyword, s.keyword),
                function: pick(&palette.function, s.function),
                string: pick(&palette.string, s.string),
                number: pick(&palette.number, s.number),
                boolean: pick(&palette.boolean, s.boolean),
                punctuation: pick(&palette.punctuation, s.punctuation),
                plain: pick(&palette.plain, s.plain),
            },
            ..base
        }
    }

    pub fn token_color(&self, kind: TokenKind) -> Color {
        let s = &self.syntax;
        match kind {
            TokenKind::Comment => s.comment,
            TokenKind::Tag => s.tag,
            TokenKind::AttrName => s.attr_name,
            TokenKind::AttrValue => s.attr_value,
            TokenKind::Keyword => s.keyword,
            TokenKind::Function => s.function,
            TokenKind::String => s.string,
            TokenKind::Number => s.number,
            TokenKind::Boolean => s.boolean,
            TokenKind::Punctuation => s.punctuation,
            TokenKind::Plain => s.plain,
        }
    }

    pub fn token_style(&self, kind: TokenKind) -> Style {
        let style = Style::default().fg(self.token_color(kind)).bg(self.background);
        match kind {
            TokenKind::Comment => style.add_modifier(Modifier::ITALIC),
            _ => style,
        }
    }
}
