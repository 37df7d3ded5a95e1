/*
Catppuccin colours used by the navigation UI (subset of the full palette)

Latte                       Mocha
Red,d20f39                  Red,f38ba8
Peach,fe640b                Peach,fab387
Yellow,df8e1d               Yellow,f9e2af
Green,40a02b                Green,a6e3a1
Blue,1e66f5                 Blue,89b4fa
Lavender,7287fd             Lavender,b4befe
Mauve,8839ef                Mauve,cba6f7
Text,4c4f69                 Text,cdd6f4
Subtext 0,6c6f85            Subtext 0,a6adc8
Overlay 1,8c8fa1            Overlay 1,7f849c
Overlay 0,9ca0b0            Overlay 0,6c7086
Surface 1,bcc0cc            Surface 1,45475a
Surface 0,ccd0da            Surface 0,313244
Base,eff1f5                 Base,1e1e2e
*/

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Mocha, // Dark
    Latte, // Light
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub red: Color,
    pub peach: Color,
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,
    pub lavender: Color,
    pub mauve: Color,
    pub text: Color,
    pub subtext0: Color,
    pub overlay1: Color,
    pub overlay0: Color,
    pub surface1: Color,
    pub surface0: Color,
    pub base: Color,
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Mocha => Self::mocha(),
            ThemeVariant::Latte => Self::latte(),
        }
    }

    fn mocha() -> Self {
        Self {
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            peach: Color::Rgb(0xfa, 0xb3, 0x87),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            blue: Color::Rgb(0x89, 0xb4, 0xfa),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay0: Color::Rgb(0x6c, 0x70, 0x86),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface0: Color::Rgb(0x31, 0x32, 0x44),
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
        }
    }

    fn latte() -> Self {
        Self {
            red: Color::Rgb(0xd2, 0x0f, 0x39),
            peach: Color::Rgb(0xfe, 0x64, 0x0b),
            yellow: Color::Rgb(0xdf, 0x8e, 0x1d),
            green: Color::Rgb(0x40, 0xa0, 0x2b),
            blue: Color::Rgb(0x1e, 0x66, 0xf5),
            lavender: Color::Rgb(0x72, 0x87, 0xfd),
            mauve: Color::Rgb(0x88, 0x39, 0xef),
            text: Color::Rgb(0x4c, 0x4f, 0x69),
            subtext0: Color::Rgb(0x6c, 0x6f, 0x85),
            overlay1: Color::Rgb(0x8c, 0x8f, 0xa1),
            overlay0: Color::Rgb(0x9c, 0xa0, 0xb0),
            surface1: Color::Rgb(0xbc, 0xc0, 0xcc),
            surface0: Color::Rgb(0xcc, 0xd0, 0xda),
            base: Color::Rgb(0xef, 0xf1, 0xf5),
        }
    }

    /// Selected tab in a tab bar
    pub fn tab_highlight_style(&self) -> Style {
        Style::default()
            .fg(self.base)
            .bg(self.lavender)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_style(&self) -> Style {
        Style::default().fg(self.subtext0)
    }

    /// Border of the active display area
    pub fn active_border_style(&self) -> Style {
        Style::default().fg(self.red).add_modifier(Modifier::BOLD)
    }

    pub fn inactive_border_style(&self) -> Style {
        Style::default().fg(self.surface1)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.overlay0)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.yellow)
    }

    // Terminal cursor inside the rename prompt
    pub fn cursor_style(&self) -> Style {
        Style::default().bg(self.peach).fg(self.base)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}
