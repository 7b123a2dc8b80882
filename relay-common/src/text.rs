// File: relay-common/src/text.rs
//
// Minimal rich-text model for command replies. Rendering (ANSI, chat JSON, ...)
// is up to whoever implements `CommandSource::send_message`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Red,
    Green,
    Yellow,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Named(NamedColor),
    /// 0xRRGGBB
    Hex(u32),
}

impl TextColor {
    pub const RED: TextColor = TextColor::Named(NamedColor::Red);
    pub const GREEN: TextColor = TextColor::Named(NamedColor::Green);
    pub const YELLOW: TextColor = TextColor::Named(NamedColor::Yellow);
    pub const GRAY: TextColor = TextColor::Named(NamedColor::Gray);

    pub fn rgb(self) -> (u8, u8, u8) {
        let value = match self {
            TextColor::Hex(v) => v,
            TextColor::Named(NamedColor::Red) => 0xff5555,
            TextColor::Named(NamedColor::Green) => 0x55ff55,
            TextColor::Named(NamedColor::Yellow) => 0xffff55,
            TextColor::Named(NamedColor::Gray) => 0xaaaaaa,
        };
        ((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

/// A styled piece of text with optional children. Children inherit any
/// style field they leave unset from their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub content: String,
    pub color: Option<TextColor>,
    pub bold: Option<bool>,
    pub underlined: Option<bool>,
    pub click_url: Option<String>,
    pub hover: Option<Box<Component>>,
    pub children: Vec<Component>,
}

impl Component {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            color: None,
            bold: None,
            underlined: None,
            click_url: None,
            hover: None,
            children: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::text("")
    }

    pub fn newline() -> Self {
        Self::text("\n")
    }

    pub fn color(mut self, color: TextColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn underlined(mut self, underlined: bool) -> Self {
        self.underlined = Some(underlined);
        self
    }

    pub fn click_url(mut self, url: impl Into<String>) -> Self {
        self.click_url = Some(url.into());
        self
    }

    pub fn hover(mut self, hover: Component) -> Self {
        self.hover = Some(Box::new(hover));
        self
    }

    pub fn append(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Content of this component and its children with all styling dropped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        out.push_str(&self.content);
        for child in &self.children {
            child.write_plain(out);
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain_text())
    }
}
