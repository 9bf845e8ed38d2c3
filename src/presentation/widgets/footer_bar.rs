//! Footer bar widget with key hints and summary info.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One key hint: key label and what it does.
#[derive(Debug, Clone, Copy)]
pub struct Hint {
    /// The key, as displayed.
    pub key: &'static str,
    /// Short action label.
    pub label: &'static str,
    /// Dimmed when the action currently does nothing.
    pub enabled: bool,
}

impl Hint {
    /// Creates an enabled hint.
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            enabled: true,
        }
    }

    /// Sets whether the action is currently available.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Bottom bar: key hints on the left, summary info on the right.
pub struct FooterBar<'a> {
    hints: &'a [Hint],
    right_info: Option<&'a str>,
}

impl<'a> FooterBar<'a> {
    /// Creates a footer over the given hints.
    #[must_use]
    pub const fn new(hints: &'a [Hint]) -> Self {
        Self {
            hints,
            right_info: None,
        }
    }

    /// Sets the right-aligned info text.
    #[must_use]
    pub const fn right_info(mut self, info: &'a str) -> Self {
        self.right_info = Some(info);
        self
    }
}

impl Widget for &FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(Color::Gray);
        let disabled_style = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        for hint in self.hints {
            if hint.enabled {
                spans.push(Span::styled(format!(" {} ", hint.key), key_style));
                spans.push(Span::styled(format!(" {}", hint.label), label_style));
            } else {
                spans.push(Span::styled(format!(" {} ", hint.key), disabled_style));
                spans.push(Span::styled(format!(" {}", hint.label), disabled_style));
            }
            spans.push(Span::raw("  "));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);

        if let Some(info) = self.right_info {
            #[allow(clippy::cast_possible_truncation)]
            let info_width = info.chars().count() as u16;
            if info_width < area.width {
                let info_area = Rect {
                    x: area.x + area.width - info_width,
                    width: info_width,
                    ..area
                };
                Paragraph::new(Span::styled(info, Style::default().fg(Color::DarkGray)))
                    .render(info_area, buf);
            }
        }
    }
}
