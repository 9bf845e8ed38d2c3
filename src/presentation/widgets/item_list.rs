//! Item list widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::application::LOW_STOCK_THRESHOLD;
use crate::domain::Item;

/// Renders the filtered, sorted items with the current selection.
pub struct ItemList<'a> {
    entries: &'a [Item],
    selected: Option<usize>,
    focused: bool,
    title: String,
}

impl<'a> ItemList<'a> {
    /// Creates a list over the derived entries.
    #[must_use]
    pub fn new(entries: &'a [Item]) -> Self {
        Self {
            entries,
            selected: None,
            focused: false,
            title: " Items ".to_string(),
        }
    }

    /// Sets the selected row.
    #[must_use]
    pub const fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Sets focus state.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Sets the block title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    fn quantity_style(item: &Item) -> Style {
        if item.stock_quantity == 0 {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if item.stock_quantity < LOW_STOCK_THRESHOLD {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Green)
        }
    }

    fn row(&self, index: usize, item: &Item) -> Line<'_> {
        let is_selected = self.selected == Some(index);
        let marker = if is_selected { "\u{25b8} " } else { "  " };

        let name_style = if item.stock_quantity == 0 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let mut line = Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(item.name.clone(), name_style),
            Span::raw("  "),
            Span::styled(
                format!("Stock: {}", item.stock_quantity),
                Self::quantity_style(item),
            ),
        ]);

        if is_selected && self.focused {
            line = line.style(Style::default().bg(Color::Rgb(40, 40, 50)));
        }
        line
    }

    // Keeps the selected row inside the viewport.
    fn scroll_offset(&self, height: usize) -> usize {
        let Some(selected) = self.selected else {
            return 0;
        };
        if height == 0 || selected < height {
            0
        } else {
            selected + 1 - height
        }
    }
}

impl Widget for &ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.entries.is_empty() {
            let empty = Paragraph::new("No items in this list or filter.")
                .style(Style::default().fg(Color::DarkGray));
            empty.render(inner, buf);
            return;
        }

        let offset = self.scroll_offset(inner.height as usize);
        let lines: Vec<Line<'_>> = self
            .entries
            .iter()
            .enumerate()
            .skip(offset)
            .take(inner.height as usize)
            .map(|(index, item)| self.row(index, item))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;

    fn items(quantities: &[u32]) -> Vec<Item> {
        quantities
            .iter()
            .enumerate()
            .map(|(i, q)| Item::new(ItemId(i as i64), format!("Item {i}"), *q))
            .collect()
    }

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        let entries = items(&[1; 20]);
        let list = ItemList::new(&entries).selected(Some(12));
        assert_eq!(list.scroll_offset(10), 3);

        let list = ItemList::new(&entries).selected(Some(4));
        assert_eq!(list.scroll_offset(10), 0);
    }

    #[test]
    fn test_scroll_offset_without_selection() {
        let entries = items(&[1, 2]);
        let list = ItemList::new(&entries);
        assert_eq!(list.scroll_offset(10), 0);
    }

    #[test]
    fn test_quantity_styles_by_stock_level() {
        let entries = items(&[0, 2, 9]);
        assert_eq!(
            ItemList::quantity_style(&entries[0]).fg,
            Some(Color::DarkGray)
        );
        assert_eq!(
            ItemList::quantity_style(&entries[1]).fg,
            Some(Color::Yellow)
        );
        assert_eq!(ItemList::quantity_style(&entries[2]).fg, Some(Color::Green));
    }
}
