//! Inventory screen: add form, filter/sort controls, item list.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::application::{SortOrder, StockFilter, ViewModel};
use crate::domain::{Direction, ItemId};
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{FooterBar, Hint, ItemList, TextInput};

/// Which part of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Name field of the add form.
    #[default]
    NameInput,
    /// Quantity field of the add form.
    QuantityInput,
    /// The item list.
    List,
}

/// Rename state machine: idle, or editing one item's name.
#[derive(Debug, Clone)]
enum EditState {
    Idle,
    Editing { id: ItemId, input: TextInput },
}

/// Mutation or control request routed back to the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryAction {
    /// Nothing to do.
    None,
    /// Submit the add form (the orchestrator validates and clears it).
    SubmitAdd,
    /// Delete an item.
    Remove(ItemId),
    /// Adjust an item's quantity by one unit.
    Adjust(ItemId, Direction),
    /// Replace an item's name.
    Rename {
        /// Target item.
        id: ItemId,
        /// Replacement name, as typed.
        name: String,
    },
    /// Remove every zero-quantity item.
    ClearZeroStock,
    /// Filter or sort changed; the view model must be re-derived.
    ViewChanged,
    /// Exit the application.
    Quit,
}

/// The single interactive screen.
///
/// Owns only derived view state (filter, sort, selection, form inputs);
/// the authoritative collection stays with the orchestrator, which pushes
/// a fresh [`ViewModel`] here after every mutation.
pub struct InventoryScreen {
    name_input: TextInput,
    quantity_input: TextInput,
    focus: Focus,
    selected: usize,
    filter: StockFilter,
    sort: SortOrder,
    edit: EditState,
    view: ViewModel,
}

impl InventoryScreen {
    /// Creates the screen with default view settings and an empty form.
    #[must_use]
    pub fn new() -> Self {
        let mut name_input = TextInput::new(" Name ").placeholder("Item name...");
        name_input.set_focused(true);
        let quantity_input = TextInput::new(" Quantity ")
            .numeric()
            .placeholder("Stock quantity");

        Self {
            name_input,
            quantity_input,
            focus: Focus::NameInput,
            selected: 0,
            filter: StockFilter::default(),
            sort: SortOrder::default(),
            edit: EditState::Idle,
            view: ViewModel::default(),
        }
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> StockFilter {
        self.filter
    }

    /// Returns the active sort order.
    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort
    }

    /// Returns the current focus.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the form's name field contents.
    #[must_use]
    pub fn form_name(&self) -> &str {
        self.name_input.value()
    }

    /// Returns the form's quantity field contents.
    #[must_use]
    pub fn form_quantity(&self) -> &str {
        self.quantity_input.value()
    }

    /// Returns true while an item name is being edited.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.edit, EditState::Editing { .. })
    }

    /// Clears the add form after a successful add.
    pub fn clear_form(&mut self) {
        self.name_input.clear();
        self.quantity_input.clear();
    }

    /// Replaces the displayed view model, clamping the selection.
    pub fn set_view_model(&mut self, view: ViewModel) {
        self.view = view;
        if self.selected >= self.view.entries.len() {
            self.selected = self.view.entries.len().saturating_sub(1);
        }
    }

    /// Returns the id of the selected entry, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<ItemId> {
        self.view.entries.get(self.selected).map(|item| item.id)
    }

    /// Handles a key event, returning the requested action.
    pub fn handle_key(&mut self, key: KeyEvent) -> InventoryAction {
        if self.is_editing() {
            return self.handle_edit_key(key);
        }

        match key.code {
            KeyCode::Tab => {
                self.cycle_focus(true);
                InventoryAction::None
            }
            KeyCode::BackTab => {
                self.cycle_focus(false);
                InventoryAction::None
            }
            _ => match self.focus {
                Focus::NameInput | Focus::QuantityInput
                    if EventHandler::is_submit_event(&key) =>
                {
                    InventoryAction::SubmitAdd
                }
                Focus::NameInput => Self::handle_form_key(&mut self.name_input, key),
                Focus::QuantityInput => Self::handle_form_key(&mut self.quantity_input, key),
                Focus::List => self.handle_list_key(key),
            },
        }
    }

    fn handle_form_key(input: &mut TextInput, key: KeyEvent) -> InventoryAction {
        match key.code {
            KeyCode::Esc => InventoryAction::Quit,
            KeyCode::Char(c) => {
                input.input_char(c);
                InventoryAction::None
            }
            KeyCode::Backspace => {
                input.backspace();
                InventoryAction::None
            }
            KeyCode::Delete => {
                input.delete();
                InventoryAction::None
            }
            KeyCode::Left => {
                input.move_left();
                InventoryAction::None
            }
            KeyCode::Right => {
                input.move_right();
                InventoryAction::None
            }
            KeyCode::Home => {
                input.move_start();
                InventoryAction::None
            }
            KeyCode::End => {
                input.move_end();
                InventoryAction::None
            }
            _ => InventoryAction::None,
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> InventoryAction {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                InventoryAction::None
            }
            KeyCode::Down => {
                if self.selected + 1 < self.view.entries.len() {
                    self.selected += 1;
                }
                InventoryAction::None
            }
            KeyCode::Char('+') | KeyCode::Right => self
                .selected_id()
                .map_or(InventoryAction::None, |id| {
                    InventoryAction::Adjust(id, Direction::Increase)
                }),
            KeyCode::Char('-') | KeyCode::Left => self
                .selected_id()
                .map_or(InventoryAction::None, |id| {
                    InventoryAction::Adjust(id, Direction::Decrease)
                }),
            KeyCode::Char('e') => {
                self.begin_edit();
                InventoryAction::None
            }
            KeyCode::Char('d') | KeyCode::Delete => self
                .selected_id()
                .map_or(InventoryAction::None, InventoryAction::Remove),
            KeyCode::Char('f') => {
                self.filter = self.filter.next();
                InventoryAction::ViewChanged
            }
            KeyCode::Char('s') => {
                self.sort = self.sort.next();
                InventoryAction::ViewChanged
            }
            KeyCode::Char('c') => {
                // Disabled while every item still has stock.
                if self.view.can_clear_zero {
                    InventoryAction::ClearZeroStock
                } else {
                    InventoryAction::None
                }
            }
            KeyCode::Char('q') => InventoryAction::Quit,
            KeyCode::Esc => {
                self.set_focus(Focus::NameInput);
                InventoryAction::None
            }
            _ => InventoryAction::None,
        }
    }

    // idle -> editing(id): seed the edit field with the current name.
    fn begin_edit(&mut self) {
        let Some(entry) = self.view.entries.get(self.selected) else {
            return;
        };
        let mut input = TextInput::new(" Edit Name ");
        input.set_value(entry.name.clone());
        input.set_focused(true);
        self.edit = EditState::Editing {
            id: entry.id,
            input,
        };
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> InventoryAction {
        let EditState::Editing { id, input } = &mut self.edit else {
            return InventoryAction::None;
        };

        if EventHandler::is_submit_event(&key) {
            let action = InventoryAction::Rename {
                id: *id,
                name: input.value().to_string(),
            };
            self.edit = EditState::Idle;
            return action;
        }

        match key.code {
            KeyCode::Esc => {
                // Cancelled: the item stays unchanged.
                self.edit = EditState::Idle;
                InventoryAction::None
            }
            KeyCode::Char(c) => {
                input.input_char(c);
                InventoryAction::None
            }
            KeyCode::Backspace => {
                input.backspace();
                InventoryAction::None
            }
            KeyCode::Delete => {
                input.delete();
                InventoryAction::None
            }
            KeyCode::Left => {
                input.move_left();
                InventoryAction::None
            }
            KeyCode::Right => {
                input.move_right();
                InventoryAction::None
            }
            KeyCode::Home => {
                input.move_start();
                InventoryAction::None
            }
            KeyCode::End => {
                input.move_end();
                InventoryAction::None
            }
            _ => InventoryAction::None,
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let next = match (self.focus, forward) {
            (Focus::NameInput, true) | (Focus::List, false) => Focus::QuantityInput,
            (Focus::QuantityInput, true) | (Focus::NameInput, false) => Focus::List,
            (Focus::List, true) | (Focus::QuantityInput, false) => Focus::NameInput,
        };
        self.set_focus(next);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.name_input.set_focused(focus == Focus::NameInput);
        self.quantity_input.set_focused(focus == Focus::QuantityInput);
    }

    fn controls_line(&self) -> Line<'_> {
        let active = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let inactive = Style::default().fg(Color::Gray);

        let mut spans = vec![Span::styled(" Filter: ", Style::default().fg(Color::DarkGray))];
        for filter in [StockFilter::All, StockFilter::InStock, StockFilter::LowStock] {
            let label = if filter == StockFilter::InStock {
                format!(" {} ({}) ", filter.label(), self.view.in_stock_count)
            } else {
                format!(" {} ", filter.label())
            };
            let style = if filter == self.filter { active } else { inactive };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        spans.push(Span::styled("  Sort: ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!(" {} ", self.sort.label()),
            Style::default().fg(Color::White),
        ));

        Line::from(spans)
    }

    fn footer_hints(&self) -> Vec<Hint> {
        match self.focus {
            Focus::NameInput | Focus::QuantityInput => vec![
                Hint::new("Tab", "Next field"),
                Hint::new("Enter", "Add item"),
                Hint::new("Esc", "Quit"),
            ],
            Focus::List => vec![
                Hint::new("+/-", "Adjust"),
                Hint::new("e", "Edit"),
                Hint::new("d", "Delete"),
                Hint::new("f", "Filter"),
                Hint::new("s", "Sort"),
                Hint::new("c", "Clear empty").enabled(self.view.can_clear_zero),
                Hint::new("q", "Quit"),
            ],
        }
    }

    fn render_edit_popup(&self, area: Rect, buf: &mut Buffer) {
        let EditState::Editing { input, .. } = &self.edit else {
            return;
        };

        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(5),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(40),
            Constraint::Fill(1),
        ]);
        let [_, popup, _] = horizontal.areas(center);

        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Rename Item ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let inner_layout = Layout::vertical([Constraint::Length(3)]);
        let [input_area] = inner_layout.areas(inner);
        input.render(input_area, buf);
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [form_area, controls_area, list_area, footer_area] = layout.areas(area);

        let form_layout =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]);
        let [name_area, quantity_area] = form_layout.areas(form_area);
        (&self.name_input).render(name_area, buf);
        (&self.quantity_input).render(quantity_area, buf);

        Paragraph::new(self.controls_line()).render(controls_area, buf);

        let selection = if self.view.entries.is_empty() {
            None
        } else {
            Some(self.selected)
        };
        let list = ItemList::new(&self.view.entries)
            .selected(selection)
            .focused(self.focus == Focus::List)
            .title(format!(" Items ({}) ", self.filter.label()));
        (&list).render(list_area, buf);

        let total = format!("Total items: {} ", self.view.total_items);
        let hints = self.footer_hints();
        let footer = FooterBar::new(&hints).right_info(&total);
        (&footer).render(footer_area, buf);

        if self.is_editing() {
            self.render_edit_popup(area, buf);
        }
    }
}

impl Default for InventoryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &InventoryScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::derive_view_model;
    use crate::domain::Inventory;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen_with(entries: &[(&str, u32)]) -> (InventoryScreen, Inventory) {
        let mut inventory = Inventory::new();
        for (name, quantity) in entries {
            inventory.add(name, *quantity).unwrap();
        }
        let mut screen = InventoryScreen::new();
        screen.set_view_model(derive_view_model(
            &inventory,
            screen.filter(),
            screen.sort_order(),
        ));
        (screen, inventory)
    }

    #[test]
    fn test_initial_state() {
        let screen = InventoryScreen::new();
        assert_eq!(screen.focus(), Focus::NameInput);
        assert_eq!(screen.filter(), StockFilter::All);
        assert_eq!(screen.sort_order(), SortOrder::Default);
        assert!(!screen.is_editing());
    }

    #[test]
    fn test_typing_fills_form() {
        let mut screen = InventoryScreen::new();
        for c in "Widget".chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Char('3')));

        assert_eq!(screen.form_name(), "Widget");
        assert_eq!(screen.form_quantity(), "3");
    }

    #[test]
    fn test_quantity_field_rejects_non_digits() {
        let mut screen = InventoryScreen::new();
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Char('-')));
        screen.handle_key(key(KeyCode::Char('1')));

        assert_eq!(screen.form_quantity(), "1");
    }

    #[test]
    fn test_enter_in_either_form_field_submits() {
        let mut screen = InventoryScreen::new();
        screen.handle_key(key(KeyCode::Char('x')));
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            InventoryAction::SubmitAdd
        );

        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Char('3')));
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            InventoryAction::SubmitAdd
        );
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut screen = InventoryScreen::new();
        assert!(screen.name_input.is_focused());

        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.focus(), Focus::QuantityInput);
        assert!(!screen.name_input.is_focused());
        assert!(screen.quantity_input.is_focused());

        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.focus(), Focus::List);
        assert!(!screen.quantity_input.is_focused());

        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.focus(), Focus::NameInput);

        screen.handle_key(key(KeyCode::BackTab));
        assert_eq!(screen.focus(), Focus::List);
    }

    #[test]
    fn test_list_adjust_and_delete_actions() {
        let (mut screen, inventory) = screen_with(&[("Bolt", 2), ("Nut", 1)]);
        let bolt = inventory.items()[0].id;
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));

        assert_eq!(
            screen.handle_key(key(KeyCode::Char('+'))),
            InventoryAction::Adjust(bolt, Direction::Increase)
        );
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('-'))),
            InventoryAction::Adjust(bolt, Direction::Decrease)
        );
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('d'))),
            InventoryAction::Remove(bolt)
        );
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let (mut screen, inventory) = screen_with(&[("Bolt", 2), ("Nut", 1)]);
        let nut = inventory.items()[1].id;
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));

        screen.handle_key(key(KeyCode::Down));
        assert_eq!(screen.selected_id(), Some(nut));
        screen.handle_key(key(KeyCode::Down));
        assert_eq!(screen.selected_id(), Some(nut));

        // Removing the last entry clamps the selection back.
        let mut inventory = inventory;
        inventory.remove(nut);
        screen.set_view_model(derive_view_model(
            &inventory,
            screen.filter(),
            screen.sort_order(),
        ));
        assert_eq!(screen.selected_id(), Some(inventory.items()[0].id));
    }

    #[test]
    fn test_filter_and_sort_cycle_request_rederive() {
        let (mut screen, _) = screen_with(&[("Bolt", 2)]);
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));

        assert_eq!(
            screen.handle_key(key(KeyCode::Char('f'))),
            InventoryAction::ViewChanged
        );
        assert_eq!(screen.filter(), StockFilter::InStock);

        assert_eq!(
            screen.handle_key(key(KeyCode::Char('s'))),
            InventoryAction::ViewChanged
        );
        assert_eq!(screen.sort_order(), SortOrder::NameAsc);
    }

    #[test]
    fn test_clear_is_gated_on_zero_stock() {
        let (mut screen, _) = screen_with(&[("Bolt", 2)]);
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('c'))),
            InventoryAction::None
        );

        let (mut screen, _) = screen_with(&[("Bolt", 0)]);
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('c'))),
            InventoryAction::ClearZeroStock
        );
    }

    #[test]
    fn test_edit_mode_seeds_current_name() {
        let (mut screen, inventory) = screen_with(&[("Bolt", 2)]);
        let bolt = inventory.items()[0].id;
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));

        screen.handle_key(key(KeyCode::Char('e')));
        assert!(screen.is_editing());

        screen.handle_key(key(KeyCode::Char('s')));
        let action = screen.handle_key(key(KeyCode::Enter));
        assert_eq!(
            action,
            InventoryAction::Rename {
                id: bolt,
                name: "Bolts".to_string()
            }
        );
        assert!(!screen.is_editing());
    }

    #[test]
    fn test_edit_mode_esc_cancels() {
        let (mut screen, _) = screen_with(&[("Bolt", 2)]);
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));

        screen.handle_key(key(KeyCode::Char('e')));
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), InventoryAction::None);
        assert!(!screen.is_editing());
    }

    #[test]
    fn test_edit_with_empty_list_is_noop() {
        let mut screen = InventoryScreen::new();
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Char('e')));
        assert!(!screen.is_editing());
    }

    #[test]
    fn test_esc_paths() {
        let (mut screen, _) = screen_with(&[("Bolt", 2)]);
        // From the list, Esc returns to the form.
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), InventoryAction::None);
        assert_eq!(screen.focus(), Focus::NameInput);

        // From the form, Esc quits.
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), InventoryAction::Quit);
    }

    #[test]
    fn test_quit_from_list() {
        let (mut screen, _) = screen_with(&[("Bolt", 2)]);
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('q'))),
            InventoryAction::Quit
        );
    }
}
