//! Main application orchestrator.

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info, warn};

use crate::application::derive_view_model;
use crate::domain::Inventory;
use crate::infrastructure::SnapshotStore;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::inventory_screen::{InventoryAction, InventoryScreen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Owns the authoritative inventory, its persistence, and the screen.
///
/// Control flow per user action: store mutation, best-effort persistence
/// write, view-model re-derivation, re-render. Single-threaded throughout.
pub struct App {
    state: AppState,
    inventory: Inventory,
    store: SnapshotStore,
    screen: InventoryScreen,
    events: EventHandler,
}

impl App {
    /// Creates the app, loading the persisted inventory.
    #[must_use]
    pub fn new(store: SnapshotStore) -> Self {
        let inventory = store.load();
        let mut screen = InventoryScreen::new();
        screen.set_view_model(derive_view_model(
            &inventory,
            screen.filter(),
            screen.sort_order(),
        ));

        Self {
            state: AppState::Running,
            inventory,
            store,
            screen,
            events: EventHandler::new(),
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns error if terminal drawing or event polling fails.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            if let Some(event) = self.events.poll()? {
                if self.handle_terminal_event(&event) == EventResult::Exit {
                    self.state = AppState::Exiting;
                }
                terminal.draw(|frame| self.render(frame))?;
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_interrupt_event(&key) {
            return EventResult::Exit;
        }

        let action = self.screen.handle_key(key);
        self.apply(action)
    }

    // Routes a screen request into the store. Validation failures are
    // silent no-ops: the state is left unchanged and nothing is displayed.
    fn apply(&mut self, action: InventoryAction) -> EventResult {
        match action {
            InventoryAction::None => EventResult::Continue,
            InventoryAction::Quit => EventResult::Exit,
            InventoryAction::ViewChanged => {
                self.refresh_view();
                EventResult::Consumed
            }
            InventoryAction::SubmitAdd => {
                self.submit_add();
                EventResult::Consumed
            }
            InventoryAction::Remove(id) => {
                if self.inventory.remove(id) {
                    self.after_mutation();
                }
                EventResult::Consumed
            }
            InventoryAction::Adjust(id, direction) => {
                if self.inventory.adjust_quantity(id, direction).is_ok() {
                    self.after_mutation();
                }
                EventResult::Consumed
            }
            InventoryAction::Rename { id, name } => {
                match self.inventory.rename(id, &name) {
                    Ok(()) => self.after_mutation(),
                    Err(e) => debug!(error = %e, "Rename rejected"),
                }
                EventResult::Consumed
            }
            InventoryAction::ClearZeroStock => {
                if self.inventory.clear_zero_stock() > 0 {
                    self.after_mutation();
                }
                EventResult::Consumed
            }
        }
    }

    fn submit_add(&mut self) {
        let quantity = match Inventory::parse_quantity(self.screen.form_quantity()) {
            Ok(quantity) => quantity,
            Err(e) => {
                debug!(error = %e, "Add rejected");
                return;
            }
        };

        match self.inventory.add(self.screen.form_name(), quantity) {
            Ok(_) => {
                // Inputs are cleared only on a successful add.
                self.screen.clear_form();
                self.after_mutation();
            }
            Err(e) => debug!(error = %e, "Add rejected"),
        }
    }

    // Persist, then re-derive the displayed list.
    fn after_mutation(&mut self) {
        if let Err(e) = self.store.save(&self.inventory) {
            warn!(error = %e, "Failed to persist inventory, continuing in memory");
        }
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        self.screen.set_view_model(derive_view_model(
            &self.inventory,
            self.screen.filter(),
            self.screen.sort_order(),
        ));
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_widget(&self.screen, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tempfile::tempdir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app_in(dir: &std::path::Path) -> App {
        App::new(SnapshotStore::with_path(dir.join("inventory.json")))
    }

    #[test]
    fn test_add_flow_persists_and_clears_form() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        type_str(&mut app, "Widget");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "3");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.inventory.len(), 1);
        assert_eq!(app.inventory.items()[0].stock_quantity, 3);
        assert_eq!(app.screen.form_name(), "");
        assert_eq!(app.screen.form_quantity(), "");

        // The mutation reached disk.
        let reloaded = SnapshotStore::with_path(dir.path().join("inventory.json")).load();
        assert_eq!(reloaded, app.inventory);
    }

    #[test]
    fn test_invalid_add_keeps_form_and_state() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        // Empty quantity: rejected, inputs retained.
        type_str(&mut app, "Widget");
        app.handle_key(key(KeyCode::Enter));

        assert!(app.inventory.is_empty());
        assert_eq!(app.screen.form_name(), "Widget");
    }

    #[test]
    fn test_interrupt_exits() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), EventResult::Exit);
    }

    #[test]
    fn test_decrease_to_zero_then_clear() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        type_str(&mut app, "Widget");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "3");
        app.handle_key(key(KeyCode::Enter));

        // Move focus to the list and decrement three times.
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Char('-')));
        }
        assert_eq!(app.inventory.items()[0].stock_quantity, 0);

        // One more decrement is a no-op at zero.
        app.handle_key(key(KeyCode::Char('-')));
        assert_eq!(app.inventory.items()[0].stock_quantity, 0);

        app.handle_key(key(KeyCode::Char('c')));
        assert!(app.inventory.is_empty());
    }

    #[test]
    fn test_rename_through_edit_mode() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        type_str(&mut app, "Bolt");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "2");
        app.handle_key(key(KeyCode::Enter));

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('e')));
        app.handle_key(key(KeyCode::Char('s')));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.inventory.items()[0].name, "Bolts");
    }

    #[test]
    fn test_loads_existing_snapshot_on_startup() {
        let dir = tempdir().unwrap();
        {
            let mut app = app_in(dir.path());
            type_str(&mut app, "Nut");
            app.handle_key(key(KeyCode::Tab));
            type_str(&mut app, "5");
            app.handle_key(key(KeyCode::Enter));
        }

        let app = app_in(dir.path());
        assert_eq!(app.inventory.len(), 1);
        assert_eq!(app.inventory.items()[0].name, "Nut");
    }
}
