//! Main application UI.
//! A single screen showing one card face, with flip, navigation and an add-card form.

use crate::database::KeyValueStore;
use crate::models::DeckSession;
use eframe::egui;

/// Input fields of the "Add New Flashcard" window
#[derive(Default)]
struct AddCardForm {
    open: bool,
    question: String,
    answer: String,
}

impl AddCardForm {
    fn close(&mut self) {
        self.open = false;
        self.question.clear();
        self.answer.clear();
    }
}

/// Main application state
pub struct FlashcardApp<S> {
    session: DeckSession<S>,
    add_form: AddCardForm,
    error_message: Option<String>,
}

impl<S: KeyValueStore> eframe::App for FlashcardApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_card_screen(ctx);

        if self.add_form.open {
            self.render_add_dialog(ctx);
        }

        if let Some(message) = &self.error_message {
            let mut dismissed = false;
            egui::Window::new("Could not save")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            if dismissed {
                self.error_message = None;
            }
        }
    }
}

impl<S: KeyValueStore> FlashcardApp<S> {
    pub fn new(session: DeckSession<S>) -> Self {
        Self {
            session,
            add_form: AddCardForm::default(),
            error_message: None,
        }
    }

    /// Renders the card face and the controls under it
    fn render_card_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Store actions to execute after UI rendering
            let mut action_flip = false;
            let mut action_previous = false;
            let mut action_next = false;

            ui.vertical_centered(|ui| {
                ui.add_space(40.0);

                let text = self
                    .session
                    .face_text()
                    .unwrap_or("No flashcards available")
                    .to_string();

                egui::Frame::none()
                    .fill(egui::Color32::from_gray(224))
                    .inner_margin(16.0)
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.label(
                            egui::RichText::new(text)
                                .size(24.0)
                                .color(egui::Color32::BLACK),
                        );
                    });

                ui.label(self.session.position_label());
                ui.add_space(16.0);

                if ui.button("Flip Card").clicked() {
                    action_flip = true;
                }

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(self.session.has_previous(), egui::Button::new("Previous"))
                        .clicked()
                    {
                        action_previous = true;
                    }
                    if ui
                        .add_enabled(self.session.has_next(), egui::Button::new("Next"))
                        .clicked()
                    {
                        action_next = true;
                    }
                });

                ui.add_space(16.0);

                if ui.button("Add New Card").clicked() {
                    self.add_form.open = true;
                }
            });

            // Execute deferred actions
            if action_flip {
                self.session.flip();
            }
            if action_previous {
                self.session.previous();
            }
            if action_next {
                self.session.next();
            }
        });
    }

    /// Renders the two-field form for a new card
    fn render_add_dialog(&mut self, ctx: &egui::Context) {
        let mut action_add = false;
        let mut action_cancel = false;
        let mut window_open = true;

        egui::Window::new("Add New Flashcard")
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Question");
                ui.text_edit_singleline(&mut self.add_form.question);
                ui.add_space(8.0);

                ui.label("Answer");
                ui.text_edit_singleline(&mut self.add_form.answer);
                ui.add_space(16.0);

                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        action_cancel = true;
                    }
                    if ui.button("Add").clicked() {
                        action_add = true;
                    }
                });
            });

        // Closing the window with its title-bar button counts as Cancel
        if action_cancel || !window_open {
            self.add_form.close();
            return;
        }
        if action_add {
            self.handle_add();
        }
    }

    /// Adds the card from the form; a blank side keeps the form open
    fn handle_add(&mut self) {
        match self
            .session
            .add_card(&self.add_form.question, &self.add_form.answer)
        {
            Ok(true) => self.add_form.close(),
            Ok(false) => {}
            Err(e) => {
                log::error!("Failed to save flashcards: {e}");
                self.error_message = Some(format!("The new card was not saved: {e}"));
                self.add_form.close();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;
    use crate::error::{FlashcardError, Result};

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _namespace: &str, _key: &str) -> Result<Option<String>> {
            Ok(Some(r#"[{"question":"Q1","answer":"A1"}]"#.to_string()))
        }

        fn put(&mut self, _namespace: &str, _key: &str, _value: &str) -> Result<()> {
            Err(FlashcardError::Sqlite(rusqlite::Error::InvalidQuery))
        }
    }

    fn create_test_app() -> FlashcardApp<MemoryStore> {
        let session = DeckSession::open(MemoryStore::new()).unwrap();
        let mut app = FlashcardApp::new(session);
        app.add_form.open = true;
        app
    }

    #[test]
    fn test_blank_field_keeps_form_open() {
        let mut app = create_test_app();
        app.add_form.question = "   ".to_string();
        app.add_form.answer = "4".to_string();

        app.handle_add();

        assert!(app.add_form.open);
        assert_eq!(app.add_form.question, "   ");
        assert_eq!(app.add_form.answer, "4");
        assert_eq!(app.session.deck().len(), 1);
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_valid_add_closes_and_clears_form() {
        let mut app = create_test_app();
        app.add_form.question = "Capital of Poland?".to_string();
        app.add_form.answer = "Warsaw".to_string();

        app.handle_add();

        assert!(!app.add_form.open);
        assert!(app.add_form.question.is_empty());
        assert!(app.add_form.answer.is_empty());
        assert_eq!(app.session.deck().len(), 2);
        assert_eq!(app.session.face_text(), Some("Capital of Poland?"));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_failed_save_shows_error_and_closes_form() {
        let session = DeckSession::open(ReadOnlyStore).unwrap();
        let mut app = FlashcardApp::new(session);
        app.add_form.open = true;
        app.add_form.question = "Q2".to_string();
        app.add_form.answer = "A2".to_string();

        app.handle_add();

        assert!(!app.add_form.open);
        assert!(app.add_form.question.is_empty());
        assert!(app.error_message.is_some());
        assert_eq!(app.session.deck().len(), 2);
    }

    #[test]
    fn test_cancel_clears_form() {
        let mut app = create_test_app();
        app.add_form.question = "half typed".to_string();

        app.add_form.close();

        assert!(!app.add_form.open);
        assert!(app.add_form.question.is_empty());
        assert_eq!(app.session.deck().len(), 1);
    }
}
