pub mod widgets;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub fn render(frame: &mut Frame, app: &mut App) {
    // One line per visible field plus borders
    #[allow(clippy::cast_possible_truncation)]
    let form_height = (app.visible_fields().len() + 2) as u16;
    let error_height = if app.error.is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Title and tagline
            Constraint::Length(form_height),  // Options form
            Constraint::Length(1),            // Status line
            Constraint::Length(error_height), // Error banner (collapsed when empty)
            Constraint::Min(0),               // Generated content
            Constraint::Length(1),            // Footer
            Constraint::Length(1),            // Bottom keymap bar
        ])
        .split(frame.area());

    widgets::render_header(frame, chunks[0]);
    widgets::render_form(frame, app, chunks[1]);
    widgets::render_status_bar(frame, app, chunks[2]);
    if let Some(message) = &app.error {
        widgets::render_error_banner(frame, message, chunks[3]);
    }
    widgets::render_output(frame, app, chunks[4]);
    widgets::render_footer(frame, chunks[5]);
    widgets::render_bottom_bar(frame, app, chunks[6]);

    if app.show_help {
        widgets::render_help_window(frame, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::EMPTY_PROMPT_MESSAGE;
    use crate::models::{ContentType, OptionsUpdate};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_story_form_hides_poem_fields() {
        let mut app = App::new("test-model".to_string(), true);
        let screen = draw(&mut app);
        assert!(screen.contains("Creative Spark AI"));
        assert!(screen.contains("Content Type"));
        assert!(screen.contains("Topic / Prompt"));
        assert!(!screen.contains("Poem Structure"));
        assert!(!screen.contains("Rhyme Scheme"));
    }

    #[test]
    fn test_render_poem_form_shows_poem_fields() {
        let mut app = App::new("test-model".to_string(), true);
        app.update_options(OptionsUpdate {
            content_type: Some(ContentType::Poem),
            ..Default::default()
        });
        let screen = draw(&mut app);
        assert!(screen.contains("Poem Structure"));
        assert!(screen.contains("Rhyme Scheme"));
    }

    #[test]
    fn test_render_error_banner_and_output() {
        let mut app = App::new("test-model".to_string(), true);
        app.error = Some(EMPTY_PROMPT_MESSAGE.to_string());
        app.generated_content = "first line\nsecond line".to_string();
        let screen = draw(&mut app);
        assert!(screen.contains(EMPTY_PROMPT_MESSAGE));
        assert!(screen.contains("first line"));
        assert!(screen.contains("second line"));
    }

    #[test]
    fn test_render_loading_and_missing_key() {
        let mut app = App::new("test-model".to_string(), false);
        app.is_loading = true;
        let screen = draw(&mut app);
        assert!(screen.contains("Generating your masterpiece..."));
        assert!(screen.contains("API_KEY not set"));
    }

    #[test]
    fn test_render_help_window() {
        let mut app = App::new("test-model".to_string(), true);
        app.show_help = true;
        let screen = draw(&mut app);
        assert!(screen.contains("Keyboard Shortcuts"));
    }
}
