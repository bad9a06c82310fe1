pub mod widgets;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

const PANEL_HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, app: &App) {
    let verdict = app.visible_verdict();

    let mut constraints = vec![
        Constraint::Length(2), // Title + subtitle
        Constraint::Length(1), // Gap
        Constraint::Min(5),    // News text input (flexible)
        Constraint::Length(1), // Analyze button
        Constraint::Length(1), // Gap
    ];
    if app.error.is_some() {
        constraints.push(Constraint::Length(PANEL_HEIGHT));
    }
    if verdict.is_some() {
        constraints.push(Constraint::Length(PANEL_HEIGHT));
    }
    constraints.push(Constraint::Length(1)); // Bottom keymap bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    widgets::render_header(frame, chunks[0]);
    widgets::render_input_field(frame, app, chunks[2]);
    widgets::render_analyze_button(frame, app, chunks[3]);

    let mut next = 5;
    if let Some(message) = &app.error {
        widgets::render_error_panel(frame, message, chunks[next]);
        next += 1;
    }
    if let Some(verdict) = verdict {
        widgets::render_result_panel(frame, verdict, chunks[next]);
        next += 1;
    }
    widgets::render_bottom_bar(frame, app, chunks[next]);

    // Render help window on top if active
    if app.show_help {
        widgets::render_help_window(frame, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AnalysisError;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_empty_form() {
        let app = App::new();
        let text = rendered_text(&app);
        assert!(text.contains("Fake News Detector"));
        assert!(text.contains("News Text"));
        assert!(text.contains("Paste your news article here..."));
        assert!(text.contains("Analyze News"));
        assert!(!text.contains("Error"));
    }

    #[test]
    fn test_render_draft_replaces_placeholder() {
        let mut app = App::new();
        app.push_str("Stocks rally after announcement");
        let text = rendered_text(&app);
        assert!(text.contains("Stocks rally after announcement"));
        assert!(!text.contains("Paste your news article here..."));
    }

    #[test]
    fn test_render_long_draft_keeps_tail_visible() {
        // Long words force word wrapping to use more rows than a plain character count
        let word = "w".repeat(60);
        let mut app = App::new();
        for _ in 0..40 {
            app.push_str(&word);
            app.push_char(' ');
        }
        app.push_str("ENDMARKER");

        let text = rendered_text(&app);
        assert!(text.contains("ENDMARKER"), "end of draft not visible:\n{text}");
        assert!(text.contains("News Text"));
    }

    #[test]
    fn test_render_short_multiline_draft_is_not_scrolled() {
        let mut app = App::new();
        app.push_str("FIRSTLINE\nsecond line\nthird line");

        let text = rendered_text(&app);
        assert!(text.contains("FIRSTLINE"));
        assert!(text.contains("third line"));
    }

    #[test]
    fn test_render_analyzing_state() {
        let mut app = App::new();
        app.push_str("news");
        app.start_submission();
        let text = rendered_text(&app);
        assert!(text.contains("Analyzing..."));
        assert!(!text.contains("Analyze News"));
    }

    #[test]
    fn test_render_authentic_verdict() {
        let mut app = App::new();
        app.push_str("news");
        app.start_submission();
        app.finish_submission(Ok(true));
        let text = rendered_text(&app);
        assert!(text.contains("Likely Authentic News"));
        assert!(!text.contains("Potential Fake News Detected"));
    }

    #[test]
    fn test_render_inauthentic_verdict() {
        let mut app = App::new();
        app.push_str("news");
        app.start_submission();
        app.finish_submission(Ok(false));
        let text = rendered_text(&app);
        assert!(text.contains("Potential Fake News Detected"));
    }

    #[test]
    fn test_render_hides_verdict_while_analyzing() {
        let mut app = App::new();
        app.push_str("news");
        app.start_submission();
        app.finish_submission(Ok(true));
        app.start_submission();
        let text = rendered_text(&app);
        assert!(!text.contains("Likely Authentic News"));
    }

    #[test]
    fn test_render_error_panel() {
        let mut app = App::new();
        app.push_str("news");
        app.start_submission();
        app.finish_submission(Err(AnalysisError::Aborted));
        let text = rendered_text(&app);
        assert!(text.contains("Error"));
        assert!(text.contains("Failed to analyze news. Please try again."));
    }

    #[test]
    fn test_render_help_window() {
        let mut app = App::new();
        app.toggle_help();
        let text = rendered_text(&app);
        assert!(text.contains("Keyboard Shortcuts"));
    }
}
