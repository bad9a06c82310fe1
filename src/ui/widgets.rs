use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::Verdict;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
const INPUT_PLACEHOLDER: &str = "Paste your news article here...";

pub fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Fake News Detector",
            Style::default()
                .fg(Color::Indexed(62))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enter any news article to check its authenticity",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

pub fn render_input_field(frame: &mut Frame, app: &App, area: Rect) {
    let (input_text, input_style) = if app.input_buffer.is_empty() {
        (INPUT_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        (app.input_buffer.as_str(), Style::default().fg(Color::White))
    };

    let border_color = if app.is_analyzing {
        Color::DarkGray
    } else {
        Color::Indexed(62)
    };

    let content = Paragraph::new(input_text).wrap(Wrap { trim: false });

    // Keep the end of a long draft in view, measured with the same word wrapping
    // the paragraph renders with
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = content.line_count(inner_width).saturating_sub(inner_height);

    let input = content
        .style(input_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" News Text ")
                .border_style(Style::default().fg(border_color)),
        )
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));

    frame.render_widget(input, area);
}

pub fn render_analyze_button(frame: &mut Frame, app: &App, area: Rect) {
    let label = if app.is_analyzing {
        let spinner = SPINNER_FRAMES[(app.spinner_tick / 4) % SPINNER_FRAMES.len()];
        format!("{spinner} Analyzing...")
    } else {
        "> Analyze News".to_string()
    };

    let style = if app.can_submit() {
        Style::default()
            .fg(Color::White)
            .bg(Color::Indexed(62))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Black).bg(Color::DarkGray)
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style);

    frame.render_widget(button, area);
}

pub fn render_error_panel(frame: &mut Frame, message: &str, area: Rect) {
    let panel = Paragraph::new(vec![
        Line::from(Span::styled(
            "! Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message, Style::default().fg(Color::LightRed))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red)),
    )
    .wrap(Wrap { trim: false });

    frame.render_widget(panel, area);
}

pub fn render_result_panel(frame: &mut Frame, verdict: Verdict, area: Rect) {
    let (icon, color, text_color) = match verdict {
        Verdict::Authentic => ("✔", Color::Green, Color::LightGreen),
        Verdict::Inauthentic => ("!", Color::Red, Color::LightRed),
    };

    let panel = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{icon} {}", verdict.title()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            verdict.description(),
            Style::default().fg(text_color),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color)),
    )
    .wrap(Wrap { trim: false });

    frame.render_widget(panel, area);
}

pub fn render_bottom_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.exit_pending {
        (
            "Press Ctrl+C again to exit, Esc to cancel",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "Enter: Analyze | Ctrl+J: Newline | Ctrl+H: Help | Ctrl+C: Quit",
            Style::default().fg(Color::DarkGray),
        )
    };

    let bar = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style);

    frame.render_widget(bar, area);
}

pub fn render_help_window(frame: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(Span::styled(
            "Fake News Detector - Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Editing:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  Typing        - Edit the article text"),
        Line::from("  Paste         - Insert clipboard text"),
        Line::from("  Ctrl+J        - Insert a newline"),
        Line::from("  Backspace     - Delete last character"),
        Line::from(""),
        Line::from(Span::styled("Analysis:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  Enter         - Analyze the article"),
        Line::from(""),
        Line::from(Span::styled("General:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  Ctrl+H        - Show/hide this help"),
        Line::from("  Ctrl+Q        - Quit application"),
        Line::from("  Ctrl+C        - Quit application (press twice)"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Ctrl+H or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    // Calculate centered position
    let popup_width = 56;
    let popup_height = 19;
    let x = (area.width.saturating_sub(popup_width)) / 2;
    let y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect {
        x: area.x + x,
        y: area.y + y,
        width: popup_width.min(area.width),
        height: popup_height.min(area.height),
    };

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help_paragraph, popup_area);
}
