use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::APP_TITLE;

pub fn render_help_window(frame: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(Span::styled(
            "Creative Spark - Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("General:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  Ctrl+H        - Show/hide this help"),
        Line::from("  Ctrl+Q        - Quit application"),
        Line::from("  Ctrl+C        - Quit application (press twice)"),
        Line::from(""),
        Line::from(Span::styled("Form:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  Tab/Down      - Next field"),
        Line::from("  Shift+Tab/Up  - Previous field"),
        Line::from("  Left/Right    - Change selection"),
        Line::from("  Typing        - Edit prompt or keywords"),
        Line::from(""),
        Line::from(Span::styled("Generation:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  Enter         - Generate"),
        Line::from("  Ctrl+N        - Clear output and start a new piece"),
        Line::from("  Esc           - Close error message"),
        Line::from("  PgUp/PgDn     - Scroll output"),
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
    let popup_width = 60;
    let popup_height = 24;
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

pub fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Unleash your imagination. Generate stories and poems with AI.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let fields = app.visible_fields();
    let label_width = fields.iter().map(|f| f.label().len()).max().unwrap_or(0);

    let lines: Vec<Line> = fields
        .iter()
        .map(|&field| {
            let focused = field == app.focus;
            let value = field.value(&app.options);

            let label_style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let value_span = if field.is_text() {
                if value.is_empty() {
                    Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
                } else {
                    Span::styled(value.to_string(), Style::default().fg(Color::White))
                }
            } else if focused {
                Span::styled(format!("< {value} >"), Style::default().fg(Color::Yellow))
            } else {
                Span::styled(value.to_string(), Style::default().fg(Color::White))
            };

            let marker = if focused { "> " } else { "  " };
            let mut spans = vec![
                Span::styled(marker, label_style),
                Span::styled(format!("{:<label_width$}  ", field.label()), label_style),
                value_span,
            ];
            if focused && field.is_text() {
                spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        })
        .collect();

    let border_color = if app.is_loading {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Options ")
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(form, area);
}

pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    if app.is_loading {
        spans.push(Span::styled(
            "Generating your masterpiece... ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }
    if !app.has_api_key {
        spans.push(Span::styled(
            "[API_KEY not set] ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(
        app.model.clone(),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ));

    let status = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);

    frame.render_widget(status, area);
}

pub fn render_error_banner(frame: &mut Frame, message: &str, area: Rect) {
    let banner = Paragraph::new(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Error (Esc to close) ")
            .border_style(Style::default().fg(Color::Red)),
    )
    .wrap(Wrap { trim: true });

    frame.render_widget(banner, area);
}

pub fn render_output(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Your AI-Generated Creation ")
        .border_style(Style::default().fg(Color::Green));

    if app.generated_content.is_empty() || app.is_loading {
        frame.render_widget(block, area);
        return;
    }

    // Newlines become line breaks; the text is otherwise shown as returned
    let lines: Vec<Line> = app
        .generated_content
        .split('\n')
        .map(|line| Line::from(line.to_string()))
        .collect();

    let available_width = area.width.saturating_sub(2).max(1) as usize;
    let total_visual_lines: usize = lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(available_width))
        .sum();

    let visible_height = area.height.saturating_sub(2) as usize;
    let max_scroll = total_visual_lines.saturating_sub(visible_height);
    let actual_scroll = app.scroll_offset.min(max_scroll);

    // Sync the clamped scroll back to the app state
    if app.scroll_offset != actual_scroll {
        app.scroll_offset = actual_scroll;
    }

    let output = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(actual_scroll).unwrap_or(u16::MAX), 0));

    frame.render_widget(output, area);
}

pub fn render_footer(frame: &mut Frame, area: Rect) {
    let year = chrono::Local::now().year();
    let footer = Paragraph::new(format!("© {year} {APP_TITLE}. Powered by Gemini."))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(footer, area);
}

pub fn render_bottom_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.exit_pending {
        (
            "Press Ctrl+C again to exit, Esc to cancel",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else if app.is_loading {
        (
            "Ctrl+C: Quit | Ctrl+N: Abandon | Ctrl+H: Help",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            "Enter: Generate | Tab: Next Field | Left/Right: Change | Ctrl+N: New | Ctrl+H: Help | Ctrl+C: Quit",
            Style::default().fg(Color::DarkGray),
        )
    };

    let bar = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style);

    frame.render_widget(bar, area);
}
