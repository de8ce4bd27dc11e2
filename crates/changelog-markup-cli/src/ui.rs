use changelog_markup_engine::RenderMode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::App;

pub fn draw(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    draw_entries(f, app, chunks[0]);
    if app.editing {
        draw_editor(f, app, chunks[1]);
    } else {
        draw_rendered(f, app, chunks[1], content_title(app));
    }
    draw_footer(f, app, rows[1]);
}

fn content_title(app: &App) -> &'static str {
    match app.mode {
        RenderMode::Full => "Full",
        RenderMode::Preview => "Preview",
    }
}

fn draw_entries(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ListItem::new(Line::from(Span::raw(name)))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Entries"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn draw_rendered(f: &mut Frame, app: &App, area: Rect, title: &str) {
    let lines = if app.selected_path().is_none() {
        vec![Line::from("No changelog entries found")]
    } else {
        app.rendered_lines()
    };

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .wrap(Wrap { trim: false });

    f.render_widget(content, area);
}

fn draw_editor(f: &mut Frame, app: &App, area: Rect) {
    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);

    let title = if app.dirty { "Editing *" } else { "Editing" };
    let mut source: Vec<Line> = app.source.split('\n').map(Line::raw).collect();
    if let Some(last) = source.last_mut() {
        last.push_span(Span::styled("█", Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }

    let editor = Paragraph::new(source)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });

    f.render_widget(editor, panes[0]);
    draw_rendered(f, app, panes[1], content_title(app));
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let help = if app.editing {
        "Esc: Stop editing | Ctrl-s: Save | Ctrl-g: Image tag | Ctrl-y: Video tag"
    } else {
        "q: Quit | ↑/k: Previous | ↓/j: Next | p: Full/Preview | e: Edit"
    };

    let mut lines = vec![Line::from(Span::raw(help))];
    if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}
