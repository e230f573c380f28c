use crate::catalog::{InterviewRecord, ALL_COMPANIES, ALL_ROLES};
use crate::html::EMPTY_STATE;
use crate::ui::app::{App, FocusPane};
use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;

    // Header + controls + stats + body + footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg)),
        frame.area(),
    );

    render_header(frame, theme, main_chunks[0]);
    render_controls(frame, app, main_chunks[1]);
    render_stats(frame, app, main_chunks[2]);

    let raw = app
        .selected_record()
        .and_then(|r| r.raw_content.as_deref())
        .filter(|_| app.show_raw);

    if let Some(raw) = raw {
        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[3]);
        render_results(frame, app, body_chunks[0]);
        render_raw(frame, theme, raw, body_chunks[1]);
    } else {
        render_results(frame, app, main_chunks[3]);
    }

    render_footer(frame, app, main_chunks[4]);
}

fn border_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.fg_dim)
    }
}

fn render_header(frame: &mut Frame, theme: &Theme, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "  Interview Questions  ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("[{}]", theme.name),
            Style::default().fg(theme.fg_dim),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(header, area);
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let search_focused = app.focus == FocusPane::Search;
    let mut search_spans = vec![Span::styled(
        app.search_input.clone(),
        Style::default().fg(theme.fg),
    )];
    if search_focused {
        search_spans.push(Span::styled("█", Style::default().fg(theme.accent)));
    } else if app.search_input.is_empty() {
        search_spans.push(Span::styled(
            "Search questions, companies, roles...",
            Style::default().fg(theme.fg_dim),
        ));
    }
    let search = Paragraph::new(Line::from(search_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("🔍 Search")
            .border_style(border_style(theme, search_focused)),
    );
    frame.render_widget(search, chunks[0]);

    render_selector(
        frame,
        theme,
        "Company",
        selector_label(&app.company_filter, ALL_COMPANIES),
        app.focus == FocusPane::Company,
        chunks[1],
    );
    render_selector(
        frame,
        theme,
        "Role",
        selector_label(&app.role_filter, ALL_ROLES),
        app.focus == FocusPane::Role,
        chunks[2],
    );
}

fn selector_label<'a>(value: &'a str, all_label: &'a str) -> &'a str {
    if value.is_empty() {
        all_label
    } else {
        value
    }
}

fn render_selector(
    frame: &mut Frame,
    theme: &Theme,
    title: &str,
    label: &str,
    focused: bool,
    area: Rect,
) {
    let arrows = Style::default().fg(if focused { theme.accent } else { theme.fg_dim });
    let selector = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", arrows),
        Span::styled(label.to_string(), Style::default().fg(theme.fg)),
        Span::styled(" ▶", arrows),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(border_style(theme, focused)),
    );
    frame.render_widget(selector, area);
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let stats = app.stats();
    let count = Style::default()
        .fg(theme.secondary)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(theme.fg_dim);

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(stats.total.to_string(), count),
        Span::styled(" Interviews   ", label),
        Span::styled(stats.companies.to_string(), count),
        Span::styled(" Companies", label),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Greedily break `text` into rows of at most `width` columns, splitting on
/// whitespace and hard-splitting words longer than a row.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
        } else {
            for c in word.chars() {
                let char_width = c.width().unwrap_or(0);
                if current_width + char_width > width && !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += char_width;
            }
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// `prefix` followed by `text` wrapped to `width`; continuation rows are
/// indented to line up under the text.
fn wrapped_lines(
    prefix: Vec<Span<'static>>,
    text: &str,
    style: Style,
    width: usize,
) -> Vec<Line<'static>> {
    let indent: usize = prefix.iter().map(Span::width).sum();
    let rows = wrap_text(text, width.saturating_sub(indent));

    let mut lines = Vec::with_capacity(rows.len());
    let mut prefix = Some(prefix);
    for row in rows {
        let mut spans = prefix
            .take()
            .unwrap_or_else(|| vec![Span::raw(" ".repeat(indent))]);
        spans.push(Span::styled(row, style));
        lines.push(Line::from(spans));
    }
    lines
}

fn card_text<'a>(
    record: &'a InterviewRecord,
    theme: &Theme,
    selected: bool,
    width: usize,
) -> Text<'a> {
    let mut heading = vec![
        Span::styled(
            if selected { "▶ " } else { "  " },
            Style::default().fg(theme.accent),
        ),
        Span::styled(
            record.company.as_str(),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if record.is_enriched() {
        heading.push(Span::styled(
            "  [source attached]",
            Style::default().fg(theme.approach),
        ));
    }
    let mut heading = Line::from(heading);
    if selected {
        heading = heading.style(Style::default().bg(theme.selection_bg));
    }

    let mut lines = vec![
        heading,
        Line::from(vec![
            Span::raw("  "),
            Span::styled(record.role.as_str(), Style::default().fg(theme.role_badge)),
            Span::styled(" · ", Style::default().fg(theme.fg_dim)),
            Span::styled(
                format!("{} experience", record.experience),
                Style::default().fg(theme.experience_badge),
            ),
            Span::styled(" · ", Style::default().fg(theme.fg_dim)),
            Span::styled(record.date.as_str(), Style::default().fg(theme.date_badge)),
        ]),
    ];

    if let Some(notes) = record.notes() {
        lines.extend(wrapped_lines(
            vec![Span::raw("  ")],
            notes,
            Style::default()
                .fg(theme.fg_dim)
                .add_modifier(Modifier::ITALIC),
            width,
        ));
    }

    for (index, entry) in record.questions.iter().enumerate() {
        let question_style = Style::default().fg(theme.fg);
        lines.extend(wrapped_lines(
            vec![Span::styled(format!("  {}. ", index + 1), question_style)],
            &entry.question,
            question_style,
            width,
        ));
        if let Some(approach) = entry.approach.as_deref().filter(|a| !a.is_empty()) {
            lines.extend(wrapped_lines(
                vec![Span::styled(
                    "       Approach: ",
                    Style::default()
                        .fg(theme.approach)
                        .add_modifier(Modifier::BOLD),
                )],
                approach,
                Style::default().fg(theme.approach),
                width,
            ));
        }
    }

    lines.push(Line::from(""));
    Text::from(lines)
}

fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("📋 Interviews")
        .border_style(border_style(theme, app.focus == FocusPane::Results));

    let records = app.visible_records();
    if records.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(EMPTY_STATE, Style::default().fg(theme.fg_dim))),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Inside the borders
    let width = usize::from(area.width.saturating_sub(2));
    let items: Vec<ListItem> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            ListItem::new(card_text(record, theme, i == app.selected_index, width))
        })
        .collect();

    let list = List::new(items).block(block);
    let mut state = ListState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_raw(frame: &mut Frame, theme: &Theme, raw: &str, area: Rect) {
    let paragraph = Paragraph::new(raw)
        .style(Style::default().fg(theme.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("📄 Source")
                .border_style(Style::default().fg(theme.approach)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        FocusPane::Search => "[Type] Edit  [Enter] Search  [Tab] Next  [Ctrl+L] Clear  [Esc] Quit",
        FocusPane::Company | FocusPane::Role => {
            "[←→/hl] Change  [Enter] Search  [Tab] Next  [c] Clear  [q] Quit"
        }
        FocusPane::Results => {
            "[↑↓/jk] Navigate  [r] Source  [Tab] Next  [c] Clear  [Ctrl+T] Theme  [q] Quit"
        }
    };

    let footer = Paragraph::new(help_text).style(Style::default().fg(app.theme.fg_dim));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
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

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 60)).expect("terminal");
        terminal.draw(|f| render(f, app)).expect("draw");
        buffer_text(&terminal)
    }

    fn builtin_app() -> App {
        App::new(
            Catalog::builtin().expect("catalog"),
            Theme::default_theme().clone(),
        )
    }

    #[test]
    fn test_render_shows_cards_and_counters() {
        let app = builtin_app();
        let screen = draw(&app);
        assert!(screen.contains("EXL"));
        assert!(screen.contains("Publicis Sapient"));
        assert!(screen.contains("2 Interviews"));
        assert!(screen.contains("2 Companies"));
        assert!(screen.contains("1. How do you connect spark with aws"));
        assert!(screen.contains("All Companies"));
    }

    #[test]
    fn test_render_empty_state() {
        let mut app = builtin_app();
        app.search_input = "no such topic".to_string();
        app.apply_filters();
        let screen = draw(&app);
        assert!(screen.contains(EMPTY_STATE));
        assert!(screen.contains("0 Interviews"));
    }

    #[test]
    fn test_render_raw_pane_for_enriched_record() {
        let mut app = builtin_app();
        app.catalog
            .attach_raw_content("exl_aws_dataengineer_5y_oct_25", "raw report text".to_string());
        app.show_raw = true;
        let screen = draw(&app);
        assert!(screen.contains("raw report text"));
        assert!(screen.contains("[source attached]"));
    }

    #[test]
    fn test_render_wraps_long_questions_to_pane_width() {
        let mut app = builtin_app();
        app.search_input = "airflow".to_string();
        app.apply_filters();

        let mut terminal = Terminal::new(TestBackend::new(80, 80)).expect("terminal");
        terminal.draw(|f| render(f, &app)).expect("draw");
        let screen = buffer_text(&terminal);

        let flattened = screen
            .replace('│', " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        assert!(flattened.contains(
            "8. What are the differnet airflow operators you have used for running spark \
             applications. Write a simple dag"
        ));
    }

    #[test]
    fn test_wrap_text_breaks_on_words_and_splits_long_words() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrapped_lines_indent_continuation_rows() {
        let lines = wrapped_lines(vec![Span::raw("  1. ")], "alpha beta gamma", Style::default(), 15);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].to_string(), "  1. alpha beta");
        assert_eq!(lines[1].to_string(), "     gamma");
    }
}
