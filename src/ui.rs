use crate::app::{App, FormField, InputMode};
use crate::model::ViewMode;
use crate::store::WishStore;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, app: &App, store: &WishStore) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(0),    // body
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    draw_header(frame, outer[0], app, store);
    draw_list(frame, outer[1], app, store);
    draw_footer(frame, outer[2], app);

    if matches!(
        app.input_mode,
        InputMode::AddWish(_) | InputMode::EditWish(_)
    ) {
        draw_form_popup(frame, app);
    }

    if app.show_help {
        draw_help_overlay(frame, app);
    }
}

// ============================================================
// Header
// ============================================================

fn draw_header(frame: &mut Frame, area: Rect, app: &App, store: &WishStore) {
    let theme = &app.theme;

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " WishTUI ",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " {}active {}archived",
                store.active_count(),
                store.completed_count()
            ),
            Style::default().fg(theme.muted),
        ),
        Span::styled(
            format!(" View:{}", app.view_mode.label()),
            Style::default().fg(theme.accent),
        ),
        Span::styled(
            format!(" Theme:{}", app.theme_name.label()),
            Style::default().fg(theme.muted),
        ),
    ]));
    frame.render_widget(header, area);
}

// ============================================================
// Footer
// ============================================================

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    if let Some(status) = app.status_text() {
        let footer = Paragraph::new(Span::styled(
            format!(" {}", status),
            Style::default().fg(theme.accent),
        ));
        frame.render_widget(footer, area);
        return;
    }

    let footer = match &app.input_mode {
        InputMode::AddWish(_) | InputMode::EditWish(_) => Paragraph::new(Line::from(vec![
            Span::styled(" [Tab]", Style::default().fg(theme.accent)),
            Span::styled("Switch field ", Style::default().fg(theme.fg)),
            Span::styled("[Enter]", Style::default().fg(theme.accent)),
            Span::styled("Next/Save ", Style::default().fg(theme.fg)),
            Span::styled("[Esc]", Style::default().fg(theme.accent)),
            Span::styled("Cancel", Style::default().fg(theme.fg)),
        ])),
        InputMode::ConfirmDelete => Paragraph::new(Line::from(vec![
            Span::styled(" [y]", Style::default().fg(theme.accent)),
            Span::styled("Confirm delete ", Style::default().fg(theme.fg)),
            Span::styled("[any]", Style::default().fg(theme.accent)),
            Span::styled("Cancel", Style::default().fg(theme.fg)),
        ])),
        InputMode::Normal => {
            let mut spans = vec![
                Span::styled("[?]", Style::default().fg(theme.accent)),
                Span::styled("Help ", Style::default().fg(theme.fg)),
                Span::styled("[q]", Style::default().fg(theme.accent)),
                Span::styled("Quit ", Style::default().fg(theme.fg)),
                Span::styled("[Tab]", Style::default().fg(theme.accent)),
                Span::styled("View ", Style::default().fg(theme.fg)),
            ];
            if app.view_mode == ViewMode::Wishes {
                spans.extend_from_slice(&[
                    Span::styled("[a]", Style::default().fg(theme.accent)),
                    Span::styled("Add ", Style::default().fg(theme.fg)),
                    Span::styled("[Enter]", Style::default().fg(theme.accent)),
                    Span::styled("Complete ", Style::default().fg(theme.fg)),
                ]);
            }
            spans.extend_from_slice(&[
                Span::styled("[e]", Style::default().fg(theme.accent)),
                Span::styled("Edit ", Style::default().fg(theme.fg)),
                Span::styled("[d]", Style::default().fg(theme.accent)),
                Span::styled("Delete ", Style::default().fg(theme.fg)),
                Span::styled("[t]", Style::default().fg(theme.accent)),
                Span::styled("Theme", Style::default().fg(theme.fg)),
            ]);
            Paragraph::new(Line::from(spans))
        }
    };
    frame.render_widget(footer, area);
}

// ============================================================
// Wish list
// ============================================================

fn draw_list(frame: &mut Frame, area: Rect, app: &App, store: &WishStore) {
    let theme = &app.theme;
    let wishes = match app.view_mode {
        ViewMode::Wishes => store.active(),
        ViewMode::Archive => store.completed(),
    };

    if wishes.is_empty() {
        let msg = match app.view_mode {
            ViewMode::Wishes => "  No wishes yet. Press [a] to add one.",
            ViewMode::Archive => "  Archive is empty.",
        };
        let empty = Paragraph::new(Span::styled(msg, Style::default().fg(theme.muted)));
        frame.render_widget(empty, area);
        return;
    }

    let title = match app.view_mode {
        ViewMode::Wishes => " My Wishes ",
        ViewMode::Archive => " Completed ",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ));

    let header = Row::new(vec!["", "Name", "Price", "Photo"])
        .style(
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .height(1);

    let rows: Vec<Row> = wishes
        .iter()
        .enumerate()
        .map(|(i, wish)| {
            let is_selected = i == app.selected_index;
            let marker = if wish.completed { "x" } else { " " };

            let style = if is_selected {
                Style::default()
                    .fg(theme.fg)
                    .add_modifier(Modifier::BOLD)
                    .bg(ratatui::style::Color::Rgb(40, 40, 50))
            } else if wish.completed {
                Style::default().fg(theme.done)
            } else {
                Style::default().fg(theme.fg)
            };

            Row::new(vec![
                marker.to_string(),
                wish.name.clone(),
                wish.price.clone().unwrap_or_default(),
                wish.photo.clone().unwrap_or_default(),
            ])
            .style(style)
            .height(1)
        })
        .collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(44),
    ];

    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_stateful_widget(
        table,
        area,
        &mut ratatui::widgets::TableState::default().with_selected(Some(app.selected_index)),
    );
}

// ============================================================
// Add / Edit form
// ============================================================

fn draw_form_popup(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(60, 40, frame.area());
    frame.render_widget(Clear, area);

    let (title, field) = match &app.input_mode {
        InputMode::AddWish(f) => (" New Wish ", *f),
        InputMode::EditWish(f) => (" Edit Wish ", *f),
        _ => return,
    };

    let field_line = |label: &str, value: &str, active: bool| {
        let mut spans = vec![
            Span::styled(
                format!("  {} {:<7}", if active { ">" } else { " " }, label),
                Style::default().fg(theme.muted),
            ),
            Span::styled(value.to_string(), Style::default().fg(theme.fg)),
        ];
        if active {
            spans.push(Span::styled("_", Style::default().fg(theme.accent)));
        }
        Line::from(spans)
    };

    let lines = vec![
        Line::from(""),
        field_line("Name*", &app.form_name, field == FormField::Name),
        field_line("Price", &app.form_price, field == FormField::Price),
        field_line("Photo", &app.form_photo, field == FormField::Photo),
        Line::from(""),
        Line::from(Span::styled(
            "  Photo: path to an image file, or blank for none",
            Style::default().fg(theme.muted),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_selected))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

// ============================================================
// Help Overlay
// ============================================================

fn draw_help_overlay(frame: &mut Frame, app: &App) {
    let area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, area);

    let theme = &app.theme;
    let help_text = vec![
        Line::from(Span::styled(
            " WishTUI Keyboard Shortcuts ",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Navigation",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(theme.accent),
        )),
        Line::from(" j/k or Up/Dn   Navigate wishes"),
        Line::from(" g/G            Go to first/last"),
        Line::from(" Tab or 1/2     Switch wishes/archive"),
        Line::from(""),
        Line::from(Span::styled(
            " Actions",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(theme.accent),
        )),
        Line::from(" a              Add a wish"),
        Line::from(" e              Edit selected wish"),
        Line::from(" Enter/Space    Mark completed"),
        Line::from(" d              Delete (asks to confirm)"),
        Line::from(""),
        Line::from(Span::styled(
            " Forms",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(theme.accent),
        )),
        Line::from(" Tab/Enter      Next field"),
        Line::from(" Enter (last)   Save"),
        Line::from(" Esc            Cancel"),
        Line::from(""),
        Line::from(Span::styled(
            " General",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(theme.accent),
        )),
        Line::from(" t              Cycle theme"),
        Line::from(" ?              Toggle help"),
        Line::from(" q / Ctrl+C     Quit"),
        Line::from(""),
        Line::from(Span::styled(
            " Press ? to close ",
            Style::default().fg(theme.muted),
        )),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_selected))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
}

// ============================================================
// Utilities
// ============================================================

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
