use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table};

use crate::output::{format_award, format_strokes, rows_from_round, truncate_name};
use crate::round::Round;
use crate::tui::app::{App, InputMode, Screen, SetupField};
use crate::tui::theme::ThemeColors;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 12 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    match app.screen {
        Screen::Setup => render_setup(frame, chunks[1], app),
        Screen::Play | Screen::Finished => render_round(frame, chunks[1], app),
    }
    render_status_bar(frame, chunks[2], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let mut spans = vec![Span::styled("Nines", Style::default().fg(colors.title_color).bold())];

    if let Some(round) = &app.round {
        let right = if round.is_complete() {
            format!("{} complete", round.hole_count())
        } else {
            format!("Hole {} of {}", round.current_hole(), round.hole_count().get())
        };
        let padding_len = (area.width as usize).saturating_sub("Nines".len() + right.len());
        spans.push(Span::raw(" ".repeat(padding_len)));
        spans.push(Span::styled(right, Style::default().fg(colors.muted)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_setup(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let form_area = centered_rect_fixed(44, 11, area);
    let block = Block::bordered()
        .title(" New Round ")
        .title_style(colors.popup_title)
        .border_style(Style::default().fg(colors.popup_border));
    frame.render_widget(block.clone(), form_area);
    let inner = block.inner(form_area);

    let mut lines = Vec::new();
    for (i, name) in app.names.iter().enumerate() {
        let focused = app.setup_field == SetupField::Name(i);
        let style = if focused {
            colors.input_focused
        } else {
            colors.input_idle
        };
        let cursor = if focused { "|" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("Player {}: ", i + 1), style),
            Span::raw(format!("{}{}", name, cursor)),
        ]));
    }
    lines.push(Line::from(""));

    let holes_style = if app.setup_field == SetupField::Holes {
        colors.input_focused
    } else {
        colors.input_idle
    };
    let nine = if app.holes.get() == 9 { "[9 holes]" } else { " 9 holes " };
    let eighteen = if app.holes.get() == 18 { "[18 holes]" } else { " 18 holes " };
    lines.push(Line::from(vec![
        Span::styled("Length:   ", holes_style),
        Span::raw(format!("{} {}", nine, eighteen)),
    ]));
    lines.push(Line::from(Span::styled(
        format!("Commit:   {}", app.policy),
        Style::default().fg(colors.muted),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: start round",
        Style::default().fg(colors.status_key_color),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_round(frame: &mut Frame, area: Rect, app: &App) {
    let Some(round) = &app.round else {
        return;
    };

    // Scorecard(header + 3 rows + margin) + Leaderboard + Input
    let chunks = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .split(area);

    render_scorecard(frame, chunks[0], round, &app.colors);
    render_leaderboard(frame, chunks[1], round, &app.colors);
    match app.screen {
        Screen::Finished => render_finished(frame, chunks[2], app),
        _ => render_inputs(frame, chunks[2], app, round),
    }
}

fn render_scorecard(frame: &mut Frame, area: Rect, round: &Round, colors: &ThemeColors) {
    let holes = round.hole_count().get();
    let current = round.current_hole();

    let mut header = vec![Cell::from("Player")];
    for hole in 1..=holes {
        let cell = Cell::from(format!("{:>2}", hole));
        header.push(if hole == current {
            cell.style(Style::default().bg(colors.current_hole_bg))
        } else {
            cell
        });
    }
    header.push(Cell::from("Tot"));
    header.push(Cell::from("Pts"));

    let max_points = round.players().iter().map(|p| p.total_score).max().unwrap_or(0);

    let rows: Vec<Row> = round
        .players()
        .iter()
        .zip(round.scorecard())
        .enumerate()
        .map(|(idx, (player, strokes))| {
            let mut cells = vec![Cell::from(truncate_name(&player.name, 12))];
            for (h, &s) in strokes.iter().enumerate() {
                let mut style = Style::default();
                if s == 0 {
                    style = style.fg(colors.unplayed);
                }
                if h + 1 == current {
                    style = style.bg(colors.current_hole_bg);
                }
                cells.push(Cell::from(format!("{:>2}", format_strokes(s))).style(style));
            }
            cells.push(Cell::from(player.total_strokes.to_string()));
            cells.push(
                Cell::from(player.total_score.to_string()).style(
                    Style::default()
                        .fg(colors.points_color(player.total_score, max_points))
                        .bold(),
                ),
            );

            let row_style = if idx % 2 == 1 {
                Style::default().bg(colors.row_alt_bg)
            } else {
                Style::default()
            };
            Row::new(cells).style(row_style)
        })
        .collect();

    let mut widths = vec![Constraint::Length(12)];
    widths.extend(std::iter::repeat(Constraint::Length(2)).take(holes));
    widths.push(Constraint::Length(4));
    widths.push(Constraint::Length(4));

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(colors.header_style).bottom_margin(1))
        .column_spacing(1);

    frame.render_widget(table, area);
}

fn render_leaderboard(frame: &mut Frame, area: Rect, round: &Round, colors: &ThemeColors) {
    let board = round.leaderboard();
    let max_points = board.first().map(|p| p.total_score).unwrap_or(0);

    let mut lines = vec![Line::from(Span::styled("Leaderboard", colors.header_style))];
    for (idx, player) in board.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", idx + 1), Style::default().fg(colors.index_color)),
            Span::raw(format!("{:<14}", truncate_name(&player.name, 14))),
            Span::styled(
                format!("{:>3} pts", player.total_score),
                Style::default().fg(colors.points_color(player.total_score, max_points)),
            ),
            Span::styled(
                format!("  {} strokes", player.total_strokes),
                Style::default().fg(colors.muted),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_inputs(frame: &mut Frame, area: Rect, app: &App, round: &Round) {
    let colors = &app.colors;
    let mut lines = vec![Line::from(Span::styled(
        format!("Hole {} strokes", round.current_hole()),
        colors.header_style,
    ))];

    for (i, player) in round.players().iter().enumerate() {
        let focused = app.stroke_focus == i;
        let style = if focused {
            colors.input_focused
        } else {
            colors.input_idle
        };
        let cursor = if focused { "|" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<14}", truncate_name(&player.name, 14)), style),
            Span::raw(format!("{}{}", app.stroke_inputs[i], cursor)),
        ]));
    }

    if let Some(award) = &app.last_award {
        let rows = rows_from_round(round);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Last: {}", format_award(award, &rows)),
            Style::default().fg(colors.muted),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_finished(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let mut lines = vec![Line::from(Span::styled(
        "Round complete",
        Style::default().fg(colors.flash_success).bold(),
    ))];

    if let Some(winner) = app.round.as_ref().and_then(|r| r.leaderboard().first().copied()) {
        lines.push(Line::from(format!(
            "{} leads with {} points",
            winner.name, winner.total_score
        )));
    }
    if let Some(path) = &app.exported_to {
        lines.push(Line::from(Span::styled(
            format!("Saved to {}", path.display()),
            Style::default().fg(colors.muted),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Failed") || msg.starts_with("Error") {
            colors.flash_error
        } else {
            colors.flash_success
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints: &[(&str, &str)] = match app.screen {
            Screen::Setup => &[
                ("Tab", ":next "),
                ("Space", ":holes "),
                ("Enter", ":start "),
                ("F1", ":help "),
                ("Esc", ":quit"),
            ],
            Screen::Play => &[
                ("Tab", ":next "),
                ("0-9", ":strokes "),
                ("Enter", ":submit "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            Screen::Finished => &[
                ("e", ":export "),
                ("n", ":new round "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(colors.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(colors.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, app: &App) {
    let colors = &app.colors;
    let popup_area = centered_rect_fixed(52, 15, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Nines ")
        .title_style(colors.popup_title)
        .border_style(Style::default().fg(colors.popup_border))
        .style(Style::default().bg(colors.popup_bg));
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let key = |k: &'static str| Span::styled(k, Style::default().fg(colors.status_key_color).bold());
    let help_lines = vec![
        Line::from(vec![key("Tab / Down    "), Span::raw("Next field")]),
        Line::from(vec![key("S-Tab / Up    "), Span::raw("Previous field")]),
        Line::from(vec![key("Enter         "), Span::raw("Start round / submit hole")]),
        Line::from(vec![key("e             "), Span::raw("Export finished round")]),
        Line::from(vec![key("n             "), Span::raw("New round, same players")]),
        Line::from(vec![key("Esc / Ctrl-c  "), Span::raw("Quit")]),
        Line::from(""),
        Line::from(Span::styled("Points per hole", colors.header_style)),
        Line::from("  no ties 5/3/1    low pair tied 4/4/1"),
        Line::from("  high pair tied 5/2/2    all tied 3/3/3"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(colors.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(help_lines), inner);
}
