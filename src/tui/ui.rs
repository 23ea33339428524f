//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::{App, Focus};
use crate::game::{Board, Player, Position, Square, Win};

/// Renders the whole frame: board pane on the left, info pane on the right.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(44), Constraint::Length(40)])
        .split(frame.area());

    draw_board_pane(frame, panes[0], app);
    draw_info_pane(frame, panes[1], app);
}

fn draw_board_pane(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title("Tic-Tac-Toe Rewind")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board = app.game().board();
    let win = app.game().winner();
    let cursor = (app.focus() == Focus::Board).then(|| app.cursor());

    let board_area = center_rect(inner, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (chunk, row) in [(rows[0], 0), (rows[2], 1), (rows[4], 2)] {
        draw_row(frame, chunk, board, win.as_ref(), cursor, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    win: Option<&Win>,
    cursor: Option<Position>,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (chunk, col) in [(cols[0], 0), (cols[2], 1), (cols[4], 2)] {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            draw_cell(frame, chunk, board, win, cursor, pos);
        }
    }
    draw_vertical_separator(frame, cols[1]);
    draw_vertical_separator(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    win: Option<&Win>,
    cursor: Option<Position>,
    pos: Position,
) {
    let (symbol, mut style) = match board.get(pos) {
        Square::Empty => (" . ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    // Winning triple lights up; the cursor overrides it where they overlap.
    if win.is_some_and(|w| w.contains(pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if cursor == Some(pos) {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn draw_info_pane(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(area);

    let status = Paragraph::new(app.game().status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[0]);

    draw_move_list(frame, chunks[1], app);

    let help = Paragraph::new(
        "arrows move, Enter place/jump, 1-9 place\nTab focus, o order, r restart, q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn draw_move_list(frame: &mut Frame, area: Rect, app: &mut App) {
    let entries = app.game().moves();
    app.clamp_selection(entries.len());

    let current = app.game().step();
    let order = if app.game().ascending() {
        "oldest first"
    } else {
        "newest first"
    };

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let style = if entry.step == current {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label.clone(), style)))
        })
        .collect();

    let mut list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Moves ({order})")),
        )
        .highlight_symbol("» ");
    if app.focus() == Focus::History {
        list = list.highlight_style(Style::default().bg(Color::White).fg(Color::Black));
    }

    frame.render_stateful_widget(list, area, app.list_state());
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
