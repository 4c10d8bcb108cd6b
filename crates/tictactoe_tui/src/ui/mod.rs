//! Stateless UI rendering.

mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe_core::Player;

/// Renders the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Turn
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Tally
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_turn(frame, chunks[1], app);
    board::draw_board(frame, chunks[2], app);
    draw_tally(frame, chunks[3], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 1-9 / arrows+enter: move   m: menu   q: quit "),
        );
    frame.render_widget(status, chunks[4]);

    if app.menu_open() {
        draw_menu(frame, area);
    }

    if let Some(message) = app.modal_message() {
        draw_modal(frame, area, &message);
    }
}

/// Colour used for a player's mark on the board.
pub(crate) fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Yellow,
        Player::Two => Color::Cyan,
    }
}

fn draw_turn(frame: &mut Frame, area: Rect, app: &App) {
    let player = app.session().current_player();
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", app.mark(player)),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.turn_prompt(), Style::default().fg(player_color(player))),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_tally(frame: &mut Frame, area: Rect, app: &App) {
    let tally = app.session().tally();
    let text = format!(
        "Player 1: {}   Ties: {}   Player 2: {}",
        tally.wins(Player::One),
        tally.ties(),
        tally.wins(Player::Two)
    );
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Score "));
    frame.render_widget(paragraph, area);
}

fn draw_menu(frame: &mut Frame, area: Rect) {
    let width = 24.min(area.width);
    let height = 5.min(area.height);
    let menu_area = Rect::new(area.right().saturating_sub(width), area.y, width, height);

    let items = vec![
        Line::from(" r  Reset"),
        Line::from(" n  New round"),
        Line::from(" q  Quit"),
    ];
    let menu = Paragraph::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Actions ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(Clear, menu_area);
    frame.render_widget(menu, menu_area);
}

fn draw_modal(frame: &mut Frame, area: Rect, message: &str) {
    let popup = center_rect(area, 30, 7);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: play again",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let modal = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Round over "));

    frame.render_widget(Clear, popup);
    frame.render_widget(modal, popup);
}

pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
