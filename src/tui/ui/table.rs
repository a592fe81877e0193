use crate::cards::Card;
use crate::deck::DECK_SIZE;
use crate::game::{Phase, Player, Seat};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_height: u16 = 2 + 2;
    let status_height: u16 = 2 + 2; // content + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // header
            Constraint::Length(9),             // players and face-off
            Constraint::Min(3),                // log
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    let game = &app.game;
    let header_lines = vec![
        Line::from(format!(
            "{} vs {}   Phase: {:?}",
            game.player(Seat::First).name(),
            game.player(Seat::Second).name(),
            game.phase()
        )),
        Line::from(format!(
            "Hands played: {}   Wars: {}   Pile: {}   Cards: {}",
            game.hands_played(),
            game.wars(),
            game.pile().len(),
            game.total_cards()
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("war-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let [left, middle, right] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .areas(chunks[1]);
    render_player(f, left, app, Seat::First);
    render_face_off(f, middle, app);
    render_player(f, right, app, Seat::Second);

    let log_lines: Vec<Line> = app.recent_log_lines().into_iter().map(Line::from).collect();
    let log = Paragraph::new(log_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Log").borders(Borders::ALL));
    f.render_widget(log, chunks[2]);

    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(status_area));

    let mut left_info = match game.phase() {
        Phase::NotStarted => vec![Line::from("No cards dealt — press Space to deal.")],
        Phase::GameOver => vec![
            Line::from(format!(
                "{} wins! Press N for a new game.",
                game.winner().map(|s| game.player(s).name()).unwrap_or("Nobody")
            )),
        ],
        Phase::WarEscalation => vec![Line::from(Span::styled(
            "War! Space to turn the next pair.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))],
        _ if app.auto_play => vec![Line::from("Auto-play on — A to pause.")],
        _ => vec![Line::from("Space: next card • Enter: finish hand • A: auto-play")],
    };
    if let Some(err) = app.error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let right_keys = vec![Line::from(""), Line::from("? help • M setup • Q quit")];
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );

    if app.help_open() {
        draw_help(f);
    }
}

fn render_player(f: &mut Frame, area: Rect, app: &AppState, seat: Seat) {
    let p: &Player = app.game.player(seat);
    let mut title = p.name().to_string();
    let mut block = Block::default().borders(Borders::ALL);
    if p.is_winner() {
        title.push_str(" [Winner]");
        block = block.border_style(Style::default().fg(Color::Green));
    } else if app.game.is_over() {
        block = block.border_style(Style::default().fg(Color::DarkGray));
    }
    f.render_widget(block.title(title), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner(area));
    let lines = vec![
        Line::from(format!("Cards: {}", p.hand().len())),
        Line::from(format!("Hands won: {}", p.hands_won())),
        Line::from(format!("Hands lost: {}", p.hands_lost())),
    ];
    f.render_widget(Paragraph::new(lines), rows[0]);

    let ratio = (p.hand().len() as f64 / DECK_SIZE as f64).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{}/{DECK_SIZE}", p.hand().len()));
    f.render_widget(gauge, rows[1]);
}

fn render_face_off(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("In play").borders(Borders::ALL);
    f.render_widget(block, area);
    let [a, b] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .areas(inner(area));
    let (c1, c2) = match app.last_pair() {
        Some((c1, c2)) => (Some(c1), Some(c2)),
        None => (None, None),
    };
    let tie = matches!((c1, c2), (Some(x), Some(y)) if x.rank() == y.rank());
    let border = if tie { Some(Color::Red) } else { Some(Color::Yellow) };
    render_card_widget(f, a, c1, border);
    render_card_widget(f, b, c2, border);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space: deal / turn the next pair"),
        Line::from("- Enter: play out the current hand"),
        Line::from("- A: toggle auto-play"),
        Line::from("- N: new game"),
        Line::from("- M: setup"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Setup:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Type to edit names and seed"),
        Line::from("- Up / Down / Tab: move selection"),
        Line::from("- Enter: deal"),
        Line::from("- Esc: back (quit before the first deal)"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn card_style(c: Card) -> Style {
    if c.suit().is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(c.to_string(), card_style(c))),
        None => Line::from("[  ]"),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
