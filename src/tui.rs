//! Terminal front end: ratatui over crossterm.
//!
//! Raw mode and the alternate screen are restored on drop so a panic or an
//! early return leaves the shell usable.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::SmallRng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::game::actions::Action;
use crate::game::{ClickerGame, Feedback};
use crate::stats::StatsReporter;
use crate::time::TickClock;

/// Cap on the input-poll timeout so feedback redraws stay responsive even
/// when the next tick is far away.
const MAX_POLL_MS: f64 = 100.0;

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    /// Run the interactive loop until the player quits.
    ///
    /// Input events and tick firings are delivered to this one thread: the
    /// loop polls the keyboard with a timeout equal to the time left until
    /// the next tick deadline, so ticks never run in parallel with input
    /// handling.
    pub fn run(
        &mut self,
        game: &mut ClickerGame,
        rng: &mut SmallRng,
        reporter: &mut dyn StatsReporter,
    ) -> Result<()> {
        let start = Instant::now();
        let mut clock = TickClock::new(0.0);

        while !game.quit {
            self.terminal.draw(|f| draw(f, game))?;

            let now = start.elapsed().as_secs_f64() * 1000.0;
            let timeout = clock.remaining_ms(now).min(MAX_POLL_MS);
            if event::poll(Duration::from_millis(timeout as u64))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(action) = Action::from_key(key.code) {
                            game.handle_action(action, reporter);
                        }
                    }
                }
            }

            let now = start.elapsed().as_secs_f64() * 1000.0;
            if clock.due(now) {
                let factor = game.tick(rng, reporter);
                clock.reschedule(now, factor);
            }
        }
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn draw(f: &mut Frame, game: &ClickerGame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_title(f, chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_score(f, game, content[0]);
    render_upgrade(f, game, content[1]);
    render_help(f, chunks[2]);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "CLICKER",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

/// Accent tiers for the score panel, matching the old background bands.
fn score_accent(score: u64) -> Color {
    if score > 1000 {
        Color::Red
    } else if score > 500 {
        Color::Yellow
    } else {
        Color::LightBlue
    }
}

fn render_score(f: &mut Frame, game: &ClickerGame, area: Rect) {
    let accent = score_accent(game.state.score);
    let lines = vec![
        Line::from(Span::styled(
            format!("SCORE = {}", game.state.score),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "AUTOMATIC SCORE = +{} /SEC",
                game.state.auto_increment * game.state.multiplier
            ),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("fluctuation x{:.2}", game.state.fluctuation_factor),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(" Score "),
    );
    f.render_widget(panel, area);
}

/// Border color for the upgrade panel: green flash on a purchase, red flash
/// on a denied one.
fn upgrade_border(feedback: Option<Feedback>) -> Color {
    match feedback {
        Some(Feedback::PurchaseOk) => Color::Green,
        Some(Feedback::PurchaseDenied) => Color::Red,
        None => Color::Yellow,
    }
}

fn render_upgrade(f: &mut Frame, game: &ClickerGame, area: Rect) {
    let affordable = game.state.can_afford_upgrade();
    let offer_style = if affordable {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let lines = vec![
        Line::from(Span::styled(
            format!("UPGRADE AUTO SCORE ({})", game.state.upgrade_cost),
            offer_style,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "+0.5 automatic score per tick, cost doubles",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(match game.feedback {
            Some(Feedback::PurchaseOk) => Span::styled(
                "purchased!",
                Style::default().fg(Color::Green),
            ),
            Some(Feedback::PurchaseDenied) => Span::styled(
                "not enough score",
                Style::default().fg(Color::Red),
            ),
            None => Span::raw(""),
        }),
    ];
    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(upgrade_border(game.feedback)))
            .title(" Upgrade [U] "),
    );
    f.render_widget(panel, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(Span::styled(
        "[Space/C] click   [U] buy upgrade   [Q] quit",
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(help, area);
}
