use crate::core::{Direction, GameState, RoundOutcome, UserAction, Vec2, BOARD_BOUNDS, GRID_SIZE};
use crate::error::{Error, Result};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const BORDERED_SIZE: usize = GRID_SIZE as usize + 2;

/// Reads a bordered board drawing, the same format [`render_game_to_string`]
/// produces. Blank lines are skipped. The round always starts in progress.
pub fn parse_level(s: &str) -> Result<GameState> {
    let mut player = None;
    let mut agent = None;
    let mut box_pos = None;
    let mut target = None;

    let rows: Vec<&str> = s
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .collect();
    if rows.len() != BORDERED_SIZE {
        return Err(Error::InvalidLevelShape {
            expected: BORDERED_SIZE,
            got: rows.len(),
            row: 0,
        });
    }

    for (row, line) in rows.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != BORDERED_SIZE {
            return Err(Error::InvalidLevelShape {
                expected: BORDERED_SIZE,
                got: chars.len(),
                row,
            });
        }
        for (column, &ch) in chars.iter().enumerate() {
            let on_border = row == 0 || column == 0 || row == BORDERED_SIZE - 1 || column == BORDERED_SIZE - 1;
            if on_border {
                if ch != '#' {
                    return Err(Error::InvalidCellCharacter { character: ch, row, column });
                }
                continue;
            }

            let pos = Vec2 {
                x: column as i32 - 1,
                y: row as i32 - 1,
            };
            let (occupant, on_target) = match ch {
                ' ' => (None, false),
                '.' => (None, true),
                '$' => (Some(&mut box_pos), false),
                '*' => (Some(&mut box_pos), true),
                '@' => (Some(&mut player), false),
                '+' => (Some(&mut player), true),
                'A' => (Some(&mut agent), false),
                'a' => (Some(&mut agent), true),
                _ => return Err(Error::InvalidCellCharacter { character: ch, row, column }),
            };
            if let Some(slot) = occupant {
                place(slot, pos, entity_name(ch))?;
            }
            if on_target {
                place(&mut target, pos, "target")?;
            }
        }
    }

    Ok(GameState {
        player: player.ok_or(Error::MissingEntity { entity: "player" })?,
        agent: agent.ok_or(Error::MissingEntity { entity: "agent" })?,
        box_pos: box_pos.ok_or(Error::MissingEntity { entity: "box" })?,
        target: target.ok_or(Error::MissingEntity { entity: "target" })?,
        outcome: RoundOutcome::InProgress,
    })
}

fn place(slot: &mut Option<Vec2>, pos: Vec2, entity: &'static str) -> Result<()> {
    if slot.replace(pos).is_some() {
        return Err(Error::DuplicateEntity { entity });
    }
    Ok(())
}

fn entity_name(ch: char) -> &'static str {
    match ch {
        '$' | '*' => "box",
        '@' | '+' => "player",
        _ => "agent",
    }
}

pub fn render_game_to_string(game: &GameState) -> String {
    let border: String = "#".repeat(BORDERED_SIZE);
    let mut result = String::new();
    result.push_str(&border);
    result.push('\n');
    for y in 0..BOARD_BOUNDS.extent.y {
        result.push('#');
        for x in 0..BOARD_BOUNDS.extent.x {
            let pos = Vec2 { x, y };
            let on_target = pos == game.target;
            let ch = if pos == game.box_pos {
                if on_target { '*' } else { '$' }
            } else if pos == game.player {
                if on_target { '+' } else { '@' }
            } else if pos == game.agent {
                if on_target { 'a' } else { 'A' }
            } else if on_target {
                '.'
            } else {
                ' '
            };
            result.push(ch);
        }
        result.push_str("#\n");
    }
    result.push_str(&border);
    result.push('\n');
    result
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    crossterm::terminal::enable_raw_mode().map_err(|e| Error::io("enable raw mode", e))?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| Error::io("enter alternate screen", e))?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend).map_err(|e| Error::io("create terminal", e))?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<()> {
    crossterm::terminal::disable_raw_mode().map_err(|e| Error::io("disable raw mode", e))?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)
        .map_err(|e| Error::io("leave alternate screen", e))?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<()> {
    terminal
        .draw(|f| {
            let chunks = Layout::default()
                .direction(LayoutDirection::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
                .split(f.area());

            // Board
            let game_text = render_game_to_string(&state.game);
            let game_paragraph = Paragraph::new(game_text)
                .block(Block::default().borders(Borders::ALL).title("Sokoban Duel"))
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center);
            f.render_widget(game_paragraph, chunks[0]);

            let (status, status_color) = status_line(state);
            let status_paragraph = Paragraph::new(status)
                .block(Block::default().borders(Borders::ALL).title("Status"))
                .style(Style::default().fg(status_color))
                .alignment(Alignment::Center);
            f.render_widget(status_paragraph, chunks[1]);

            let instructions = "WASD or Arrow keys to move, R to restart, Q to quit";
            let instruction_paragraph = Paragraph::new(instructions)
                .block(Block::default().borders(Borders::ALL).title("Instructions"))
                .style(Style::default().fg(Color::Cyan))
                .alignment(Alignment::Center);
            f.render_widget(instruction_paragraph, chunks[2]);
        })
        .map_err(|e| Error::io("draw frame", e))?;
    Ok(())
}

fn status_line(state: &GameRenderState) -> (String, Color) {
    match state.game.outcome {
        RoundOutcome::Won(winner) => (format!("{} wins! Press R to play again.", winner), Color::Yellow),
        RoundOutcome::InProgress => {
            let mut status = format!(
                "@ you  A agent  $ box  . target | agent moves every {} ms",
                state.tick_interval_ms
            );
            if let Some(rejection) = &state.last_rejection {
                status = format!("{} | Blocked: {:?}", status, rejection);
            }
            (status, Color::White)
        }
    }
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput> {
    let ready = event::poll(std::time::Duration::from_millis(50))
        .map_err(|e| Error::io("poll terminal events", e))?;
    if ready {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read().map_err(|e| Error::io("read terminal event", e))?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::UserAction(UserAction::Restart),
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Right))
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
