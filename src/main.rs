// Sokoban duel: push the box onto the target before the agent does.
// Controls: W/A/S/D or arrow keys to move, R to restart, Q to quit.
// Tiles: '@' player, 'A' agent, '$' box, '.' target, '*' box on target.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, Level};

use sokoban_duel::console_interface::{
    cleanup_terminal, handle_input, render_game, setup_terminal, ConsoleInput,
};
use sokoban_duel::core::{GameUpdate, UserAction, DEFAULT_AGENT_TICK};
use sokoban_duel::export::export_report;
use sokoban_duel::logging::init_file_logging;
use sokoban_duel::models::GameRenderState;
use sokoban_duel::session::{GameSession, SessionConfig};
use sokoban_duel::simulation::{run_simulation, SimulationConfig};

#[derive(Parser, Debug)]
#[command(name = "sokoban_duel", about = "Race a BFS agent to push the box onto the target")]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Milliseconds between agent moves
    #[arg(long, default_value_t = DEFAULT_AGENT_TICK.as_millis() as u64, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    #[arg(long, default_value = "info")]
    log_level: Level,

    #[arg(long, default_value = "exports/sokoban_duel.log")]
    log_file: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Play in the terminal against the agent
    Interactive,
    /// Play seeded rounds between a random player and the agent
    Simulate {
        #[arg(long, default_value_t = 100)]
        rounds: usize,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        #[arg(long, default_value_t = 200)]
        max_ticks: usize,

        #[arg(long, default_value_t = 1)]
        player_moves_per_tick: usize,

        /// Write the full report as JSON
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_file_logging(&cli.log_file, cli.log_level)?;

    let session_config = SessionConfig {
        tick_interval: Duration::from_millis(cli.tick_ms),
    };

    match cli.mode.unwrap_or(Mode::Interactive) {
        Mode::Interactive => {
            let mut terminal = setup_terminal()?;
            let result = run_interactive(session_config, &mut terminal);
            cleanup_terminal()?;
            result?;
        }
        Mode::Simulate {
            rounds,
            seed,
            max_ticks,
            player_moves_per_tick,
            export,
        } => {
            let report = run_simulation(SimulationConfig {
                rounds,
                seed,
                max_ticks,
                player_moves_per_tick,
            });
            println!(
                "{} rounds: player won {}, agent won {}, undecided {}",
                report.rounds.len(),
                report.player_wins,
                report.agent_wins,
                report.undecided
            );
            if let Some(path) = export {
                export_report(&report, &path)?;
                println!("Report exported to {}", path.display());
            }
        }
    }

    Ok(())
}

fn run_interactive(
    config: SessionConfig,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> sokoban_duel::error::Result<()> {
    let session = GameSession::start(config);
    let tick_interval_ms = config.tick_interval.as_millis();
    let mut last_rejection = None;
    info!("interactive session started");

    loop {
        match handle_input()? {
            ConsoleInput::Quit => break,
            ConsoleInput::UserAction(UserAction::Move(dir)) => {
                last_rejection = match session.submit_player_intent(dir) {
                    GameUpdate::Rejected(reason) => Some(reason),
                    GameUpdate::NextState(..) => None,
                };
            }
            ConsoleInput::UserAction(UserAction::Restart) => {
                session.submit_reset();
                last_rejection = None;
            }
            ConsoleInput::Timeout | ConsoleInput::Unknown => {}
        }

        render_game(
            terminal,
            &GameRenderState {
                game: session.get_snapshot(),
                last_rejection,
                tick_interval_ms,
            },
        )?;
    }

    session.shutdown();
    Ok(())
}
