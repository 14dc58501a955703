//! Terminal 2048 runner (default binary).
//!
//! This is the gameplay entrypoint. It uses crossterm for input (keys and
//! mouse swipes) and the framebuffer-based renderer from `tui_2048::term`.

use std::fs::File;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use log::{info, warn};

use tui_2048::core::{Candidates, GameConfig, GameSnapshot, Grid};
use tui_2048::engine::{JsonFileStore, Session, SnapshotStore};
use tui_2048::input::{command_for_key, Command, SwipeTracker};
use tui_2048::term::{FrameBuffer, GameView, StatusView, TerminalRenderer, Viewport};
use tui_2048::types::{
    GameAction, Tile, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SPAWN_COUNT, MAX_GRID_SIZE,
    MIN_GRID_SIZE,
};

/// Swipe distance in terminal cells.
const MOUSE_SWIPE_THRESHOLD: u16 = 2;

#[derive(Parser, Debug)]
#[command(name = "tui-2048", version, about = "Sliding-tile 2048 in the terminal")]
struct Args {
    /// Grid rows
    #[arg(long, env = "TUI_2048_ROWS", default_value_t = DEFAULT_ROWS, value_parser = parse_size)]
    rows: usize,

    /// Grid columns
    #[arg(long, env = "TUI_2048_COLS", default_value_t = DEFAULT_COLS, value_parser = parse_size)]
    cols: usize,

    /// Tiles placed on a fresh grid
    #[arg(long, env = "TUI_2048_SPAWN", default_value_t = DEFAULT_SPAWN_COUNT)]
    spawn: usize,

    /// Values a spawned tile is drawn from (comma separated)
    #[arg(long, env = "TUI_2048_VALUES", value_delimiter = ',', default_value = "2,4")]
    values: Vec<Tile>,

    /// RNG seed (defaults to the clock)
    #[arg(long, env = "TUI_2048_SEED")]
    seed: Option<u32>,

    /// Persist the grid to this JSON file and resume from it on start
    #[arg(long, env = "TUI_2048_SAVE")]
    save_file: Option<PathBuf>,

    /// Write logs here; filter with TUI_2048_LOG (default "info")
    #[arg(long, env = "TUI_2048_LOG_PATH")]
    log_file: Option<PathBuf>,
}

fn parse_size(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}"))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let mut session = open_session(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file (never the screen the game draws on), or nowhere.
fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("TUI_2048_LOG", "info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn open_session(args: &Args) -> Result<Session> {
    let candidates = Candidates::new(&args.values).context("invalid --values")?;
    let config = GameConfig {
        rows: args.rows,
        cols: args.cols,
        spawn_count: args.spawn,
        candidates,
    };
    let seed = args.seed.unwrap_or_else(clock_seed);
    info!("seed {}", seed);

    let store = args
        .save_file
        .as_ref()
        .map(|path| Box::new(JsonFileStore::new(path)) as Box<dyn SnapshotStore>);

    Session::open(config, seed, store).context("starting game")
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let full = GameView::default();
    let compact = GameView::compact();

    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::new(Grid::new(MIN_GRID_SIZE, MIN_GRID_SIZE)?);
    let mut swipe = SwipeTracker::with_threshold(MOUSE_SWIPE_THRESHOLD);
    let mut message: Option<&'static str> = None;

    loop {
        // Render.
        let (w, h) = TerminalRenderer::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.state().snapshot_into(&mut snap);

        let view = if full.fits(snap.grid.rows(), snap.grid.cols(), viewport) {
            &full
        } else {
            &compact
        };
        let status = StatusView {
            save_enabled: session.has_store(),
            message,
        };
        view.render_into_with_status(&snap, Some(&status), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Block until the next input; nothing moves on its own.
        let action = match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => match command_for_key(key) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::ClearSave) => {
                    session.clear_save();
                    message = Some("save cleared");
                    None
                }
                Some(Command::Action(action)) => Some(action),
                None => None,
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    swipe.press(mouse.column, mouse.row);
                    None
                }
                MouseEventKind::Up(MouseButton::Left) => {
                    swipe.release(mouse.column, mouse.row).map(GameAction::Move)
                }
                _ => None,
            },
            Event::Resize(_, _) => {
                term.invalidate();
                None
            }
            _ => None,
        };

        let Some(action) = action else {
            continue;
        };
        let resized = matches!(action, GameAction::Grow | GameAction::Shrink);
        match session.apply(action) {
            Ok(outcome) => {
                if outcome.changed {
                    message = None;
                }
                if resized {
                    term.invalidate();
                }
            }
            Err(err) => warn!("{} rejected: {}", action.as_str(), err),
        }
    }
}
