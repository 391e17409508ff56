//! Gapwing entry point
//!
//! Owns the terminal and runs the fixed-rate frame loop:
//! drain input -> tick -> sound cues -> render -> sleep.

use std::fs::File;
use std::io::{self, stdout, BufWriter, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute, terminal,
};

use gapwing::audio::{Audio, SoundCue};
use gapwing::consts::TICK_RATE;
use gapwing::renderer::TermRenderer;
use gapwing::sim::{tick, GameEvent, GameState, TickInput};
use gapwing::{HighScores, Settings};

/// Wall-clock budget of one simulation tick
const FRAME: Duration = Duration::from_micros(1_000_000 / TICK_RATE as u64);

/// Route logs away from the terminal the game is drawing on: pipe them
/// to a file when RUST_LOG asks for logging, drop them otherwise.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_some() {
        if let Ok(file) = File::create("gapwing.log") {
            env_logger::Builder::from_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
            return;
        }
    }
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Off)
        .init();
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED)
}

fn play(audio: Option<&Audio>, cue: SoundCue) {
    if let Some(audio) = audio {
        audio.play(cue);
    }
}

fn main() -> io::Result<()> {
    init_logging();

    let settings = Settings::load();
    let audio = match Audio::new(settings.effective_sfx_volume()) {
        Ok(audio) => Some(audio),
        Err(err) => {
            log::warn!("audio disabled: {err}");
            None
        }
    };

    terminal::enable_raw_mode()?;
    let mut out = BufWriter::new(stdout());
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        EnableMouseCapture
    )?;

    let result = run(&mut out, &settings, audio.as_ref());

    // Always restore the terminal, even when the loop errored out
    let _ = execute!(
        out,
        DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
    let _ = terminal::disable_raw_mode();

    // Materializes the config file with defaults on first run
    settings.save();
    result
}

fn run<W: Write>(out: &mut W, settings: &Settings, audio: Option<&Audio>) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut renderer = TermRenderer::new(cols, rows);
    let mut state = GameState::new(seed_from_clock());
    let mut scores = HighScores::new();
    let mut run_start_tick = 0u64;

    let mut fps = 0u32;
    let mut frames_this_second = 0u32;
    let mut second_mark = Instant::now();

    'game: loop {
        let frame_start = Instant::now();
        let mut input = TickInput::default();

        // Drain whatever arrived since the last tick; never block
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    modifiers,
                    ..
                }) => match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break 'game,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        break 'game;
                    }
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => input.flap = true,
                    _ => {}
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(_),
                    ..
                }) => input.flap = true,
                Event::Resize(new_cols, new_rows) => renderer.resize(new_cols, new_rows),
                _ => {}
            }
        }

        for event in tick(&mut state, &input) {
            match event {
                GameEvent::Flap => play(audio, SoundCue::Flap),
                GameEvent::Restarted => run_start_tick = state.time_ticks,
                GameEvent::PowerUpCollected => play(audio, SoundCue::Collect),
                GameEvent::PipeCollision | GameEvent::BoundaryDeath => {
                    play(
                        audio,
                        if event == GameEvent::PipeCollision {
                            SoundCue::Hit
                        } else {
                            SoundCue::Die
                        },
                    );
                    let length = state.time_ticks.saturating_sub(run_start_tick);
                    if let Some(rank) = scores.add_score(state.score, length) {
                        log::info!("run ranked #{rank} this session");
                    }
                }
                _ => {}
            }
        }

        renderer.render(out, &state, settings, fps)?;

        frames_this_second += 1;
        if second_mark.elapsed() >= Duration::from_secs(1) {
            fps = frames_this_second;
            frames_this_second = 0;
            second_mark = Instant::now();
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }

    if let Some(top) = scores.top_score() {
        log::info!(
            "session over: best {top} across {} scored runs",
            scores.entries.len()
        );
    }
    Ok(())
}
