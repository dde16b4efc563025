use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ninja_runner::app::App;
use ninja_runner::assets::AssetPack;
use ninja_runner::audio;
use ninja_runner::build_info;
use ninja_runner::config::Config;
use ninja_runner::core::constants::{CANVAS_COLS, CANVAS_ROWS};
use ninja_runner::core::FrameClock;
use ninja_runner::game::{Background, GameState};
use ninja_runner::highscore::{JsonScoreFile, MemoryScoreStore, ScoreStore};
use ninja_runner::input::{map_key, PendingInput};
use ninja_runner::logging;
use ninja_runner::ui::{frame, scene, Canvas};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    if config.version {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    match logging::init(config.log_file.as_deref()) {
        Ok(path) => tracing::info!("logging to {}", path.display()),
        Err(e) => eprintln!("Warning: logging disabled: {:#}", e),
    }
    tracing::info!("{} starting", build_info::version_line());

    let assets = AssetPack::load(&config.assets)
        .with_context(|| format!("loading assets from {}", config.assets.display()))?;
    tracing::info!(
        "loaded assets from {}: {} layers, {} obstacle skins",
        config.assets.display(),
        assets.layers.len(),
        assets.obstacles.len()
    );

    let store = open_store(&config);
    let seed = config.seed_or_random();
    tracing::info!("seed {}", seed);

    let background = Background::new(&assets.layer_widths(), assets.sky.width());
    let state = GameState::new(seed, background, store.load());
    let audio = audio::open(&assets.sound_dir, config.mute);
    let mut app = App::new(state, audio, store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &assets);

    // Restore terminal before reporting anything
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("exiting after error: {:#}", e);
    }
    result?;

    tracing::info!("quit with high score {}", app.state.high_score);
    println!("Goodbye!");
    Ok(())
}

fn open_store(config: &Config) -> Box<dyn ScoreStore> {
    if let Some(path) = &config.score_file {
        return Box::new(JsonScoreFile::new(path.clone()));
    }
    match JsonScoreFile::at_default_location() {
        Ok(file) => {
            tracing::info!("high score file {}", file.path().display());
            Box::new(file)
        }
        Err(e) => {
            tracing::warn!("no home directory ({}), high score kept in memory", e);
            Box::new(MemoryScoreStore::new())
        }
    }
}

/// The frame pump: poll input until the next frame is due, step every due
/// frame, then draw.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    assets: &AssetPack,
) -> anyhow::Result<()> {
    let mut canvas = Canvas::new(CANVAS_COLS, CANVAS_ROWS);
    let mut clock = FrameClock::new();
    let mut pending = PendingInput::default();
    let mut last_tick = Instant::now();

    scene::render(&mut canvas, &app.state, assets);
    terminal.draw(|f| frame::draw(f, &canvas, &app.state))?;

    loop {
        let since_last = last_tick.elapsed().as_millis() as u64;
        if event::poll(clock.until_next_frame(since_last))? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key(key) {
                    pending.record(input);
                }
            }
        }
        if pending.quit_requested() {
            break;
        }

        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_millis() as u64;
        last_tick = now;

        let due = clock.accumulate(dt);
        if due == 0 {
            continue;
        }
        for _ in 0..due {
            app.frame(pending.take_jump());
        }

        scene::render(&mut canvas, &app.state, assets);
        terminal.draw(|f| frame::draw(f, &canvas, &app.state))?;
    }

    Ok(())
}
