use clap::Parser;
use embassy_executor::Spawner;
use embassy_time::{Instant, Timer};
use log::{LevelFilter, error, info};
use rsvp_core::{
    app::{ReaderApp, TickResult},
    session::ReaderConfig,
};
use rsvp_term::{
    error::TerminalResult,
    input::keyboard::{KeyboardConfig, KeyboardInput},
    platform::terminal::TerminalSession,
    render::{FrameRenderer, rsvp::TerminalRenderer},
};

#[path = "main/cli.rs"]
mod cli;

const TITLE: &str = "Rapid Serial Visual Presentation";
const ORP_ANCHOR_PERCENT: u16 = 42;
const UI_POLL_MS: u64 = 5;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    let config = cli.reader_config();
    let keyboard = KeyboardConfig::default().with_direction_inverted(cli.invert_rate_keys);
    info!(
        "boot: wpm={} pivot={} font={} size={}px color={}",
        config.wpm,
        config.pivot_enabled,
        config.style.font_family.label(),
        config.style.font_size.px(),
        config.style.font_color.label()
    );

    if let Err(err) = run(cli.text(), config, keyboard).await {
        error!("rsvp-reader: {}", err);
        eprintln!("rsvp-reader: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

async fn run(text: &str, config: ReaderConfig, keyboard: KeyboardConfig) -> TerminalResult<()> {
    let mut terminal = TerminalSession::enter()?;
    let (width, height) = terminal.size()?;
    let mut renderer = TerminalRenderer::new(width, height, ORP_ANCHOR_PERCENT);
    let mut app = ReaderApp::with_text(KeyboardInput::new(keyboard), config, TITLE, text);

    let loop_start = Instant::now();
    loop {
        let now_ms = loop_start.elapsed().as_millis();
        let mut render = app.tick(now_ms) == TickResult::RenderRequested;
        if app.quit_requested() {
            break;
        }

        if let Some(pasted) = app.input_mut().take_paste() {
            app.set_text(&pasted);
            render = true;
        }
        if let Some((width, height)) = app.input_mut().take_resize() {
            renderer.resize(width, height);
            render = true;
        }

        if render {
            let mut result = Ok(());
            app.with_screen(|screen| result = renderer.render(screen, terminal.writer()));
            result?;
        }

        Timer::after_millis(UI_POLL_MS).await;
    }

    info!(
        "exit: word {} of {}",
        app.session().metrics().word_number,
        app.session().total_words()
    );
    terminal.restore();
    Ok(())
}
