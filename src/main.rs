use std::fs::File;
use std::io::{self, Write};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use carfinder::app::App;
use carfinder::app::mouse::{disable_mouse_capture, enable_mouse_capture, install_panic_hook};
use carfinder::cli::{Cli, build_engine, open_garage, run_command};
use carfinder::config::load_config;

const LOG_FILE: &str = "carfinder.log";

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.command.is_none());

    let loaded = load_config(cli.config.as_deref());
    if let Some(warning) = &loaded.warning {
        eprintln!("Warning: {}. Using default settings.", warning);
    }
    let config = loaded.config;

    if let Some(command) = &cli.command {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run_command(command, cli.catalog.as_deref(), &config, &mut out)?;
        out.flush()?;
        return Ok(());
    }

    let engine = build_engine(cli.catalog.as_deref(), &config)?;
    let app = App::new(engine, open_garage(&config), &config.search);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    install_panic_hook();
    if let Err(e) = enable_mouse_capture(&mut io::stdout()) {
        ratatui::restore();
        return Err(e.into());
    }

    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    let _ = disable_mouse_capture(&mut io::stdout());
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let timeout = app.poll_timeout();
        app.handle_events(timeout)?;
        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Subcommands log to stderr. The TUI owns the terminal, so debug builds log
/// to a file in the temp directory and release builds not at all.
fn init_logging(tui: bool) {
    let default_filter = if tui { "carfinder=debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if tui {
        if !cfg!(debug_assertions) {
            return;
        }
        let path = std::env::temp_dir().join(LOG_FILE);
        let Ok(file) = File::create(&path) else {
            return;
        };
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    let _ = builder.try_init();
}
