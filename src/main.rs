use anyhow::Context;
use clap::Parser;
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use csv_flashcards::{
    App, Cli, Command, StudyConfig,
    config::StudyArgs,
    list_sources,
    loader::{LoadResult, spawn_loader},
    logger,
    server::{self, Listing},
    ui,
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::time::{Duration, Instant};

/// Upper bound on how long the loop sleeps waiting for input.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            logger::init_file(&cli.log_file, cli.verbose);
            study(StudyConfig::new(cli.dir, StudyArgs::default()))
        }
        Some(Command::Study(args)) => {
            logger::init_file(&cli.log_file, cli.verbose);
            study(StudyConfig::new(cli.dir, args))
        }
        Some(Command::Serve { addr }) => {
            logger::init_stderr(cli.verbose);
            let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
            runtime
                .block_on(server::serve(cli.dir, addr))
                .with_context(|| format!("listing server on {} failed", addr))
        }
        Some(Command::List) => {
            logger::init_stderr(cli.verbose);
            let files = list_sources(&cli.dir)?;
            let json = serde_json::to_string_pretty(&Listing { files })?;
            println!("{}", json);
            Ok(())
        }
    }
}

fn study(config: StudyConfig) -> anyhow::Result<()> {
    tracing::info!("starting study session from {}", config.dir.display());

    let mut app = App::new(&config);
    let loader = spawn_loader(config.dir.clone()).context("failed to spawn loader thread")?;

    if let Some(path) = &config.open
        && let Err(e) = app.upload(path)
    {
        tracing::warn!("could not open {}: {}", path.display(), e);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, loader);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("terminal UI failed")
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    loader: Receiver<LoadResult>,
) -> io::Result<()> {
    let mut loader = Some(loader);

    loop {
        if let Some(rx) = &loader {
            match rx.try_recv() {
                Ok(Ok(sources)) => {
                    tracing::info!("loaded {} sets", sources.len());
                    app.add_sources(sources);
                    loader = None;
                }
                Ok(Err(e)) => {
                    tracing::error!("error loading default sets: {}", e);
                    loader = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => loader = None,
            }
        }

        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = app
            .next_deadline()
            .map(|due| due.saturating_duration_since(Instant::now()))
            .unwrap_or(POLL_INTERVAL)
            .min(POLL_INTERVAL);

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            tracing::info!("quitting");
            return Ok(());
        }
    }
}
