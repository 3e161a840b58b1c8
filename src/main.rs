use anyhow::Result;
use buzztui::api::{GenerateBackend, GenerateClient};
use buzztui::app::{App, AppEvent, Mode};
use buzztui::input::Field;
use buzztui::{clipboard, config, ui};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "buzztui", version, about = "Terminal client for the X viral-post generator")]
struct Args {
    /// Generation service URL (overrides config file)
    #[arg(long)]
    api_url: Option<String>,

    /// Talk to a local development service instead of the deployed one
    #[arg(long)]
    local: bool,

    /// Probe the service health endpoint and exit
    #[arg(long)]
    check: bool,

    /// Account handle to prefill (repeatable)
    #[arg(short, long = "account")]
    accounts: Vec<String>,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match &args.config {
        Some(path) => config::FileConfig::load(path)?,
        None => config::FileConfig::load_default()?,
    };
    let api_url = config::resolve_api_url(args.api_url.as_deref(), args.local, &file_config);
    let client = Arc::new(GenerateClient::new(&api_url));

    if args.check {
        client.health().await?;
        println!("{api_url} is healthy");
        return Ok(());
    }

    let mut app = App::new(&file_config.defaults);
    if !args.accounts.is_empty() {
        app.form.accounts = args.accounts.join("\n");
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: Arc<GenerateClient>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(16);

    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key, &client, &tx);
            }
        }

        while let Ok(event) = rx.try_recv() {
            match event {
                AppEvent::Generated(result) => app.finish(result),
                AppEvent::CopyFinished(Ok(())) => {}
                AppEvent::CopyFinished(Err(message)) => app.copy_failed(message),
            }
        }

        app.tick();
    }

    Ok(())
}

fn handle_key(
    app: &mut App,
    key: KeyEvent,
    client: &Arc<GenerateClient>,
    tx: &mpsc::Sender<AppEvent>,
) {
    // Generate works from either pane.
    if key.code == KeyCode::Char('g') && key.modifiers.contains(KeyModifiers::CONTROL) {
        submit(app, client, tx);
        return;
    }

    match app.mode {
        Mode::Form => handle_form_key(app, key),
        Mode::Results => handle_results_key(app, key, client, tx),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if app.cards.is_empty() && app.summary.is_none() {
                app.should_quit = true;
            } else {
                app.mode = Mode::Results;
            }
        }
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Enter => {
            if app.form.focus == Field::GenerateImages {
                app.form.toggle();
            } else {
                app.form.insert_newline();
            }
        }
        KeyCode::Backspace => app.form.delete_char(),
        KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            app.form.insert_char(c);
        }
        _ => {}
    }
}

fn handle_results_key(
    app: &mut App,
    key: KeyEvent,
    client: &Arc<GenerateClient>,
    tx: &mpsc::Sender<AppEvent>,
) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('e') | KeyCode::Tab => app.mode = Mode::Form,
        KeyCode::Char('g') => submit(app, client, tx),
        KeyCode::Char('o') => app.open_selected(),
        KeyCode::Char('c') => {
            if let Some(payload) = app.copy_selected() {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = clipboard::copy(&payload).await.map_err(|e| e.to_string());
                    let _ = tx.send(AppEvent::CopyFinished(result)).await;
                });
            }
        }
        _ => {}
    }
}

/// Kick off a submission. The spawned task always sends an outcome back,
/// success or failure, so the app is guaranteed to leave `Submitting`.
fn submit(app: &mut App, client: &Arc<GenerateClient>, tx: &mpsc::Sender<AppEvent>) {
    let Some(request) = app.submit() else {
        return;
    };
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.generate(&request).await;
        let _ = tx.send(AppEvent::Generated(result)).await;
    });
}
