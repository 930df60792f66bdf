//! fnplot - an interactive terminal function and data plotter.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fnplot::app::App;
use fnplot::data::PendingLoad;
use fnplot::histogram::DEFAULT_BINS;
use fnplot::interaction::{InputEvent, NavKey, WheelDirection};
use fnplot::sampler::DEFAULT_SAMPLES;
use fnplot::ui;
use fnplot::util::{analysis_report, PlotConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "fnplot")]
#[command(about = "An interactive terminal function and data plotter", long_about = None)]
struct Args {
    /// Data file to load at startup (one `y` or `x y` pair per line)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Samples per function across the view
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Histogram bins
    #[arg(long, default_value_t = DEFAULT_BINS)]
    bins: usize,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print zero crossings and extrema over the default view, then exit
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting fnplot");
    }

    let config = PlotConfig {
        samples: args.samples,
        bins: args.bins,
        ..PlotConfig::default()
    };
    let mut app = App::new(config)?;

    if args.report {
        return print_report(app, args.data);
    }

    if let Some(path) = args.data {
        app.start_load(path);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("fnplot exited");
    }

    Ok(())
}

/// Headless mode: analyze the default selection and print the report.
fn print_report(mut app: App, data: Option<PathBuf>) -> Result<()> {
    if let Some(path) = data {
        let loaded = PendingLoad::spawn(path.clone())
            .wait()
            .with_context(|| format!("Failed to load {}", path.display()))?;
        app.install_data(loaded);
    }
    app.plot.highlight_zeros();
    app.plot.find_extrema();
    print!("{}", analysis_report(&app.plot));
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.poll_load();
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if handle_key(&mut app, key) {
                    return Ok(());
                }
            },
            Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
            _ => {},
        }
    }
}

/// Apply a key press. Returns true when the user asked to quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Prompt mode - handle separately
    if app.prompt.is_active() {
        match key.code {
            KeyCode::Enter => {
                if let Some(path) = app.prompt.submit() {
                    app.start_load(PathBuf::from(path));
                }
            },
            KeyCode::Esc => app.prompt.cancel(),
            KeyCode::Backspace => app.prompt.backspace(),
            KeyCode::Char(c) => app.prompt.input(c),
            _ => {},
        }
        return false;
    }

    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return true,

        // Viewport navigation
        (KeyModifiers::NONE, KeyCode::Left) => app.handle_input(InputEvent::Key(NavKey::Left)),
        (KeyModifiers::NONE, KeyCode::Right) => app.handle_input(InputEvent::Key(NavKey::Right)),
        (KeyModifiers::NONE, KeyCode::Up) => app.handle_input(InputEvent::Key(NavKey::Up)),
        (KeyModifiers::NONE, KeyCode::Down) => app.handle_input(InputEvent::Key(NavKey::Down)),
        (KeyModifiers::NONE, KeyCode::Esc) => app.handle_input(InputEvent::Key(NavKey::Reset)),
        (_, KeyCode::Char('+')) | (KeyModifiers::NONE, KeyCode::Char('=')) => {
            app.zoom_center(true);
        },
        (KeyModifiers::NONE, KeyCode::Char('-')) => app.zoom_center(false),

        // Control panel
        (KeyModifiers::NONE, KeyCode::Char('k')) | (KeyModifiers::SHIFT, KeyCode::BackTab) => {
            app.controls.cursor_up();
        },
        (KeyModifiers::NONE, KeyCode::Char('j')) | (KeyModifiers::NONE, KeyCode::Tab) => {
            app.controls.cursor_down();
        },
        (KeyModifiers::NONE, KeyCode::Char(' ')) | (KeyModifiers::NONE, KeyCode::Enter) => {
            app.activate_control();
        },

        // Commands
        (KeyModifiers::NONE, KeyCode::Char('a')) => app.apply_selection(),
        (KeyModifiers::NONE, KeyCode::Char('g')) => app.toggle_grid(),
        (KeyModifiers::NONE, KeyCode::Char('z')) => app.highlight_zeros(),
        (KeyModifiers::NONE, KeyCode::Char('e')) => app.find_extrema(),
        (KeyModifiers::SHIFT, KeyCode::Char('H')) => app.toggle_histogram(),
        (KeyModifiers::NONE, KeyCode::Char('o')) => app.prompt.start(),
        (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_report(),
        (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
        (KeyModifiers::SHIFT, KeyCode::Char('?')) | (KeyModifiers::NONE, KeyCode::Char('?')) => {
            app.status = "Help: drag=box zoom, wheel=zoom, arrows=pan, Esc=reset, j/k+Space=controls, a=apply, z=zeros, e=extrema, H=histogram, o=load".to_string();
        },
        _ => {},
    }
    false
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let event = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app
            .pointer_at(mouse.column, mouse.row, false)
            .map(InputEvent::PointerDown),
        MouseEventKind::Drag(MouseButton::Left) => app
            .pointer_at(mouse.column, mouse.row, true)
            .map(InputEvent::PointerMove),
        MouseEventKind::Up(MouseButton::Left) => app
            .pointer_at(mouse.column, mouse.row, true)
            .map(InputEvent::PointerUp),
        MouseEventKind::ScrollUp => app
            .pointer_at(mouse.column, mouse.row, false)
            .map(|at| InputEvent::Wheel {
                at,
                direction: WheelDirection::Up,
            }),
        MouseEventKind::ScrollDown => app
            .pointer_at(mouse.column, mouse.row, false)
            .map(|at| InputEvent::Wheel {
                at,
                direction: WheelDirection::Down,
            }),
        _ => None,
    };
    if let Some(event) = event {
        app.handle_input(event);
    }
}
