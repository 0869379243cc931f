use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use tracing::info;

use autoscroll_core::{AppConfig, ScrollTarget};
use autoscroll_tui::{
    document::Document,
    event::{AppEvent, EventHandler},
    widgets::{DocumentViewWidget, HelpWidget, StatusBarWidget},
    App, Theme,
};

use super::{BoundaryArg, TargetArg};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Text file to show
    pub file: PathBuf,
    /// Scroll speed in pixels per second
    #[arg(long)]
    pub speed: Option<f64>,
    /// What to do at the end of the document
    #[arg(long, value_enum)]
    pub boundary: Option<BoundaryArg>,
    /// Full-screen page or centered panel
    #[arg(long, value_enum)]
    pub target: Option<TargetArg>,
    /// Frame-rate cap for the scroller (0 = uncapped)
    #[arg(long)]
    pub max_fps: Option<u32>,
    /// Start with the reduced-motion preference set
    #[arg(long)]
    pub reduced_motion: bool,
    /// Open without starting auto-scroll (press `s` to start)
    #[arg(long)]
    pub paused: bool,
}

impl RunArgs {
    /// Command-line flags win over the config file
    fn apply(&self, config: &mut AppConfig) {
        if let Some(speed) = self.speed {
            config.autoscroll.speed = speed;
        }
        if let Some(boundary) = self.boundary {
            config.autoscroll.boundary = boundary.into();
        }
        if let Some(target) = self.target {
            config.ui.target = target.into();
        }
        if let Some(max_fps) = self.max_fps {
            config.autoscroll.max_fps = max_fps;
        }
        if self.reduced_motion {
            config.ui.reduced_motion = true;
        }
        if self.paused {
            config.autoscroll.autostart = false;
        }
    }
}

pub async fn run(mut config: AppConfig, args: RunArgs) -> Result<()> {
    args.apply(&mut config);

    let document = Document::load(&args.file)?;
    let theme = Theme::from_name(&config.ui.theme);
    let frame_rate = config.ui.frame_rate;
    let autostart = config.autoscroll.autostart;
    let title = format!("{} - autoscroll", document.title);

    info!(file = %args.file.display(), ?config.autoscroll, "opening document");
    let mut app = App::new(config, document, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle(title)
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, frame_rate, autostart).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    let (viewport, _) = app.scroller.teardown();
    info!(
        offset = viewport.offset(),
        progress = viewport.progress(),
        "session ended"
    );

    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    frame_rate: u32,
    autostart: bool,
) -> Result<()> {
    let size = terminal.size()?;
    sync_layout(app, Rect::new(0, 0, size.width, size.height));

    if autostart {
        app.scroller.start();
    }

    let mut events = EventHandler::new(frame_rate);
    terminal.draw(|frame| draw(frame, app))?;

    while let Some(event) = events.next().await {
        match event {
            AppEvent::Key(key) => app.handle_key(&key),
            AppEvent::Mouse(mouse) => app.handle_mouse(&mouse),
            AppEvent::Resize(width, height) => {
                sync_layout(app, Rect::new(0, 0, width, height));
            }
            AppEvent::FocusGained => app.set_focused(true),
            AppEvent::FocusLost => app.set_focused(false),
            AppEvent::Frame => {
                app.on_frame(Instant::now());
                terminal.draw(|frame| draw(frame, app))?;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Document area and status bar
fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

fn sync_layout(app: &mut App, area: Rect) {
    let (body, _) = split(area);
    let text = DocumentViewWidget::text_area(body, app.target_kind());
    app.sync_layout(text.width, text.height);
}

fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    sync_layout(app, area);

    let (body, status) = split(area);
    DocumentViewWidget::render(frame, body, app);
    StatusBarWidget::render(frame, status, app);

    if app.show_help {
        HelpWidget::render(frame, &app.theme);
    }
}
