use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};

use biscuit_config::AppConfig;
use biscuit_core::{
    bus::EventBus,
    command::{self, CommandContext, CommandOutput, CommandRegistry},
    console::Console,
    event::Event,
    logging::{self, LogBuffer, LogEntry, LogLevel},
    meter::TickMeter,
    session::SessionState,
};
use biscuit_sim::{Action, Mood, PetSim};
use biscuit_sprite::{scene, Canvas, FrameClock};
use biscuit_ui::{
    console::render_console,
    layout::dashboard_layout,
    shell::{render_dashboard, DashView},
};

struct App {
    config: AppConfig,
    sim: PetSim,
    clock: FrameClock,
    canvas: Canvas,
    painted: Option<(Mood, u8)>,
    session: SessionState,
    bus: EventBus,
    log_buffer: LogBuffer,
    console: Console,
    meter: TickMeter,
    commands: CommandRegistry,
}

impl App {
    fn new(config: AppConfig, log_buffer: LogBuffer, now: Instant) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        tracing::info!(seed, pet_name = %config.pet_name, "simulation ready");
        let sim = PetSim::new(config.colleagues.clone(), seed, now);

        Ok(Self {
            config,
            sim,
            clock: FrameClock::new(now),
            canvas: Canvas::room(),
            painted: None,
            session: SessionState::new(now),
            bus: EventBus::new(),
            log_buffer,
            console: Console::default(),
            meter: TickMeter::default(),
            commands: command::builtin_registry()?,
        })
    }

    /// Drain new entries from the shared log buffer into the console.
    fn sync_logs(&mut self) {
        if let Ok(mut buf) = self.log_buffer.lock() {
            for entry in buf.drain(..) {
                self.console.push_log(entry);
            }
        }
    }

    /// Repaint the canvas when the `(mood, phase)` pair changed.
    fn repaint(&mut self) {
        let key = (self.sim.mood(), self.clock.phase());
        if self.painted != Some(key) {
            scene::render(&mut self.canvas, key.0, key.1);
            self.painted = Some(key);
        }
    }

    /// Keep the top bar tracking the newest activity entry.
    fn refresh_status(&mut self) {
        if let Some(item) = self.sim.activity().latest() {
            self.session.status_line = format!("{} {}", item.actor, item.action.message());
        }
    }

    fn handle_care(&mut self, action: Action, now: Instant) {
        // The sim logs both outcomes, including the busy rejection.
        let _ = self.sim.apply(action, now);
    }

    /// Execute a console command and handle the output. Returns `true` when
    /// the app should quit.
    fn dispatch_command(&mut self, input: &str, now: Instant) -> bool {
        if input.trim().is_empty() {
            return false;
        }

        // Echo the command itself
        self.console.push_log(LogEntry {
            level: LogLevel::Info,
            target: "console".into(),
            message: format!("> {}", input),
        });

        let trimmed = input.trim();

        // Special-case "help" with no args to list all commands from the registry
        if trimmed == "help" || trimmed == "?" {
            let lines: Vec<String> = self
                .commands
                .commands()
                .iter()
                .map(|cmd| {
                    let aliases = cmd.aliases();
                    if aliases.is_empty() {
                        format!("  {:12} {}", cmd.usage(), cmd.description())
                    } else {
                        format!(
                            "  {:12} {} (aliases: {})",
                            cmd.usage(),
                            cmd.description(),
                            aliases.join(", ")
                        )
                    }
                })
                .collect();
            for line in lines {
                self.console.push_log(LogEntry {
                    level: LogLevel::Info,
                    target: "help".into(),
                    message: line,
                });
            }
            return false;
        }

        let output = {
            let mut ctx = CommandContext {
                sim: &mut self.sim,
                console: &mut self.console,
                meter: &self.meter,
                canvas: &self.canvas,
                pet_name: &self.config.pet_name,
                started_at: self.session.started_at,
                now,
            };
            self.commands.execute(trimmed, &mut ctx)
        };

        match output {
            CommandOutput::Lines(lines) => {
                for line in lines {
                    self.console.push_log(LogEntry {
                        level: LogLevel::Info,
                        target: "console".into(),
                        message: line,
                    });
                }
                false
            }
            CommandOutput::Quit => true,
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let log_buffer = logging::init();
    tracing::info!("biscuit dashboard starting up");

    let config = biscuit_config::load()?;

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, config, log_buffer);
    restore_terminal(terminal)?;
    res
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: AppConfig,
    log_buffer: LogBuffer,
) -> Result<()> {
    let mut app = App::new(config, log_buffer, Instant::now())?;
    let tick_interval = Duration::from_millis(100);
    let poll_timeout = Duration::from_millis(16);
    let mut last_tick = Instant::now();

    loop {
        // ── Sync logs from tracing into console ──
        app.sync_logs();

        // ── Advance simulation and animation ──
        let now = Instant::now();
        app.console.update(now);
        app.sim.tick(now);
        app.clock.tick(now);
        app.repaint();

        // ── Render ──
        terminal.draw(|f| {
            let rects = dashboard_layout(f.area());
            let view = DashView {
                pet_name: &app.config.pet_name,
                status_line: &app.session.status_line,
                uptime_secs: app.session.uptime(now).as_secs(),
            };
            render_dashboard(f, rects, &app.sim, &app.canvas, view, now);

            // Console overlay on top
            if app.console.is_visible() {
                let fraction = app.console.overlay_fraction(now);
                let show_cursor = app.console.is_open();
                render_console(
                    f,
                    f.area(),
                    &app.console,
                    app.meter.tps(),
                    fraction,
                    show_cursor,
                );
            }
        })?;

        // ── Poll → Publish ──
        if event::poll(poll_timeout)? {
            match event::read()? {
                CEvent::Key(key) => {
                    // Tilde always toggles the console
                    if key.code == KeyCode::Char('`') || key.code == KeyCode::Char('~') {
                        app.console.toggle(Instant::now());
                    } else if app.console.is_open() {
                        // Console captures all keys when fully open
                        match key.code {
                            KeyCode::Enter => {
                                let input = app.console.submit_input();
                                if app.dispatch_command(&input, Instant::now()) {
                                    return Ok(());
                                }
                            }
                            KeyCode::Backspace => app.console.backspace(),
                            KeyCode::Left => app.console.cursor_left(),
                            KeyCode::Right => app.console.cursor_right(),
                            KeyCode::PageUp => app.console.scroll_up(10),
                            KeyCode::PageDown => app.console.scroll_down(10),
                            KeyCode::Esc => app.console.toggle(Instant::now()),
                            KeyCode::Char(c) => app.console.insert_char(c),
                            _ => {}
                        }
                    } else {
                        // Normal mode
                        match key.code {
                            KeyCode::Char('q') => app.bus.publish(Event::Quit),
                            KeyCode::Char('f') => app.bus.publish(Event::Care(Action::Feed)),
                            KeyCode::Char('p') => app.bus.publish(Event::Care(Action::Pet)),
                            KeyCode::Char('w') => app.bus.publish(Event::Care(Action::Walk)),
                            _ => app.bus.publish(Event::Key(key)),
                        }
                    }
                }
                CEvent::Resize(cols, rows) => {
                    app.bus.publish(Event::Resize { cols, rows });
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_interval {
            last_tick = Instant::now();
            app.meter.tick(last_tick);
            app.bus.publish(Event::Tick { now: last_tick });
        }

        // ── Drain → Apply ──
        let events = app.bus.drain();
        for ev in events {
            match ev {
                Event::Quit => return Ok(()),
                Event::Care(action) => app.handle_care(action, Instant::now()),
                Event::Tick { .. } => app.refresh_status(),
                Event::Resize { cols, rows } => {
                    tracing::debug!(cols, rows, "terminal resized");
                }
                Event::Key(_) => {}
            }
        }
    }
}
