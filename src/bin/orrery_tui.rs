//! Orrery - Terminal User Interface
//!
//! Top-down view of the animated solar system using ratatui.
//! App logic lives in `orrery::tui::app`; this binary owns terminal I/O.

#![forbid(unsafe_code)]

#[cfg(feature = "tui")]
fn main() -> std::io::Result<()> {
    use orrery::tui::OrreryApp;
    tui::run(OrreryApp::new())
}

#[cfg(not(feature = "tui"))]
fn main() {
    eprintln!("TUI feature not enabled. Run with --features tui");
    std::process::exit(1);
}

#[cfg(feature = "tui")]
mod tui {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::CrosstermBackend,
        layout::{Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{
            canvas::{Canvas, Circle, Points},
            Block, Borders, Paragraph,
        },
        Frame, Terminal,
    };
    use std::io;
    use std::time::{Duration, Instant};

    use orrery::render::{self, RenderCommand};
    use orrery::scene::PanelData;
    use orrery::tui::OrreryApp;

    /// Run the TUI application.
    pub fn run(mut app: OrreryApp) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(33);
        let mut last_frame = Instant::now();

        loop {
            terminal.draw(|f| ui(f, &app))?;

            let timeout = tick_rate.saturating_sub(last_frame.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            if app.should_quit {
                break;
            }

            // Real frame delta, like the original per-frame callback.
            let dt = last_frame.elapsed().as_secs_f64();
            last_frame = Instant::now();
            app.update(dt);
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn ui(f: &mut Frame, app: &OrreryApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(6),
                Constraint::Length(3),
            ])
            .split(f.area());

        render_title(f, chunks[0], app);
        render_scene_canvas(f, chunks[1], app);
        render_info_panel(f, chunks[2], app);
        render_status(f, chunks[3], app);
    }

    fn to_tui_color(color: render::Color) -> Color {
        Color::Rgb(color.r, color.g, color.b)
    }

    fn render_title(f: &mut Frame, area: Rect, app: &OrreryApp) {
        let scale = app.system.time_scale();
        let paused = scale == orrery::engine::TimeScale::Pause;

        let title = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                " ORRERY ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                if paused { "[PAUSED]" } else { "[RUNNING]" },
                Style::default().fg(if paused { Color::Yellow } else { Color::Green }),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("Speed: {scale}"),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("Selected: {}", app.selected_name()),
                Style::default().fg(Color::Cyan),
            ),
        ])])
        .block(Block::default().borders(Borders::ALL).title(
            "Controls: [Space] Pause  [1-4] Speed  [Tab] Select  [Enter] Inspect  [Arrows] Probe  [C] Close  [R] Reset  [Q] Quit",
        ));
        f.render_widget(title, area);
    }

    fn render_scene_canvas(f: &mut Frame, area: Rect, app: &OrreryApp) {
        let commands = render::render_scene(&app.system, &app.render);
        let ((x_min, x_max), (y_min, y_max)) = app.render.camera.bounds();

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Scene"))
            .x_bounds([x_min, x_max])
            .y_bounds([y_min, y_max])
            .paint(|ctx| {
                for command in &commands {
                    match command {
                        RenderCommand::OrbitPath { points, color }
                        | RenderCommand::Points { points, color } => {
                            ctx.draw(&Points {
                                coords: points,
                                color: to_tui_color(*color),
                            });
                        }
                        RenderCommand::Disc {
                            x,
                            y,
                            radius,
                            color,
                        } => {
                            ctx.draw(&Circle {
                                x: *x,
                                y: *y,
                                radius: *radius,
                                color: to_tui_color(*color),
                            });
                        }
                        RenderCommand::Ring {
                            x,
                            y,
                            inner_radius,
                            outer_radius,
                            color,
                        } => {
                            ctx.draw(&Circle {
                                x: *x,
                                y: *y,
                                radius: *inner_radius,
                                color: to_tui_color(*color),
                            });
                            ctx.draw(&Circle {
                                x: *x,
                                y: *y,
                                radius: *outer_radius,
                                color: to_tui_color(*color),
                            });
                        }
                        RenderCommand::Label { x, y, text, color } => {
                            ctx.print(
                                *x,
                                *y,
                                Span::styled(
                                    text.clone(),
                                    Style::default().fg(to_tui_color(*color)),
                                ),
                            );
                        }
                        RenderCommand::Clear { .. } | RenderCommand::SetCamera { .. } => {}
                    }
                }
            });

        f.render_widget(canvas, area);
    }

    fn render_info_panel(f: &mut Frame, area: Rect, app: &OrreryApp) {
        let (title, lines) = match &app.panel {
            Some(PanelData::Location(fix)) => (
                "Location Details".to_string(),
                vec![
                    Line::from(format!("Latitude: {:.2}\u{b0}", fix.latitude)),
                    Line::from(format!("Longitude: {:.2}\u{b0}", fix.longitude)),
                    Line::from(vec![
                        Span::raw("Estimated Time: "),
                        Span::styled(
                            fix.local_time.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ]),
                ],
            ),
            Some(PanelData::Body { name, size }) => (
                name.clone(),
                vec![Line::from(format!("Size: {size}x Earth"))],
            ),
            None => (
                "Info".to_string(),
                vec![Line::from(Span::styled(
                    "Press [Enter] to inspect the selected body",
                    Style::default().fg(Color::DarkGray),
                ))],
            ),
        };

        let panel = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(panel, area);
    }

    fn render_status(f: &mut Frame, area: Rect, app: &OrreryApp) {
        let status = Paragraph::new(vec![Line::from(vec![
            Span::styled("Frame: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", app.system.frame_count()),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled("Bodies: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", app.system.planets.len()),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled("Belt: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", app.system.belt.len()),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled("View: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("\u{b1}{:.0}", app.render.camera.extent),
                Style::default().fg(Color::Cyan),
            ),
        ])])
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(status, area);
    }

}
