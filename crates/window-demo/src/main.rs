// File: crates/window-demo/src/main.rs
// Summary: Windowed viewer that renders plots to RGBA and blits them via winit + softbuffer.
// Space or a left click shows the next plot; the window closes after the last one.

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use plot_core::{color, RenderOptions};
use quickplot_demo::{gallery, load_xy_csv, Figure, FigureTrace};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
#[command(name = "quickplot-window", about = "Show plots in a window, one after another")]
struct Cli {
    /// CSV file to plot instead of the gallery (columns 0 and 1)
    csv: Option<PathBuf>,

    #[arg(long, default_value = "paper")]
    theme: String,

    #[arg(long)]
    nice_x: bool,
}

/// Which figure is on screen.
struct Session {
    figures: Vec<Figure>,
    current: usize,
}

impl Session {
    fn figure(&self) -> Option<&Figure> {
        self.figures.get(self.current)
    }

    /// Move on; false once every figure has been shown.
    fn advance(&mut self) -> bool {
        self.current += 1;
        self.current < self.figures.len()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    let figures = match &cli.csv {
        Some(path) => {
            let (x, y) = load_xy_csv(path, 0, 1, true)?;
            vec![Figure::new("csv", path.display().to_string()).with_trace(FigureTrace::new(x, y, color::BLUE))]
        }
        None => gallery(),
    };
    let mut session = Session { figures, current: 0 };
    let base = RenderOptions { theme: color::find(&cli.theme), nice_x: cli.nice_x, ..RenderOptions::default() };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(session.figure().map(|f| f.title.as_str()).unwrap_or("quickplot"))
        .with_inner_size(winit::dpi::PhysicalSize::new(base.width as u32, base.height as u32))
        .build(&event_loop)
        .context("building window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(_) => window.request_redraw(),
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape => *cf = ControlFlow::Exit,
                    VirtualKeyCode::Space => next(&mut session, &window, cf),
                    _ => {}
                },
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    next(&mut session, &window, cf)
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                let Some(fig) = session.figure() else { return };
                let options = RenderOptions { width: w.get() as i32, height: h.get() as i32, ..base.clone() };
                if let Err(e) = surface.resize(w, h) {
                    warn!("resize failed: {e}");
                    return;
                }
                let rgba = match fig.plot(options).render_to_rgba8() {
                    Ok((rgba, ..)) => rgba,
                    Err(e) => {
                        warn!("render failed: {e}");
                        return;
                    }
                };
                let mut frame = match surface.buffer_mut() {
                    Ok(frame) => frame,
                    Err(e) => {
                        warn!("no frame buffer: {e}");
                        return;
                    }
                };
                for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
                    let (r, g, b, a) = (px[0] as u32, px[1] as u32, px[2] as u32, px[3] as u32);
                    *dst = (a << 24) | (r << 16) | (g << 8) | b;
                }
                if let Err(e) = frame.present() {
                    warn!("present failed: {e}");
                }
            }
            _ => {}
        }
    });
}

fn next(session: &mut Session, window: &winit::window::Window, cf: &mut ControlFlow) {
    if !session.advance() {
        info!("last plot shown");
        *cf = ControlFlow::Exit;
        return;
    }
    if let Some(fig) = session.figure() {
        info!(figure = fig.name, "showing");
        window.set_title(&fig.title);
    }
    window.request_redraw();
}
