//! Headless driver: fetch a node batch, sweep a pointer across the window
//! for a number of ticks, clicking whatever it passes over, and log what
//! the session ended up with.

use std::path::Path;

use notecloud::backend::SharedRecorder;
use notecloud::input::{InputEvent, MouseButton};
use notecloud::options::ViewportLayout;
use notecloud::source::HttpNodeSource;
use notecloud::{Options, Session};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const DEFAULT_TICKS: u32 = 600;

struct Args {
    url: Option<String>,
    options: Option<String>,
    ticks: u32,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        url: None,
        options: None,
        ticks: DEFAULT_TICKS,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--options" => {
                args.options =
                    Some(iter.next().ok_or("--options needs a path")?);
            }
            "--ticks" => {
                let value = iter.next().ok_or("--ticks needs a count")?;
                args.ticks = value
                    .parse()
                    .map_err(|e| format!("bad tick count {value:?}: {e}"))?;
            }
            _ if arg.starts_with("--") => {
                return Err(format!("unknown flag {arg}"));
            }
            _ => args.url = Some(arg),
        }
    }
    Ok(args)
}

fn click(session: &mut Session) {
    for pressed in [true, false] {
        session.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        });
    }
}

fn run(args: Args) -> Result<(), notecloud::CloudError> {
    let options = match &args.options {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    let url = args.url.unwrap_or_else(|| options.source.url.clone());
    let layout = options.display.layout;

    let mut session = Session::new(options, WIDTH, HEIGHT);
    let recorders: Vec<SharedRecorder> = match layout {
        ViewportLayout::Single => vec![SharedRecorder::new()],
        ViewportLayout::SideBySide => {
            vec![SharedRecorder::new(), SharedRecorder::new()]
        }
    };
    for recorder in &recorders {
        let _ = session.add_viewport(recorder.boxed());
    }

    session.begin_loading(Box::new(HttpNodeSource::new(url)))?;
    session.finish_loading();

    let y = HEIGHT as f32 * 0.5;
    for tick in 0..args.ticks {
        let x = WIDTH as f32 * (tick as f32 + 0.5) / args.ticks.max(1) as f32;
        session.handle_input(InputEvent::CursorMoved { x, y });
        if session
            .hovered()
            .is_some_and(|id| !session.selection().is_selected(id))
        {
            click(&mut session);
        }
        let report = session.tick();
        if report.selection_changes > 0 {
            log::info!(
                "tick {tick}: {} selected",
                session.selection().selection_len()
            );
        }
    }

    log::info!(
        "{} nodes, {} selected, {} labels after {} ticks ({:.1} fps)",
        session.store().len(),
        session.selection().selection_len(),
        session.labels().len(),
        args.ticks,
        session.clock().fps()
    );
    for label in session.labels().iter() {
        log::info!("  {} at {:.2}", label.text, label.position);
    }
    for (index, recorder) in recorders.iter().enumerate() {
        let recorded = recorder.snapshot();
        log::info!(
            "viewport {index}: {} frames, {} nodes, {} labels in last frame",
            recorded.frames,
            recorded.last.nodes.len(),
            recorded.last.labels.len()
        );
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!(
                "Usage: notecloud [URL] [--options <file.toml>] [--ticks N]"
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
