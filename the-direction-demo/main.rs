//! Interactive demo for the direction add-on.
//!
//! Loads the add-on into an in-memory host screen and lets you switch
//! between LTR and RTL while writing sample texts in both directions.

mod app;
mod config;
mod input;
mod render;
mod samples;
mod screen;
mod terminal;

use std::{
  path::PathBuf,
  time::Duration,
};

use clap::{
  ArgAction,
  Parser,
};
use crossterm::event::{
  self,
  Event,
};
use eyre::{
  Result,
  WrapErr,
};
use log::LevelFilter;
use the_direction::Direction;

use crate::{
  app::{
    Action,
    App,
  },
  config::Config,
  terminal::Terminal,
};

#[derive(Debug, Parser)]
#[command(name = "the-direction-demo")]
#[command(about = "Switch a terminal between left-to-right and right-to-left text")]
struct Cli {
  /// Path to the demo config file
  #[arg(long)]
  config: Option<PathBuf>,

  /// Direction to switch to once started (ltr or rtl)
  #[arg(long)]
  direction: Option<Direction>,

  /// Path to the log file
  #[arg(long)]
  log: Option<PathBuf>,

  /// Increase logging verbosity (repeatable)
  #[arg(short, long, action = ArgAction::Count)]
  verbose: u8,
}

fn setup_logging(verbosity: u8, specified_file: Option<PathBuf>) -> Result<()> {
  let level = match verbosity {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  let log_file = match specified_file {
    Some(path) => path,
    None => config::default_log_file()?,
  };
  config::ensure_parent_dir(&log_file)?;

  fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!(
        "{} [{}] {}",
        record.level(),
        record.target(),
        message
      ))
    })
    .level(level)
    .chain(
      fern::log_file(&log_file)
        .wrap_err_with(|| format!("failed to open log file {}", log_file.display()))?,
    )
    .apply()
    .wrap_err("failed to install logger")?;
  Ok(())
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose, cli.log)?;

  let config = Config::load(cli.config.as_deref())?;
  let mut terminal = Terminal::new()?;
  let mut app = App::new(&config, terminal.size()?)?;
  if let Some(direction) = cli.direction {
    app.queue(Action::SetDirection(direction));
    app.run_pending();
  }

  terminal.enter_raw_mode()?;
  let result = run(&mut app, &mut terminal);
  terminal.leave_raw_mode()?;
  app.dispose();

  if let Err(err) = &result {
    log::error!("demo failed: {err:#}");
  }
  result
}

fn run(app: &mut App, terminal: &mut Terminal) -> Result<()> {
  render::render(app, terminal)?;

  loop {
    if app.should_quit {
      break;
    }

    if event::poll(Duration::from_millis(100))? {
      match event::read()? {
        Event::Key(key) => {
          if let Some(action) = input::action_for_key(key) {
            app.queue(action);
          }
        },
        Event::Resize(cols, rows) => app.resize(cols, rows),
        _ => {},
      }
    }

    // Fit reads the viewport, and not every terminal reports resizes.
    app.set_viewport(terminal.size()?);
    app.run_pending();

    if app.take_repaint() {
      render::render(app, terminal)?;
    }
  }

  Ok(())
}
