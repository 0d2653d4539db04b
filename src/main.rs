use std::path::PathBuf;

use anyhow::Context;
use clap::Parser as ClapParser;

use native_lib::{
    ClickOutcome, LibrarySource, MessageKind, MessageSurface, SampleConfig, SumActivity,
    TransientMessage,
};

#[derive(ClapParser, Debug)]
#[command(
    name = "addnum",
    version,
    about = "Adds two integers through the native_lib bridge"
)]
struct Cli {
    /// Text for the first number field.
    #[arg(value_name = "FIRST", allow_hyphen_values = true)]
    first: String,
    /// Text for the second number field.
    #[arg(value_name = "SECOND", allow_hyphen_values = true)]
    second: String,
    /// Load add_numbers from this shared library instead of the binary.
    #[arg(long, value_name = "PATH")]
    library: Option<PathBuf>,
    /// Config file. Defaults to the per-user config when present.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Press the trigger this many times.
    #[arg(long, default_value_t = 1)]
    repeat: u32,
}

/// Prints toasts to stdout and validation hints to stderr.
struct ConsoleSurface;

impl MessageSurface for ConsoleSurface {
    fn show(&mut self, message: TransientMessage) {
        match message.kind {
            MessageKind::Result => println!("{}", message.text),
            MessageKind::Validation => eprintln!("{}", message.text),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = SampleConfig::load_or_default(cli.config.as_deref())?;
    let source = match &cli.library {
        Some(path) => LibrarySource::Path(path.clone()),
        None => config.library_source(),
    };

    let mut activity = SumActivity::create_from(&source, &config, ConsoleSurface)
        .context("native library failed to load")?;
    activity.enter_text(&config.first_field(), &cli.first)?;
    activity.enter_text(&config.second_field(), &cli.second)?;

    let trigger = activity.trigger().clone();
    for _ in 0..cli.repeat {
        if activity.click(&trigger)? == ClickOutcome::Rejected {
            break;
        }
    }
    Ok(())
}
