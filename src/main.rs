use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use make_help::config;
use make_help::{HelpRenderer, HelpView, JsonNodeParser};

/// Render help for build targets
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Render help for build targets from their doc comments"
)]
struct Args {
    /// Node stream file (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Show the full description of every target
    #[arg(short = 'v', long, visible_alias = "verbose", conflicts_with = "target")]
    long: bool,

    /// Show the full description of a single target
    #[arg(short, long, value_name = "NAME")]
    target: Option<String>,

    /// Directory searched for included files
    #[arg(long, value_name = "DIR")]
    include_dir: Option<PathBuf>,
}

impl Args {
    fn view(&self) -> HelpView {
        match (&self.target, self.long) {
            (Some(target), _) => HelpView::Target(target.clone()),
            (None, true) => HelpView::AllLong,
            (None, false) => HelpView::AllShort,
        }
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/make-help-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        eprintln!("make-help: {}", warning);
    }

    let args = Args::parse();

    let include_dir = args
        .include_dir
        .clone()
        .unwrap_or(config_result.config.parser.include_dir);
    let renderer = HelpRenderer::new(JsonNodeParser).with_include_dir(include_dir);

    let mut reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).wrap_err_with(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    renderer.render(&args.view(), &mut reader, &mut writer)?;
    writer.flush()?;

    #[cfg(debug_assertions)]
    log::debug!("=== MAKE-HELP DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::time::SystemTime;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/make-help-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== MAKE-HELP DEBUG SESSION STARTED ===");
}
