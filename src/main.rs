// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use iced_gallery::config::{self, paths, StartScreen};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_gallery

USAGE:
  iced_gallery [OPTIONS]

OPTIONS:
  --lang <CODE>         UI language (en-US, fr)
  --screen <NAME>       Start screen (gallery, calculator)
  --config-dir <PATH>   Directory holding settings.toml
  --write-config        Write the effective settings to disk and exit
  -h, --help            Print this help
";

const DEFAULT_LOG_FILTER: &str = "warn,iced_gallery=info";

struct Args {
    flags: Flags,
    config_dir: Option<String>,
    write_config: bool,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        flags: Flags {
            lang: args.opt_value_from_str("--lang")?,
            screen: args.opt_value_from_str::<_, StartScreen>("--screen")?,
        },
        config_dir: args.opt_value_from_str("--config-dir")?,
        write_config: args.contains("--write-config"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(parsed))
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Saves the effective settings, creating the file on first use.
fn write_config(lang: Option<String>) -> std::process::ExitCode {
    let (mut settings, _warning) = config::load();
    if lang.is_some() {
        settings.general.language = lang;
    }
    match config::save(&settings) {
        Ok(()) => {
            if let Some(path) = config::config_file_path() {
                println!("{}", path.display());
            }
            std::process::ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "could not write settings");
            std::process::ExitCode::FAILURE
        }
    }
}

fn main() -> std::process::ExitCode {
    init_tracing();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return std::process::ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return std::process::ExitCode::from(2);
        }
    };

    paths::init_cli_override(args.config_dir);

    if args.write_config {
        return write_config(args.flags.lang);
    }

    match app::run(args.flags) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            std::process::ExitCode::FAILURE
        }
    }
}
