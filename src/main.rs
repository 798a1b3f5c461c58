// SPDX-License-Identifier: MPL-2.0
use pathstarter::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
PathStarter - job board for students and early-career candidates

USAGE:
  pathstarter [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --lang <LOCALE>          UI language (e.g. en-US, fr)
  --i18n-dir <DIR>         Directory with custom .ftl translations
  --data-dir <DIR>         Directory for the session and activity reports
  --config-dir <DIR>       Directory for settings.toml

ENVIRONMENT:
  PATHSTARTER_DATA_DIR     Same as --data-dir
  PATHSTARTER_CONFIG_DIR   Same as --config-dir
  RUST_LOG                 Log filter (default: pathstarter=info)
";

fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pathstarter=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    setup_tracing();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
