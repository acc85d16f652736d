// SPDX-License-Identifier: MPL-2.0
use apod_gallery::app::{self, paths, Flags};
use apod_gallery::diagnostics::logger;

const HELP: &str = "\
apod_gallery - Astronomy Picture of the Day gallery

USAGE:
  apod_gallery [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --feed-url <URL>      Dataset URL overriding the configured one
  --start <YYYY-MM-DD>  Start date; fetches at startup
  --end <YYYY-MM-DD>    End date; fetches at startup
  --log-level <LEVEL>   off, error, warn, info, debug or trace
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = optional(&mut args, "--lang");
    let config_dir = optional(&mut args, "--config-dir");
    let feed_url = optional(&mut args, "--feed-url");
    let start = optional(&mut args, "--start");
    let end = optional(&mut args, "--end");
    let log_level = optional(&mut args, "--log-level");

    for extra in args.finish() {
        eprintln!("Ignoring unexpected argument {extra:?}");
    }

    if let Err(err) = logger::init(logger::resolve_level(log_level.as_deref())) {
        eprintln!("Logger already installed: {err}");
    }
    paths::init_cli_overrides(config_dir);

    app::run(Flags {
        lang,
        feed_url,
        start,
        end,
    })
}

fn optional(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        eprintln!("Invalid value for {key}: {err}");
        None
    })
}
