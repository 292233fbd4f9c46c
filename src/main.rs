// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::app::{self, Flags};
use iced_snackbar::config::paths;
use iced_snackbar::ui::notifications::{Position, QueueStrategy};

const HELP: &str = "\
iced_snackbar

USAGE:
  iced_snackbar [OPTIONS]

OPTIONS:
  -h, --help               Print help information
  --position <ANCHOR>      top-left, top-center, top-right,
                           bottom-left, bottom-center or bottom-right
  --strategy <STRATEGY>    stack, replace-oldest, replace-all or collapse
  --config-dir <PATH>      Directory holding settings.toml
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let (position, strategy, config_dir) = match parse_args(&mut args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            eprint!("{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(config_dir);

    app::run(Flags {
        position: position.map(|raw: String| Position::parse(&raw)),
        strategy: strategy.map(|raw: String| QueueStrategy::parse(&raw)),
    })
}

type ParsedArgs = (Option<String>, Option<String>, Option<String>);

fn parse_args(args: &mut pico_args::Arguments) -> Result<ParsedArgs, pico_args::Error> {
    Ok((
        args.opt_value_from_str("--position")?,
        args.opt_value_from_str("--strategy")?,
        args.opt_value_from_str("--config-dir")?,
    ))
}
