// SPDX-License-Identifier: MPL-2.0
use swipe_toast::app::{self, Flags};
use swipe_toast::config::{self, paths};
use swipe_toast::domain::toast::Direction;
use swipe_toast::logging;

const HELP: &str = "\
Swipe Toast demo

USAGE:
  swipe_toast [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --config-dir <DIR>       Read and write settings.toml in DIR
  --direction <SIDE>       Side toasts enter from: left, right, up, down
  --threshold <PX>         Release distance that dismisses a toast
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        eprintln!("Invalid --config-dir: {err}");
        None
    });
    let direction: Option<Direction> = args.opt_value_from_str("--direction").unwrap_or_else(|err| {
        eprintln!("Invalid --direction: {err}");
        None
    });
    let threshold: Option<f32> = args.opt_value_from_str("--threshold").unwrap_or_else(|err| {
        eprintln!("Invalid --threshold: {err}");
        None
    });

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_override(config_dir);
    let (config, config_warning) = config::load();
    logging::init(config.general.log_level.as_deref());

    let flags = Flags {
        direction,
        threshold,
    };
    tracing::debug!(?flags, "starting demo");
    app::run(flags, config, config_warning)
}
