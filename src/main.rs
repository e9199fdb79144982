// SPDX-License-Identifier: MPL-2.0

use vitrine::app::{self, paths, Flags};

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("Argument error: {error}");
            std::process::exit(2);
        }
    };

    paths::set_cli_config_dir(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        content_dir: args.opt_value_from_str("--content-dir")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    Ok(flags)
}
