// SPDX-License-Identifier: MPL-2.0
use iced_collage::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        files: args
            .finish()
            .into_iter()
            .map(PathBuf::from)
            .collect(),
    };

    app::run(flags)
}
