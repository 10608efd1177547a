// SPDX-License-Identifier: MPL-2.0
use heatpro_profile::app::{self, Flags};
use pico_args;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("heatpro_profile=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        endpoint: args.opt_value_from_str("--endpoint").unwrap(),
    };

    app::run(flags)
}
