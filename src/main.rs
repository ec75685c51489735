use std::env;
use std::process;

use log::{error, info};

use dlayout::{DLayout, KernelConfig};

fn print_layout(layout: DLayout) {
    println!("{}\t{}\t{}", layout.ordinal(), layout, layout.channel_group());
}

fn main() {
    env_logger::init();

    let config = match KernelConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };
    info!("default layout {} (debug: {})", config.default_layout, config.debug);

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        DLayout::ALL.into_iter().for_each(print_layout);
        return;
    }

    for arg in &args {
        match DLayout::from_name_or_ordinal(arg) {
            Ok(layout) => print_layout(config.resolve(Some(layout))),
            Err(e) => {
                error!("failed to resolve `{arg}`: {e}");
                process::exit(1);
            }
        }
    }
}
