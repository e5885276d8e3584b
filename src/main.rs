use std::env;
use std::process::exit;

mod registry;
mod tasks;
mod utils;

use utils::TaskResult;

#[macro_use]
extern crate log;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = try_main() {
        log::error!("{}", e);
        exit(1);
    }
}

fn try_main() -> TaskResult<()> {
    let args = env::args().skip(1).collect::<Vec<_>>();

    let registry = tasks::builtin_registry(tasks::DEFAULT_TARGET)?;

    tasks::dispatch(&registry, &args)
}
