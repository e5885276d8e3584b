use crate::registry::Registry;
use crate::utils::TaskResult;

pub mod check;
pub mod help;

pub use check::{ProbeTarget, DEFAULT_TARGET};

/// A runnable target. The registry is passed in so tasks like `help` can
/// enumerate their siblings; most tasks ignore it.
pub trait Task {
    fn execute(&self, registry: &Registry) -> TaskResult<()>;
}

/// The fixed target table. Descriptions are stored without a trailing
/// period; the help listing appends it.
pub fn builtin_registry(target: ProbeTarget) -> TaskResult<Registry> {
    let mut registry = Registry::new();
    registry.register(
        "help",
        "Display this help message",
        Box::new(help::HelpTask),
    )?;
    registry.register(
        "check",
        "Runs a request including headers to our server",
        Box::new(check::CheckTask::new(target)),
    )?;
    Ok(registry)
}

/// Resolve the requested target and run it. An empty argv defaults to
/// `help`; arguments past the first are ignored.
pub fn dispatch(registry: &Registry, argv: &[String]) -> TaskResult<()> {
    let name = argv.first().map(String::as_str).unwrap_or("help");
    registry.resolve(name)?.execute(registry)
}
