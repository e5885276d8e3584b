use std::io::{self, Write};

use crate::registry::Registry;
use crate::tasks::Task;
use crate::utils::TaskResult;

pub struct HelpTask;

impl Task for HelpTask {
    fn execute(&self, registry: &Registry) -> TaskResult<()> {
        let stdout = io::stdout();
        write_listing(registry, &mut stdout.lock())
    }
}

/// One line per target, in registration order, after a fixed header.
pub fn write_listing(registry: &Registry, w: &mut impl Write) -> TaskResult<()> {
    writeln!(w, "Available targets:")?;
    for (name, description) in registry.list() {
        writeln!(w, "  - {}: {}.", name, description)?;
    }
    Ok(())
}
