use crate::tasks::Task;
use crate::utils::{TaskError, TaskResult};

/// One named target: a description for the help listing and the action to run.
pub struct CommandEntry {
    name: String,
    description: String,
    action: Box<dyn Task>,
}

/// Ordered table of targets. Built once at startup, read-only afterwards.
/// Insertion order is preserved so the help listing is deterministic.
#[derive(Default)]
pub struct Registry {
    entries: Vec<CommandEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Names are unique keys; registering a name twice is an error.
    pub fn register(
        &mut self,
        name: &str,
        description: &str,
        action: Box<dyn Task>,
    ) -> TaskResult<()> {
        if self.entries.iter().any(|e| e.name == name) {
            return Err(TaskError::DuplicateTask(name.to_string()));
        }
        self.entries.push(CommandEntry {
            name: name.to_string(),
            description: description.to_string(),
            action,
        });
        Ok(())
    }

    /// (name, description) pairs in registration order.
    pub fn list(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.description.as_str()))
    }

    /// Case-sensitive exact-match lookup.
    pub fn resolve(&self, name: &str) -> TaskResult<&dyn Task> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.action.as_ref())
            .ok_or_else(|| TaskError::UnknownTarget(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct RecordingTask {
        runs: Rc<Cell<u32>>,
    }

    impl Task for RecordingTask {
        fn execute(&self, _registry: &Registry) -> TaskResult<()> {
            self.runs.set(self.runs.get() + 1);
            Ok(())
        }
    }

    fn recording(runs: &Rc<Cell<u32>>) -> Box<dyn Task> {
        Box::new(RecordingTask {
            runs: Rc::clone(runs),
        })
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let runs = Rc::new(Cell::new(0));
        let mut registry = Registry::new();
        registry.register("b", "second", recording(&runs)).unwrap();
        registry.register("a", "first", recording(&runs)).unwrap();

        let listed: Vec<_> = registry.list().collect();
        assert_eq!(listed, vec![("b", "second"), ("a", "first")]);
    }

    #[test]
    fn test_register_rejects_duplicate_name() {
        let runs = Rc::new(Cell::new(0));
        let mut registry = Registry::new();
        registry.register("check", "probe", recording(&runs)).unwrap();

        let err = registry
            .register("check", "probe again", recording(&runs))
            .unwrap_err();
        assert!(matches!(err, TaskError::DuplicateTask(ref name) if name == "check"));

        // Failed registration must not disturb the listing.
        assert_eq!(registry.list().count(), 1);
    }

    #[test]
    fn test_resolve_is_case_sensitive_exact_match() {
        let runs = Rc::new(Cell::new(0));
        let mut registry = Registry::new();
        registry.register("check", "probe", recording(&runs)).unwrap();

        assert!(registry.resolve("check").is_ok());
        assert!(matches!(
            registry.resolve("Check"),
            Err(TaskError::UnknownTarget(_))
        ));
        assert!(matches!(
            registry.resolve("chec"),
            Err(TaskError::UnknownTarget(_))
        ));
    }

    #[test]
    fn test_resolve_returns_the_bound_action() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut registry = Registry::new();
        registry.register("one", "", recording(&first)).unwrap();
        registry.register("two", "", recording(&second)).unwrap();

        registry.resolve("two").unwrap().execute(&registry).unwrap();

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }
}
