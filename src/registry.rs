use crate::command::CommandFactory;
use anyhow::{Result, bail};

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports builtins defined in this crate.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// Ordered table of builtin commands.
///
/// Names are unique and kept in registration order, which is the order `help`
/// prints them in. Lookup is an exact, case-sensitive match on the command name.
pub struct Registry {
    factories: Vec<Box<dyn CommandFactory>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Add a builtin at the end of the table.
    ///
    /// Fails if a builtin with the same name is already registered.
    pub fn register(&mut self, factory: Box<dyn CommandFactory>) -> Result<()> {
        let name = factory.name();
        if self.lookup(name).is_some() {
            bail!("builtin {:?} is already registered", name);
        }
        self.factories.push(factory);
        Ok(())
    }

    /// Find the builtin called `name`.
    pub fn lookup(&self, name: &str) -> Option<&dyn CommandFactory> {
        self.factories
            .iter()
            .find(|factory| factory.name() == name)
            .map(|factory| factory.as_ref())
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.factories.iter().map(|factory| factory.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for Registry {
    /// The shell's builtins: `cd`, `help`, `exit`.
    fn default() -> Self {
        use crate::builtin::*;
        let mut registry = Self::new();
        for factory in [
            Box::new(Factory::<Cd>::default()) as Box<dyn CommandFactory>,
            Box::new(Factory::<Help>::default()),
            Box::new(Factory::<Exit>::default()),
        ] {
            let registered = registry.register(factory);
            debug_assert!(registered.is_ok(), "default builtin names are unique");
        }
        registry
    }
}
