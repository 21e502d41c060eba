use std::collections::HashMap;

use inkwell::values::PointerValue;

/// Maps variable names to their stack slots for one compilation pass.
///
/// There is a single flat scope: an insert overwrites any prior binding
/// for the same name, and entries are never removed.
#[derive(Debug, Default)]
pub struct SymbolTable<'ctx> {
    slots: HashMap<String, PointerValue<'ctx>>,
}

impl<'ctx> SymbolTable<'ctx> {
    pub fn new() -> Self {
        SymbolTable {
            slots: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, slot: PointerValue<'ctx>) {
        self.slots.insert(name.into(), slot);
    }

    /// Returns the slot bound to `name`, or `None` if it was never declared.
    pub fn lookup(&self, name: &str) -> Option<PointerValue<'ctx>> {
        self.slots.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
