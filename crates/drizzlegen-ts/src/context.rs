use indexmap::{IndexMap, IndexSet};

/// What the generated file needs declared before its first table.
///
/// A context lives for one generation run. Lowering records every symbol it
/// emits a reference to; the preamble is rendered from the context once all
/// declarations are built.
#[derive(Debug, Default)]
pub struct EmitContext {
    /// Symbols imported from `drizzle-orm`
    drizzle_imports: IndexSet<String>,

    /// Symbols imported from the dialect's core module
    core_imports: IndexSet<String>,

    /// Support declarations, keyed by the symbol they define
    constants: IndexMap<String, String>,
}

impl EmitContext {
    pub fn new() -> EmitContext {
        EmitContext::default()
    }

    pub fn import_drizzle(&mut self, symbol: &str) {
        if !self.drizzle_imports.contains(symbol) {
            self.drizzle_imports.insert(symbol.to_string());
        }
    }

    pub fn import_core(&mut self, symbol: &str) {
        if !self.core_imports.contains(symbol) {
            self.core_imports.insert(symbol.to_string());
        }
    }

    /// Registers the support declaration for `key`. The declaration is built
    /// at most once per run.
    pub fn constant(&mut self, key: &str, declaration: impl FnOnce() -> String) {
        if !self.constants.contains_key(key) {
            self.constants.insert(key.to_string(), declaration());
        }
    }

    pub fn drizzle_imports(&self) -> Vec<&str> {
        sorted(&self.drizzle_imports)
    }

    pub fn core_imports(&self) -> Vec<&str> {
        sorted(&self.core_imports)
    }

    /// Support declarations in registration order.
    pub fn constants(&self) -> impl Iterator<Item = &str> {
        self.constants.values().map(String::as_str)
    }
}

/// Case-insensitive order, ties broken by code point.
fn sorted(symbols: &IndexSet<String>) -> Vec<&str> {
    let mut symbols: Vec<_> = symbols.iter().map(String::as_str).collect();
    symbols.sort_by(|lhs, rhs| {
        lhs.to_lowercase()
            .cmp(&rhs.to_lowercase())
            .then_with(|| lhs.cmp(rhs))
    });
    symbols
}
