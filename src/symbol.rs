//! Interned identity tokens for item kinds, converters and sources.
//!
//! A [`Symbol`] carries no name of its own; two symbols are the same kind iff
//! they are the same token. Tokens come from one process-wide counter, so no
//! two tables ever hand out the same one. Names live in the [`SymbolTable`]
//! that minted them, and interning the same name twice in a table hands back
//! the same token.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SYMBOL: AtomicU64 = AtomicU64::new(0);

/// Opaque identity token minted by a [`SymbolTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u64);

impl Symbol {
    fn mint() -> Self {
        Self(NEXT_SYMBOL.fetch_add(1, Ordering::Relaxed))
    }

    /// Process-wide serial number of this symbol.
    #[inline]
    pub fn index(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Name registry for [`Symbol`]s.
///
/// Keep one table per game world. The same name interned in two tables yields
/// two distinct symbols.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    by_name: HashMap<String, Symbol>,
    names: HashMap<Symbol, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol for `name`, minting a fresh one on first sight.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(sym) = self.by_name.get(name) {
            return *sym;
        }
        let sym = Symbol::mint();
        self.names.insert(sym, name.to_owned());
        self.by_name.insert(name.to_owned(), sym);
        sym
    }

    /// Symbol already minted for `name`, if any. Never mints.
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.by_name.get(name).copied()
    }

    /// Name a symbol was interned under.
    pub fn name(&self, sym: Symbol) -> Option<&str> {
        self.names.get(&sym).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
