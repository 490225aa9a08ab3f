//! Name → function registry for the standard library.

use std::collections::BTreeMap;

use prf_eval::{PrfError, Result};
use tracing::debug;

use crate::fibonacci::Fib;
use crate::function::Function;
use crate::pairing::{pair, Fst, Snd};
use crate::{arithmetic, division, predicates};

/// A registered function with its one-line description.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub description: String,
    pub function: Function,
}

/// Registry mapping names to library functions, ordered by name.
#[derive(Debug, Default)]
pub struct Library {
    entries: BTreeMap<String, Entry>,
}

impl Library {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every standard library function.
    pub fn standard() -> Result<Self> {
        let mut lib = Self::new();
        lib.register_arithmetic()?;
        lib.register_predicates()?;
        lib.register_division()?;
        lib.register_pairing()?;
        debug!(functions = lib.len(), "standard library registered");
        Ok(lib)
    }

    /// Register `function` under `name`, replacing any previous entry.
    pub fn register(
        &mut self,
        name: &str,
        description: &str,
        function: impl Into<Function>,
    ) -> &mut Self {
        self.entries.insert(
            name.to_string(),
            Entry {
                name: name.to_string(),
                description: description.to_string(),
                function: function.into(),
            },
        );
        self
    }

    /// Look up a function by name.
    pub fn get(&self, name: &str) -> Result<&Entry> {
        self.entries
            .get(name)
            .ok_or_else(|| PrfError::UnknownFunction {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over all entries in name order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ──────────────────────────────────────────────────────────────────────
    // Registration helpers
    // ──────────────────────────────────────────────────────────────────────

    fn register_arithmetic(&mut self) -> Result<()> {
        self.register("add", "add(a, b) = a + b", arithmetic::add()?)
            .register("mult", "mult(a, b) = a * b", arithmetic::mult()?)
            .register("pred", "pred(n) = max(n - 1, 0)", arithmetic::pred()?)
            .register("monus", "monus(a, b) = max(a - b, 0)", arithmetic::monus()?)
            .register("factorial", "factorial(n) = n!", arithmetic::factorial()?)
            .register("exp", "exp(b, n) = b^n", arithmetic::exp()?)
            .register("double", "double(n) = 2n", arithmetic::double()?)
            .register("square", "square(n) = n^2", arithmetic::square()?)
            .register("tri", "tri(n) = 0 + 1 + ... + n", arithmetic::tri()?);
        Ok(())
    }

    fn register_predicates(&mut self) -> Result<()> {
        self.register("sg", "sg(n) = 1 if n > 0, else 0", predicates::sg()?)
            .register("sg_bar", "sg_bar(n) = 1 if n = 0, else 0", predicates::sg_bar()?)
            .register("is_zero", "is_zero(n) = 1 if n = 0, else 0", predicates::is_zero()?)
            .register("eq", "eq(a, b) = 1 if a = b, else 0", predicates::eq()?)
            .register("leq", "leq(a, b) = 1 if a <= b, else 0", predicates::leq()?)
            .register("lt", "lt(a, b) = 1 if a < b, else 0", predicates::lt()?);
        Ok(())
    }

    fn register_division(&mut self) -> Result<()> {
        self.register("div", "div(a, b) = floor(a / b), div(a, 0) = 0", division::div()?)
            .register("rem", "rem(a, b) = a mod b, rem(a, 0) = a", division::rem()?)
            .register(
                "divides",
                "divides(d, n) = 1 if d divides n, else 0",
                division::divides()?,
            );
        Ok(())
    }

    fn register_pairing(&mut self) -> Result<()> {
        self.register("pair", "pair(a, b) = tri(a + b) + b (Cantor pairing)", pair()?)
            .register("fst", "fst(pair(a, b)) = a", Fst::new()?)
            .register("snd", "snd(pair(a, b)) = b", Snd::new()?)
            .register("fib", "fib(n) = n-th Fibonacci number", Fib::new()?);
        Ok(())
    }
}
