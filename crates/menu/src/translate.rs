//! Translation collaborator boundary.

/// Title translation lookup.
///
/// `None` means "no translation for this key"; the processor then keeps the
/// node's original title. Implementations must not fail.
pub trait Translate {
    fn translate(&self, key: &str) -> Option<String>;
}

impl<F> Translate for F
where
    F: Fn(&str) -> Option<String>,
{
    fn translate(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Identity translator: every lookup misses.
pub struct NoTranslation;

impl Translate for NoTranslation {
    fn translate(&self, _key: &str) -> Option<String> {
        None
    }
}
