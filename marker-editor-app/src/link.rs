use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use yew::html::Scope;
use yew::BaseComponent;

/// Shared handle to a component's [`Scope`], compared by identity so it can be handed out through
/// a context.
pub struct SharedLink<COMP: BaseComponent> {
    scope: Rc<Scope<COMP>>,
}

impl<COMP: BaseComponent> SharedLink<COMP> {
    pub fn new(scope: Scope<COMP>) -> Self {
        Self {
            scope: Rc::new(scope),
        }
    }
}

impl<COMP: BaseComponent> Clone for SharedLink<COMP> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            scope: Rc::clone(&self.scope),
        }
    }
}

impl<COMP: BaseComponent> fmt::Debug for SharedLink<COMP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedLink<_>")
    }
}

impl<COMP: BaseComponent> PartialEq for SharedLink<COMP> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.scope, &other.scope)
    }
}

impl<COMP: BaseComponent> Deref for SharedLink<COMP> {
    type Target = Scope<COMP>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.scope
    }
}
