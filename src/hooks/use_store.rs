// ============================================================================
// USE STORE - Rc<RefCell> state with explicit re-render
// ============================================================================
// Async callbacks always see the latest value, unlike a `UseStateHandle`
// captured before an await.
// ============================================================================

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use yew::prelude::*;

pub struct StoreHandle<T> {
    inner: Rc<RefCell<T>>,
    refresh: UseForceUpdateHandle,
}

impl<T> Clone for StoreHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            refresh: self.refresh.clone(),
        }
    }
}

impl<T> StoreHandle<T> {
    pub fn get(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    /// Mutates the store and schedules a re-render
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.inner.borrow_mut());
        self.refresh.force_update();
        result
    }
}

impl<T: Clone> StoreHandle<T> {
    pub fn snapshot(&self) -> T {
        self.inner.borrow().clone()
    }
}

#[hook]
pub fn use_store<T, F>(init: F) -> StoreHandle<T>
where
    T: 'static,
    F: FnOnce() -> T,
{
    let inner = use_mut_ref(init);
    let refresh = use_force_update();
    StoreHandle { inner, refresh }
}
