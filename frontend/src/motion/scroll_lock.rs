//! Page-level scroll suppression shared by every scroll-jacked section.

use std::cell::Cell;
use std::rc::Rc;

/// Whatever actually stops the page from scrolling.
pub trait ScrollHost {
    fn set_page_scroll_suppressed(&self, suppressed: bool);
}

/// Toggles `overflow: hidden` on the document body.
pub struct DocumentScrollHost;

impl ScrollHost for DocumentScrollHost {
    fn set_page_scroll_suppressed(&self, suppressed: bool) {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };
        let style = body.style();
        let result = if suppressed {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if result.is_err() {
            log::warn!("could not toggle page scroll lock");
        }
    }
}

/// Reference-counted lock: the page stays unscrollable while at least one
/// [`ScrollLockGuard`] is alive.
pub struct ScrollLock {
    holders: Cell<usize>,
    host: Box<dyn ScrollHost>,
}

impl ScrollLock {
    pub fn new(host: impl ScrollHost + 'static) -> Rc<Self> {
        Rc::new(Self {
            holders: Cell::new(0),
            host: Box::new(host),
        })
    }

    pub fn acquire(self: &Rc<Self>) -> ScrollLockGuard {
        let holders = self.holders.get() + 1;
        self.holders.set(holders);
        if holders == 1 {
            self.host.set_page_scroll_suppressed(true);
        }
        ScrollLockGuard {
            lock: Rc::clone(self),
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.holders.get() > 0
    }

    pub fn holders(&self) -> usize {
        self.holders.get()
    }

    fn release(&self) {
        let holders = self.holders.get().saturating_sub(1);
        self.holders.set(holders);
        if holders == 0 {
            self.host.set_page_scroll_suppressed(false);
        }
    }
}

pub struct ScrollLockGuard {
    lock: Rc<ScrollLock>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.release();
    }
}

thread_local! {
    static DOCUMENT_LOCK: Rc<ScrollLock> = ScrollLock::new(DocumentScrollHost);
}

/// The lock guarding the real document body.
pub fn document_lock() -> Rc<ScrollLock> {
    DOCUMENT_LOCK.with(Rc::clone)
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingHost;
    use super::*;

    #[test]
    fn first_holder_locks_and_last_unlocks() {
        let host = RecordingHost::default();
        let lock = ScrollLock::new(host.clone());

        let a = lock.acquire();
        let b = lock.acquire();
        assert_eq!(lock.holders(), 2);
        assert_eq!(*host.calls.borrow(), vec![true]);

        drop(a);
        assert!(lock.is_engaged());
        drop(b);
        assert!(!lock.is_engaged());
        assert_eq!(*host.calls.borrow(), vec![true, false]);
    }

    #[test]
    fn relocking_after_release_toggles_again() {
        let host = RecordingHost::default();
        let lock = ScrollLock::new(host.clone());
        drop(lock.acquire());
        drop(lock.acquire());
        assert_eq!(*host.calls.borrow(), vec![true, false, true, false]);
    }
}
