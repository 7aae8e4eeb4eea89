use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::core::data::viewport::Viewport;

/// State shared by the render loop and the input loop for one session.
///
/// The viewport is only reachable through its lock, so readers always see
/// all four bounds from the same update. Termination is one-shot: once
/// fired it stays fired and wakes anything waiting on it.
#[derive(Debug)]
pub struct Session {
    viewport: Mutex<Viewport>,
    terminated: Mutex<bool>,
    wake: Condvar,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl Session {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport: Mutex::new(viewport),
            terminated: Mutex::new(false),
            wake: Condvar::new(),
        }
    }

    /// Consistent copy of the current bounds.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        *self.lock_viewport()
    }

    /// Applies `update` while holding the viewport lock and returns the result.
    pub fn update_viewport(&self, update: impl FnOnce(&mut Viewport)) -> Viewport {
        let mut guard = self.lock_viewport();
        update(&mut guard);
        *guard
    }

    pub fn terminate(&self) {
        let mut terminated = self.lock_terminated();
        *terminated = true;
        self.wake.notify_all();
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        *self.lock_terminated()
    }

    /// Sleeps for up to `timeout`, returning early with `true` if the
    /// session terminates meanwhile.
    pub fn wait_for_termination(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut terminated = self.lock_terminated();

        while !*terminated {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }

            terminated = self
                .wake
                .wait_timeout(terminated, remaining)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }

        true
    }

    fn lock_viewport(&self) -> MutexGuard<'_, Viewport> {
        self.viewport.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_terminated(&self) -> MutexGuard<'_, bool> {
        self.terminated.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::ZoomDirection;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_with_given_viewport_and_running() {
        let viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0);
        let session = Session::new(viewport);

        assert_eq!(session.viewport(), viewport);
        assert!(!session.is_terminated());
    }

    #[test]
    fn test_update_returns_new_bounds() {
        let session = Session::default();

        let updated = session.update_viewport(|viewport| viewport.zoom(ZoomDirection::In));

        assert_eq!(updated, session.viewport());
        assert_ne!(updated, Viewport::default());
    }

    #[test]
    fn test_terminate_is_sticky() {
        let session = Session::default();

        session.terminate();
        session.terminate();

        assert!(session.is_terminated());
        assert!(session.wait_for_termination(Duration::from_secs(5)));
    }

    #[test]
    fn test_wait_times_out_while_running() {
        let session = Session::default();
        let start = Instant::now();

        let terminated = session.wait_for_termination(Duration::from_millis(20));

        assert!(!terminated);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_terminate_wakes_waiter_early() {
        let session = Arc::new(Session::default());
        let waiter_session = Arc::clone(&session);

        let waiter = thread::spawn(move || {
            let start = Instant::now();
            let terminated = waiter_session.wait_for_termination(Duration::from_secs(30));
            (terminated, start.elapsed())
        });

        thread::sleep(Duration::from_millis(20));
        session.terminate();

        let (terminated, waited) = waiter.join().expect("waiter thread should not panic");
        assert!(terminated);
        assert!(waited < Duration::from_secs(30));
    }

    #[test]
    fn test_concurrent_updates_are_never_torn() {
        let session = Arc::new(Session::default());
        let writer_session = Arc::clone(&session);

        let writer = thread::spawn(move || {
            for _ in 0..1000 {
                writer_session.update_viewport(|viewport| {
                    viewport.zoom(ZoomDirection::In);
                    viewport.reset();
                });
            }
        });

        for _ in 0..1000 {
            assert_eq!(session.viewport(), Viewport::default());
        }

        writer.join().expect("writer thread should not panic");
    }
}
