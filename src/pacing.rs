use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::session::{Scroll, Session, SessionError};

/// Blocking delay drawn uniformly from `[min, max]`.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    min: Duration,
    max: Duration,
}

impl Pacer {
    pub fn new(min: Duration, max: Duration) -> Self {
        if max < min {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    pub fn fixed(delay: Duration) -> Self {
        Self::new(delay, delay)
    }

    #[cfg(test)]
    pub fn none() -> Self {
        Self::fixed(Duration::ZERO)
    }

    pub fn next_delay(&self) -> Duration {
        let lo = self.min.as_millis() as u64;
        let hi = self.max.as_millis() as u64;
        Duration::from_millis(fastrand::u64(lo..=hi))
    }

    pub fn pause(&self) {
        let delay = self.next_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// Reveals lazily loaded listing content: a fixed number of page-down scrolls,
/// each followed by a paced delay.
#[derive(Debug, Clone, Copy)]
pub struct LazyLoader {
    steps: usize,
    pacer: Pacer,
}

impl LazyLoader {
    pub fn new(steps: usize, pacer: Pacer) -> Self {
        Self { steps, pacer }
    }

    pub fn run<S: Session + ?Sized>(&self, session: &mut S) -> Result<(), SessionError> {
        debug!("Lazy loading: {} scroll steps", self.steps);
        for _ in 0..self.steps {
            session.scroll(Scroll::PageDown)?;
            self.pacer.pause();
        }
        Ok(())
    }
}
