//! Carousel rotation state and its auto-advance timer.
//!
//! The hero banner and the testimonials strip are both single-timer
//! carousels: a fixed-interval rotation that must stop when the owning
//! view goes away, and must restart after manual navigation so a timer
//! tick never lands right behind a click.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Hero banner rotation interval.
pub const HERO_ROTATION: Duration = Duration::from_secs(5);

/// Testimonials rotation interval.
pub const TESTIMONIALS_ROTATION: Duration = Duration::from_secs(8);

/// Slide cursor over a fixed number of slides, wrapping both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Advance one slide, wrapping to the first after the last.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Go back one slide, wrapping to the last before the first.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = if self.current == 0 {
                self.len - 1
            } else {
                self.current - 1
            };
        }
    }

    /// Jump to a slide; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }
}

/// Auto-advancing wrapper around a [`Carousel`].
///
/// While running, a tokio interval task advances the shared cursor every
/// `period`. Manual navigation goes through [`advance_now`] /
/// [`rewind_now`] / [`select_now`], which restart the interval so the
/// next automatic tick is a full period away. The task is aborted on
/// [`stop`] and on drop.
///
/// [`advance_now`]: AutoAdvance::advance_now
/// [`rewind_now`]: AutoAdvance::rewind_now
/// [`select_now`]: AutoAdvance::select_now
/// [`stop`]: AutoAdvance::stop
#[derive(Debug)]
pub struct AutoAdvance {
    carousel: Arc<Mutex<Carousel>>,
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl AutoAdvance {
    /// Wrap a carousel; the timer is not started yet.
    pub fn new(carousel: Carousel, period: Duration) -> Self {
        Self {
            carousel: Arc::new(Mutex::new(carousel)),
            period,
            task: None,
        }
    }

    /// Start (or restart) the interval task.
    pub fn start(&mut self) {
        self.abort_task();
        let carousel = Arc::clone(&self.carousel);
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first interval tick resolves immediately; skip it so
            // the first advance happens a full period from now.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                lock(&carousel).next();
            }
        }));
    }

    /// Stop the timer. The cursor stays where it is.
    pub fn stop(&mut self) {
        self.abort_task();
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn current(&self) -> usize {
        lock(&self.carousel).current()
    }

    /// Manual "next": advance immediately and push the timer back.
    pub fn advance_now(&mut self) {
        lock(&self.carousel).next();
        self.restart_if_running();
    }

    /// Manual "previous".
    pub fn rewind_now(&mut self) {
        lock(&self.carousel).prev();
        self.restart_if_running();
    }

    /// Manual jump (dot indicators).
    pub fn select_now(&mut self, index: usize) {
        lock(&self.carousel).select(index);
        self.restart_if_running();
    }

    fn restart_if_running(&mut self) {
        if self.task.is_some() {
            self.start();
        }
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.abort_task();
    }
}

fn lock<'a>(carousel: &'a Arc<Mutex<Carousel>>) -> MutexGuard<'a, Carousel> {
    carousel.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_forward() {
        let mut c = Carousel::new(3);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_prev_wraps_backward() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn test_select_is_bounds_checked() {
        let mut c = Carousel::new(3);
        c.select(2);
        assert_eq!(c.current(), 2);
        c.select(7);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        assert_eq!(c.current(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_ticks_once_per_period() {
        let mut auto = AutoAdvance::new(Carousel::new(4), Duration::from_secs(5));
        auto.start();

        tokio::time::sleep(Duration::from_millis(5_100)).await;
        assert_eq!(auto.current(), 1);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(auto.current(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_navigation_resets_the_timer() {
        let mut auto = AutoAdvance::new(Carousel::new(4), Duration::from_secs(5));
        auto.start();

        // 4s in, click "next": cursor moves and the interval restarts.
        tokio::time::sleep(Duration::from_secs(4)).await;
        auto.advance_now();
        assert_eq!(auto.current(), 1);

        // 2s later the old tick would have fired; the restarted one must not.
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(auto.current(), 1);

        tokio::time::sleep(Duration::from_millis(3_100)).await;
        assert_eq!(auto.current(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_rotation() {
        let mut auto = AutoAdvance::new(Carousel::new(3), Duration::from_secs(5));
        auto.start();
        assert!(auto.is_running());

        auto.stop();
        assert!(!auto.is_running());
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(auto.current(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_navigation_without_timer_does_not_start_it() {
        let mut auto = AutoAdvance::new(Carousel::new(3), Duration::from_secs(5));
        auto.advance_now();
        assert_eq!(auto.current(), 1);
        assert!(!auto.is_running());
    }
}
