//! Rotator actor: a dedicated thread that owns and drives a rotator.
//!
//! Producers hold a cloneable [`RotatorHandle`] and enqueue messages over a
//! channel; the actor thread sleeps until the rotator's next deadline, wakes
//! for whichever comes first (a new message or a due event), and keeps the
//! single-threaded rotation timeline intact.
//!
//! Dropping every handle does not abort the rotation: the actor drains every
//! queued message and every scheduled event to completion first, then exits.

use super::rotator::Rotator;
use crate::surface::BannerSurface;
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};

/// Producer endpoint for a running [`RotatorActor`].
#[derive(Debug, Clone)]
pub struct RotatorHandle {
    tx: Sender<String>,
}

impl RotatorHandle {
    /// Enqueue a message for display.
    ///
    /// Never blocks. A send after the actor has drained and exited is
    /// silently dropped.
    pub fn show_banner_message(&self, message: impl Into<String>) {
        let _ = self.tx.send(message.into());
    }
}

/// Actor owning a [`Rotator`] on its own thread.
pub struct RotatorActor {
    handle: Option<JoinHandle<()>>,
}

impl RotatorActor {
    /// Spawn the actor thread around `rotator`.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the rotator thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn<S>(rotator: Rotator<S>) -> (Self, RotatorHandle)
    where
        S: BannerSurface + Send + 'static,
    {
        let (tx, rx) = unbounded::<String>();

        let handle = thread::Builder::new()
            .name("marquee-rotator".to_string())
            .spawn(move || {
                Self::run_loop(rotator, &rx);
            })
            .expect("Failed to spawn rotator thread");

        (Self { handle: Some(handle) }, RotatorHandle { tx })
    }

    /// Wait for the actor to drain and exit.
    ///
    /// Returns once all producer handles are dropped and the rotator has
    /// gone idle. Call sites that keep a handle alive will wait forever.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main actor loop.
    fn run_loop<S: BannerSurface>(mut rotator: Rotator<S>, rx: &Receiver<String>) {
        loop {
            match rotator.time_to_next_deadline() {
                Some(timeout) => match rx.recv_timeout(timeout) {
                    Ok(message) => rotator.show_banner_message(message),
                    Err(RecvTimeoutError::Timeout) => rotator.tick(),
                    Err(RecvTimeoutError::Disconnected) => {
                        // Producers are gone; scheduled events still run to
                        // completion.
                        thread::sleep(timeout);
                        rotator.tick();
                    }
                },
                // Idle: nothing scheduled, so only a new message (or the last
                // handle dropping) can wake us.
                None => match rx.recv() {
                    Ok(message) => rotator.show_banner_message(message),
                    Err(_) => break,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::FitOptions;
    use crate::rotate::RotatorConfig;
    use crate::surface::BannerPair;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Debug)]
    struct SharedBanner {
        text: String,
        shown: Arc<Mutex<Vec<String>>>,
    }

    impl BannerSurface for SharedBanner {
        fn set_text(&mut self, text: &str) {
            self.text = text.to_owned();
            self.shown.lock().unwrap().push(text.to_owned());
        }

        fn text(&self) -> &str {
            &self.text
        }

        fn fade_in(&mut self) {}

        fn fade_out(&mut self) {}

        fn refit(&mut self, _options: &FitOptions) {}
    }

    fn fast_rotator() -> (Rotator<SharedBanner>, Arc<Mutex<Vec<String>>>) {
        let shown = Arc::new(Mutex::new(Vec::new()));
        let banners = BannerPair::new(
            SharedBanner {
                text: String::new(),
                shown: shown.clone(),
            },
            SharedBanner {
                text: String::new(),
                shown: shown.clone(),
            },
        );
        let config = RotatorConfig {
            display_duration: Duration::from_millis(15),
            settle_delay: Duration::from_millis(1),
            fit: FitOptions::default(),
        };
        (Rotator::with_config(banners, config), shown)
    }

    #[test]
    fn test_actor_drains_queue_then_exits() {
        let (rotator, shown) = fast_rotator();
        let (actor, handle) = RotatorActor::spawn(rotator);

        handle.show_banner_message("A");
        handle.show_banner_message("B");
        handle.show_banner_message("C");
        drop(handle);

        // join returns only after the drain completes.
        actor.join();
        assert_eq!(*shown.lock().unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_cloned_handles_feed_one_queue() {
        let (rotator, shown) = fast_rotator();
        let (actor, handle) = RotatorActor::spawn(rotator);
        let second = handle.clone();

        handle.show_banner_message("first");
        drop(handle);
        second.show_banner_message("second");
        drop(second);

        actor.join();
        assert_eq!(*shown.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_actor_exits_when_idle_and_disconnected() {
        let (rotator, shown) = fast_rotator();
        let (actor, handle) = RotatorActor::spawn(rotator);
        drop(handle);

        actor.join();
        assert!(shown.lock().unwrap().is_empty());
    }
}
