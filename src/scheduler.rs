//! Frame scheduling.
//!
//! A [`ParticleSystem`](crate::ParticleSystem) never drives itself: it asks
//! a [`FrameScheduler`] for the next frame and the host calls
//! [`ParticleSystem::frame`](crate::ParticleSystem::frame) back with the
//! token it was handed. Tokens carry the generation of the `start()` call
//! that issued them, so a frame queued before `stop()` can never revive an
//! old loop alongside a new one.

use std::collections::VecDeque;

/// Identifies the scheduling chain a frame request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub(crate) u64);

impl FrameToken {
    /// Generation of the `start()` call this token belongs to.
    #[inline]
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Requests a callback on the next display refresh.
pub trait FrameScheduler {
    fn request_frame(&mut self, token: FrameToken);
}

/// A scheduler that only queues requests.
///
/// Tests and headless drivers pop tokens and feed them back with
/// synthetic timestamps.
///
/// ```
/// use pixie::{ManualScheduler, ParticleSystem, SystemConfig};
///
/// let mut system: ParticleSystem = ParticleSystem::headless(SystemConfig::default(), Vec::new());
/// let mut scheduler = ManualScheduler::new();
///
/// system.start(&mut scheduler);
/// let token = scheduler.pop().unwrap();
/// assert!(system.frame(token, 0.0, &mut scheduler));
/// assert_eq!(scheduler.pending(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ManualScheduler {
    queue: VecDeque<FrameToken>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest pending request.
    pub fn pop(&mut self) -> Option<FrameToken> {
        self.queue.pop_front()
    }

    /// Number of requests waiting.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self, token: FrameToken) {
        self.queue.push_back(token);
    }
}
