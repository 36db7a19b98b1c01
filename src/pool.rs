//! Shared free list of retired particles.
//!
//! Emitters acquire records on emission and release them on expiry. A
//! single pool is usually shared by every emitter in a system, but tests
//! and isolated demos can hand each emitter its own.
//!
//! ```
//! use pixie::ParticlePool;
//!
//! let pool = ParticlePool::shared();
//! let p = pool.borrow_mut().acquire();
//! pool.borrow_mut().release(p);
//! assert_eq!(pool.borrow().free(), 1);
//! assert_eq!(pool.borrow().allocated(), 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::particle::Particle;

/// Handle to a pool shared between emitters.
///
/// The simulation is single-threaded, so the handle is an `Rc`; a pool
/// cannot be moved to another thread without wrapping it in a lock.
pub type PoolHandle = Rc<RefCell<ParticlePool>>;

/// Free list of particle records.
#[derive(Debug, Default)]
pub struct ParticlePool {
    free: Vec<Particle>,
    allocated: usize,
}

impl ParticlePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty pool behind a shareable handle.
    pub fn shared() -> PoolHandle {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Take a retired record, or allocate a fresh one if none are free.
    pub fn acquire(&mut self) -> Particle {
        match self.free.pop() {
            Some(particle) => particle,
            None => {
                self.allocated += 1;
                Particle::default()
            }
        }
    }

    /// Return a record for reuse.
    pub fn release(&mut self, particle: Particle) {
        self.free.push(particle);
    }

    /// Number of records waiting to be reused.
    #[inline]
    pub fn free(&self) -> usize {
        self.free.len()
    }

    /// Number of records ever allocated by this pool.
    #[inline]
    pub fn allocated(&self) -> usize {
        self.allocated
    }
}
