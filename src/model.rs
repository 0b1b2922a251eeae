use std::fmt;
use std::path::Path;
use std::rc::Rc;

use crate::parse::load_safe_from_file;
use crate::safe::{Safe, VerifyFailure};

/// Synchronous observer invoked after every mutating or verifying operation.
/// Must not itself mutate the model.
pub type Listener = Rc<dyn Fn(&SafeModel)>;

/// The presentation-facing wrapper around a [`Safe`]: carries the
/// human-readable status string set by each operation and notifies a
/// registered listener after every change.
pub struct SafeModel {
    safe: Safe,
    status: String,
    last_failure: Option<VerifyFailure>,
    listener: Option<Listener>,
}

impl SafeModel {
    #[inline]
    pub fn new(safe: Safe) -> Self {
        Self {
            safe,
            status: String::new(),
            last_failure: None,
            listener: None,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        Ok(Self::new(load_safe_from_file(path)?))
    }

    #[inline]
    pub fn safe(&self) -> &Safe {
        &self.safe
    }

    /// Register the listener. There is at most one; registering replaces any
    /// previous one.
    #[inline]
    pub fn set_listener(&mut self, listener: Listener) {
        self.listener = Some(listener);
    }

    /// Human-readable outcome of the most recent operation.
    #[inline]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Coordinate and cause of the most recent failed verification.
    #[inline]
    pub fn last_failure(&self) -> Option<VerifyFailure> {
        self.last_failure
    }

    /// Add a laser at (r, c). Out-of-range or occupied targets leave the grid
    /// unchanged and report through the status string.
    pub fn add(&mut self, r: usize, c: usize) -> bool {
        let ok = self.safe.place_laser(r, c).is_ok();
        self.status = if ok {
            format!("Laser added at: ({r}, {c})")
        } else {
            format!("Error adding laser at: ({r}, {c})")
        };
        self.announce();
        ok
    }

    /// Remove the laser at (r, c). Out-of-range or laser-free targets leave
    /// the grid unchanged and report through the status string.
    pub fn remove(&mut self, r: usize, c: usize) -> bool {
        let ok = self.safe.remove_laser(r, c).is_ok();
        self.status = if ok {
            format!("Laser removed at: ({r}, {c})")
        } else {
            format!("Error removing laser at: ({r}, {c})")
        };
        self.announce();
        ok
    }

    /// Verify the whole safe, reporting the first offending coordinate on
    /// failure.
    pub fn verify(&mut self) -> bool {
        match self.safe.verify() {
            Ok(()) => {
                self.last_failure = None;
                self.status = "Safe is fully verified!".to_string();
                self.announce();
                true
            }
            Err(failure) => {
                self.last_failure = Some(failure);
                self.status =
                    format!("Error verifying at: ({}, {})", failure.row, failure.col);
                self.announce();
                false
            }
        }
    }

    /// Swap in a new grid (solver and hint results). Dimensions of the
    /// replacement are the caller's responsibility.
    pub fn replace(&mut self, safe: Safe, status: &str) {
        self.safe = safe;
        self.status = status.to_string();
        self.announce();
    }

    fn announce(&mut self) {
        if let Some(listener) = self.listener.clone() {
            listener(self);
        }
    }
}

impl fmt::Display for SafeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.safe)
    }
}
