//! Device-lock verification gate for security settings.
//!
//! Turning the device lock on or off first asks the platform to confirm the
//! person holding the device is the owner. The check is asynchronous and
//! yields a plain yes/no; a "no" leaves the setting untouched.

use async_trait::async_trait;

/// The change a verification is gating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockChange {
    Enable,
    Disable,
}

impl LockChange {
    /// The change that flips the current flag
    pub fn toggling(currently_enabled: bool) -> Self {
        if currently_enabled {
            LockChange::Disable
        } else {
            LockChange::Enable
        }
    }

    /// Flag value after the change is applied
    pub fn target(&self) -> bool {
        matches!(self, LockChange::Enable)
    }

    /// Reason shown in the platform prompt
    pub fn prompt(&self) -> &'static str {
        match self {
            LockChange::Enable => "Confirm it's you to turn on device lock",
            LockChange::Disable => "Confirm it's you to turn off device lock",
        }
    }
}

/// Platform capability check (biometric prompt, system PIN, ...)
#[async_trait]
pub trait DeviceLockVerifier: Send + Sync {
    async fn verify(&self, change: LockChange) -> bool;
}

/// Verifier with a predetermined answer, for headless runs and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedVerifier {
    answer: bool,
}

impl FixedVerifier {
    pub fn new(answer: bool) -> Self {
        Self { answer }
    }
}

#[async_trait]
impl DeviceLockVerifier for FixedVerifier {
    async fn verify(&self, change: LockChange) -> bool {
        tracing::debug!(?change, answer = self.answer, "Fixed device-lock verification");
        self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggling_flips_flag() {
        assert_eq!(LockChange::toggling(false), LockChange::Enable);
        assert_eq!(LockChange::toggling(true), LockChange::Disable);
        assert!(LockChange::Enable.target());
        assert!(!LockChange::Disable.target());
    }

    #[tokio::test]
    async fn test_fixed_verifier_answers() {
        assert!(FixedVerifier::new(true).verify(LockChange::Enable).await);
        assert!(!FixedVerifier::new(false).verify(LockChange::Disable).await);
    }
}
