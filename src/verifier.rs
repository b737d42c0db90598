//! Device-lock verification through a native confirmation dialog.

use async_trait::async_trait;
use profiledesk_core::{DeviceLockVerifier, LockChange};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Asks the owner to confirm with a system dialog
pub struct DialogVerifier;

#[async_trait]
impl DeviceLockVerifier for DialogVerifier {
    async fn verify(&self, change: LockChange) -> bool {
        // Blocking dialog, kept off the UI thread
        let answer = tokio::task::spawn_blocking(move || {
            MessageDialog::new()
                .set_title("Device lock")
                .set_description(change.prompt())
                .set_level(MessageLevel::Warning)
                .set_buttons(MessageButtons::OkCancel)
                .show()
        })
        .await;

        match answer {
            Ok(MessageDialogResult::Ok) | Ok(MessageDialogResult::Yes) => true,
            Ok(_) => false,
            Err(e) => {
                tracing::error!("Verification dialog failed: {}", e);
                false
            }
        }
    }
}
