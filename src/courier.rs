//! Threaded Courier
//!
//! ARCHITECTURE: each send runs on its own OS thread with its own Tokio
//! runtime so the GTK main thread never blocks. The outcome comes back
//! over a std::sync::mpsc channel that the UI polls from the main loop.

use crate::emailjs::{DeliveryError, EmailJsClient};
use giftbox_common::config::EmailJsConfig;
use giftbox_common::delivery::{Courier, DeliveryFailure, DeliveryOutcome, TemplateParams};
use std::sync::mpsc;
use std::thread;

pub struct ThreadedCourier {
    config: EmailJsConfig,
    pending: Option<mpsc::Receiver<DeliveryOutcome>>,
}

impl ThreadedCourier {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            config,
            pending: None,
        }
    }

    /// Receiver for the most recent dispatch, if nobody has taken it yet
    pub fn take_pending(&mut self) -> Option<mpsc::Receiver<DeliveryOutcome>> {
        self.pending.take()
    }
}

impl Courier for ThreadedCourier {
    fn dispatch(&mut self, params: TemplateParams) {
        let (sender, receiver) = mpsc::channel::<DeliveryOutcome>();
        let config = self.config.clone();

        thread::spawn(move || {
            let outcome = send_blocking(config, params);
            // Receiver gone means the window closed; nothing left to tell
            let _ = sender.send(outcome);
        });

        self.pending = Some(receiver);
    }
}

/// Run one send to completion on the current (worker) thread
pub fn send_blocking(config: EmailJsConfig, params: TemplateParams) -> DeliveryOutcome {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| DeliveryFailure::from(DeliveryError::Runtime(e)))?;

    let client = EmailJsClient::new(config)?;
    rt.block_on(client.send(&params)).map_err(DeliveryFailure::from)
}
