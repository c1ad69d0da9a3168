//! One-shot "intro finished" signal.

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use super::error::SequencerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    Pending,
    Fired,
    /// The sequencer went away before reaching Complete.
    Abandoned,
}

/// Receiving side, held by the host.
///
/// Backed by a oneshot channel: the sending half is consumed by the first
/// notification, so a second one cannot be expressed.
#[derive(Debug)]
pub struct Completion {
    rx: Option<oneshot::Receiver<()>>,
    status: CompletionStatus,
}

impl Completion {
    /// Non-blocking check. Once `Fired` or `Abandoned`, the answer is sticky.
    pub fn status(&mut self) -> CompletionStatus {
        if let Some(rx) = self.rx.as_mut() {
            match rx.try_recv() {
                Ok(()) => {
                    self.status = CompletionStatus::Fired;
                    self.rx = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => {
                    self.status = CompletionStatus::Abandoned;
                    self.rx = None;
                }
            }
        }
        self.status
    }

    pub fn is_fired(&mut self) -> bool {
        self.status() == CompletionStatus::Fired
    }

    /// Resolves once the sequencer completes, or fails if it is torn down first.
    pub async fn wait(mut self) -> Result<(), SequencerError> {
        match self.status() {
            CompletionStatus::Fired => Ok(()),
            CompletionStatus::Abandoned => Err(SequencerError::Abandoned),
            CompletionStatus::Pending => match self.rx.take() {
                Some(rx) => rx.await.map_err(|_| SequencerError::Abandoned),
                None => Err(SequencerError::Abandoned),
            },
        }
    }
}

/// Sending side, owned by the sequencer.
#[derive(Debug)]
pub(crate) struct CompletionNotifier {
    tx: Option<oneshot::Sender<()>>,
}

impl CompletionNotifier {
    /// Fires the signal. Returns false if it was already fired or abandoned.
    pub(crate) fn notify(&mut self) -> bool {
        match self.tx.take() {
            Some(tx) => {
                // A dropped receiver means nobody is waiting; still counts as fired.
                let _ = tx.send(());
                true
            }
            None => false,
        }
    }

    pub(crate) fn abandon(&mut self) {
        self.tx = None;
    }
}

pub(crate) fn channel() -> (CompletionNotifier, Completion) {
    let (tx, rx) = oneshot::channel();
    (
        CompletionNotifier { tx: Some(tx) },
        Completion {
            rx: Some(rx),
            status: CompletionStatus::Pending,
        },
    )
}
