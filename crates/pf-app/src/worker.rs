//! Off-thread integration passes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::thread::{self, JoinHandle};

use pf_core::Generation;
use pf_models::Model;
use pf_sim::{IntegrationOptions, SimError, TrajectoryStore, integrate_cancellable};
use tracing::debug;

#[derive(Debug)]
pub enum WorkerMessage {
    Complete { store: TrajectoryStore },
    Cancelled { ticket: Generation },
    Error { ticket: Generation, message: String },
}

/// One integration pass running on its own thread.
///
/// The pass is tagged with the generation its store will carry; that
/// generation doubles as the request ticket. Dropping the worker raises its
/// cancel flag, so a superseded pass stops instead of running to completion.
pub struct IntegrationWorker {
    ticket: Generation,
    model: String,
    cancel: Arc<AtomicBool>,
    rx: Receiver<WorkerMessage>,
    _handle: JoinHandle<()>,
}

impl IntegrationWorker {
    pub fn start(model: Arc<Model>, opts: IntegrationOptions, ticket: Generation) -> Self {
        let (tx, rx) = channel();
        let name = model.name().to_string();
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);

        let handle = thread::spawn(move || {
            let message = match integrate_cancellable(&model, &opts, ticket, &flag) {
                Ok(store) => WorkerMessage::Complete { store },
                Err(SimError::Cancelled) => WorkerMessage::Cancelled { ticket },
                Err(e) => WorkerMessage::Error {
                    ticket,
                    message: e.to_string(),
                },
            };
            // The receiver is gone if this request was superseded.
            if tx.send(message).is_err() {
                debug!(%ticket, "integration result discarded");
            }
        });

        Self {
            ticket,
            model: name,
            cancel,
            rx,
            _handle: handle,
        }
    }

    pub fn ticket(&self) -> Generation {
        self.ticket
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the pass to stop. It reports `WorkerMessage::Cancelled` unless it
    /// already finished.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    /// Non-blocking check for the result.
    pub fn try_finish(&self) -> Option<WorkerMessage> {
        match self.rx.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(self.lost()),
        }
    }

    /// Block until the pass finishes.
    pub fn wait(self) -> WorkerMessage {
        self.rx.recv().unwrap_or_else(|_| self.lost())
    }

    fn lost(&self) -> WorkerMessage {
        WorkerMessage::Error {
            ticket: self.ticket,
            message: "worker thread exited without a result".to_string(),
        }
    }
}

impl Drop for IntegrationWorker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::{BoundingBox, Real};
    use pf_models::{ModelRegistry, PhaseState, VectorField};
    use std::sync::atomic::AtomicUsize;

    #[derive(Debug)]
    struct Counting(Arc<AtomicUsize>);

    impl VectorField for Counting {
        fn rhs(&self, _t: Real, s: &PhaseState) -> PhaseState {
            self.0.fetch_add(1, Ordering::Relaxed);
            PhaseState::planar(-s.y() - 0.1 * s.x(), s.x() - 0.1 * s.y())
        }
    }

    #[test]
    fn worker_delivers_tagged_store() {
        let registry = ModelRegistry::builtin().unwrap();
        let model = Arc::clone(registry.lookup("spiral").unwrap());
        let opts = IntegrationOptions {
            step_count: 50,
            grid_size: 3,
            ..Default::default()
        };
        let worker = IntegrationWorker::start(model, opts, Generation::FIRST);
        assert_eq!(worker.model(), "spiral");
        match worker.wait() {
            WorkerMessage::Complete { store } => {
                assert_eq!(store.generation(), Generation::FIRST);
                assert_eq!(store.len(), 9);
            }
            WorkerMessage::Cancelled { .. } => panic!("worker was not cancelled"),
            WorkerMessage::Error { message, .. } => panic!("worker failed: {message}"),
        }
    }

    #[test]
    fn invalid_options_surface_as_error_message() {
        let registry = ModelRegistry::builtin().unwrap();
        let model = Arc::clone(registry.lookup("spiral").unwrap());
        let opts = IntegrationOptions {
            grid_size: 0,
            ..Default::default()
        };
        let worker = IntegrationWorker::start(model, opts, Generation::FIRST);
        assert!(matches!(worker.wait(), WorkerMessage::Error { .. }));
    }

    #[test]
    fn cancelled_pass_stops_early() {
        let calls = Arc::new(AtomicUsize::new(0));
        let bbox = BoundingBox::new(-1.0, 1.0, -1.0, 1.0).unwrap();
        let model = Arc::new(Model::new("counting", Counting(Arc::clone(&calls)), bbox));
        let opts = IntegrationOptions {
            step_count: 100_000,
            grid_size: 10,
            ..Default::default()
        };
        let full_pass = 100 * (opts.step_count - 1);

        let worker = IntegrationWorker::start(model, opts, Generation::FIRST);
        worker.cancel();
        assert!(worker.is_cancelled());
        assert!(matches!(
            worker.wait(),
            WorkerMessage::Cancelled { ticket } if ticket == Generation::FIRST
        ));
        assert!(calls.load(Ordering::Relaxed) < full_pass);
    }
}
