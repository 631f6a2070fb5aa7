//! At-most-one-in-flight request gate.
//!
//! Each asynchronous operation (condition analysis, medicine recognition)
//! owns a `RequestGate`. Starting a request bumps the gate's generation and
//! hands back a `RequestTicket`. A ticket whose generation is no longer the
//! newest is superseded: its wait ends early with `SahayakError::Superseded`
//! and its result is never delivered, so a slow stale request cannot
//! overwrite a newer one.

use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, warn};

use sahayak_contracts::error::{SahayakError, SahayakResult};

/// Generation counter shared between a gate and its outstanding tickets.
#[derive(Debug)]
pub struct RequestGate {
    operation: &'static str,
    generation: watch::Sender<u64>,
}

impl RequestGate {
    /// Create a gate for the named operation ("analysis", "recognition").
    pub fn new(operation: &'static str) -> Self {
        let (generation, _) = watch::channel(0);
        Self { operation, generation }
    }

    /// Start a new request, superseding any request still in flight.
    pub fn begin(&self) -> RequestTicket {
        let mut id = 0;
        self.generation.send_modify(|g| {
            *g += 1;
            id = *g;
        });
        debug!(operation = self.operation, generation = id, "request started");
        RequestTicket {
            operation: self.operation,
            id,
            generation: self.generation.subscribe(),
        }
    }

    /// Supersede the in-flight request without starting a new one.
    pub fn cancel(&self) {
        self.generation.send_modify(|g| *g += 1);
        debug!(operation = self.operation, "in-flight request cancelled");
    }

    /// The newest generation handed out (or cancelled).
    pub fn current(&self) -> u64 {
        *self.generation.borrow()
    }
}

/// One request's claim on a `RequestGate`.
#[derive(Debug)]
pub struct RequestTicket {
    operation: &'static str,
    id: u64,
    generation: watch::Receiver<u64>,
}

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// True while no newer request has started on the gate.
    pub fn is_current(&self) -> bool {
        *self.generation.borrow() == self.id
    }

    /// Fail with `Superseded` if a newer request has started.
    pub fn ensure_current(&self) -> SahayakResult<()> {
        if self.is_current() {
            Ok(())
        } else {
            warn!(operation = self.operation, generation = self.id, "request superseded");
            Err(SahayakError::Superseded {
                operation: self.operation.to_string(),
            })
        }
    }

    /// Wait out the simulated latency, returning early if superseded.
    pub async fn wait(&mut self, latency: Duration) -> SahayakResult<()> {
        let sleep = tokio::time::sleep(latency);
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                _ = &mut sleep => break,
                changed = self.generation.changed() => {
                    if changed.is_err() {
                        // Gate dropped: nothing can supersede us any more.
                        (&mut sleep).await;
                        break;
                    }
                    self.ensure_current()?;
                }
            }
        }

        self.ensure_current()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sahayak_contracts::error::SahayakError;

    use super::RequestGate;

    #[test]
    fn begin_supersedes_previous_ticket() {
        let gate = RequestGate::new("analysis");
        let first = gate.begin();
        assert!(first.is_current());

        let second = gate.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(gate.current(), second.id());
    }

    #[test]
    fn cancel_supersedes_without_new_ticket() {
        let gate = RequestGate::new("recognition");
        let ticket = gate.begin();
        gate.cancel();
        assert!(matches!(
            ticket.ensure_current(),
            Err(SahayakError::Superseded { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn wait_completes_after_latency() {
        let gate = RequestGate::new("analysis");
        let mut ticket = gate.begin();
        let started = tokio::time::Instant::now();
        ticket.wait(Duration::from_secs(2)).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn wait_ends_early_when_superseded() {
        let gate = RequestGate::new("analysis");
        let mut stale = gate.begin();

        let (stale_result, _) = tokio::join!(stale.wait(Duration::from_secs(2)), async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            gate.begin()
        });

        assert!(matches!(stale_result, Err(SahayakError::Superseded { .. })));
    }
}
