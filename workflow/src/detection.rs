use shared::DetectionResult;
use std::fmt;
use strum_macros::IntoStaticStr;
use uuid::Uuid;

use crate::error::{DetectError, DetectRejected};

/// Identifies the request that moved the controller into `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(Uuid);

impl RequestTicket {
    fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum DetectionStatus {
    Idle,
    Pending,
    Success(DetectionResult),
    Failure(String),
}

impl DetectionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, DetectionStatus::Pending)
    }

    pub fn result(&self) -> Option<&DetectionResult> {
        match self {
            DetectionStatus::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DetectionStatus::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Status state machine for the single in-flight detection request.
///
/// `pending` is the ticket whose outcome will be applied. `in_flight` is the
/// request still on the wire, which may outlive `pending` after a reset. No
/// new request starts until it resolves.
#[derive(Debug)]
pub struct DetectionController {
    status: DetectionStatus,
    pending: Option<RequestTicket>,
    in_flight: Option<RequestTicket>,
}

impl Default for DetectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectionController {
    pub fn new() -> Self {
        Self {
            status: DetectionStatus::Idle,
            pending: None,
            in_flight: None,
        }
    }

    pub fn status(&self) -> &DetectionStatus {
        &self.status
    }

    pub fn in_flight(&self) -> Option<RequestTicket> {
        self.in_flight
    }

    /// Moves to `Pending` and hands out the ticket the completion must carry.
    pub fn begin(&mut self) -> Result<RequestTicket, DetectRejected> {
        if self.status.is_pending() || self.in_flight.is_some() {
            return Err(DetectRejected::AlreadyPending);
        }
        let ticket = RequestTicket::mint();
        log::info!("Detection {} pending (was {})", ticket, self.status.name());
        self.status = DetectionStatus::Pending;
        self.pending = Some(ticket);
        self.in_flight = Some(ticket);
        Ok(ticket)
    }

    /// Applies the outcome of the request identified by `ticket`. Returns
    /// `false` when the ticket no longer matches the pending request.
    pub fn finish(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<DetectionResult, DetectError>,
    ) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
        }
        if self.pending != Some(ticket) {
            log::debug!("Discarding completion of superseded detection {}", ticket);
            return false;
        }
        self.pending = None;
        self.status = match outcome {
            Ok(result) => {
                log::info!(
                    "Detection {} succeeded: detected={} confidence={}",
                    ticket,
                    result.detected,
                    result.confidence
                );
                DetectionStatus::Success(result)
            }
            Err(error) => {
                log::warn!("Detection {} failed: {:?}", ticket, error);
                DetectionStatus::Failure(error.user_message())
            }
        };
        true
    }

    /// Back to `Idle`. A request still in flight keeps blocking `begin` until
    /// it resolves, but its outcome is discarded.
    pub fn reset(&mut self) {
        if let Some(ticket) = self.pending.take() {
            log::debug!("Detection {} superseded", ticket);
        }
        self.status = DetectionStatus::Idle;
    }
}
