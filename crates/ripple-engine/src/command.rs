//! Commands delivered to a simulation from driver or UI threads.
//!
//! A [`CommandSender`] is a cloneable handle onto a bounded crossbeam
//! channel owned by the [`Simulation`](crate::Simulation). Sending never
//! blocks: a full channel is reported as back-pressure. Queued commands
//! are applied in arrival order at the next tick boundary.

use std::fmt;

use crossbeam_channel::{Sender, TrySendError};

/// An event for the simulation to apply between ticks.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Add `amplitude` around the grid point nearest `x`.
    Inject {
        /// Position along the domain.
        x: f64,
        /// Amount added to the past and present levels.
        amplitude: f64,
    },
    /// Replace the Courant number used by subsequent steps.
    SetCourantNumber(f64),
    /// Enter [`RunState::Running`](crate::RunState::Running).
    Start,
    /// Enter [`RunState::Idle`](crate::RunState::Idle).
    Stop,
    /// Re-initialize from the configuration and go idle.
    Reset,
}

/// Error sending a command to a simulation.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The simulation has been dropped.
    Shutdown,
    /// The command channel is full (back-pressure).
    ChannelFull,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shutdown => write!(f, "simulation has shut down"),
            Self::ChannelFull => write!(f, "command channel full"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Cloneable, `Send` handle for delivering [`Command`]s to a simulation.
///
/// Obtained from [`Simulation::command_sender()`](crate::Simulation::command_sender).
#[derive(Clone, Debug)]
pub struct CommandSender {
    tx: Sender<Command>,
}

impl CommandSender {
    pub(crate) fn new(tx: Sender<Command>) -> Self {
        Self { tx }
    }

    /// Queue a command without blocking.
    pub fn send(&self, command: Command) -> Result<(), SubmitError> {
        self.tx.try_send(command).map_err(|e| match e {
            TrySendError::Full(_) => SubmitError::ChannelFull,
            TrySendError::Disconnected(_) => SubmitError::Shutdown,
        })
    }

    /// Queue an injection at `x` with the given amplitude.
    pub fn inject(&self, x: f64, amplitude: f64) -> Result<(), SubmitError> {
        self.send(Command::Inject { x, amplitude })
    }

    /// Queue a Courant number change.
    pub fn set_courant_number(&self, courant_number: f64) -> Result<(), SubmitError> {
        self.send(Command::SetCourantNumber(courant_number))
    }

    /// Number of commands waiting to be applied.
    pub fn pending(&self) -> usize {
        self.tx.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_channel_reports_back_pressure() {
        let (tx, _rx) = crossbeam_channel::bounded(1);
        let sender = CommandSender::new(tx);
        assert_eq!(sender.send(Command::Start), Ok(()));
        assert_eq!(sender.pending(), 1);
        assert_eq!(sender.send(Command::Stop), Err(SubmitError::ChannelFull));
    }

    #[test]
    fn dropped_receiver_reports_shutdown() {
        let (tx, rx) = crossbeam_channel::bounded(4);
        let sender = CommandSender::new(tx);
        drop(rx);
        assert_eq!(sender.inject(1.0, 1.0), Err(SubmitError::Shutdown));
    }

    #[test]
    fn helpers_build_expected_commands() {
        let (tx, rx) = crossbeam_channel::bounded(4);
        let sender = CommandSender::new(tx);
        sender.inject(2.5, -1.0).unwrap();
        sender.set_courant_number(0.9).unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            Command::Inject {
                x: 2.5,
                amplitude: -1.0
            }
        );
        assert_eq!(rx.try_recv().unwrap(), Command::SetCourantNumber(0.9));
    }
}
