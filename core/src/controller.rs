use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerState {
    Idle,
    Loading,
    Ready,
    Failed,
}

impl ControllerState {
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Generation number handed out for every load, only the newest one is applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub const fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The board was replaced.
    Applied,
    /// A newer load has started since, the result was dropped.
    Stale,
    /// The newest load failed, the previous board (if any) is untouched.
    Failed(GameError),
}

impl LoadOutcome {
    pub const fn has_update(&self) -> bool {
        !matches!(self, Self::Stale)
    }
}

/// Owns the current board and sequences loads and reveals against it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardController {
    board: Option<Board>,
    generation: u64,
    state: ControllerState,
    last_error: Option<GameError>,
}

impl BoardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn last_error(&self) -> Option<&GameError> {
        self.last_error.as_ref()
    }

    pub fn current_ticket(&self) -> LoadTicket {
        LoadTicket(self.generation)
    }

    /// Starts a new load, superseding any load still in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = ControllerState::Loading;
        self.last_error = None;
        log::debug!("load {} started", self.generation);
        LoadTicket(self.generation)
    }

    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Board>) -> LoadOutcome {
        if ticket != self.current_ticket() {
            log::debug!(
                "dropping stale load {} (current is {})",
                ticket.generation(),
                self.generation
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(board) => {
                log::debug!("load {} applied", ticket.generation());
                self.board = Some(board);
                self.state = ControllerState::Ready;
                LoadOutcome::Applied
            }
            Err(err) => {
                log::warn!("load {} failed: {}", ticket.generation(), err);
                self.state = ControllerState::Failed;
                self.last_error = Some(err.clone());
                LoadOutcome::Failed(err)
            }
        }
    }

    pub fn reveal(&mut self, address: CellAddress) -> Result<RevealOutcome<'_>> {
        match self.board.as_mut() {
            Some(board) => board.reveal(address),
            None => Err(GameError::InvalidAddress),
        }
    }
}
