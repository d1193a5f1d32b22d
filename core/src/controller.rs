use crate::*;

/// Arms the delayed retry of a failed fill cycle.
pub trait Scheduler {
    /// Pending retry. Dropping it cancels the timer.
    type Handle;

    fn schedule_retry(&mut self, delay_ms: u32) -> Self::Handle;
}

/// Sequence number of one fill cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FillTicket(u32);

impl FillTicket {
    pub const fn number(self) -> u32 {
        self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FillCause {
    User,
    Retry,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FillStatus {
    Ready,
    RetryScheduled { delay_ms: u32 },
}

/// Owns the board and drives the display surface through fill cycles and clicks.
///
/// Fill cycles are split in two halves so the caller can run the network part
/// on its own event loop: [`start`](Self::start) or [`retry`](Self::retry)
/// begin a cycle, [`complete`](Self::complete) hands back what
/// [`fetch_board`] produced. Cycles that overlap are not serialized: the one
/// completing last decides the board.
pub struct BoardController<D, S: Scheduler> {
    config: BoardConfig,
    board: Option<Board>,
    display: D,
    scheduler: S,
    pending_retry: Option<S::Handle>,
    next_ticket: u32,
}

impl<D: DisplaySurface, S: Scheduler> BoardController<D, S> {
    pub fn new(config: BoardConfig, display: D, scheduler: S) -> Self {
        Self {
            config,
            board: None,
            display,
            scheduler,
            pending_retry: None,
            next_ticket: 0,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn has_pending_retry(&self) -> bool {
        self.pending_retry.is_some()
    }

    /// Begins a fill cycle on behalf of the player. Clears the error banner and
    /// cancels a retry that is still waiting.
    pub fn start(&mut self) -> FillTicket {
        self.display.clear_error();
        if self.cancel_retry() {
            log::debug!("pending retry cancelled by manual start");
        }
        self.begin_fill(FillCause::User)
    }

    /// Begins the fill cycle of a retry timer that just fired.
    pub fn retry(&mut self) -> FillTicket {
        self.pending_retry = None;
        log::info!("retrying board fill");
        self.begin_fill(FillCause::Retry)
    }

    /// Finishes the cycle `ticket`. A board replaces whatever was there, is
    /// drawn from scratch, takes down the banner and disarms any waiting retry;
    /// an error puts up the banner and arms a retry.
    pub fn complete(
        &mut self,
        ticket: FillTicket,
        result: core::result::Result<Board, NetworkError>,
    ) -> FillStatus {
        self.display.hide_loading();

        match result {
            Ok(board) => {
                log::info!("fill #{} ready", ticket.number());
                if self.cancel_retry() {
                    log::debug!("pending retry cancelled by fill #{}", ticket.number());
                }
                self.display.clear_error();
                self.board = Some(board);
                self.render_board();
                FillStatus::Ready
            }
            Err(err) => {
                log::warn!("fill #{} failed: {}", ticket.number(), err);
                self.display.show_error(FETCH_ERROR_MESSAGE);
                let delay_ms = self.config.retry_delay_ms;
                // replacing an armed retry drops and so cancels it
                self.pending_retry = Some(self.scheduler.schedule_retry(delay_ms));
                log::debug!("retry scheduled in {} ms", delay_ms);
                FillStatus::RetryScheduled { delay_ms }
            }
        }
    }

    /// Advances the clue under `(row, col)` and redraws that one cell.
    pub fn handle_click(&mut self, pos: CellPos) -> Result<RevealOutcome> {
        let Some(board) = self.board.as_mut() else {
            log::trace!("click at {} before any board", pos);
            return Ok(RevealOutcome::NoChange);
        };

        let outcome = board.reveal(pos)?;
        if !outcome.has_update() {
            log::trace!("click at {} ignored", pos);
            return Ok(outcome);
        }

        let clue = board.clue_at(pos)?;
        let showing = clue.showing;
        let text = clue.text_for(showing).unwrap_or(PLACEHOLDER);
        log::debug!("cell {} now {:?}", pos, showing);
        self.display.update_cell(pos, text, showing.cell_class());

        Ok(outcome)
    }

    /// Drops a waiting retry. Returns whether there was one.
    pub fn cancel_retry(&mut self) -> bool {
        self.pending_retry.take().is_some()
    }

    pub fn render_board(&mut self) {
        if let Some(board) = &self.board {
            self.display.render_board(board.titles(), board.size());
        }
    }

    fn begin_fill(&mut self, cause: FillCause) -> FillTicket {
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = FillTicket(self.next_ticket);
        log::info!("fill #{} started ({:?})", ticket.number(), cause);
        self.display.show_loading();
        ticket
    }
}
