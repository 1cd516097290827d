//! Drag-based rescheduling.
//!
//! A small interaction state machine: `Idle -> PendingDrag -> Dragging ->
//! {Committing, Cancelled} -> Idle`. A short hold timer disambiguates a drag
//! from a click, the live proposal tracks the pointer through the time grid
//! mapper, and pointer-up issues exactly one reschedule mutation. Global
//! pointer/keyboard listeners are held by an RAII guard so every exit path
//! releases them.

use std::cell::Cell;
use std::rc::Rc;

use chrono::NaiveTime;

use crate::models::session::Session;
use crate::services::layout::time_grid::TimeGridMapper;
use crate::services::store::SessionStore;

/// Hold time separating a drag from a tap, in milliseconds.
pub const DEFAULT_HOLD_MS: u64 = 150;

/// Scoped registration of the global pointer/keyboard listeners a drag
/// needs. Dropping the guard releases them, on every exit path.
#[derive(Debug)]
struct ListenerGuard {
    count: Rc<Cell<usize>>,
}

impl ListenerGuard {
    fn acquire(count: &Rc<Cell<usize>>) -> Self {
        count.set(count.get() + 1);
        Self {
            count: Rc::clone(count),
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.count.set(self.count.get().saturating_sub(1));
    }
}

#[derive(Debug)]
struct PendingDrag {
    session_id: i64,
    original_time: NaiveTime,
    deadline_ms: u64,
}

#[derive(Debug)]
struct ActiveDrag {
    session_id: i64,
    original_time: NaiveTime,
    proposed_time: NaiveTime,
    proposed_top: f32,
    _listeners: ListenerGuard,
}

#[derive(Debug, Default)]
enum Phase {
    #[default]
    Idle,
    Pending(PendingDrag),
    Dragging(ActiveDrag),
}

/// How a pointer-up or cancellation resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Released before the hold timer fired; treat as a click.
    Click { session_id: i64 },
    /// One reschedule mutation was issued and accepted.
    Committed { session_id: i64, time: NaiveTime },
    /// No mutation: the time never changed, or the drag was cancelled.
    Cancelled,
    /// The mutation failed. The grid still shows last known-good data;
    /// the caller should refetch rather than trust local state.
    CommitFailed { session_id: i64, refetch: bool },
}

/// The interaction state machine for one grid. One instance handles at most
/// one active drag; drags on different sessions in different grids are
/// independent.
#[derive(Debug)]
pub struct DragRescheduler {
    grid: TimeGridMapper,
    hold_ms: u64,
    phase: Phase,
    listener_count: Rc<Cell<usize>>,
}

impl DragRescheduler {
    pub fn new(grid: TimeGridMapper) -> Self {
        Self {
            grid,
            hold_ms: DEFAULT_HOLD_MS,
            phase: Phase::Idle,
            listener_count: Rc::new(Cell::new(0)),
        }
    }

    pub fn with_hold_ms(mut self, hold_ms: u64) -> Self {
        self.hold_ms = hold_ms;
        self
    }

    /// Pointer-down on a session. Starts the hold timer; ignored unless
    /// idle, and ignored for unsaved sessions.
    pub fn pointer_down(&mut self, session: &Session, now_ms: u64) {
        if !matches!(self.phase, Phase::Idle) {
            return;
        }
        let Some(session_id) = session.id else {
            return;
        };
        self.phase = Phase::Pending(PendingDrag {
            session_id,
            original_time: session.time,
            deadline_ms: now_ms.saturating_add(self.hold_ms),
        });
    }

    /// Advance the hold timer. Returns true when the pending drag just
    /// became a real drag.
    pub fn poll_hold(&mut self, now_ms: u64) -> bool {
        let Phase::Pending(pending) = &self.phase else {
            return false;
        };
        if now_ms < pending.deadline_ms {
            return false;
        }
        let original_time = pending.original_time;
        let session_id = pending.session_id;
        self.phase = Phase::Dragging(ActiveDrag {
            session_id,
            original_time,
            proposed_time: original_time,
            proposed_top: self.grid.time_to_offset(original_time),
            _listeners: ListenerGuard::acquire(&self.listener_count),
        });
        true
    }

    /// Pointer moved while dragging: recompute the snapped proposal from
    /// the pointer's position relative to the scrollable grid.
    pub fn pointer_move(&mut self, pointer_y: f32, grid_top: f32, scroll_offset: f32) {
        let Phase::Dragging(active) = &mut self.phase else {
            return;
        };
        let offset = pointer_y - grid_top + scroll_offset;
        active.proposed_time = self.grid.offset_to_time(offset);
        active.proposed_top = self.grid.time_to_offset(active.proposed_time);
    }

    /// Pointer released. Resolves as a click (hold never fired), a commit
    /// (time changed), or a cancel. Returns `None` when idle.
    pub fn pointer_up(&mut self, store: &mut dyn SessionStore) -> Option<DragOutcome> {
        match std::mem::take(&mut self.phase) {
            Phase::Idle => None,
            Phase::Pending(pending) => Some(DragOutcome::Click {
                session_id: pending.session_id,
            }),
            Phase::Dragging(active) => {
                if active.proposed_time == active.original_time {
                    return Some(DragOutcome::Cancelled);
                }
                match store.update_session_time(active.session_id, active.proposed_time) {
                    Ok(()) => {
                        log::info!(
                            "session {} rescheduled to {}",
                            active.session_id,
                            active.proposed_time.format("%H:%M")
                        );
                        Some(DragOutcome::Committed {
                            session_id: active.session_id,
                            time: active.proposed_time,
                        })
                    }
                    Err(err) => {
                        log::warn!("reschedule of session {} failed: {err}", active.session_id);
                        Some(DragOutcome::CommitFailed {
                            session_id: active.session_id,
                            refetch: true,
                        })
                    }
                }
            }
        }
    }

    /// Escape key or component teardown: drop any drag locally, never
    /// crossing the I/O boundary.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// Live proposal for visual feedback while dragging.
    pub fn proposal(&self) -> Option<(NaiveTime, f32)> {
        match &self.phase {
            Phase::Dragging(active) => Some((active.proposed_time, active.proposed_top)),
            _ => None,
        }
    }

    /// Number of global listener registrations currently held. Zero
    /// whenever no drag is active.
    pub fn active_listener_count(&self) -> usize {
        self.listener_count.get()
    }
}
