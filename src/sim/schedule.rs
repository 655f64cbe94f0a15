//! Deferred one-shot tasks
//!
//! Tasks remember the life they were scheduled in. A task that fires after
//! a restart belongs to a finished life and must do nothing.

use serde::{Deserialize, Serialize};

/// What a deferred task does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Raise the forward speed bonus (only while Playing)
    SpeedRamp,
    /// Voice cue after the game-over impact (only while GameOver)
    GameOverVoice,
}

/// A pending task
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub kind: TaskKind,
    /// Life counter at scheduling time
    pub life: u32,
    /// Seconds until it fires
    pub remaining: f32,
}

/// Pending tasks in scheduling order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, kind: TaskKind, life: u32, delay: f32) {
        self.tasks.push(ScheduledTask {
            kind,
            life,
            remaining: delay.max(0.0),
        });
    }

    /// Advance time and take every task that is now due, in scheduling order
    pub fn advance(&mut self, dt: f32) -> Vec<ScheduledTask> {
        let dt = dt.max(0.0);
        for task in &mut self.tasks {
            task.remaining -= dt;
        }

        let (due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|t| t.remaining <= 0.0);
        self.tasks = pending;
        due
    }

    pub fn pending(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_delay() {
        let mut sched = Scheduler::new();
        sched.schedule(TaskKind::GameOverVoice, 1, 2.0);

        assert!(sched.advance(1.0).is_empty());
        assert!(sched.advance(0.5).is_empty());
        let due = sched.advance(0.5);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].kind, TaskKind::GameOverVoice);
        assert_eq!(due[0].life, 1);
        assert!(sched.is_empty());
    }

    #[test]
    fn test_keeps_order_and_pending() {
        let mut sched = Scheduler::new();
        sched.schedule(TaskKind::SpeedRamp, 1, 1.0);
        sched.schedule(TaskKind::GameOverVoice, 1, 0.5);
        sched.schedule(TaskKind::SpeedRamp, 2, 3.0);

        let due = sched.advance(1.0);
        let kinds: Vec<_> = due.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TaskKind::SpeedRamp, TaskKind::GameOverVoice]);
        assert_eq!(sched.len(), 1);
        assert_eq!(sched.pending()[0].life, 2);
    }

    #[test]
    fn test_negative_dt_does_not_rewind() {
        let mut sched = Scheduler::new();
        sched.schedule(TaskKind::SpeedRamp, 1, 1.0);
        sched.advance(-5.0);
        assert_eq!(sched.pending()[0].remaining, 1.0);
    }
}
