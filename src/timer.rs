use uuid::Uuid;

/// Length of one work session in seconds
pub const WORK_SECONDS: u32 = 25;

/// Length of one break in seconds
pub const BREAK_SECONDS: u32 = 5;

/// Focus cycles per estimated minute of work
pub const SESSIONS_PER_MINUTE: u32 = 5;

/// The timer's current mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Working,
    Break,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Working => "Working",
            Self::Break => "Break",
        }
    }
}

/// Pomodoro-style countdown bound to a single task.
///
/// Driven by an external 1-second tick while `running`. Each phase boundary
/// auto-pauses so the user resumes manually. When the final break finishes,
/// `tick` hands back the bound task id so the caller can mark it complete
/// through the store, and the session resets to idle.
#[derive(Debug, Clone)]
pub struct FocusTimer {
    pub phase: Phase,
    pub bound_task_id: Option<Uuid>,
    pub seconds_remaining: u32,
    pub sessions_left: u32,
    pub running: bool,
}

impl FocusTimer {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            bound_task_id: None,
            seconds_remaining: WORK_SECONDS,
            sessions_left: 0,
            running: false,
        }
    }

    /// Arm the timer for a task. Valid from any state: the last start wins
    /// and any prior session's progress is discarded.
    pub fn start(&mut self, task_id: Uuid, time_required: u32) {
        self.bound_task_id = Some(task_id);
        self.sessions_left = time_required.max(1) * SESSIONS_PER_MINUTE;
        self.phase = Phase::Working;
        self.seconds_remaining = WORK_SECONDS;
        self.running = true;
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the bound task id when the whole session just completed.
    pub fn tick(&mut self) -> Option<Uuid> {
        if !self.running || self.phase == Phase::Idle {
            return None;
        }

        if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
        }
        if self.seconds_remaining > 0 {
            return None;
        }

        // Countdown hit zero: phase boundary
        match self.phase {
            Phase::Working => {
                self.phase = Phase::Break;
                self.seconds_remaining = BREAK_SECONDS;
                self.running = false;
                None
            }
            Phase::Break => {
                if self.sessions_left > 1 {
                    self.phase = Phase::Working;
                    self.seconds_remaining = WORK_SECONDS;
                    self.sessions_left -= 1;
                    self.running = false;
                    None
                } else {
                    let finished = self.bound_task_id;
                    self.reset();
                    finished
                }
            }
            Phase::Idle => None,
        }
    }

    /// Stop ticking without losing phase or countdown state
    pub fn pause(&mut self) {
        if self.phase != Phase::Idle {
            self.running = false;
        }
    }

    /// Resume ticking from where the countdown left off
    pub fn resume(&mut self) {
        if self.phase != Phase::Idle {
            self.running = true;
        }
    }

    pub fn toggle_running(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.resume();
        }
    }

    /// Force-return to idle from any state, discarding the bound task
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.bound_task_id = None;
        self.seconds_remaining = WORK_SECONDS;
        self.sessions_left = 0;
        self.running = false;
    }

    /// Countdown formatted as MM:SS
    pub fn clock(&self) -> String {
        let minutes = self.seconds_remaining / 60;
        let seconds = self.seconds_remaining % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticked(timer: &mut FocusTimer, n: u32) -> Option<Uuid> {
        let mut completed = None;
        for _ in 0..n {
            if let Some(id) = timer.tick() {
                completed = Some(id);
            }
        }
        completed
    }

    #[test]
    fn test_new_is_idle() {
        let timer = FocusTimer::new();
        assert_eq!(timer.phase, Phase::Idle);
        assert_eq!(timer.seconds_remaining, WORK_SECONDS);
        assert_eq!(timer.sessions_left, 0);
        assert!(!timer.running);
        assert!(timer.bound_task_id.is_none());
    }

    #[test]
    fn test_start_computes_sessions_from_estimate() {
        let id = Uuid::new_v4();
        let mut timer = FocusTimer::new();
        timer.start(id, 1);

        assert_eq!(timer.phase, Phase::Working);
        assert_eq!(timer.seconds_remaining, 25);
        assert_eq!(timer.sessions_left, 5);
        assert!(timer.running);
        assert_eq!(timer.bound_task_id, Some(id));

        timer.start(id, 3);
        assert_eq!(timer.sessions_left, 15);
    }

    #[test]
    fn test_tick_does_nothing_when_idle_or_paused() {
        let mut timer = FocusTimer::new();
        assert!(timer.tick().is_none());
        assert_eq!(timer.seconds_remaining, WORK_SECONDS);

        timer.start(Uuid::new_v4(), 1);
        timer.pause();
        assert!(timer.tick().is_none());
        assert_eq!(timer.seconds_remaining, 25);
    }

    #[test]
    fn test_work_phase_ends_in_auto_paused_break() {
        let mut timer = FocusTimer::new();
        timer.start(Uuid::new_v4(), 1);

        assert!(ticked(&mut timer, 24).is_none());
        assert_eq!(timer.phase, Phase::Working);
        assert_eq!(timer.seconds_remaining, 1);

        assert!(timer.tick().is_none());
        assert_eq!(timer.phase, Phase::Break);
        assert_eq!(timer.seconds_remaining, 5);
        assert!(!timer.running);
    }

    #[test]
    fn test_break_returns_to_work_and_consumes_session() {
        let mut timer = FocusTimer::new();
        timer.start(Uuid::new_v4(), 1);

        ticked(&mut timer, 25); // work -> break
        timer.resume();
        assert!(ticked(&mut timer, 5).is_none());

        assert_eq!(timer.phase, Phase::Working);
        assert_eq!(timer.seconds_remaining, 25);
        assert_eq!(timer.sessions_left, 4);
        assert!(!timer.running);
    }

    #[test]
    fn test_final_break_completes_task_and_resets() {
        let id = Uuid::new_v4();
        let mut timer = FocusTimer::new();
        timer.start(id, 1);
        timer.sessions_left = 1; // fast-forward to the last cycle

        ticked(&mut timer, 25); // work -> break
        timer.resume();
        let completed = ticked(&mut timer, 5);

        assert_eq!(completed, Some(id));
        assert_eq!(timer.phase, Phase::Idle);
        assert!(timer.bound_task_id.is_none());
        assert_eq!(timer.seconds_remaining, WORK_SECONDS);
        assert_eq!(timer.sessions_left, 0);
        assert!(!timer.running);
    }

    #[test]
    fn test_full_one_minute_session() {
        // time_required = 1 gives 5 work/break cycles before completion
        let id = Uuid::new_v4();
        let mut timer = FocusTimer::new();
        timer.start(id, 1);

        let mut completed = None;
        for cycle in 0..5 {
            assert_eq!(timer.phase, Phase::Working, "cycle {}", cycle);
            completed = ticked(&mut timer, 25);
            if timer.phase == Phase::Break {
                timer.resume();
                completed = ticked(&mut timer, 5);
            }
            if completed.is_some() {
                break;
            }
            timer.resume();
        }

        assert_eq!(completed, Some(id));
        assert_eq!(timer.phase, Phase::Idle);
    }

    #[test]
    fn test_restart_discards_previous_session() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let mut timer = FocusTimer::new();

        timer.start(first, 2);
        ticked(&mut timer, 10);

        timer.start(second, 1);
        assert_eq!(timer.bound_task_id, Some(second));
        assert_eq!(timer.seconds_remaining, 25);
        assert_eq!(timer.sessions_left, 5);
        assert_eq!(timer.phase, Phase::Working);
        assert!(timer.running);
    }

    #[test]
    fn test_pause_resume_preserve_counters() {
        let mut timer = FocusTimer::new();
        timer.start(Uuid::new_v4(), 2);
        ticked(&mut timer, 7);

        timer.pause();
        assert!(!timer.running);
        assert_eq!(timer.seconds_remaining, 18);
        assert_eq!(timer.sessions_left, 10);
        assert_eq!(timer.phase, Phase::Working);

        timer.resume();
        assert!(timer.running);
        assert_eq!(timer.seconds_remaining, 18);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut timer = FocusTimer::new();
        timer.start(Uuid::new_v4(), 3);
        ticked(&mut timer, 25); // into break
        timer.reset();

        assert_eq!(timer.phase, Phase::Idle);
        assert!(timer.bound_task_id.is_none());
        assert_eq!(timer.seconds_remaining, 25);
        assert_eq!(timer.sessions_left, 0);
        assert!(!timer.running);
    }

    #[test]
    fn test_clock_format() {
        let mut timer = FocusTimer::new();
        assert_eq!(timer.clock(), "00:25");
        timer.seconds_remaining = 65;
        assert_eq!(timer.clock(), "01:05");
        timer.seconds_remaining = 0;
        assert_eq!(timer.clock(), "00:00");
    }
}
