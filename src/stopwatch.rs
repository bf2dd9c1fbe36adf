//! 가스 레이트 측정용 스톱워치.
//!
//! 주기 콜백이나 백그라운드 스레드를 두지 않는다. 호출 측이 현재 시각으로
//! [`Stopwatch::poll`]을 부르면 그 사이에 도래한 1초 틱을 한꺼번에 반영한다.
//! 따라서 정지/리셋 이후에 남아서 도는 타이머가 없다.

use std::time::{Duration, Instant};

use crate::gas::heat_input::MeasurementSample;

/// 틱 간격.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// 스톱워치 단계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopwatchPhase {
    #[default]
    Idle,
    Running,
    Stopped,
}

/// 외부에 보여주는 스톱워치 상태 스냅샷.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopwatchState {
    pub running: bool,
    pub elapsed_seconds: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    phase: StopwatchPhase,
    elapsed_seconds: u64,
    next_tick_at: Option<Instant>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> StopwatchPhase {
        self.phase
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn state(&self) -> StopwatchState {
        StopwatchState {
            running: self.phase == StopwatchPhase::Running,
            elapsed_seconds: self.elapsed_seconds,
        }
    }

    /// 0부터 새로 잰다. 일시정지 후 이어서 재는 기능은 없다.
    pub fn start(&mut self, now: Instant) {
        self.phase = StopwatchPhase::Running;
        self.elapsed_seconds = 0;
        self.next_tick_at = Some(now + TICK_INTERVAL);
    }

    /// 1초 틱 하나. 실행 중이 아니면 아무것도 하지 않는다.
    pub fn tick(&mut self) {
        if self.phase == StopwatchPhase::Running {
            self.elapsed_seconds += 1;
        }
    }

    /// `now`까지 도래한 틱을 반영하고, 반영한 틱 수를 돌려준다.
    pub fn poll(&mut self, now: Instant) -> u64 {
        let Some(next) = self.next_tick_at else {
            return 0;
        };
        if self.phase != StopwatchPhase::Running || now < next {
            return 0;
        }
        let due = 1 + now.duration_since(next).as_secs();
        for _ in 0..due {
            self.tick();
        }
        self.next_tick_at = Some(next + Duration::from_secs(due));
        due
    }

    /// 실행 중일 때만 멈춘다. 멈추기 직전까지 도래한 틱은 반영한다.
    pub fn stop(&mut self, now: Instant) {
        if self.phase != StopwatchPhase::Running {
            return;
        }
        self.poll(now);
        self.phase = StopwatchPhase::Stopped;
        self.next_tick_at = None;
    }

    /// 어떤 상태에서든 Idle(0)으로 돌아가며 예정된 틱을 버린다.
    pub fn reset(&mut self) {
        self.phase = StopwatchPhase::Idle;
        self.elapsed_seconds = 0;
        self.next_tick_at = None;
    }

    /// 현재 경과 초를 측정 입력에 복사한다. 스톱워치 상태는 바뀌지 않는다.
    pub fn commit(&self, sample: &mut MeasurementSample) -> u64 {
        sample.elapsed_seconds = Some(self.elapsed_seconds as f64);
        self.elapsed_seconds
    }
}

/// 초를 `MM:SS` 로 표시한다.
pub fn format_mm_ss(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::format_mm_ss;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(65), "01:05");
        assert_eq!(format_mm_ss(3599), "59:59");
        assert_eq!(format_mm_ss(6000), "100:00");
    }
}
