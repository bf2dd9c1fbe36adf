//! 스톱워치 상태 전이와 커밋 테스트.
use std::time::{Duration, Instant};

use gas_rate_toolbox::conversion::RawReading;
use gas_rate_toolbox::gas::heat_input::{measure, MeasurementSample};
use gas_rate_toolbox::gas::properties::GasTable;
use gas_rate_toolbox::stopwatch::{Stopwatch, StopwatchPhase, StopwatchState};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn counts_manual_ticks_while_running() {
    let mut sw = Stopwatch::new();
    sw.start(Instant::now());
    for _ in 0..5 {
        sw.tick();
    }
    assert_eq!(
        sw.state(),
        StopwatchState {
            running: true,
            elapsed_seconds: 5
        }
    );
}

#[test]
fn ticks_are_ignored_unless_running() {
    let mut sw = Stopwatch::new();
    sw.tick();
    assert_eq!(sw.elapsed_seconds(), 0);

    let t0 = Instant::now();
    sw.start(t0);
    sw.tick();
    sw.stop(t0);
    sw.tick();
    assert_eq!(sw.elapsed_seconds(), 1);
    assert_eq!(sw.phase(), StopwatchPhase::Stopped);
}

#[test]
fn polling_applies_whole_seconds_only() {
    let t0 = Instant::now();
    let mut sw = Stopwatch::new();
    sw.start(t0);
    assert_eq!(sw.poll(t0 + ms(999)), 0);
    assert_eq!(sw.poll(t0 + ms(1000)), 1);
    assert_eq!(sw.poll(t0 + ms(3500)), 2);
    sw.stop(t0 + ms(5400));
    assert_eq!(sw.elapsed_seconds(), 5);

    // 정지 후에는 시간이 흘러도 늘지 않는다
    assert_eq!(sw.poll(t0 + ms(60_000)), 0);
    assert_eq!(sw.elapsed_seconds(), 5);
}

#[test]
fn stop_without_start_is_a_no_op() {
    let mut sw = Stopwatch::new();
    sw.stop(Instant::now());
    assert_eq!(sw.phase(), StopwatchPhase::Idle);
    assert_eq!(sw.elapsed_seconds(), 0);
}

#[test]
fn reset_returns_to_idle_from_any_state() {
    let t0 = Instant::now();
    let mut running = Stopwatch::new();
    running.start(t0);
    running.poll(t0 + ms(2000));
    running.reset();
    assert_eq!(running.phase(), StopwatchPhase::Idle);
    assert_eq!(running.elapsed_seconds(), 0);
    // 리셋 전에 예정돼 있던 틱은 버려진다
    assert_eq!(running.poll(t0 + ms(10_000)), 0);

    let mut stopped = Stopwatch::new();
    stopped.start(t0);
    stopped.stop(t0 + ms(4000));
    stopped.reset();
    assert_eq!(stopped.state().elapsed_seconds, 0);
    assert!(!stopped.state().running);
}

#[test]
fn restart_counts_from_zero() {
    let t0 = Instant::now();
    let mut sw = Stopwatch::new();
    sw.start(t0);
    sw.stop(t0 + ms(3000));
    sw.start(t0 + ms(10_000));
    assert_eq!(sw.elapsed_seconds(), 0);
    assert_eq!(sw.poll(t0 + ms(12_000)), 2);
}

#[test]
fn commit_copies_elapsed_into_sample_without_touching_stopwatch() {
    let t0 = Instant::now();
    let mut sw = Stopwatch::new();
    sw.start(t0);
    sw.stop(t0 + ms(180_200));

    let mut sample = MeasurementSample::new(RawReading::Metric {
        start: 100.0,
        end: 100.156,
    });
    let before = sw.state();
    assert_eq!(sw.commit(&mut sample), 180);
    assert_eq!(sample.elapsed_seconds, Some(180.0));
    assert_eq!(sw.state(), before);

    let r = measure(&sample, &GasTable::default()).unwrap();
    assert_eq!(r.for_display().gross_kw, 35.01);
}

#[test]
fn committing_zero_seconds_leaves_result_unavailable() {
    let sw = Stopwatch::new();
    let mut sample = MeasurementSample::new(RawReading::Imperial { dial_cu_ft: 1.0 });
    sw.commit(&mut sample);
    assert!(measure(&sample, &GasTable::default()).is_err());
}
