mod common;

use std::time::Duration;

use common::Harness;
use termfolio::scheduler::Scheduler;
use termfolio::ui::loading::{
    Completion, CompletionStatus, LoadingPhase, LoadingSequencer, LoadingTimings, SequencerError,
};

fn started(harness: &Harness) -> (LoadingSequencer, Completion) {
    let mut sequencer = LoadingSequencer::new(&harness.handle(), LoadingTimings::default());
    let completion = sequencer.run().expect("run should succeed");
    (sequencer, completion)
}

#[test]
fn progress_grows_by_step_per_tick() {
    let harness = Harness::new();
    let (mut sequencer, _completion) = started(&harness);
    assert_eq!(sequencer.state().progress, 0);

    for n in 1..=60u32 {
        harness.advance(50, |id| {
            sequencer.on_timer(id);
        });
        let expected = (2 * n).min(100) as u8;
        assert_eq!(sequencer.state().progress, expected, "after tick {n}");
    }
}

#[test]
fn progress_never_decreases() {
    let harness = Harness::new();
    let (mut sequencer, _completion) = started(&harness);

    let mut last = 0;
    for _ in 0..700 {
        harness.advance(10, |id| {
            sequencer.on_timer(id);
        });
        let progress = sequencer.state().progress;
        assert!(progress >= last);
        assert!(progress <= 100);
        last = progress;
    }
    assert_eq!(last, 100);
}

#[test]
fn phases_follow_the_timeline() {
    let harness = Harness::new();
    let (mut sequencer, mut completion) = started(&harness);
    let step = |ms: u64, sequencer: &mut LoadingSequencer| {
        harness.advance(ms, |id| {
            sequencer.on_timer(id);
        });
    };

    // 50 ticks of 2% reach 100 at 2500 ms.
    step(2500, &mut sequencer);
    assert_eq!(sequencer.state().progress, 100);
    assert_eq!(sequencer.state().phase, LoadingPhase::Loading);

    step(499, &mut sequencer);
    assert_eq!(sequencer.state().phase, LoadingPhase::Loading);
    step(1, &mut sequencer);
    assert_eq!(sequencer.state().phase, LoadingPhase::Welcome);

    step(2499, &mut sequencer);
    assert_eq!(sequencer.state().phase, LoadingPhase::Welcome);
    step(1, &mut sequencer);
    assert_eq!(sequencer.state().phase, LoadingPhase::Complete);
    assert_eq!(completion.status(), CompletionStatus::Pending);

    step(999, &mut sequencer);
    assert_eq!(completion.status(), CompletionStatus::Pending);
    step(1, &mut sequencer);
    assert_eq!(completion.status(), CompletionStatus::Fired);
    assert_eq!(harness.now(), Duration::from_millis(6500));
}

#[test]
fn tick_is_cancelled_at_full_progress() {
    let harness = Harness::new();
    let (mut sequencer, _completion) = started(&harness);

    let mut fired = 0;
    harness.advance(2500, |id| {
        fired += 1;
        sequencer.on_timer(id);
    });
    assert_eq!(fired, 50);
    // Only the welcome delay is left.
    assert_eq!(harness.pending(), 1);
    assert_eq!(
        harness.queue.borrow().next_deadline(),
        Some(Duration::from_millis(3000))
    );
}

#[test]
fn completion_fires_exactly_once() {
    let harness = Harness::new();
    let (mut sequencer, mut completion) = started(&harness);

    harness.advance(6500, |id| {
        sequencer.on_timer(id);
    });
    assert!(completion.is_fired());
    assert_eq!(harness.pending(), 0);

    assert!(!sequencer.complete());
    harness.advance(10_000, |id| {
        sequencer.on_timer(id);
    });
    assert_eq!(completion.status(), CompletionStatus::Fired);
    assert_eq!(sequencer.state().phase, LoadingPhase::Complete);
}

#[test]
fn complete_is_ignored_before_complete_phase() {
    let harness = Harness::new();
    let (mut sequencer, mut completion) = started(&harness);

    assert!(!sequencer.complete());
    harness.advance(3000, |id| {
        sequencer.on_timer(id);
    });
    assert_eq!(sequencer.state().phase, LoadingPhase::Welcome);
    assert!(!sequencer.complete());
    assert_eq!(completion.status(), CompletionStatus::Pending);
}

#[test]
fn complete_can_be_called_early_in_complete_phase() {
    let harness = Harness::new();
    let (mut sequencer, mut completion) = started(&harness);

    harness.advance(5500, |id| {
        sequencer.on_timer(id);
    });
    assert_eq!(sequencer.state().phase, LoadingPhase::Complete);
    assert!(sequencer.complete());
    assert!(!sequencer.complete());
    assert!(completion.is_fired());
    // The pending fade-out timer went with it.
    assert_eq!(harness.pending(), 0);
}

#[test]
fn teardown_cancels_everything() {
    for stop_at in [0u64, 1200, 2500, 4000, 6000] {
        let harness = Harness::new();
        let (mut sequencer, mut completion) = started(&harness);
        harness.advance(stop_at, |id| {
            sequencer.on_timer(id);
        });

        let before = sequencer.state().clone();
        sequencer.teardown();
        assert_eq!(harness.pending(), 0, "stopped at {stop_at} ms");

        let scheduled = harness.scheduled_total();
        let fired = harness.advance(20_000, |id| {
            sequencer.on_timer(id);
        });
        assert_eq!(fired, 0);
        assert_eq!(harness.scheduled_total(), scheduled);
        assert_eq!(sequencer.state(), &before);
        assert_eq!(completion.status(), CompletionStatus::Abandoned);
    }
}

#[test]
fn dropping_the_sequencer_tears_it_down() {
    let harness = Harness::new();
    let (sequencer, mut completion) = started(&harness);
    assert_eq!(harness.pending(), 1);

    drop(sequencer);
    assert_eq!(harness.pending(), 0);
    assert_eq!(completion.status(), CompletionStatus::Abandoned);
}

#[test]
fn teardown_after_completion_keeps_it_fired() {
    let harness = Harness::new();
    let (mut sequencer, mut completion) = started(&harness);
    harness.advance(6500, |id| {
        sequencer.on_timer(id);
    });
    sequencer.teardown();
    assert_eq!(completion.status(), CompletionStatus::Fired);
}

#[test]
fn run_twice_is_rejected() {
    let harness = Harness::new();
    let (mut sequencer, _completion) = started(&harness);
    assert_eq!(sequencer.run().err(), Some(SequencerError::AlreadyStarted));
    // Still a single tick.
    assert_eq!(harness.pending(), 1);
}

#[test]
fn run_after_teardown_is_rejected() {
    let harness = Harness::new();
    let mut sequencer = LoadingSequencer::new(&harness.handle(), LoadingTimings::default());
    sequencer.teardown();
    assert_eq!(sequencer.run().err(), Some(SequencerError::TornDown));
    assert_eq!(harness.pending(), 0);
}

#[test]
fn custom_timings_are_honoured() {
    let harness = Harness::new();
    let timings = LoadingTimings {
        tick: Duration::from_millis(10),
        step: 25,
        welcome_delay: Duration::from_millis(100),
        welcome_dwell: Duration::from_millis(200),
        complete_delay: Duration::from_millis(300),
    };
    let mut sequencer = LoadingSequencer::new(&harness.handle(), timings);
    let mut completion = sequencer.run().expect("run should succeed");

    // 4 ticks to 100, then 100 + 200 + 300.
    harness.advance(639, |id| {
        sequencer.on_timer(id);
    });
    assert_eq!(completion.status(), CompletionStatus::Pending);
    harness.advance(1, |id| {
        sequencer.on_timer(id);
    });
    assert!(completion.is_fired());
}

#[test]
fn foreign_timers_are_ignored() {
    let harness = Harness::new();
    let (mut sequencer, _completion) = started(&harness);
    let other = harness.queue.borrow_mut().schedule_once(Duration::from_millis(20));

    let mut handled = Vec::new();
    harness.advance(20, |id| {
        handled.push((id, sequencer.on_timer(id)));
    });
    assert_eq!(handled, vec![(other, false)]);
    assert_eq!(sequencer.state().progress, 0);
}

#[tokio::test]
async fn wait_resolves_when_intro_completes() {
    let harness = Harness::new();
    let (mut sequencer, completion) = started(&harness);
    harness.advance(6500, |id| {
        sequencer.on_timer(id);
    });
    assert_eq!(completion.wait().await, Ok(()));
}

#[tokio::test]
async fn wait_fails_after_teardown() {
    let harness = Harness::new();
    let (mut sequencer, completion) = started(&harness);
    sequencer.teardown();
    assert_eq!(completion.wait().await, Err(SequencerError::Abandoned));
}

#[test]
fn zero_step_still_reaches_welcome() {
    let harness = Harness::new();
    let timings = LoadingTimings {
        step: 0,
        ..LoadingTimings::default()
    };
    let mut sequencer = LoadingSequencer::new(&harness.handle(), timings);
    assert_eq!(sequencer.timings().step, 1);
    let _completion = sequencer.run().expect("run should succeed");

    // 100 ticks of 1%, then the welcome delay.
    harness.advance(5000 + 500, |id| {
        sequencer.on_timer(id);
    });
    assert_eq!(sequencer.state().progress, 100);
    assert_eq!(sequencer.state().phase, LoadingPhase::Welcome);
}
