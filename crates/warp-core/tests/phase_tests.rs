// Host-side tests for the phase clock and the built-in scripts.

use std::cell::Cell;
use std::rc::Rc;
use warp_core::*;

fn wormhole_clock(playback: Playback) -> PhaseClock<Wormhole> {
    let cfg = AnimatorConfig::wormhole();
    PhaseClock::new(Wormhole::new(cfg.wormhole, cfg.shake_max_px), playback)
}

fn counting_callback(clock: &mut PhaseClock<Wormhole>) -> Rc<Cell<u32>> {
    let fired = Rc::new(Cell::new(0u32));
    let f = fired.clone();
    clock.on_complete(Box::new(move || f.set(f.get() + 1)));
    fired
}

#[test]
fn wormhole_phases_follow_thresholds() {
    let script = Wormhole::new(WormholeTimings::default(), 6.0);
    let cases = [
        (0.0, WormholePhase::Drift),
        (3999.0, WormholePhase::Drift),
        (4000.0, WormholePhase::Accelerate),
        (7999.0, WormholePhase::Accelerate),
        (8000.0, WormholePhase::Peak),
        (10_199.0, WormholePhase::Peak),
        (10_200.0, WormholePhase::Flash),
        (10_799.0, WormholePhase::Flash),
        (10_800.0, WormholePhase::Coast),
        (60_000.0, WormholePhase::Coast),
    ];
    for (elapsed, expected) in cases {
        assert_eq!(
            script.sample(elapsed).phase,
            expected,
            "wrong phase at {elapsed} ms"
        );
    }
}

#[test]
fn wormhole_speed_and_warp_per_phase() {
    let script = Wormhole::new(WormholeTimings::default(), 6.0);

    let drift = script.sample(1000.0);
    assert_eq!(drift.speed, 0.2);
    assert_eq!(drift.warp, 0.0);
    assert_eq!(drift.shake, 0.0);

    let mid = script.sample(6000.0);
    assert!((mid.progress - 0.5).abs() < 1e-6);
    assert!((mid.speed - (0.2 + 0.25 * 80.0)).abs() < 1e-4);
    assert!((mid.warp - 0.5).abs() < 1e-6);
    assert!((mid.shake - 3.0).abs() < 1e-5);

    let peak = script.sample(9000.0);
    assert_eq!(peak.speed, 100.0);
    assert_eq!(peak.warp, 1.0);

    let flash = script.sample(10_200.0);
    assert_eq!(flash.flash, 1.0);
    assert_eq!(flash.speed, 0.4);

    let coast = script.sample(20_000.0);
    assert_eq!(coast.speed, 0.4);
    assert_eq!(coast.warp, 0.0);
    assert_eq!(coast.flash, 0.0);
}

#[test]
fn accelerate_speed_is_non_decreasing() {
    let script = Wormhole::new(WormholeTimings::default(), 6.0);
    let mut prev = 0.0f32;
    let mut e = 4000.0;
    while e < 8000.0 {
        let s = script.sample(e);
        assert!(s.speed >= prev, "speed dropped at {e} ms");
        prev = s.speed;
        e += 16.0;
    }
}

#[test]
fn completion_fires_exactly_once() {
    let mut clock = wormhole_clock(Playback::Play);
    let fired = counting_callback(&mut clock);

    let mut completed_ticks = 0;
    let mut now = 500.0;
    while now <= 20_000.0 {
        let tick = clock.tick(now);
        if tick.completed {
            completed_ticks += 1;
        }
        let elapsed = now - 500.0;
        if elapsed >= 10_200.0 {
            assert_eq!(fired.get(), 1, "callback not fired by {elapsed} ms");
        } else {
            assert_eq!(fired.get(), 0, "callback fired early at {elapsed} ms");
        }
        now += 1000.0 / 60.0;
    }
    for _ in 0..10 {
        clock.tick(now);
    }
    assert_eq!(fired.get(), 1);
    assert_eq!(completed_ticks, 1);
    assert!(clock.is_complete());
}

#[test]
fn completion_fires_even_when_frames_jump_past_flash() {
    let mut clock = wormhole_clock(Playback::Play);
    let fired = counting_callback(&mut clock);
    clock.tick(0.0);
    let tick = clock.tick(30_000.0);
    assert_eq!(tick.sample.phase, WormholePhase::Coast);
    assert!(tick.completed);
    assert_eq!(fired.get(), 1);
}

#[test]
fn skip_starts_terminal_and_never_completes() {
    let mut clock = wormhole_clock(Playback::Skip);
    let fired = counting_callback(&mut clock);

    let first = clock.tick(123.0);
    assert_eq!(first.sample.phase, WormholePhase::Coast);
    assert_eq!(first.entered, Some(WormholePhase::Coast));
    for i in 0..1200 {
        let t = clock.tick(123.0 + i as f64 * 16.0);
        assert_eq!(t.sample.phase, WormholePhase::Coast);
        assert!(!t.completed);
    }
    assert_eq!(fired.get(), 0);
    assert!(!clock.is_complete());
}

#[test]
fn mid_playback_skip_drops_callback() {
    let mut clock = wormhole_clock(Playback::Play);
    let fired = counting_callback(&mut clock);
    clock.tick(0.0);
    clock.tick(5000.0);
    clock.skip();
    let t = clock.tick(5016.0);
    assert_eq!(t.sample.phase, WormholePhase::Coast);
    clock.tick(50_000.0);
    assert_eq!(fired.get(), 0);
}

#[test]
fn phase_never_regresses_when_time_goes_backwards() {
    let mut clock = wormhole_clock(Playback::Play);
    clock.tick(1000.0);
    let peak = clock.tick(1000.0 + 9000.0);
    assert_eq!(peak.sample.phase, WormholePhase::Peak);
    let back = clock.tick(1000.0 + 2000.0);
    assert_eq!(back.sample.phase, WormholePhase::Peak);
    assert_eq!(back.entered, None);
    assert_eq!(clock.elapsed_ms(), 9000.0);
}

#[test]
fn start_time_latches_on_first_tick() {
    let mut clock = wormhole_clock(Playback::Play);
    assert_eq!(clock.start_ms(), None);
    let t = clock.tick(42_000.0);
    assert_eq!(clock.start_ms(), Some(42_000.0));
    assert_eq!(t.elapsed_ms, 0.0);
    assert_eq!(t.sample.phase, WormholePhase::Drift);
}

#[test]
fn non_finite_timestamps_do_not_latch_the_start() {
    let mut clock = wormhole_clock(Playback::Play);
    let t = clock.tick(f64::NAN);
    assert_eq!(clock.start_ms(), None);
    assert_eq!(t.sample.phase, WormholePhase::Drift);
    clock.tick(f64::INFINITY);
    assert_eq!(clock.start_ms(), None);

    clock.tick(1_000.0);
    assert_eq!(clock.start_ms(), Some(1_000.0));
    let later = clock.tick(1_000.0 + 50_000.0);
    assert_eq!(later.sample.phase, WormholePhase::Coast);
    assert!(clock.is_complete());
}

#[test]
fn entered_reports_each_phase_once_in_order() {
    let mut clock = wormhole_clock(Playback::Play);
    let mut seen = Vec::new();
    let mut now = 0.0;
    while now < 12_000.0 {
        if let Some(p) = clock.tick(now).entered {
            seen.push(p);
        }
        now += 10.0;
    }
    assert_eq!(
        seen,
        vec![
            WormholePhase::Drift,
            WormholePhase::Accelerate,
            WormholePhase::Peak,
            WormholePhase::Flash,
            WormholePhase::Coast,
        ]
    );
}

#[test]
fn portal_runs_warp_slowmo_exit() {
    let script = Portal::new(PortalTimings::default(), 6.0);
    let warp = script.sample(0.0);
    assert_eq!(warp.phase, PortalPhase::Warp);
    assert_eq!(warp.speed, 60.0);
    assert_eq!(warp.warp, 1.0);
    assert!((warp.shake - 3.0).abs() < 1e-6);

    let slow = script.sample(2200.0);
    assert_eq!(slow.phase, PortalPhase::Slowmo);
    assert!(slow.speed < 60.0 && slow.speed > 0.5);
    assert!((slow.warp - 0.5).abs() < 1e-6);

    let exit = script.sample(3200.0);
    assert_eq!(exit.phase, PortalPhase::Exit);
    assert_eq!(exit.speed, 0.5);

    let mut clock = PhaseClock::new(script, Playback::Play);
    let fired = Rc::new(Cell::new(false));
    let f = fired.clone();
    clock.on_complete(Box::new(move || f.set(true)));
    clock.tick(0.0);
    assert!(!fired.get());
    clock.tick(3200.0);
    assert!(fired.get());
}

#[test]
fn zero_length_flash_still_completes() {
    let timings = WormholeTimings {
        flash_ms: 0.0,
        ..WormholeTimings::default()
    };
    let mut clock = PhaseClock::new(Wormhole::new(timings, 0.0), Playback::Play);
    clock.tick(0.0);
    let t = clock.tick(10_200.0);
    assert_eq!(t.sample.phase, WormholePhase::Coast);
    assert!(t.completed);
}
