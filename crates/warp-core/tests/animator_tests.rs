// Host-side tests for the animator loop and frame painting.

use glam::{Vec2, Vec4};
use std::cell::Cell;
use std::rc::Rc;
use warp_core::constants::MAX_STAR_COUNT;
use warp_core::*;

const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Debug, Clone, PartialEq)]
enum Cmd {
    Rect { origin: Vec2, size: Vec2, color: Vec4 },
    Line { from: Vec2, to: Vec2, width: f32, color: Vec4 },
    Circle { center: Vec2, radius: f32, color: Vec4 },
}

#[derive(Default)]
struct RecordingSurface {
    cmds: Vec<Cmd>,
}

impl Surface2d for RecordingSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Vec4) {
        self.cmds.push(Cmd::Rect { origin, size, color });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Vec4) {
        self.cmds.push(Cmd::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Vec4) {
        self.cmds.push(Cmd::Circle {
            center,
            radius,
            color,
        });
    }
}

fn make_wormhole(playback: Playback) -> Animator<Wormhole> {
    Animator::wormhole(
        &AnimatorConfig::wormhole(),
        Viewport::new(800.0, 600.0),
        11,
        playback,
    )
    .expect("default config is valid")
}

fn run_until(anim: &mut Animator<Wormhole>, elapsed_ms: f64) {
    let mut now = 0.0;
    while now <= elapsed_ms {
        anim.frame(now);
        now += FRAME_MS;
    }
}

#[test]
fn ramp_saturates_when_later_phases_never_arrive() {
    let mut cfg = AnimatorConfig::wormhole();
    cfg.wormhole.peak_at_ms = f64::INFINITY;
    cfg.wormhole.flash_at_ms = f64::INFINITY;
    let mut anim = Animator::wormhole(&cfg, Viewport::new(1280.0, 720.0), 3, Playback::Play)
        .expect("infinite thresholds are valid");
    assert_eq!(anim.field().len(), 4000);

    let mut now = 0.0;
    while now < 9000.0 {
        let state = *anim.frame(now);
        assert!(state.phase <= WormholePhase::Accelerate);
        for s in anim.field().stars() {
            assert!(s.depth > 0.0 && s.depth <= 2000.0);
        }
        now += FRAME_MS;
    }
    let state = anim.state();
    assert_eq!(state.phase, WormholePhase::Accelerate);
    assert!((state.speed - 80.2).abs() < 1e-3, "speed {}", state.speed);
    assert_eq!(state.warp, 1.0);
    assert!(!anim.is_complete());
}

#[test]
fn state_tracks_the_clock() {
    let mut anim = make_wormhole(Playback::Play);
    let first = *anim.frame(1000.0);
    assert_eq!(first.start_ms, Some(1000.0));
    assert_eq!(first.elapsed_ms, 0.0);
    assert_eq!(first.phase, WormholePhase::Drift);
    assert_eq!(first.speed, 0.2);
    assert_eq!(first.shake, Vec2::ZERO);

    let accel = *anim.frame(1000.0 + 6000.0);
    assert_eq!(accel.phase, WormholePhase::Accelerate);
    assert!((accel.warp - 0.5).abs() < 1e-6);
    // shake is a jitter inside the disc of the sampled magnitude
    assert!(accel.shake.length() <= 3.0 + 1e-4);
}

#[test]
fn completion_callback_fires_once_through_animator() {
    let mut anim = make_wormhole(Playback::Play);
    let fired = Rc::new(Cell::new(0u32));
    let f = fired.clone();
    anim.on_complete(Box::new(move || f.set(f.get() + 1)));

    run_until(&mut anim, 10_100.0);
    assert_eq!(fired.get(), 0);
    run_until(&mut anim, 15_000.0);
    assert_eq!(fired.get(), 1);
    assert!(anim.is_complete());
    assert_eq!(anim.phase(), WormholePhase::Coast);
}

#[test]
fn skipped_animator_coasts_without_completing() {
    let mut anim = make_wormhole(Playback::Skip);
    let fired = Rc::new(Cell::new(false));
    let f = fired.clone();
    anim.on_complete(Box::new(move || f.set(true)));
    assert_eq!(anim.phase(), WormholePhase::Coast);

    run_until(&mut anim, 20_000.0);
    assert_eq!(anim.phase(), WormholePhase::Coast);
    assert_eq!(anim.state().speed, 0.4);
    assert_eq!(anim.state().flash, 0.0);
    assert!(!fired.get());
}

#[test]
fn skip_mid_sequence_jumps_to_coast() {
    let mut anim = make_wormhole(Playback::Play);
    let fired = Rc::new(Cell::new(false));
    let f = fired.clone();
    anim.on_complete(Box::new(move || f.set(true)));
    run_until(&mut anim, 9000.0);
    assert_eq!(anim.phase(), WormholePhase::Peak);

    anim.skip();
    anim.frame(9100.0);
    assert_eq!(anim.phase(), WormholePhase::Coast);
    assert_eq!(anim.state().warp, 0.0);
    run_until(&mut anim, 12_000.0);
    assert!(!fired.get());
}

#[test]
fn draw_paints_background_then_dots() {
    let mut anim = make_wormhole(Playback::Play);
    anim.frame(0.0);
    let mut surface = RecordingSurface::default();
    anim.draw(&mut surface);

    let bg = anim.palette().background;
    assert_eq!(
        surface.cmds.first(),
        Some(&Cmd::Rect {
            origin: Vec2::ZERO,
            size: Vec2::new(800.0, 600.0),
            color: bg,
        })
    );
    let circles = surface
        .cmds
        .iter()
        .filter(|c| matches!(c, Cmd::Circle { .. }))
        .count();
    assert!(circles > 0 && circles <= 4000);
    assert!(!surface.cmds.iter().any(|c| matches!(c, Cmd::Line { .. })));
    // no flash overlay during drift
    assert_eq!(
        surface
            .cmds
            .iter()
            .filter(|c| matches!(c, Cmd::Rect { .. }))
            .count(),
        1
    );
}

#[test]
fn draw_paints_streaks_at_peak_and_flash_overlay_last() {
    let mut anim = make_wormhole(Playback::Play);
    run_until(&mut anim, 9000.0);
    let mut surface = RecordingSurface::default();
    anim.draw(&mut surface);
    assert!(surface.cmds.iter().any(|c| matches!(c, Cmd::Line { .. })));
    assert!(!surface.cmds.iter().any(|c| matches!(c, Cmd::Circle { .. })));

    anim.frame(10_200.0);
    assert_eq!(anim.phase(), WormholePhase::Flash);
    let mut surface = RecordingSurface::default();
    anim.draw(&mut surface);
    match surface.cmds.last() {
        Some(Cmd::Rect { color, .. }) => {
            assert!(color.w > 0.9);
            assert_eq!(color.truncate(), anim.palette().flash);
        }
        other => panic!("expected flash rect last, got {other:?}"),
    }
}

#[test]
fn draw_frame_skips_invisible_sprites_and_orders_streak_tail_first() {
    let palette = Palette::default();
    let sprites = [
        Sprite::Dot {
            center: Vec2::new(5.0, 5.0),
            radius: 1.0,
            alpha: 0.0,
        },
        Sprite::Streak {
            head: Vec2::new(30.0, 30.0),
            tail: Vec2::new(20.0, 20.0),
            width: 2.0,
            alpha: 0.5,
        },
    ];
    let mut surface = RecordingSurface::default();
    draw_frame(
        &mut surface,
        Viewport::new(100.0, 50.0),
        &palette,
        &sprites,
        0.0,
    );
    assert_eq!(surface.cmds.len(), 2);
    assert_eq!(
        surface.cmds[1],
        Cmd::Line {
            from: Vec2::new(20.0, 20.0),
            to: Vec2::new(30.0, 30.0),
            width: 2.0,
            color: palette.star.extend(0.5),
        }
    );
}

#[test]
fn degenerate_viewport_draws_nothing_and_recovers() {
    let mut anim = make_wormhole(Playback::Play);
    anim.resize(Viewport::new(0.0, 0.0));
    anim.frame(0.0);
    anim.frame(FRAME_MS);
    let mut surface = RecordingSurface::default();
    anim.draw(&mut surface);
    assert!(surface.cmds.is_empty());

    anim.resize(Viewport::new(320.0, 200.0));
    anim.frame(2.0 * FRAME_MS);
    anim.draw(&mut surface);
    assert!(!surface.cmds.is_empty());
    assert_eq!(anim.field().len(), 4000);
    assert_eq!(anim.field().half_extents(), Vec2::new(160.0, 100.0));
}

#[test]
fn parallax_shifts_projection_center() {
    let mut anim = make_wormhole(Playback::Play);
    anim.frame(0.0);
    let base = anim.view().center;
    anim.set_parallax(parallax_offset([1.0, 1.0], 40.0));
    assert_eq!(anim.view().center, base + Vec2::new(-20.0, -20.0));
}

#[test]
fn portal_preset_runs_to_exit() {
    let mut anim = Animator::portal(
        &AnimatorConfig::portal(),
        Viewport::new(640.0, 480.0),
        5,
        Playback::Play,
    )
    .expect("portal preset is valid");
    let fired = Rc::new(Cell::new(false));
    let f = fired.clone();
    anim.on_complete(Box::new(move || f.set(true)));
    assert_eq!(anim.field().len(), 1500);

    assert_eq!(anim.frame(0.0).phase, PortalPhase::Warp);
    assert_eq!(anim.frame(2000.0).phase, PortalPhase::Slowmo);
    assert!(!fired.get());
    assert_eq!(anim.frame(3300.0).phase, PortalPhase::Exit);
    assert!(fired.get());
    assert_eq!(anim.state().speed, 0.5);
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = AnimatorConfig::wormhole();
    cfg.star_count = 0;
    let result = Animator::wormhole(&cfg, Viewport::new(10.0, 10.0), 0, Playback::Play);
    assert!(matches!(result, Err(ConfigError::EmptyField)));
}

#[test]
fn oversized_star_count_is_rejected_before_allocation() {
    let mut cfg = AnimatorConfig::wormhole();
    cfg.star_count = usize::MAX / 8;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::TooManyStars {
            max: MAX_STAR_COUNT,
            got: usize::MAX / 8,
        })
    );
    let result = Animator::portal(&cfg, Viewport::new(10.0, 10.0), 0, Playback::Play);
    assert!(matches!(result, Err(ConfigError::TooManyStars { .. })));

    cfg.star_count = MAX_STAR_COUNT;
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn generic_constructor_validates_config() {
    let mut cfg = AnimatorConfig::wormhole();
    cfg.z_max = 0.0;
    let script = Wormhole::new(cfg.wormhole.clone(), cfg.shake_max_px);
    let result = Animator::new(script, &cfg, Viewport::new(10.0, 10.0), 0, Playback::Play);
    assert!(matches!(result, Err(ConfigError::NonPositive { name: "z_max", .. })));
}

#[test]
fn camera_projects_rig_pose() {
    let rig_pose = CameraPath::Helix(Helix::new(4)).pose_at(0.0);
    let cam = Camera::from_pose(&rig_pose, 800.0 / 600.0);
    let viewport = Vec2::new(800.0, 600.0);

    // helix axis at the camera's height lands in the screen center
    let (px, depth) = cam
        .world_to_screen(glam::Vec3::new(0.0, 0.0, 0.0), viewport)
        .expect("axis is in front of the camera");
    assert!((px - Vec2::new(400.0, 300.0)).length() < 1e-2);
    assert!((depth - rig_pose.position.z).abs() < 1e-3);

    // behind the camera
    assert!(cam
        .world_to_screen(rig_pose.position + glam::Vec3::Z * 5.0, viewport)
        .is_none());
}
