//! Scroll-driven camera choreography.
//!
//! A [`CameraPath`] maps a scroll fraction in \[0, 1\] to a camera [`Pose`].
//! The mapping is stateless and continuous; [`PoseFollower`] adds the damped,
//! non-snappy following on top, and [`CameraRig`] bundles both with per-block
//! reveal factors for the host scene graph.

use crate::constants::*;
use crate::easing::{clamp01, damp_alpha, smoothstep};
use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, ConfigError};
use glam::{Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    /// Unit view direction (the rotated -Z axis).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

/// Spiral of content blocks with the camera orbiting outside it.
#[derive(Clone, Debug, PartialEq)]
pub struct Helix {
    pub block_count: usize,
    /// Radians between consecutive blocks.
    pub angle_step: f32,
    /// Vertical distance between consecutive blocks.
    pub block_spacing: f32,
    pub camera_radius: f32,
    pub block_radius: f32,
}

impl Helix {
    pub fn new(block_count: usize) -> Self {
        Self {
            block_count,
            angle_step: HELIX_ANGLE_STEP,
            block_spacing: HELIX_BLOCK_SPACING,
            camera_radius: HELIX_CAMERA_RADIUS,
            block_radius: HELIX_BLOCK_RADIUS,
        }
    }

    pub fn total_height(&self) -> f32 {
        self.block_spacing * self.block_count.saturating_sub(1) as f32
    }

    fn span(&self) -> f32 {
        self.block_count.saturating_sub(1) as f32
    }

    fn pose_at(&self, f: f32) -> Pose {
        let angle = f * self.span() * self.angle_step;
        let y = -f * self.total_height();
        Pose {
            position: Vec3::new(
                self.camera_radius * angle.sin(),
                y,
                self.camera_radius * angle.cos(),
            ),
            // -Z rotated by `angle` points back at the helix axis
            rotation: Quat::from_rotation_y(angle),
        }
    }

    pub fn block_anchor(&self, index: usize) -> Vec3 {
        let angle = index as f32 * self.angle_step;
        Vec3::new(
            self.block_radius * angle.sin(),
            -(index as f32) * self.block_spacing,
            self.block_radius * angle.cos(),
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CameraPath {
    /// Straight dolly with a fixed heading and evenly spaced blocks.
    Dolly {
        from: Vec3,
        to: Vec3,
        heading: Quat,
        blocks: usize,
    },
    /// Piecewise-linear walk through waypoints; one block per waypoint.
    Corridor { waypoints: Vec<Vec3>, heading: Quat },
    Helix(Helix),
}

impl CameraPath {
    /// Dolly straight down -Z over `length` world units.
    pub fn z_dolly(start_z: f32, length: f32, blocks: usize) -> Self {
        CameraPath::Dolly {
            from: Vec3::new(0.0, 0.0, start_z),
            to: Vec3::new(0.0, 0.0, start_z - length),
            heading: Quat::IDENTITY,
            blocks,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            CameraPath::Dolly { blocks, .. } if *blocks == 0 => {
                Err(ConfigError::PathTooShort { min: 1, got: 0 })
            }
            CameraPath::Corridor { waypoints, .. } if waypoints.is_empty() => {
                Err(ConfigError::PathTooShort { min: 1, got: 0 })
            }
            CameraPath::Helix(h) if h.block_count == 0 => {
                Err(ConfigError::PathTooShort { min: 1, got: 0 })
            }
            _ => Ok(()),
        }
    }

    /// Pose at `fraction`, clamped to \[0, 1\]. Continuous in `fraction`.
    pub fn pose_at(&self, fraction: f32) -> Pose {
        let f = if fraction.is_finite() { clamp01(fraction) } else { 0.0 };
        match self {
            CameraPath::Dolly {
                from, to, heading, ..
            } => Pose {
                position: from.lerp(*to, f),
                rotation: *heading,
            },
            CameraPath::Corridor { waypoints, heading } => Pose {
                position: polyline_at(waypoints, f),
                rotation: *heading,
            },
            CameraPath::Helix(h) => h.pose_at(f),
        }
    }

    pub fn block_count(&self) -> usize {
        match self {
            CameraPath::Dolly { blocks, .. } => *blocks,
            CameraPath::Corridor { waypoints, .. } => waypoints.len(),
            CameraPath::Helix(h) => h.block_count,
        }
    }

    pub fn block_anchor(&self, index: usize) -> Option<Vec3> {
        if index >= self.block_count() {
            return None;
        }
        Some(match self {
            CameraPath::Dolly {
                from, to, blocks, ..
            } => {
                let t = if *blocks > 1 {
                    index as f32 / (*blocks - 1) as f32
                } else {
                    0.0
                };
                from.lerp(*to, t)
            }
            CameraPath::Corridor { waypoints, .. } => waypoints[index],
            CameraPath::Helix(h) => h.block_anchor(index),
        })
    }

    /// Distance used for reveal: vertical on the helix, Euclidean elsewhere.
    fn reveal_distance(&self, camera: Vec3, anchor: Vec3) -> f32 {
        match self {
            CameraPath::Helix(_) => (camera.y - anchor.y).abs(),
            _ => camera.distance(anchor),
        }
    }
}

fn polyline_at(points: &[Vec3], f: f32) -> Vec3 {
    match points.len() {
        0 => Vec3::ZERO,
        1 => points[0],
        n => {
            let seg = f * (n - 1) as f32;
            let i = (seg.floor() as usize).min(n - 2);
            points[i].lerp(points[i + 1], seg - i as f32)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    SmoothStep,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => clamp01(t),
            Easing::SmoothStep => smoothstep(0.0, 1.0, t),
        }
    }
}

/// `smoothstep(0, 1, 1 - distance / range)`, in \[0, 1\].
#[inline]
pub fn reveal(distance: f32, range: f32) -> f32 {
    if range <= 0.0 {
        return if distance <= 0.0 { 1.0 } else { 0.0 };
    }
    smoothstep(0.0, 1.0, 1.0 - distance.abs() / range)
}

/// Stateless scroll → pose mapping with per-block visibility.
#[derive(Clone, Debug, PartialEq)]
pub struct PoseMapper {
    pub path: CameraPath,
    pub easing: Easing,
    pub reveal_range: f32,
}

impl PoseMapper {
    pub fn pose_at(&self, scroll_fraction: f32) -> Pose {
        self.path.pose_at(self.easing.apply(scroll_fraction))
    }

    pub fn block_visibility(&self, pose: &Pose, index: usize) -> f32 {
        match self.path.block_anchor(index) {
            Some(anchor) => reveal(
                self.path.reveal_distance(pose.position, anchor),
                self.reveal_range,
            ),
            None => 0.0,
        }
    }

    pub fn visibilities_into(&self, pose: &Pose, out: &mut Vec<f32>) {
        out.clear();
        out.extend((0..self.path.block_count()).map(|i| self.block_visibility(pose, i)));
    }
}

/// Exponential approach toward a target pose.
///
/// Rotation is slerped on quaternions, so yaw targets either side of ±π
/// blend along the short arc instead of spinning through zero.
#[derive(Clone, Debug, PartialEq)]
pub struct PoseFollower {
    pub tau_sec: f32,
    current: Option<Pose>,
}

impl PoseFollower {
    pub fn new(tau_sec: f32) -> Self {
        Self {
            tau_sec,
            current: None,
        }
    }

    /// Move toward `target`; the first call snaps.
    pub fn follow(&mut self, target: Pose, dt_sec: f32) -> Pose {
        let next = match self.current {
            None => target,
            Some(cur) => {
                let a = damp_alpha(dt_sec, self.tau_sec);
                Pose {
                    position: cur.position.lerp(target.position, a),
                    rotation: cur.rotation.slerp(target.rotation, a).normalize(),
                }
            }
        };
        self.current = Some(next);
        next
    }

    pub fn snap(&mut self, pose: Pose) {
        self.current = Some(pose);
    }

    pub fn current(&self) -> Option<Pose> {
        self.current
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RigConfig {
    pub path: CameraPath,
    pub easing: Easing,
    pub reveal_range: f32,
    pub follow_tau_sec: f32,
}

impl RigConfig {
    pub fn spiral(block_count: usize) -> Self {
        Self {
            path: CameraPath::Helix(Helix::new(block_count)),
            easing: Easing::Linear,
            reveal_range: REVEAL_RANGE,
            follow_tau_sec: FOLLOW_TAU_SEC,
        }
    }

    pub fn dolly(start_z: f32, length: f32, blocks: usize) -> Self {
        Self {
            path: CameraPath::z_dolly(start_z, length, blocks),
            easing: Easing::SmoothStep,
            reveal_range: REVEAL_RANGE,
            follow_tau_sec: FOLLOW_TAU_SEC,
        }
    }

    pub fn corridor(waypoints: Vec<Vec3>) -> Self {
        Self {
            path: CameraPath::Corridor {
                waypoints,
                heading: Quat::IDENTITY,
            },
            easing: Easing::Linear,
            reveal_range: REVEAL_RANGE,
            follow_tau_sec: FOLLOW_TAU_SEC,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.path.validate()?;
        ensure_positive("reveal_range", self.reveal_range as f64)?;
        // zero snaps; an infinite time constant would freeze the camera
        ensure_non_negative("follow_tau_sec", self.follow_tau_sec as f64)?;
        ensure_finite("follow_tau_sec", self.follow_tau_sec as f64)?;
        Ok(())
    }
}

/// Mapper plus follower: what a scroll scene holds on to between frames.
#[derive(Clone, Debug)]
pub struct CameraRig {
    mapper: PoseMapper,
    follower: PoseFollower,
    scroll: f32,
    pose: Pose,
}

impl CameraRig {
    pub fn new(config: RigConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mapper = PoseMapper {
            path: config.path,
            easing: config.easing,
            reveal_range: config.reveal_range,
        };
        let pose = mapper.pose_at(0.0);
        log::info!(
            "[rig] {} blocks, reveal_range={}, tau={}s",
            mapper.path.block_count(),
            mapper.reveal_range,
            config.follow_tau_sec
        );
        Ok(Self {
            mapper,
            follower: PoseFollower::new(config.follow_tau_sec),
            scroll: 0.0,
            pose,
        })
    }

    /// Feed the latest scroll fraction and frame time; returns the damped pose.
    pub fn update(&mut self, scroll_fraction: f32, dt_sec: f32) -> Pose {
        self.scroll = if scroll_fraction.is_finite() {
            clamp01(scroll_fraction)
        } else {
            self.scroll
        };
        let target = self.mapper.pose_at(self.scroll);
        self.pose = self.follower.follow(target, dt_sec);
        self.pose
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn target(&self) -> Pose {
        self.mapper.pose_at(self.scroll)
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    pub fn visibility(&self, index: usize) -> f32 {
        self.mapper.block_visibility(&self.pose, index)
    }

    pub fn visibilities_into(&self, out: &mut Vec<f32>) {
        self.mapper.visibilities_into(&self.pose, out);
    }

    pub fn mapper(&self) -> &PoseMapper {
        &self.mapper
    }
}
