//! Camera modes, poses, and pose-by-mode storage.

use glam::DVec3;

/// One of the two navigation schemes. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CameraMode {
    /// Overhead view: rotation locked, pan and zoom only.
    #[default]
    Planar,
    /// Full orbit.
    Free,
}

impl CameraMode {
    /// The other mode.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Planar => Self::Free,
            Self::Free => Self::Planar,
        }
    }

    /// Whether the shell's orbit controls may rotate in this mode.
    pub fn rotate_enabled(&self) -> bool {
        matches!(self, Self::Free)
    }

    /// Polar-angle limits for the shell's orbit controls, in radians.
    ///
    /// Planar pins both limits to the equator so the view cannot tilt;
    /// free allows the full range.
    pub fn polar_angle_limits(&self) -> (f64, f64) {
        match self {
            Self::Planar => (std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2),
            Self::Free => (0.0, std::f64::consts::PI),
        }
    }

    /// The default vantage for this mode.
    ///
    /// Planar starts above the system plane looking straight down at the
    /// star; free starts at an oblique corner vantage.
    pub fn default_pose(&self) -> CameraPose {
        match self {
            Self::Planar => CameraPose {
                position: DVec3::new(0.0, 0.0, 50.0),
                target: DVec3::ZERO,
                zoom: 1.0,
            },
            Self::Free => CameraPose {
                position: DVec3::new(30.0, 30.0, 30.0),
                target: DVec3::ZERO,
                zoom: 1.0,
            },
        }
    }
}

/// Position, look target, and zoom of the scene camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// Camera position in scene units.
    pub position: DVec3,
    /// Orbit/look target in scene units.
    pub target: DVec3,
    /// Projection zoom factor.
    pub zoom: f64,
}

impl Default for CameraPose {
    fn default() -> Self {
        CameraMode::default().default_pose()
    }
}

/// Saved pose snapshots, keyed by camera mode.
///
/// Storage outlives catalog reloads: swapping catalogs must not reset a
/// mode's saved vantage. A mode with no snapshot resets to its default
/// pose on the next switch into it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PoseStore {
    planar: Option<CameraPose>,
    free: Option<CameraPose>,
}

impl PoseStore {
    /// Snapshot a pose under a mode's key, replacing any prior snapshot.
    pub fn save(&mut self, mode: CameraMode, pose: CameraPose) {
        *self.slot_mut(mode) = Some(pose);
    }

    /// The saved pose for a mode, if one was ever saved.
    pub fn saved(&self, mode: CameraMode) -> Option<CameraPose> {
        match mode {
            CameraMode::Planar => self.planar,
            CameraMode::Free => self.free,
        }
    }

    /// The pose to adopt when switching into `mode`: the saved snapshot,
    /// or the mode's default when none exists yet.
    pub fn restore_or_default(&self, mode: CameraMode) -> CameraPose {
        self.saved(mode).unwrap_or_else(|| mode.default_pose())
    }

    /// Drop the snapshot for a mode, so the next switch into it resets to
    /// the default vantage.
    pub fn reset(&mut self, mode: CameraMode) {
        *self.slot_mut(mode) = None;
    }

    fn slot_mut(&mut self, mode: CameraMode) -> &mut Option<CameraPose> {
        match mode {
            CameraMode::Planar => &mut self.planar,
            CameraMode::Free => &mut self.free,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_toggle_between_exactly_two() {
        assert_eq!(CameraMode::Planar.toggled(), CameraMode::Free);
        assert_eq!(CameraMode::Free.toggled(), CameraMode::Planar);
        assert_eq!(CameraMode::Planar.toggled().toggled(), CameraMode::Planar);
    }

    #[test]
    fn test_planar_locks_rotation() {
        assert!(!CameraMode::Planar.rotate_enabled());
        let (min, max) = CameraMode::Planar.polar_angle_limits();
        assert_eq!(min, max, "planar pins the polar angle");

        assert!(CameraMode::Free.rotate_enabled());
        let (min, max) = CameraMode::Free.polar_angle_limits();
        assert!(min < max);
    }

    #[test]
    fn test_default_poses_differ_per_mode() {
        let planar = CameraMode::Planar.default_pose();
        let free = CameraMode::Free.default_pose();
        assert_ne!(planar.position, free.position);
        assert_eq!(planar.target, DVec3::ZERO);
        assert_eq!(free.target, DVec3::ZERO);
        // Planar sits on the view axis above the plane.
        assert_eq!(planar.position.x, 0.0);
        assert_eq!(planar.position.y, 0.0);
    }

    #[test]
    fn test_store_returns_default_until_saved() {
        let mut store = PoseStore::default();
        assert_eq!(
            store.restore_or_default(CameraMode::Free),
            CameraMode::Free.default_pose()
        );

        let custom = CameraPose {
            position: DVec3::new(1.0, 2.0, 3.0),
            target: DVec3::new(4.0, 5.0, 6.0),
            zoom: 2.0,
        };
        store.save(CameraMode::Free, custom);
        assert_eq!(store.restore_or_default(CameraMode::Free), custom);
        // The other mode's slot is untouched.
        assert!(store.saved(CameraMode::Planar).is_none());
    }

    #[test]
    fn test_reset_clears_one_slot() {
        let mut store = PoseStore::default();
        let custom = CameraPose {
            position: DVec3::splat(9.0),
            target: DVec3::ZERO,
            zoom: 1.0,
        };
        store.save(CameraMode::Planar, custom);
        store.save(CameraMode::Free, custom);
        store.reset(CameraMode::Planar);
        assert!(store.saved(CameraMode::Planar).is_none());
        assert_eq!(store.saved(CameraMode::Free), Some(custom));
    }
}
