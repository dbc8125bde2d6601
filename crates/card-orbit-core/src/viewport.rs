//! Host-owned scene state
//!
//! Bundles everything a render host needs between frames: the cards, the
//! cached arrangements, the transition engine, camera settings and the slow
//! idle spin of the whole scene.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::dataset::Record;
use crate::error::{OrbitError, Result};
use crate::layout::{compute_arrangements, ArrangementKind, Arrangements, LayoutParams};
use crate::registry::ItemRegistry;
use crate::transition::{AdvanceReport, TransitionEngine, TransitionId};

/// Perspective camera and orbit-control limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    pub position_z: f64,
    pub min_distance: f64,
    pub max_distance: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 40.0,
            near: 1.0,
            far: 10_000.0,
            position_z: 3000.0,
            min_distance: 500.0,
            max_distance: 6000.0,
        }
    }
}

impl CameraSettings {
    /// Aspect ratio for a viewport; a zero height falls back to square
    pub fn aspect(width: u32, height: u32) -> f64 {
        if height == 0 {
            1.0
        } else {
            width as f64 / height as f64
        }
    }

    /// Clamp an orbit distance to the control limits
    pub fn clamp_distance(&self, distance: f64) -> f64 {
        distance.clamp(self.min_distance, self.max_distance)
    }
}

/// Everything tunable about a viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSettings {
    pub layout: LayoutParams,
    pub camera: CameraSettings,
    /// Base transition length in milliseconds
    pub transition_ms: f64,
    /// Half-width of the cube new cards are scattered in
    pub scatter_extent: f64,
    /// Scene rotation about Y added every frame, in radians
    pub spin_per_frame: f64,
    /// Fixed seed for layout and animation randomness
    pub seed: Option<u64>,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            layout: LayoutParams::default(),
            camera: CameraSettings::default(),
            transition_ms: 2000.0,
            scatter_extent: 2000.0,
            spin_per_frame: 0.0015,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub struct ViewportState {
    settings: ViewportSettings,
    registry: ItemRegistry,
    arrangements: Arrangements,
    engine: TransitionEngine,
    rng: StdRng,
    selected: Option<ArrangementKind>,
    scene_rotation_y: f64,
    frames: u64,
}

impl ViewportState {
    pub fn new(settings: ViewportSettings) -> Self {
        let (rng, engine) = match settings.seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                TransitionEngine::seeded(seed.wrapping_add(1)),
            ),
            None => (StdRng::from_entropy(), TransitionEngine::from_entropy()),
        };

        Self {
            settings,
            registry: ItemRegistry::new(),
            arrangements: Arrangements::default(),
            engine,
            rng,
            selected: None,
            scene_rotation_y: 0.0,
            frames: 0,
        }
    }

    /// Replace the cards with a new dataset and recompute every arrangement.
    ///
    /// An empty dataset leaves the current scene untouched.
    pub fn load_dataset(&mut self, records: Vec<Record>) -> Result<()> {
        if records.is_empty() {
            tracing::warn!("ignoring empty dataset; keeping {} cards", self.registry.len());
            return Err(OrbitError::EmptyDataset);
        }

        self.engine.cancel();
        self.registry
            .rebuild(records, self.settings.scatter_extent, &mut self.rng);
        self.arrangements =
            compute_arrangements(self.registry.len(), &self.settings.layout, &mut self.rng);
        self.selected = None;

        tracing::info!(cards = self.registry.len(), "dataset loaded");
        Ok(())
    }

    /// Start animating every card toward `kind`.
    pub fn select(&mut self, kind: ArrangementKind, now_ms: f64) -> Result<Option<TransitionId>> {
        let id = self.engine.transition(
            self.registry.items(),
            self.arrangements.get(kind),
            self.settings.transition_ms,
            now_ms,
            Some(kind),
        )?;
        if id.is_some() {
            self.selected = Some(kind);
            tracing::info!(arrangement = %kind, "arrangement selected");
        }
        Ok(id)
    }

    /// Advance one frame: update poses, render if a transition is running,
    /// then spin the scene.
    pub fn frame<F>(&mut self, now_ms: f64, render: &mut F) -> AdvanceReport
    where
        F: FnMut() + ?Sized,
    {
        let report = self
            .engine
            .advance(now_ms, self.registry.items_mut(), render);
        self.scene_rotation_y += self.settings.spin_per_frame;
        self.frames += 1;
        report
    }

    pub fn settings(&self) -> &ViewportSettings {
        &self.settings
    }

    pub fn camera(&self) -> &CameraSettings {
        &self.settings.camera
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn arrangements(&self) -> &Arrangements {
        &self.arrangements
    }

    pub fn engine(&self) -> &TransitionEngine {
        &self.engine
    }

    /// Last arrangement a transition was started for
    pub fn selected(&self) -> Option<ArrangementKind> {
        self.selected
    }

    pub fn scene_rotation_y(&self) -> f64 {
        self.scene_rotation_y
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> ViewportState {
        ViewportState::new(ViewportSettings {
            seed: Some(17),
            ..ViewportSettings::default()
        })
    }

    fn records(n: usize) -> Vec<Record> {
        (0..n).map(|i| Record::new(format!("r{i}"), "FR")).collect()
    }

    #[test]
    fn test_load_dataset_sizes_arrangements() {
        let mut viewport = seeded();
        viewport.load_dataset(records(33)).unwrap();
        assert_eq!(viewport.registry().len(), 33);
        for kind in ArrangementKind::ALL {
            assert_eq!(viewport.arrangements().get(kind).len(), 33);
        }
    }

    #[test]
    fn test_empty_dataset_keeps_previous_state() {
        let mut viewport = seeded();
        viewport.load_dataset(records(4)).unwrap();
        let before = viewport.registry().poses();

        assert_eq!(viewport.load_dataset(Vec::new()), Err(OrbitError::EmptyDataset));
        assert_eq!(viewport.registry().poses(), before);
        assert_eq!(viewport.arrangements().len(), 4);
    }

    #[test]
    fn test_select_reaches_arrangement() {
        let mut viewport = seeded();
        viewport.load_dataset(records(25)).unwrap();
        viewport.select(ArrangementKind::Table, 0.0).unwrap();
        assert_eq!(viewport.selected(), Some(ArrangementKind::Table));

        let mut renders = 0;
        let mut now = 0.0;
        while viewport.engine().is_active() {
            now += 16.0;
            viewport.frame(now, &mut || renders += 1);
        }
        assert!(now >= 4000.0);
        assert!(renders > 0);
        assert_eq!(
            viewport.registry().poses(),
            viewport.arrangements().get(ArrangementKind::Table)
        );
    }

    #[test]
    fn test_load_with_huge_scatter_extent() {
        let mut viewport = ViewportState::new(ViewportSettings {
            seed: Some(2),
            scatter_extent: 1.0e308,
            ..ViewportSettings::default()
        });
        viewport.load_dataset(records(3)).unwrap();
        assert!(viewport
            .registry()
            .poses()
            .iter()
            .all(|p| p.position.to_array().iter().all(|c| c.is_finite())));
    }

    #[test]
    fn test_select_before_load_is_noop() {
        let mut viewport = seeded();
        assert_eq!(viewport.select(ArrangementKind::Sphere, 0.0), Ok(None));
        assert_eq!(viewport.selected(), None);
    }

    #[test]
    fn test_frame_spins_scene() {
        let mut viewport = seeded();
        for i in 0..10 {
            viewport.frame(i as f64 * 16.0, &mut || {});
        }
        assert_eq!(viewport.frames(), 10);
        assert!((viewport.scene_rotation_y() - 0.015).abs() < 1e-12);
    }

    #[test]
    fn test_camera_helpers() {
        assert_eq!(CameraSettings::aspect(1920, 1080), 1920.0 / 1080.0);
        assert_eq!(CameraSettings::aspect(10, 0), 1.0);
        let camera = CameraSettings::default();
        assert_eq!(camera.clamp_distance(100.0), 500.0);
        assert_eq!(camera.clamp_distance(9000.0), 6000.0);
    }
}
