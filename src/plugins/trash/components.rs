use bevy::prelude::*;

/// Marker for every pre-spawned pool member, active or not.
#[derive(Component)]
pub struct PooledTrash;

/// Trash lifecycle state.
///
/// `PendingCollect` and `PendingDespawn` both end in the pool, but only a
/// collect counts toward the progress bar; the commit system is the sole
/// consumer of either.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrashState {
    Inactive,
    Drifting,
    PendingCollect,
    PendingDespawn,
}

impl Default for TrashState {
    fn default() -> Self {
        Self::Inactive
    }
}

/// Per-entity lifecycle data.
#[derive(Component, Debug, Clone, Default)]
pub struct Trash {
    /// Seconds since activation. Gates the visibility-based despawn rule.
    pub age_secs: f32,
}

impl Trash {
    #[inline]
    pub fn reset_for_spawn(&mut self) {
        self.age_secs = 0.0;
    }
}

/// Cleanup score: how much of the progress bar is filled.
#[derive(Resource, Debug, Clone)]
pub struct CleanupProgress {
    pub collected: u32,
    pub goal: u32,
}

impl CleanupProgress {
    pub fn new(goal: u32) -> Self {
        Self { collected: 0, goal: goal.max(1) }
    }

    #[inline]
    pub fn record_collected(&mut self) {
        self.collected = self.collected.saturating_add(1);
    }

    /// Bar fill in [0, 1]. Collection past the goal keeps counting but the
    /// bar stays full.
    #[inline]
    pub fn fraction(&self) -> f32 {
        self.collected.min(self.goal) as f32 / self.goal as f32
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.collected >= self.goal
    }
}
