mod cloud_spawner;
mod path_animator;

pub use cloud_spawner::CloudSpawner;
pub use path_animator::PathAnimator;
