pub mod physics {
    pub use impulse_physics::*;
}
