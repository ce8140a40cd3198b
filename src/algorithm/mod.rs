/// Transition model training and sampling
pub mod model;
/// Random-eviction pool that orders growth
pub mod pool;
/// Image synthesis by randomized growth
pub mod synthesis;
