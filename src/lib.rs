//! Library crate providing the guard detection core of a 2D top-down
//! stealth prototype: authoritative detection radii kept in sync across a
//! point light and a trigger region, region events relayed from detector
//! children to their owning guards, and a one-way "player detected" latch.
//! Re-exports common components and systems for the demo binary and tests.
pub mod components;
pub mod config;
pub mod constants;
pub mod detector;
pub mod guard;
pub mod logging;
pub mod spawn_world;
pub use constants::*;

// Re-export commonly used items
pub use components::{ActorTag, DetectionIndicator, PointLight2d};
pub use config::{ConfigError, GuardConfig};
pub use detector::{
    relay_detector_events_system, sweep_detector_regions_system, DetectorOwner, DetectorRegion,
    RegionContacts, RegionEnter, RegionExit,
};
pub use guard::{apply_guard_radius_system, init_guard_rigs_system, Guard, GuardPlugin, GuardRig};
pub use logging::init as init_logging;
pub use spawn_world::{drive_walkers_system, spawn_world_system, DemoWalker};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use skulk::prelude::*;
    //! ```

    pub use crate::components::{ActorTag, DetectionIndicator, PointLight2d};
    pub use crate::detector::{RegionEnter, RegionExit};
    pub use crate::guard::{Guard, GuardPlugin, GuardRig};
    pub use crate::GuardConfig;
}
