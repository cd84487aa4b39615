//! Generate plausible browser user-agent strings from weighted version tables.
//!
//! ```
//! use spider_ua_generator::{generate_user_agent, BrowserKind, DeviceKind, GenerationRequest};
//!
//! let ua = generate_user_agent(
//!     &GenerationRequest::new()
//!         .with_browser(BrowserKind::Chrome)
//!         .with_device(DeviceKind::DesktopMac),
//! )
//! .unwrap();
//!
//! assert_eq!(ua.len(), 1);
//! ```

/// Browser, device and request types.
pub mod configs;
/// Error types.
pub mod errors;
/// Generation orchestrator.
pub mod generator;
/// Structured metadata.
pub mod meta;
/// Random value sources.
pub mod random;
/// Version list resolution.
pub mod resolver;
/// Weighted selection.
pub mod sampler;
/// OS fragments.
pub mod spoof_os;
/// User agent templates.
pub mod spoof_user_agent;
/// Table loading and caching.
pub mod tables;
/// Version tables.
pub mod versions;

pub use configs::{BrowserKind, DeviceKind, FormFactor, GenerationRequest, OsKind};
pub use errors::{Error, Result};
pub use generator::{Generated, UserAgentGenerator, UserAgentRecord};
pub use meta::UserAgentMeta;
pub use random::{PooledRandom, RandomSource, RngRandom, ScriptedRandom};
#[cfg(feature = "embedded-data")]
pub use tables::EmbeddedTables;
pub use tables::{DirectoryTables, TableCache, TableSource};

/// Generate user-agents from the bundled tables with the thread-local generator.
#[cfg(feature = "embedded-data")]
pub fn generate_user_agent(request: &GenerationRequest) -> Result<Generated> {
    generate_user_agent_rng(request, &mut RngRandom::thread())
}

/// Generate user-agents from the bundled tables with a custom random source.
#[cfg(feature = "embedded-data")]
pub fn generate_user_agent_rng<R: RandomSource + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Generated> {
    UserAgentGenerator::new(EmbeddedTables, rng).generate(request)
}
