//! Game policy: timings, scoring and configuration validation.
//!
//! Validation follows the "collect every problem" approach: a config with a
//! zero threshold and a zero flash duration reports both at once rather than
//! failing on the first.
//!
//! ```rust
//! use recall::policy::{GameConfig, ScorePolicy};
//!
//! let config = GameConfig {
//!     scoring: ScorePolicy {
//!         bonus_threshold: 40,
//!         ..ScorePolicy::default()
//!     },
//!     ..GameConfig::default()
//! };
//! assert!(config.check().is_ok());
//! ```

pub mod config;
pub mod rules;
pub mod violations;

pub use config::{BonusProjection, GameConfig, ScorePolicy, Timings};
pub use violations::ConfigViolation;
