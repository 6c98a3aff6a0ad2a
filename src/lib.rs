//! Spring-damper bone chains for small real-time 2D demos.
//!
//! `bonespring` simulates chains of bones: line segments with a mass at each
//! joint, held at their rest length by a spring-damper and kept together at
//! shared joints by a soft correction. It is meant to be stepped once per
//! frame by a host loop that draws the result.
//!
//! # Features
//!
//! - **Spring-damper bones**: Explicit Euler on velocity and position
//! - **Soft joints**: Parent/child bones pulled together, not solved exactly
//! - **Anchors**: Zero-mass joints ignore gravity and spring forces
//! - **Ground**: Optional flat floor with friction
//! - **Observable**: Monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use bonespring::{chain, SimConfig, Simulator, Vec2};
//!
//! let mut bones = chain(
//!     &[Vec2::new(400.0f32, 100.0), Vec2::new(450.0, 150.0), Vec2::new(500.0, 200.0)],
//!     1.0,
//! );
//! bones[0].joint1.mass = 0.0;
//!
//! let sim = Simulator::new(SimConfig::init(None));
//! for _ in 0..60 {
//!     sim.step(&mut bones, 1.0 / 60.0);
//! }
//! assert_eq!(bones[0].joint1.pos, Vec2::new(400.0, 100.0));
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod config;
pub mod bone;
pub mod simulator;
pub mod ground;
pub mod snapshot;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{distance, Vec2};
pub use config::SimConfig;
pub use bone::{chain, connect, Bone, BoneId, Joint, JointForces};
pub use simulator::Simulator;
pub use ground::Ground;
pub use snapshot::{flat_positions, segments, BoneSegment};
pub use observer::{NoOpStepObserver, StepObserver};
#[cfg(feature = "log")]
pub use observer::LogStepObserver;
pub use error::PhysicsError;
