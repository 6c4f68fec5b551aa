//! Plink — an interactive 2D particle slingshot sandbox.
//!
//! Circular particles move under accumulated forces (gravity, drag, viscous
//! damping, user-launched impulses), bounce off the play-area boundary with
//! restitution, and are rendered every frame.  The heart of the crate is the
//! fixed-order force-accumulation pipeline in [`simulation`]:
//!
//! ```text
//! gravity → impulse → drag → damping → integrate → boundary-resolve
//! ```
//!
//! Force generators write into a per-body accumulator, the semi-implicit
//! Euler integrator turns the accumulated force into motion and resets the
//! accumulator, and the boundary resolver keeps everything inside the
//! screen.  Everything else — window, input, meshes, colours — is a
//! collaborator around that pipeline.

pub mod body;
pub mod boundary;
pub mod config;
pub mod constants;
pub mod error;
pub mod forces;
pub mod graphics;
pub mod integrator;
pub mod interaction;
pub mod particle;
pub mod rendering;
pub mod simulation;
