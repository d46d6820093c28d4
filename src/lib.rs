//! Generate circuits of points along a biased random walk.
//!
//! Every point of a walk is emitted as a `glm::vec3` literal, ready to be
//! pasted into a program which builds its circuit with `push_back`.

#[macro_use]
extern crate log;
extern crate rand;

pub mod error;
pub mod output;
pub mod point;
pub mod strategy;
pub mod walk;
