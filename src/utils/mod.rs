//! Shared numeric utilities.

pub mod modmath;
