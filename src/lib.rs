//! Double-triangle layout for embedded-graphics displays
//!
//! This crate provides a container widget that splits its rectangle along the
//! diagonal into two right triangles. Each triangle shows one content child,
//! clipped to its half, with a divider line drawn on top. Taps are routed to a
//! left or right click listener depending on which half was hit.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the demo and tests).

#![no_std]

extern crate alloc;

pub mod framebuffer;
pub mod ui;
