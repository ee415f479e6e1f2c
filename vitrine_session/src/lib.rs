// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vitrine_session --heading-base-level=0

//! Vitrine Session: group activation and direct manipulation over an eased
//! camera.
//!
//! A [`ViewportSession`] owns everything one viewport needs:
//!
//! - A [`vitrine_camera::Camera`] that eases toward pan/zoom targets every
//!   frame and zooms about the cursor on wheel input.
//! - A fixed set of [`Image`]s, each tagged with a [`GroupId`].
//! - The group activation state machine ([`Phase`]): clicking an image locks
//!   the camera, dims every other group, arranges the clicked group on a
//!   golden-angle spiral ([`vitrine_spiral`]), frames it with a timed camera
//!   approach, then unlocks.
//! - A [`DragController`] letting the pointer move members of the open group
//!   in world space, 1:1 with the cursor at any zoom.
//!
//! The session is headless. The host forwards input through
//! [`ViewportSession::handle_input`], calls [`ViewportSession::tick`] once per
//! frame, and draws each image at [`Image::display`] with
//! [`Image::opacity`] and [`Image::z_index`], under
//! [`vitrine_camera::Camera::transform`]. Because time only enters through
//! `tick`, tests drive the whole sequence with synthetic frame durations.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Size};
//! use vitrine_session::{
//!     ClickOutcome, Image, ImageId, PhaseKind, SessionConfig, ViewportSession,
//! };
//!
//! let images = [
//!     Image::new("sketches", Point::new(-300.0, 120.0)),
//!     Image::new("sketches", Point::new(250.0, -80.0)),
//!     Image::new("prints", Point::new(40.0, 300.0)),
//! ];
//! let mut session =
//!     ViewportSession::new(SessionConfig::default(), Size::new(1280.0, 800.0), images);
//!
//! // Clicking a sketch opens its group and locks the camera.
//! let outcome = session.handle_click(ImageId(0));
//! assert!(matches!(outcome, ClickOutcome::Activated(_)));
//! assert!(session.is_locked());
//! assert!(session.image(ImageId(2)).unwrap().is_floating());
//!
//! // Run frames until the sequence completes.
//! while session.is_locked() {
//!     session.tick(Duration::from_millis(16));
//! }
//! assert_eq!(session.phase().kind(), PhaseKind::Idle);
//! assert_eq!(session.active_group().map(|g| g.as_str()), Some("sketches"));
//! ```
//!
//! ## Tracing
//!
//! Sessions report what they do to a [`SessionTrace`]. Use
//! [`RecordingTrace`] in tests, or enable the `tracing` feature for
//! `TracingTrace`, which forwards events to the `tracing` crate.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: float backend, forwarded to the member crates.
//! - `serde`: `Serialize`/`Deserialize` for [`SessionConfig`] and its parts.
//! - `tracing`: the `TracingTrace` sink.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod drag;
mod frame;
mod image;
mod input;
mod phase;
mod session;
pub mod trace;

pub use config::{ConfigError, LayoutConfig, Platform, SessionConfig, Timeline};
pub use drag::DragController;
pub use frame::GroupFrame;
pub use image::{FLOATING_OPACITY, GroupId, Image, ImageId};
pub use input::{InputEvent, InputOutcome};
pub use phase::{ActivationOutcome, ClickOutcome, IgnoreReason, Phase, PhaseKind};
pub use session::{StoredView, ViewportSession};
pub use trace::{NoTrace, RecordingTrace, SessionEvent, SessionTrace};

#[cfg(feature = "tracing")]
pub use trace::TracingTrace;
