// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D node cloud with CPU ray picking, a hover/selection state
//! machine and billboard labels.
//!
//! A batch of nodes is fetched from a feed, laid out along x by timestamp
//! and drawn as small spheres that wander slightly every frame. Pointer
//! input hovers and toggles selection of nodes; selected nodes carry a
//! floating label that faces the camera of every viewport.
//!
//! # Key entry points
//!
//! - [`engine::Session`] - owns the node set and viewports; call
//!   [`engine::Session::handle_input`] for window events and
//!   [`engine::Session::tick`] once per frame
//! - [`backend::ViewportBackend`] - the drawing seam, one per viewport
//! - [`source::NodeSource`] - where node batches come from
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Input handlers only latch pointer state. Each tick installs a finished
//! background fetch, picks per viewport with that viewport's camera,
//! applies the resulting hover and click transitions, moves every node
//! once, re-anchors labels and renders every viewport from the same node
//! instances.

pub mod backend;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod labels;
pub mod options;
pub mod picking;
pub mod scene;
pub mod selection;
pub mod source;
pub mod util;

pub use engine::Session;
pub use error::CloudError;
pub use options::Options;
