//! Layout and placement engine for drilling templates on unwrapped enclosures.
//!
//! The crate compiles to WebAssembly and runs in the browser, but everything
//! except [`render`] and the [`engine::Engine`] wrapper is plain Rust and runs
//! natively. It unfolds an enclosure into a five-face cross, maps pointer
//! input through a pan/zoom/quarter-turn camera, hit-tests and drags drilled
//! components between faces, and places their dimension labels. The host
//! JavaScript layer wires DOM events to the engine and persists the resulting
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`layout`] | Unwrapped face set and cross layout rectangles |
//! | [`camera`] | Pan/zoom/rotation camera and coordinate conversions |
//! | [`side`] | Physical faces and displayed-label mapping |
//! | [`doc`] | Placed components and the in-memory store |
//! | [`hit`] | Hit-testing and component outlines |
//! | [`placement`] | Drop resolution, grid snapping, trapezoid checks |
//! | [`label`] | Dimension label position and text |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`catalog`] | Enclosure and component catalogs |
//! | [`project`] | Project file parsing and validation |
//! | [`render`] | Scene rendering to a `Canvas2D` context |
//! | [`rotation`] | Two-valued rotation type |
//! | [`units`] | Millimeter/pixel conversion and dimension formatting |
//! | [`consts`] | Shared numeric constants (zoom limits, hit slop, etc.) |

pub mod camera;
pub mod catalog;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod input;
pub mod label;
pub mod layout;
pub mod placement;
pub mod project;
pub mod render;
pub mod rotation;
pub mod side;
pub mod units;
