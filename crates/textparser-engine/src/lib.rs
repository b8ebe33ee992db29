//! # textparser-engine
//!
//! Turns plain text into a tree of named nodes by applying pattern rules, then
//! turns that tree into host-agnostic element descriptors.
//!
//! ## Pipeline
//!
//! ```text
//! text ──parse(rules)──▶ Tree ──build(rules)──▶ Vec<Element> ──host──▶ UI
//!        block pass                renderer
//!        inline pass               dispatch
//!        simplify
//! ```
//!
//! ## Modules
//!
//! - **`model`**: `TreeNode`, `Scope`, `MatchResult`
//! - **`matching`**: `Pattern` and leftmost-match selection
//! - **`text`**: flattening trees back into text
//! - **`rule`**: the `Rule` record and its `Matcher` / `Renderer` capabilities
//! - **`descriptor`**: `ElementDescriptor` and built `Element`s
//! - **`parsing`**: `parse()` entry point (block pass, inline pass, simplification)
//! - **`building`**: `build()` entry point and the `RendererRegistry`
//!
//! The engine never constructs host types. Everything it emits is an
//! [`Element`], which a host (HTML, a widget toolkit, a test) materializes.

pub mod building;
pub mod descriptor;
pub mod matching;
pub mod model;
pub mod parsing;
pub mod rule;
pub mod text;

pub use building::{BuildError, CollisionPolicy, RendererRegistry, build};
pub use descriptor::{ComponentRef, Element, ElementDescriptor, ElementType, Props};
pub use matching::{Pattern, leftmost};
pub use model::{MatchResult, Scope, Tree, TreeNode};
pub use parsing::{ParseError, parse};
pub use rule::{Matcher, ParseFn, RenderFn, Renderer, Rule};
pub use text::{node_text, tree_text};
