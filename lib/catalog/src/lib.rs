//! # decora Catalog
//!
//! The style catalog for the decora design recommendation engine.
//!
//! A [`StyleCatalog`] is a static, insertion-ordered table of named design
//! styles. Each [`Style`] carries a color palette, furniture guideline tags,
//! curated recommendation sentences, and an explanation highlight. The
//! catalog is built once at startup, either from the built-in table or from
//! a JSON config file, and is read-only afterwards.
//!
//! ## Example
//!
//! ```rust
//! use decora_catalog::builtin_catalog;
//!
//! let catalog = builtin_catalog();
//! let style = catalog.lookup("Scandinavian").unwrap();
//! assert_eq!(style.color_palette[0], "white");
//! assert!(catalog.lookup("Brutalist").is_none());
//! ```

pub mod builtin;
pub mod catalog;
pub mod style;

pub use builtin::{builtin_catalog, builtin_styles};
pub use catalog::StyleCatalog;
pub use style::{ExplanationHighlight, Style};
