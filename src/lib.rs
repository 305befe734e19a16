//! # cbtrim Core Library
//!
//! This crate provides the core functionality for the `cbtrim` comic archive tool.
//!
//! It is designed to be used by the `cbtrim` command-line application, but its public API
//! can also be used to programmatically trim and list `.cbz`/`.cbr` archives.
//!
//! ## Key Modules
//!
//! - [`archive`]: Source-format detection and page enumeration.
//! - [`trim`]: The remove-last-page transformation.
//! - [`error`]: The crate-wide error taxonomy.
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), cbtrim::TrimError> {
//! let output = cbtrim::trim::remove_last_page(std::path::Path::new("issue-01.cbz"))?;
//! println!("wrote {}", output.display());
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod cli;
pub mod error;
pub mod trim;

pub use error::TrimError;
