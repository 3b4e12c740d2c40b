//! Fixture loader for the verified sample documents under `specs/v1/`
//!
//! Samples are grouped per element (`specs/v1/elements/<kind>/`) and per document collection
//! (`specs/v1/<collection>/`). Files carry a number prefix (`01-simple-title.lol`) and are
//! addressed by kind and number:
//!
//! ```rust,ignore
//! let doc = Lolplore::paragraph(1).parse();
//! let source = Lolplore::scenario(4).source();
//! let err = Lolplore::invalid(2).try_parse().unwrap_err();
//! ```

mod loader;
pub mod specfile_finder;

pub use loader::{ElementLoader, ElementSourceError, Lolplore};
pub use specfile_finder::{DocumentType, ElementType, SpecFileError};
