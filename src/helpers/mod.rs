//! URL helpers shared by the content model and the CLI

mod url;

pub use url::*;
