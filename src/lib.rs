// Adlens: side-by-side comparison engine for AI-scored ad creatives.
//
// This is the library root. The `analysis` module holds the pure derivation
// logic; everything else is plumbing around it (record source, local cache,
// output formatting).

pub mod analysis;
pub mod carousel;
pub mod config;
pub mod db;
pub mod model;
pub mod output;
pub mod source;
