// Keygap: lexical keyword extraction and resume / job description gap analysis
//
// This is the library root. The core lives in `keywords`; `config` and
// `output` serve the command-line front end.

pub mod config;
pub mod error;
pub mod keywords;
pub mod output;
