//! Filesystem utilities for envgen.

pub mod atomic;

pub use atomic::write_secret_file;
