//! The two operator-triggered maintenance workflows. Each runs to
//! completion sequentially; remote failures are logged and contained at
//! the table or row boundary, never unwound across it.

pub mod cleanup;
pub mod inspect;
