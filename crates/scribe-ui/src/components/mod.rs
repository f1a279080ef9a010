//! Composer components
//!
//! All components render from the [`ComposerView`](crate::ComposerView)
//! snapshot in context and push mutations through the shared engine.

mod composer;
mod footer;
mod pickers;
mod toolbar;

pub use composer::*;
pub use footer::*;
pub use pickers::*;
pub use toolbar::*;
