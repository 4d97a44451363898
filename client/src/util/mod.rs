//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep pure logic out of page components so it can be
//! tested without a browser.

pub mod forms;
