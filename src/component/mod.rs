//! Presentational building blocks rendered by the app.
//!
//! Components here are pure: they map their inputs to buffer content and
//! nothing else. Event handling and state live in [`crate::app`].

pub(crate) mod card;
