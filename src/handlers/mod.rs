//! HTTP handlers for the widget resources.

pub mod widget_a;
pub mod widget_b;
