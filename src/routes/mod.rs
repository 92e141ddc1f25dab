//! Route construction for the common endpoints and the widget resources.

mod common;
mod widgets;

pub use common::{common_routes, common_routes_with_ready};
pub use widgets::widget_routes;
