// Adapters layer: concrete hosts the widget can hand its link to.

pub mod browser;
