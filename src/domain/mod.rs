// Domain layer: settings, the built link, and the ports the widget talks through.

pub mod model;
pub mod ports;
