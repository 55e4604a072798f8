// Domain layer: models and ports. Concrete AWS clients live under adapters.

pub mod model;
pub mod ports;
