// Domain layer: value models only. No dependencies beyond std/serde.

pub mod model;
