pub mod city_list;

pub use crate::domain::model::City;
pub use crate::utils::error::Result;
