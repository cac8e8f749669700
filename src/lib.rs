pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::city_list::CityList;
pub use crate::domain::model::City;
pub use crate::utils::error::{CityError, Result};
