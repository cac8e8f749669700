use crate::domain::model::City;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CityError {
    #[error("city already exists in the list: {0}")]
    DuplicateCity(City),

    #[error("city not found in the list: {0}")]
    CityNotFound(City),
}

pub type Result<T> = std::result::Result<T, CityError>;
