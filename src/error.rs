use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("invalid input data: sellers, products, purchase_records, and customers must all be non-empty")]
    InvalidData,

    #[error("invalid options: both calculate_revenue and calculate_bonus must be provided")]
    InvalidOptions,

    #[error("purchase record references unknown seller id `{0}`")]
    UnknownSeller(String),

    #[error("line item references unknown product sku `{0}`")]
    UnknownProduct(String),
}

pub type Result<T> = std::result::Result<T, Error>;
