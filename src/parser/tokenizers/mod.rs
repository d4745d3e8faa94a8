pub(crate) mod price;
pub(crate) mod transaction;
