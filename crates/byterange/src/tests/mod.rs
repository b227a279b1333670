
pub(crate) mod utils;
