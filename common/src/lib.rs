pub mod deserialize_string_or_number;
pub mod result;
pub mod utils;
