pub(crate) mod conversions;
pub(crate) mod headers;
