mod api_response_objects;
#[allow(clippy::module_inception)]
pub mod foodstuffs;
