pub mod geolocation;
pub mod location_cache;
pub mod places;
pub mod viewport;
