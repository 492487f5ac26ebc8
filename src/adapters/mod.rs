// Adapters layer: concrete implementations of the domain ports (HTTP services, storage).

pub mod google_maps;
pub mod open_data;
pub mod storage;

pub use google_maps::GoogleMapsClient;
pub use open_data::OpenDataClient;
pub use storage::LocalStorage;
