pub mod cubemap;
pub mod data_uri;
pub mod panorama;
