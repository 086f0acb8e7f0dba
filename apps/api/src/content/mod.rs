pub mod data;
pub mod export;
pub mod handlers;
pub mod merge;
pub mod model;
pub mod overlay;
