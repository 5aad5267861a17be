pub mod heatwave;
pub mod location;
pub mod series;
pub mod year;
