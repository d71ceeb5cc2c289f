pub mod design;
pub mod params;
