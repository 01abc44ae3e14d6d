//! Coordinate reference systems and conversion between geographic coordinates and Web Mercator (see [`Projection`]).

mod crs;
mod datum;
mod projection;
mod web_mercator;

pub use crs::Crs;
pub use datum::Datum;
pub use projection::Projection;
pub use web_mercator::WebMercator;
