pub mod config;
pub mod error;
pub mod index;
pub mod metro;
pub mod route;

pub use config::RouteConfig;
pub use error::MetroError;
pub use index::StationIndex;
pub use metro::{
    connection::Connection,
    line::{Line, LineId},
    station::{Station, StationId},
    MetroMap,
};
pub use route::{EdgeKind, Route, RouteCalculator};
