mod astar;
mod dls;
mod gbfs;
mod ids;
mod search_engine;
mod search_statistics;
mod ucs;

pub use astar::AStar;
pub use dls::DLS;
pub use gbfs::GBFS;
pub use ids::IDS;
pub use search_engine::{SearchEngine, SearchEngineName, SearchError, SearchOutcome};
pub use search_statistics::SearchStatistics;
pub use ucs::UCS;
