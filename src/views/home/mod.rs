pub mod batch_details;
pub mod home_page;
pub mod listing;
pub mod tiles;

pub use batch_details::BatchDetails;
pub use home_page::HomePage;
pub use listing::Listing;
pub use tiles::Tiles;
