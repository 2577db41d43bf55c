pub mod controller;
pub mod error;
pub mod shell;
pub mod view;

pub use controller::{LatestController, Services};
pub use error::Error;
pub use view::ViewModel;
