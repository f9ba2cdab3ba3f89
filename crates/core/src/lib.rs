pub mod error;
pub mod models;
pub mod numeric;
pub mod series;
pub mod stats;
pub mod traits;
pub mod window;

pub use error::*;
pub use models::*;
pub use numeric::*;
pub use series::*;
pub use traits::*;
pub use window::*;
