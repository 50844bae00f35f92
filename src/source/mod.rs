pub mod mock;
pub mod traits;

pub use mock::MockSource;
pub use traits::TimeSeriesSource;
