mod trajectory_error;

pub use trajectory_error::TrajectoryError;
