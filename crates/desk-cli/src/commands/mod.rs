pub mod dashboard;
pub mod directory;
pub mod dispatch;
pub mod insights;
pub mod schema;
pub mod shared;
