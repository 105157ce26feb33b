pub mod activity;
pub mod dashboard;
pub mod statistics;
pub mod users;

pub use activity::AdminActivity;
pub use dashboard::AdminDashboard;
pub use statistics::AdminStatistics;
pub use users::AdminUsers;
