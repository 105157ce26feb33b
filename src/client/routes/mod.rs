pub mod admin;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod search;
pub mod team;

pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
pub use search::Search;
pub use team::Team;
