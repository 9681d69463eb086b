pub mod board_id;
pub mod board_name;
pub mod organization_id;
pub mod principal;
pub mod user_id;

pub use board_id::BoardId;
pub use board_name::{BoardDescription, BoardName};
pub use organization_id::OrganizationId;
pub use principal::Principal;
pub use user_id::UserId;
