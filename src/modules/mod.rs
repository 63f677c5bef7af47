pub mod auth;
pub mod docs;
pub mod meal;
pub mod restaurant;
pub mod storage;
pub mod user;

mod router;
pub use router::get_router;
