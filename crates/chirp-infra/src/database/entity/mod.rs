//! SeaORM entities mirroring the schema in `apps/migration`.

pub mod follow;
pub mod post;
pub mod user;
