pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod delete_image;
pub(crate) mod get;
pub(crate) mod list;
pub(crate) mod list_mine;
pub(crate) mod update;
pub(crate) mod upload_image;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(create::get_router())
        .merge(list_mine::get_router())
        .merge(get::get_router())
        .merge(update::get_router())
        .merge(delete::get_router())
        .merge(upload_image::get_router())
        .merge(delete_image::get_router())
}
