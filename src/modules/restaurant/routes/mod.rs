pub(crate) mod delete_image;
pub(crate) mod delete_mine;
pub(crate) mod get;
pub(crate) mod get_mine;
pub(crate) mod list;
pub(crate) mod update_mine;
pub(crate) mod upload_image;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(get_mine::get_router())
        .merge(update_mine::get_router())
        .merge(delete_mine::get_router())
        .merge(upload_image::get_router())
        .merge(delete_image::get_router())
        .merge(get::get_router())
}
