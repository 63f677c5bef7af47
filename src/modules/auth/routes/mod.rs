pub(crate) mod create_restaurant;
pub(crate) mod login;
pub(crate) mod profile;
pub(crate) mod register_customer;
pub(crate) mod register_restaurant_owner;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(register_customer::get_router())
        .merge(register_restaurant_owner::get_router())
        .merge(login::get_router())
        .merge(profile::get_router())
        .merge(create_restaurant::get_router())
}
