//! Filters, essentially how [`warp`] implements routes and middlewares.

use std::sync::Arc;

use warp::Filter;

use crate::http::handlers;
use crate::logic::{
    op_create_offering, op_get_offering, op_list_offerings, op_upload_file, LogicOp,
};

/// The body size limit for the signed request endpoints.
const BODY_LIMIT: u64 = 1024 * 16;

/// The body size limit for the upload endpoint; the file content travels
/// base64-encoded inside the signed message.
const UPLOAD_BODY_LIMIT: u64 = 1024 * 1024 * 4;

/// Pass the [`Arc`] to the handler.
fn with_arc<T>(
    val: Arc<T>,
) -> impl Filter<Extract = (Arc<T>,), Error = std::convert::Infallible> + Clone
where
    Arc<T>: Send,
{
    warp::any().map(move || Arc::clone(&val))
}

/// Extract the JSON body from the request, rejecting the excessive inputs size.
fn json_body<T>(limit: u64) -> impl Filter<Extract = (T,), Error = warp::Rejection> + Clone
where
    T: Send + for<'de> serde::de::Deserialize<'de>,
{
    warp::body::content_length_limit(limit).and(warp::body::json::<T>())
}

/// The root mount point with all the routes.
pub fn root<L>(
    logic: Arc<L>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone
where
    L: LogicOp<
            op_create_offering::Request,
            Response = op_create_offering::Response,
            Error = op_create_offering::Error,
        > + LogicOp<
            op_list_offerings::Request,
            Response = op_list_offerings::Response,
            Error = op_list_offerings::Error,
        > + LogicOp<
            op_get_offering::Request,
            Response = op_get_offering::Response,
            Error = op_get_offering::Error,
        > + LogicOp<
            op_upload_file::Request,
            Response = op_upload_file::Response,
            Error = op_upload_file::Error,
        > + Send
        + Sync
        + 'static,
{
    create_offering(Arc::clone(&logic))
        .or(list_offerings(Arc::clone(&logic)))
        .or(get_offering(Arc::clone(&logic)))
        .or(upload_file(logic))
}

/// POST /offerings/create with JSON body.
fn create_offering<L>(
    logic: Arc<L>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone
where
    L: LogicOp<
            op_create_offering::Request,
            Response = op_create_offering::Response,
            Error = op_create_offering::Error,
        > + Send
        + Sync
        + 'static,
{
    warp::path!("offerings" / "create")
        .and(warp::post())
        .and(with_arc(logic))
        .and(json_body::<op_create_offering::Request>(BODY_LIMIT))
        .and_then(handlers::create_offering)
}

/// POST /offerings/list with JSON body.
fn list_offerings<L>(
    logic: Arc<L>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone
where
    L: LogicOp<
            op_list_offerings::Request,
            Response = op_list_offerings::Response,
            Error = op_list_offerings::Error,
        > + Send
        + Sync
        + 'static,
{
    warp::path!("offerings" / "list")
        .and(warp::post())
        .and(with_arc(logic))
        .and(json_body::<op_list_offerings::Request>(BODY_LIMIT))
        .and_then(handlers::list_offerings)
}

/// POST /offerings/get with JSON body.
fn get_offering<L>(
    logic: Arc<L>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone
where
    L: LogicOp<
            op_get_offering::Request,
            Response = op_get_offering::Response,
            Error = op_get_offering::Error,
        > + Send
        + Sync
        + 'static,
{
    warp::path!("offerings" / "get")
        .and(warp::post())
        .and(with_arc(logic))
        .and(json_body::<op_get_offering::Request>(BODY_LIMIT))
        .and_then(handlers::get_offering)
}

/// POST /files/upload with JSON body.
fn upload_file<L>(
    logic: Arc<L>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone
where
    L: LogicOp<
            op_upload_file::Request,
            Response = op_upload_file::Response,
            Error = op_upload_file::Error,
        > + Send
        + Sync
        + 'static,
{
    warp::path!("files" / "upload")
        .and(warp::post())
        .and(with_arc(logic))
        .and(json_body::<op_upload_file::Request>(UPLOAD_BODY_LIMIT))
        .and_then(handlers::upload_file)
}
