//! Handlers, the HTTP transport coupling for the internal logic.

use std::sync::Arc;

use warp::hyper::StatusCode;
use warp::Reply;

use crate::logic::{
    op_create_offering, op_get_offering, op_list_offerings, op_upload_file, LogicOp,
};

/// Create offering operation HTTP transport coupling.
pub async fn create_offering<L>(
    logic: Arc<L>,
    input: op_create_offering::Request,
) -> Result<impl warp::Reply, warp::Rejection>
where
    L: LogicOp<
        op_create_offering::Request,
        Response = op_create_offering::Response,
        Error = op_create_offering::Error,
    >,
{
    match logic.call(input).await {
        Ok(res) => {
            Ok(warp::reply::with_status(warp::reply::json(&res), StatusCode::OK).into_response())
        }
        Err(err) => Err(warp::reject::custom(err)),
    }
}

/// List offerings operation HTTP transport coupling.
pub async fn list_offerings<L>(
    logic: Arc<L>,
    input: op_list_offerings::Request,
) -> Result<impl warp::Reply, warp::Rejection>
where
    L: LogicOp<
        op_list_offerings::Request,
        Response = op_list_offerings::Response,
        Error = op_list_offerings::Error,
    >,
{
    match logic.call(input).await {
        Ok(res) => {
            Ok(warp::reply::with_status(warp::reply::json(&res), StatusCode::OK).into_response())
        }
        Err(err) => Err(warp::reject::custom(err)),
    }
}

/// Get offering operation HTTP transport coupling.
pub async fn get_offering<L>(
    logic: Arc<L>,
    input: op_get_offering::Request,
) -> Result<impl warp::Reply, warp::Rejection>
where
    L: LogicOp<
        op_get_offering::Request,
        Response = op_get_offering::Response,
        Error = op_get_offering::Error,
    >,
{
    match logic.call(input).await {
        Ok(res) => {
            Ok(warp::reply::with_status(warp::reply::json(&res), StatusCode::OK).into_response())
        }
        Err(err) => Err(warp::reject::custom(err)),
    }
}

/// Upload file operation HTTP transport coupling.
pub async fn upload_file<L>(
    logic: Arc<L>,
    input: op_upload_file::Request,
) -> Result<impl warp::Reply, warp::Rejection>
where
    L: LogicOp<
        op_upload_file::Request,
        Response = op_upload_file::Response,
        Error = op_upload_file::Error,
    >,
{
    match logic.call(input).await {
        Ok(res) => {
            Ok(warp::reply::with_status(warp::reply::json(&res), StatusCode::OK).into_response())
        }
        Err(err) => Err(warp::reject::custom(err)),
    }
}

impl warp::reject::Reject for op_create_offering::Error {}
impl warp::reject::Reject for op_list_offerings::Error {}
impl warp::reject::Reject for op_get_offering::Error {}
impl warp::reject::Reject for op_upload_file::Error {}
