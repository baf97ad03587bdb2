//! The logic-related traits.

/// The generic interface of a single logic operation.
#[async_trait::async_trait]
pub trait LogicOp<Req> {
    /// The successful response of the operation.
    type Response;
    /// The error of the operation.
    type Error;

    /// Execute the operation.
    async fn call(&self, req: Req) -> Result<Self::Response, Self::Error>;
}
