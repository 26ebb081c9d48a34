use std::fmt::Debug;
use tracing::error;
use udhaar_infra::UdhaarContext;

/// One API operation. Controllers build the usecase from the request
/// and hand it to `execute`; everything the operation needs beyond
/// the request itself comes from the context.
#[async_trait::async_trait(?Send)]
pub trait UseCase: Debug {
    type Response;
    type Errors;

    async fn execute(&mut self, ctx: &UdhaarContext) -> Result<Self::Response, Self::Errors>;
}

#[tracing::instrument(name = "Executing usecase", skip(usecase, ctx))]
pub async fn execute<U>(mut usecase: U, ctx: &UdhaarContext) -> Result<U::Response, U::Errors>
where
    U: UseCase,
    U::Errors: Debug,
{
    let res = usecase.execute(ctx).await;

    if let Err(e) = &res {
        error!("Use case error: {:?}", e);
    }

    res
}
