use std::rc::Rc;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::Error;
use futures_util::future::LocalBoxFuture;
use crate::core::AppError;

pub struct ErrorLoggingMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorLoggingMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let method = req.method().clone();
        let path = req.path().to_string();

        Box::pin(async move {
            let res = service.call(req).await?;

            if let Some(err) = res.response().error() {
                let status = res.status();
                let kind = err
                    .as_error::<AppError>()
                    .map(AppError::kind)
                    .unwrap_or("actix_web::Error");

                if status.is_server_error() {
                    log::error!("{} {} → {} {}: {}", method, path, status.as_u16(), kind, err);
                } else {
                    log::warn!("{} {} → {} {}: {}", method, path, status.as_u16(), kind, err);
                }
            }

            Ok(res)
        })
    }
}
