use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage, HttpResponse,
};
use futures_util::future::{ok, Ready, LocalBoxFuture};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{errors::AuthError, AppState};

/// Attaches the caller's [`Claims`](crate::entities::token::Claims) to the request when a
/// bearer token is present. Requests without one pass through anonymously; a
/// token that fails verification is rejected with 401.
pub struct IdentityMiddleware;

impl<S> Transform<S, ServiceRequest> for IdentityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = IdentityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(IdentityMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct IdentityMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for IdentityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let Some(token) = extract_token(&req) else {
                return service.call(req).await;
            };

            let state = req.app_data::<web::Data<AppState>>()
                .ok_or_else(|| {
                    tracing::error!("AppState missing in middleware");
                    AuthError::MissingJwtService
                })?;

            match state.token_service.decode_jwt(&token) {
                Ok(decoded) => {
                    req.extensions_mut().insert(decoded.claims);
                    service.call(req).await
                }
                Err(e) => {
                    tracing::warn!("Rejected bearer token: {}", e);
                    let message = match e {
                        AuthError::TokenExpired => "Token has expired",
                        _ => "Invalid token",
                    };
                    Ok(req.into_response(HttpResponse::Unauthorized().json(serde_json::json!({
                        "error": message
                    }))))
                }
            }
        })
    }
}

fn extract_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}
