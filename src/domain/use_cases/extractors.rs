use actix_web::{FromRequest, HttpRequest, HttpMessage};
use futures_util::future::{ready, Ready};

use crate::{entities::token::Claims, repositories::identity::IdentityProvider};

/// Extractor for the caller's identity, if a valid bearer token was sent.
/// Never rejects: anonymous callers get `CurrentUser(None)`.
/// Usage: Add `user: CurrentUser` as a parameter to your handler function.
#[derive(Debug, Clone, Default)]
pub struct CurrentUser(pub Option<Claims>);

impl FromRequest for CurrentUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(CurrentUser(req.extensions().get::<Claims>().cloned())))
    }
}

impl IdentityProvider for CurrentUser {
    fn current_user_id(&self) -> Option<String> {
        self.0.as_ref().map(|claims| claims.sub.clone())
    }
}
