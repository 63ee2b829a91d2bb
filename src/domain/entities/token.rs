use serde::{Serialize, Deserialize};

/// Claims carried by the bearer tokens the identity provider issues.
/// `sub` is the account id recorded as a posting's owner.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: usize,
    pub iat: usize,
}
