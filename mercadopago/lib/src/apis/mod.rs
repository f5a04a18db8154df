//! MercadoPago endpoint definitions.
//!
//! Each submodule holds one endpoint's payload types together with the
//! [`ApiClient`](crate::ApiClient) method that calls it:
//!
//! - [`card_tokens`] - `POST v1/card_tokens`
//! - [`oauth`] - `POST oauth/token`
//! - [`payment_methods`] - `GET payment_methods`
//! - [`test_users`] - `POST users/test_user`

pub mod card_tokens;
pub mod oauth;
pub mod payment_methods;
pub mod test_users;
