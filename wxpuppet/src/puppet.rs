#![allow(async_fn_in_trait)]
use std::sync::Arc;

use crate::error::Result;
use crate::models::{ContactInternal, Message};
use crate::session::CookieStore;

/// Boundary to the browser-automation transport that owns the logged-in
/// session. The transport performs all network I/O against the backend;
/// this crate only consumes the payloads it returns. Implementations are
/// cheap-to-clone handles shared by every entity built on top of them.
pub trait Puppet: Clone + Send + Sync {
    /// Fetch the raw record of one contact.
    async fn contact_payload(&self, id: &str) -> Result<ContactInternal>;

    /// Change (`Some`) or remove (`None`) the alias of a contact.
    async fn contact_alias(&self, id: &str, alias: Option<&str>) -> Result<()>;

    /// Submit an outbound message.
    async fn message_send(&self, message: &Message) -> Result<()>;

    /// Id of the logged-in user, if any.
    fn self_id(&self) -> Option<String>;

    /// Host the login landed on, e.g. `wx.qq.com`.
    async fn hostname(&self) -> Result<String>;

    /// Cookies of the logged-in session.
    async fn cookies(&self) -> Result<CookieStore>;
}

impl<P: Puppet> Puppet for Arc<P> {
    async fn contact_payload(&self, id: &str) -> Result<ContactInternal> {
        self.as_ref().contact_payload(id).await
    }

    async fn contact_alias(&self, id: &str, alias: Option<&str>) -> Result<()> {
        self.as_ref().contact_alias(id, alias).await
    }

    async fn message_send(&self, message: &Message) -> Result<()> {
        self.as_ref().message_send(message).await
    }

    fn self_id(&self) -> Option<String> {
        self.as_ref().self_id()
    }

    async fn hostname(&self) -> Result<String> {
        self.as_ref().hostname().await
    }

    async fn cookies(&self) -> Result<CookieStore> {
        self.as_ref().cookies().await
    }
}
