use std::fmt;

use log::{debug, error, trace, warn};
use reqwest::Response;
use url::Url;

use crate::error::{Error, Result};
use crate::models::{ContactInfo, ContactInternal, Gender, Message};
use crate::puppet::Puppet;
use crate::utils;

/// Content accepted by [`Contact::say`]: bare text or a pre-built message
/// entity.
#[derive(Debug, Clone)]
pub enum Sayable {
    Text(String),
    Message(Message),
}

impl From<&str> for Sayable {
    fn from(value: &str) -> Self {
        Sayable::Text(value.to_string())
    }
}

impl From<String> for Sayable {
    fn from(value: String) -> Self {
        Sayable::Text(value)
    }
}

impl From<Message> for Sayable {
    fn from(value: Message) -> Self {
        Sayable::Message(value)
    }
}

/// A remote contact, lazily materialized from the web backend.
///
/// Construction only records the backend-assigned id; every other
/// attribute becomes available once [`Contact::ready`] has fetched and
/// normalized the profile through the injected [`Puppet`] transport.
/// Accessors never fail: before the first successful load they return
/// neutral values.
#[derive(Debug, Clone)]
pub struct Contact<P: Puppet> {
    id: String,
    info: Option<ContactInfo>,
    raw: Option<ContactInternal>,
    puppet: P,
}

impl<P: Puppet> Contact<P> {
    pub fn new(puppet: P, id: impl Into<String>) -> Self {
        let id = id.into();
        trace!("new contact {id}");
        Self {
            id,
            info: None,
            raw: None,
            puppet,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// True once a normalized profile with id and name is cached.
    pub fn is_ready(&self) -> bool {
        self.info
            .as_ref()
            .is_some_and(|info| !info.id.is_empty() && !info.name.is_empty())
    }

    /// Fetch and normalize the profile unless it is already cached.
    ///
    /// A payload the normalizer rejects leaves the contact not ready
    /// without an error; the next call fetches again.
    pub async fn ready(&mut self) -> Result<()> {
        if self.is_ready() {
            return Ok(());
        }
        if self.id.is_empty() {
            return Err(Error::MissingContactId);
        }

        match self.puppet.contact_payload(&self.id).await {
            Ok(raw) => {
                trace!("contact_payload({}) resolved", self.id);
                self.info = ContactInfo::parse(&raw);
                self.raw = Some(raw);
                Ok(())
            }
            Err(e) => {
                error!("contact_payload({}) failed: {e}", self.id);
                Err(Error::FetchContact(self.id.clone(), Box::new(e)))
            }
        }
    }

    /// Drop the cached profile and load it again.
    pub async fn refresh(&mut self) -> Result<()> {
        self.info = None;
        self.ready().await
    }

    /// Display name, stripped of control characters. Empty until loaded.
    pub fn name(&self) -> String {
        utils::plain_text(self.info.as_ref().map(|info| info.name.as_str()).unwrap_or_default())
    }

    /// Alias the logged-in user set for this contact.
    pub fn alias(&self) -> Option<String> {
        self.info.as_ref().and_then(|info| info.alias.clone())
    }

    pub fn gender(&self) -> Gender {
        self.info.as_ref().map(|info| info.sex).unwrap_or_default()
    }

    pub fn province(&self) -> Option<String> {
        self.info
            .as_ref()
            .and_then(|info| (!info.province.is_empty()).then(|| info.province.clone()))
    }

    pub fn city(&self) -> Option<String> {
        self.info
            .as_ref()
            .and_then(|info| (!info.city.is_empty()).then(|| info.city.clone()))
    }

    pub fn signature(&self) -> Option<String> {
        self.info
            .as_ref()
            .and_then(|info| (!info.signature.is_empty()).then(|| info.signature.clone()))
    }

    /// Stable numeric account id, as a string.
    pub fn uin(&self) -> Option<String> {
        self.info
            .as_ref()
            .and_then(|info| (!info.uin.is_empty()).then(|| info.uin.clone()))
    }

    /// Account handle. The backend only exposes it for a few contacts, so
    /// `None` is common even after a successful load.
    pub fn weixin(&self) -> Option<String> {
        let handle = self
            .info
            .as_ref()
            .and_then(|info| (!info.weixin.is_empty()).then(|| info.weixin.clone()));
        if handle.is_none() {
            debug!(
                "weixin() handle for {} unavailable; use uin() to track a contact across sessions",
                self.id
            );
        }
        handle
    }

    /// `None` until the profile is loaded.
    pub fn stranger(&self) -> Option<bool> {
        self.info.as_ref().map(|info| info.stranger)
    }

    /// `None` until the profile is loaded.
    pub fn star(&self) -> Option<bool> {
        self.info.as_ref().map(|info| info.star)
    }

    pub fn official(&self) -> bool {
        self.info.as_ref().is_some_and(|info| info.official)
    }

    pub fn special(&self) -> bool {
        self.info.as_ref().is_some_and(|info| info.special)
    }

    pub fn personal(&self) -> bool {
        !self.official()
    }

    /// True when this contact is the logged-in user.
    pub fn is_self(&self) -> bool {
        self.puppet.self_id().is_some_and(|id| id == self.id)
    }

    /// Set (`Some`) or remove (`None`) the alias on the backend, updating
    /// the cached profile on success. A failed remote call is logged and
    /// returned unchanged, leaving the cache as it was.
    pub async fn set_alias(&mut self, new_alias: Option<&str>) -> Result<()> {
        debug!("set_alias({new_alias:?}) on {}", self.id);
        match self.puppet.contact_alias(&self.id, new_alias).await {
            Ok(()) => {
                match self.info.as_mut() {
                    Some(info) => info.alias = new_alias.map(str::to_string),
                    // the remote side accepted the change, but there is
                    // nothing to update locally until the next ready()
                    None => error!("set_alias() on contact {} without loaded profile", self.id),
                }
                Ok(())
            }
            Err(e) => {
                error!("set_alias({new_alias:?}) on {} rejected: {e}", self.id);
                Err(e)
            }
        }
    }

    /// Send text or a pre-built message to this contact. The message's
    /// sender is the logged-in user, its recipient this contact; the
    /// transport result is returned unmodified.
    pub async fn say(&self, content: impl Into<Sayable>) -> Result<()> {
        let user_id = self.puppet.self_id().ok_or(Error::NoLoggedInUser)?;

        let mut message = match content.into() {
            Sayable::Text(text) => {
                let mut message = Message::new();
                message.set_text(text);
                message
            }
            Sayable::Message(message) => message,
        };
        message.set_from(user_id);
        message.set_to(self.id.clone());

        debug!(
            "say() from {} to {}",
            message.from().unwrap_or_default(),
            self.id
        );
        self.puppet.message_send(&message).await
    }

    /// Open an authenticated byte stream of the high-resolution avatar.
    pub async fn avatar(&self) -> Result<Response> {
        let Some(info) = self.info.as_ref() else {
            return Err(Error::NotLoaded(self.id.clone()));
        };
        if info.avatar.is_empty() {
            return Err(Error::NoAvatar(self.id.clone()));
        }

        let res = async {
            let hostname = self.puppet.hostname().await?;
            let mut avatar_url = Url::parse(&format!("http://{hostname}{}", info.avatar))?;
            // 'type=big' selects the full-size variant
            avatar_url.query_pairs_mut().append_pair("type", "big");
            let cookies = self.puppet.cookies().await?;
            trace!("avatar() url: {avatar_url}");
            utils::url_stream(avatar_url, &cookies).await
        }
        .await;
        if let Err(e) = &res {
            warn!("avatar() for {} failed: {e}", self.id);
        }
        res
    }

    /// Log the cached normalized profile.
    pub fn dump(&self) {
        match &self.info {
            Some(info) => debug!("contact {}: {info:?}", self.id),
            None => debug!("contact {}: not loaded", self.id),
        }
    }

    /// Log the last raw payload received.
    pub fn dump_raw(&self) {
        match &self.raw {
            Some(raw) => debug!("contact {} raw: {raw:?}", self.id),
            None => debug!("contact {}: no raw payload", self.id),
        }
    }
}

impl<P: Puppet> fmt::Display for Contact<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match &self.info {
            Some(info) => info
                .alias
                .as_deref()
                .filter(|alias| !alias.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| {
                    if info.name.is_empty() {
                        self.id.clone()
                    } else {
                        utils::plain_text(&info.name)
                    }
                }),
            None => self.id.clone(),
        };
        write!(f, "Contact<{label}>")
    }
}
