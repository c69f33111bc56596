use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::models::{ContactInternal, Message};
use crate::puppet::Puppet;
use crate::session::{CookieStore, Session};

/// In-memory transport double. Payloads are installed per contact id;
/// every call performed through the trait is recorded for assertions.
#[derive(Debug, Clone, Default)]
pub struct MockPuppet {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    contacts: HashMap<String, ContactInternal>,
    session: Session,
    self_id: Option<String>,
    fail_fetch: bool,
    fail_alias: bool,
    fail_send: bool,
    fetch_count: usize,
    alias_calls: Vec<(String, Option<String>)>,
    sent: Vec<Message>,
}

impl MockPuppet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_contact_response_from_str(&self, id: &str, json: &str) -> Result<()> {
        let raw: ContactInternal = serde_json::from_str(json)?;
        self.inner.lock()?.contacts.insert(id.to_string(), raw);
        Ok(())
    }

    pub fn set_self_id(&self, id: &str) {
        self.inner.lock().unwrap().self_id = Some(id.to_string());
    }

    pub fn set_session(&self, session: Session) {
        self.inner.lock().unwrap().session = session;
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.inner.lock().unwrap().fail_fetch = fail;
    }

    pub fn set_fail_alias(&self, fail: bool) {
        self.inner.lock().unwrap().fail_alias = fail;
    }

    pub fn set_fail_send(&self, fail: bool) {
        self.inner.lock().unwrap().fail_send = fail;
    }

    pub fn fetch_count(&self) -> usize {
        self.inner.lock().unwrap().fetch_count
    }

    pub fn alias_calls(&self) -> Vec<(String, Option<String>)> {
        self.inner.lock().unwrap().alias_calls.clone()
    }

    pub fn sent_messages(&self) -> Vec<Message> {
        self.inner.lock().unwrap().sent.clone()
    }
}

impl Puppet for MockPuppet {
    async fn contact_payload(&self, id: &str) -> Result<ContactInternal> {
        let mut inner = self.inner.lock()?;
        inner.fetch_count += 1;
        if inner.fail_fetch {
            return Err(Error::Other("mock fetch failure".to_string()));
        }
        inner
            .contacts
            .get(id)
            .cloned()
            .ok_or_else(|| Error::Other(format!("no mock payload for {id}")))
    }

    async fn contact_alias(&self, id: &str, alias: Option<&str>) -> Result<()> {
        let mut inner = self.inner.lock()?;
        if inner.fail_alias {
            return Err(Error::Other("mock alias failure".to_string()));
        }
        inner
            .alias_calls
            .push((id.to_string(), alias.map(str::to_string)));
        Ok(())
    }

    async fn message_send(&self, message: &Message) -> Result<()> {
        let mut inner = self.inner.lock()?;
        if inner.fail_send {
            return Err(Error::Other("mock send failure".to_string()));
        }
        inner.sent.push(message.clone());
        Ok(())
    }

    fn self_id(&self) -> Option<String> {
        self.inner.lock().ok()?.self_id.clone()
    }

    async fn hostname(&self) -> Result<String> {
        Ok(self.inner.lock()?.session.host.clone())
    }

    async fn cookies(&self) -> Result<CookieStore> {
        Ok(self.inner.lock()?.session.cookie_store.clone())
    }
}
