use std::fs::{read_to_string, write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

/// Cookies of the logged-in web session, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CookieStore(pub Vec<Cookie>);

impl CookieStore {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value of the `Cookie` request header for this session.
    pub fn header_value(&self) -> String {
        self.0
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Authenticated session state shared by transports: the backend host the
/// login landed on plus its cookies.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Session {
    pub host: String,
    pub cookie_store: CookieStore,
}

impl Session {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(serde_json::from_str(&read_to_string(path)?)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod local_tests {
    use super::*;

    fn cookies() -> CookieStore {
        CookieStore(vec![
            Cookie {
                name: "wxuin".to_string(),
                value: "4763975".to_string(),
            },
            Cookie {
                name: "wxsid".to_string(),
                value: "abc123".to_string(),
            },
        ])
    }

    #[test]
    fn test_header_value() {
        assert_eq!(cookies().header_value(), "wxuin=4763975; wxsid=abc123");
        assert_eq!(CookieStore::default().header_value(), "");
    }

    #[test]
    fn test_save_load_roundtrip() -> anyhow::Result<()> {
        let session = Session {
            host: "wx.qq.com".to_string(),
            cookie_store: cookies(),
        };
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");
        session.save(&path)?;
        assert_eq!(Session::load(&path)?, session);
        Ok(())
    }
}
