use anyhow::Context;
use std::fmt;

const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Connection parameters for the users database.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String, // `host` or `host:port`
    pub name: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("name", &self.name)
            .finish()
    }
}

impl DatabaseConfig {
    /// Splits `host` into hostname and port, falling back to localhost:3306.
    pub fn host_and_port(&self) -> anyhow::Result<(String, u16)> {
        let host = if self.host.is_empty() {
            "localhost"
        } else {
            self.host.as_str()
        };
        match host.rsplit_once(':') {
            Some((name, port)) => {
                let port = port
                    .parse::<u16>()
                    .with_context(|| format!("invalid port in DB_HOST `{}`", self.host))?;
                Ok((name.to_string(), port))
            }
            None => Ok((host.to_string(), DEFAULT_MYSQL_PORT)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseConfig {
            user: lookup("DB_USER").unwrap_or_default(),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            host: lookup("DB_HOST").unwrap_or_default(),
            name: lookup("DB_NAME").unwrap_or_default(),
        };
        let host = lookup("APP_HOST")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "0.0.0.0".into());
        let port = match lookup("PORT").filter(|v| !v.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT `{raw}`"))?,
            None => 3000,
        };
        Ok(Self {
            database,
            host,
            port,
        })
    }

    /// Address to bind; `host` may be a hostname or an IP literal.
    pub fn listen_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
