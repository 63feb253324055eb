use std::time::Duration;

use reqwest::blocking::{Client, Response};
use scraper::Selector;
use tracing::{debug, info};
use url::Url;

use super::{Document, Scroll, Session, SessionError};
use crate::config::{Credentials, Settings};
use crate::pacing::Pacer;
use crate::selectors::login;

/// Session over plain HTTP: each navigation fetches and parses one static page.
/// Cookies persist for the life of the session, so one login covers a category.
pub struct HttpSession {
    client: Client,
    origin: String,
    wait: Duration,
    document: Option<Document>,
}

impl HttpSession {
    pub fn open(settings: &Settings) -> Result<Self, SessionError> {
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|source| SessionError::Transport {
                url: settings.origin.clone(),
                source,
            })?;
        debug!("Opened session for {}", settings.origin);
        Ok(Self {
            client,
            origin: settings.origin.clone(),
            wait: settings.waits().primary,
            document: None,
        })
    }

    /// Sign in through the account-list link, then the email and password forms.
    /// Any failure along the way is reported as a login failure.
    pub fn login(&mut self, credentials: &Credentials, settle: &Pacer) -> Result<(), SessionError> {
        let origin = self.origin.clone();
        self.navigate_to(&origin).map_err(login_error)?;
        settle.pause();

        let href = self
            .find_element(&login::ACCOUNT_LINK)
            .and_then(|a| a.attr("href").map(str::to_string))
            .ok_or_else(|| SessionError::Login("account link not found".into()))?;
        let target = self.resolve(&href).map_err(login_error)?;
        self.navigate_to(target.as_str()).map_err(login_error)?;

        self.submit_field(&login::EMAIL, "email", &credentials.email)?;
        self.submit_field(&login::PASSWORD, "password", &credentials.password)?;
        settle.pause();

        if self.find_element(&login::AUTH_ERROR).is_some()
            || self.find_element(&login::PASSWORD).is_some()
        {
            return Err(SessionError::Login("credentials rejected".into()));
        }
        info!("Logged in as {}", credentials.email);
        Ok(())
    }

    /// Fill one input and submit its enclosing form, hidden inputs included.
    fn submit_field(&mut self, field: &Selector, name: &str, value: &str) -> Result<(), SessionError> {
        let input = self
            .wait_until_present(field, self.wait)
            .ok_or_else(|| SessionError::Login(format!("{} field not found", name)))?;
        let form = self
            .find_elements(&login::FORM)
            .into_iter()
            .find(|f| f.find(field).is_some())
            .ok_or_else(|| SessionError::Login(format!("no form around {} field", name)))?;

        let mut params: Vec<(String, String)> = form
            .find_all(&login::HIDDEN_INPUT)
            .iter()
            .filter_map(|i| {
                let key = i.attr("name")?;
                Some((key.to_string(), i.attr("value").unwrap_or("").to_string()))
            })
            .collect();
        params.push((input.attr("name").unwrap_or(name).to_string(), value.to_string()));

        let action = self
            .resolve(form.attr("action").unwrap_or(""))
            .map_err(login_error)?;
        debug!("Submitting {} form to {}", name, action);
        let response = self
            .client
            .post(action.clone())
            .form(&params)
            .send()
            .map_err(|source| {
                login_error(SessionError::Transport {
                    url: action.to_string(),
                    source,
                })
            })?;
        self.load(action.as_str(), response).map_err(login_error)
    }

    fn resolve(&self, href: &str) -> Result<Url, SessionError> {
        let base = self.current_url().unwrap_or(self.origin.as_str());
        Ok(Url::parse(base)?.join(href)?)
    }

    fn load(&mut self, url: &str, response: Response) -> Result<(), SessionError> {
        let status = response.status();
        if !status.is_success() {
            return Err(SessionError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let final_url = response.url().to_string();
        let body = response.text().map_err(|source| SessionError::Transport {
            url: url.to_string(),
            source,
        })?;
        self.document = Some(Document::parse(&final_url, &body));
        Ok(())
    }
}

impl Session for HttpSession {
    fn navigate_to(&mut self, url: &str) -> Result<(), SessionError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| SessionError::Transport {
                url: url.to_string(),
                source,
            })?;
        self.load(url, response)
    }

    // A fetched page is fully materialised; there is nothing left to reveal.
    fn scroll(&mut self, direction: Scroll) -> Result<(), SessionError> {
        debug!("Scroll {:?} on static page", direction);
        Ok(())
    }

    fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }
}

impl Drop for HttpSession {
    fn drop(&mut self) {
        debug!("Closed session for {}", self.origin);
    }
}

fn login_error(err: SessionError) -> SessionError {
    match err {
        SessionError::Login(_) => err,
        other => SessionError::Login(other.to_string()),
    }
}
