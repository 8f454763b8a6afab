use std::net::SocketAddr;

use anyhow::{bail, Result};
use futures::{stream::FuturesUnordered, StreamExt};
use indexmap::IndexMap;
use log::info;
use reqwest::{Method, Url};

use crate::domain::Activity;

use super::server::{ErrorDetail, Message};

mod toolkit {
    use anyhow::{anyhow, Result};
    use reqwest::Url;
    use std::net::SocketAddr;

    pub(super) fn url_for(addr: &SocketAddr, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&format!("http://{}/", addr))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Address {} can't carry a path", addr))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn send_membership_change(
    client: &reqwest::Client,
    method: Method,
    url: Url,
) -> Result<String> {
    let response = client.request(method, url).send().await?;
    let status = response.status();
    if status.is_success() {
        let body: Message = response.json().await?;
        return Ok(body.message);
    }
    match response.json::<ErrorDetail>().await {
        Ok(body) => bail!("{}: {}", status, body.detail),
        Err(_) => bail!("{}", status),
    }
}

pub async fn get_activities(
    client: &reqwest::Client,
    addr: &SocketAddr,
) -> Result<IndexMap<String, Activity>> {
    let url = toolkit::url_for(addr, &["activities"])?;
    info!("Fetching activities from {}", url);
    Ok(client.get(url).send().await?.error_for_status()?.json().await?)
}

pub async fn signup(
    client: &reqwest::Client,
    addr: &SocketAddr,
    activity: &str,
    email: &str,
) -> Result<String> {
    let mut url = toolkit::url_for(addr, &["activities", activity, "signup"])?;
    url.query_pairs_mut().append_pair("email", email);
    send_membership_change(client, Method::POST, url).await
}

pub async fn unregister(
    client: &reqwest::Client,
    addr: &SocketAddr,
    activity: &str,
    email: &str,
) -> Result<String> {
    let mut url = toolkit::url_for(addr, &["activities", activity, "unregister"])?;
    url.query_pairs_mut().append_pair("email", email);
    send_membership_change(client, Method::DELETE, url).await
}

/// Signs every email up concurrently. Results come back in completion order.
pub async fn signup_many(
    client: &reqwest::Client,
    addr: &SocketAddr,
    activity: &str,
    emails: &[&str],
) -> Vec<(String, Result<String>)> {
    let mut tasks: FuturesUnordered<_> = emails
        .iter()
        .map(|email| async move {
            let result = signup(client, addr, activity, email).await;
            (email.to_string(), result)
        })
        .collect();
    let mut results = Vec::with_capacity(emails.len());
    while let Some(result) = tasks.next().await {
        results.push(result);
    }
    results
}
