
use crate::crawlers::fetcher::{FetchedPage, Fetcher};
use crate::crawlers::renderer::Renderer;
use crate::error::{FetchError, RenderError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const BASE: &str = "https://www.coursebuffet.com";

/// Serves canned documents; unknown URLs get a 404
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, (u16, String)>,
    pub requested: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn page(mut self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), (status, body.into()));
        self
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        let (status, body) = self
            .pages
            .get(url)
            .cloned()
            .unwrap_or((404, String::new()));
        Ok(FetchedPage {
            url: url.to_string(),
            status,
            body,
        })
    }
}

/// What a fake renderer was asked to do, shared with the test after the
/// renderer itself has been consumed
#[derive(Debug, Default)]
pub struct RenderLog {
    pub navigations: Vec<String>,
    pub clicks: usize,
    pub shut_down: bool,
}

/// Renderer over static pages. A page registered with `load_more(n)` has a
/// control that reports visible `n` times and hidden afterwards.
#[derive(Default)]
pub struct FakeRenderer {
    pages: HashMap<String, String>,
    controls: HashMap<String, usize>,
    current: Option<String>,
    remaining_visible: usize,
    visibility_checks: usize,
    faults: Faults,
    log: Arc<Mutex<RenderLog>>,
}

/// Control commands that should fail
#[derive(Default)]
struct Faults {
    lookup: bool,
    visibility_after: Option<usize>,
    click: bool,
}

impl FakeRenderer {
    pub fn page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }

    pub fn load_more(mut self, url: &str, visible_times: usize) -> Self {
        self.controls.insert(url.to_string(), visible_times);
        self
    }

    pub fn fail_lookup(mut self) -> Self {
        self.faults.lookup = true;
        self
    }

    /// Visibility checks succeed `checks` times, then fail
    pub fn fail_visibility_after(mut self, checks: usize) -> Self {
        self.faults.visibility_after = Some(checks);
        self
    }

    pub fn fail_click(mut self) -> Self {
        self.faults.click = true;
        self
    }

    pub fn log(&self) -> Arc<Mutex<RenderLog>> {
        Arc::clone(&self.log)
    }
}

#[async_trait]
impl Renderer for FakeRenderer {
    type Control = ();

    async fn navigate(&mut self, url: &str) -> Result<(), RenderError> {
        self.log.lock().unwrap().navigations.push(url.to_string());
        if !self.pages.contains_key(url) {
            return Err(RenderError::Unreachable(url.to_string()));
        }
        self.remaining_visible = self.controls.get(url).copied().unwrap_or(0);
        self.current = Some(url.to_string());
        Ok(())
    }

    async fn find_control(&mut self, id: &str) -> Result<Option<()>, RenderError> {
        if self.faults.lookup {
            return Err(RenderError::Unreachable(format!("lookup of #{}", id)));
        }
        let has_control = self
            .current
            .as_ref()
            .is_some_and(|url| self.controls.contains_key(url));
        Ok(has_control.then_some(()))
    }

    async fn is_visible(&mut self, _control: &()) -> Result<bool, RenderError> {
        if self
            .faults
            .visibility_after
            .is_some_and(|checks| self.visibility_checks >= checks)
        {
            return Err(RenderError::Unreachable("visibility check".to_string()));
        }
        self.visibility_checks += 1;
        if self.remaining_visible == 0 {
            return Ok(false);
        }
        self.remaining_visible -= 1;
        Ok(true)
    }

    async fn click(&mut self, _control: &()) -> Result<(), RenderError> {
        if self.faults.click {
            return Err(RenderError::Unreachable("click".to_string()));
        }
        self.log.lock().unwrap().clicks += 1;
        Ok(())
    }

    async fn source(&mut self) -> Result<String, RenderError> {
        Ok(self
            .current
            .as_ref()
            .and_then(|url| self.pages.get(url))
            .cloned()
            .unwrap_or_default())
    }

    async fn shutdown(self) -> Result<(), RenderError> {
        self.log.lock().unwrap().shut_down = true;
        Ok(())
    }
}

/// An HTML page holding the given links
pub fn links_page(hrefs: &[&str]) -> String {
    let anchors: String = hrefs
        .iter()
        .map(|href| format!("<a href=\"{}\">link</a>", href))
        .collect();
    format!("<html><body>{}</body></html>", anchors)
}
