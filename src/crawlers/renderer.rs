use crate::error::RenderError;
use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};

/// A browser session that runs page scripts and can be clicked through.
///
/// The session is released by [`Renderer::shutdown`], which consumes it.
#[async_trait]
pub trait Renderer: Send + Sized {
    /// Handle to an element located on the current page
    type Control: Send + Sync;

    async fn navigate(&mut self, url: &str) -> Result<(), RenderError>;

    /// Looks up an element by id. `Ok(None)` when the page has no such element.
    async fn find_control(&mut self, id: &str) -> Result<Option<Self::Control>, RenderError>;

    async fn is_visible(&mut self, control: &Self::Control) -> Result<bool, RenderError>;

    async fn click(&mut self, control: &Self::Control) -> Result<(), RenderError>;

    /// Source of the page as currently rendered
    async fn source(&mut self) -> Result<String, RenderError>;

    async fn shutdown(self) -> Result<(), RenderError>;
}

/// Renderer driving a browser through a WebDriver server
pub struct WebDriverRenderer {
    client: Client,
}

impl WebDriverRenderer {
    /// Connects to the WebDriver instance, falling back to the usual local ports
    pub async fn connect(webdriver_url: &str) -> Result<Self, RenderError> {
        match ClientBuilder::native().connect(webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", webdriver_url);
                return Ok(Self { client });
            }
            Err(e) => {
                ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
            }
        }

        let fallback_urls = [
            "http://localhost:9515", // ChromeDriver default
            "http://localhost:4444", // GeckoDriver / Selenium default
            "http://127.0.0.1:4444", // Try with IP instead of localhost
        ];

        let mut tried = vec![webdriver_url];
        for url in fallback_urls {
            if url == webdriver_url {
                continue;
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            tried.push(url);
            if let Ok(client) = ClientBuilder::native().connect(url).await {
                ::log::debug!("Connected to fallback WebDriver at {}", url);
                return Ok(Self { client });
            }
        }

        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(RenderError::Unreachable(tried.join(", ")))
    }
}

fn command(context: impl Into<String>) -> impl FnOnce(CmdError) -> RenderError {
    let context = context.into();
    move |source| RenderError::Command { context, source }
}

/// Maps a "no such element" lookup failure to `Ok(None)`
fn missing_as_none<T>(lookup: Result<T, CmdError>, id: &str) -> Result<Option<T>, RenderError> {
    match lookup {
        Ok(found) => Ok(Some(found)),
        Err(e) if e.is_no_such_element() => Ok(None),
        Err(e) => Err(command(format!("looking up #{}", id))(e)),
    }
}

#[async_trait]
impl Renderer for WebDriverRenderer {
    type Control = Element;

    async fn navigate(&mut self, url: &str) -> Result<(), RenderError> {
        self.client
            .goto(url)
            .await
            .map_err(command(format!("navigating to {}", url)))
    }

    async fn find_control(&mut self, id: &str) -> Result<Option<Element>, RenderError> {
        let lookup = self.client.find(Locator::Id(id)).await;
        missing_as_none(lookup, id)
    }

    async fn is_visible(&mut self, control: &Element) -> Result<bool, RenderError> {
        control
            .is_displayed()
            .await
            .map_err(command("checking control visibility"))
    }

    async fn click(&mut self, control: &Element) -> Result<(), RenderError> {
        control.click().await.map_err(command("clicking control"))
    }

    async fn source(&mut self) -> Result<String, RenderError> {
        self.client
            .source()
            .await
            .map_err(command("reading page source"))
    }

    async fn shutdown(self) -> Result<(), RenderError> {
        self.client
            .close()
            .await
            .map_err(command("closing the session"))
    }
}
