use valley_core::Router;
use web_sys as web;

/// Full page navigation through `window.location`.
pub struct LocationRouter;

impl Router for LocationRouter {
    fn go_to(&self, path: &str) -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        log::info!("[router] {}", path);
        window
            .location()
            .assign(path)
            .map_err(|e| anyhow::anyhow!("location.assign failed: {:?}", e))
    }
}
