use anyhow::Result;

use crate::session::Route;

#[async_trait::async_trait]
pub trait NavigationPort: Send + Sync {
    /// Replace the current route. Must never push onto a back stack.
    async fn replace_route(&self, route: Route) -> Result<()>;
}
