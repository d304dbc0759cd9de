use super::{PickItem, QuickAccessProvider};
use crate::domain::cancellation::CancellationToken;
use futures::future::{self, BoxFuture, FutureExt};
use std::sync::Arc;

#[derive(Default, Clone)]
pub struct QuickAccessRegistry {
    providers: Vec<Arc<dyn QuickAccessProvider>>,
}

impl QuickAccessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, provider: Arc<dyn QuickAccessProvider>) {
        self.providers.push(provider);
    }

    pub fn prefixes(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.prefix()).collect()
    }

    pub fn provider(&self, prefix: &str) -> Option<Arc<dyn QuickAccessProvider>> {
        self.providers.iter().find(|p| p.prefix() == prefix).cloned()
    }

    /// Find the provider with the longest prefix of `input` and return it
    /// with the remaining filter text, trimmed of surrounding whitespace.
    /// Prefix matching is case-sensitive.
    pub fn resolve<'a>(&self, input: &'a str) -> Option<(Arc<dyn QuickAccessProvider>, &'a str)> {
        self.providers
            .iter()
            .filter(|p| input.starts_with(p.prefix()))
            .max_by_key(|p| p.prefix().len())
            .map(|p| (p.clone(), input[p.prefix().len()..].trim()))
    }

    /// Start producing picks for `input`. Returns the owning prefix (if any)
    /// and a future that does not borrow the registry, ready to be spawned.
    pub fn picks(
        &self,
        input: &str,
        token: CancellationToken,
    ) -> (Option<&'static str>, BoxFuture<'static, Vec<PickItem>>) {
        match self.resolve(input) {
            Some((provider, filter)) => {
                let filter = filter.to_string();
                let prefix = provider.prefix();
                let fut = async move { provider.get_picks(&filter, token).await }.boxed();
                (Some(prefix), fut)
            }
            None => (None, future::ready(Vec::new()).boxed()),
        }
    }
}
