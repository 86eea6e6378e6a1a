//! Name-to-constructor registry for strategy selection at startup.

use indexmap::IndexMap;
use paramsearch_crawler::{Crawler, CrawlerError};
use paramsearch_domain::Domain;

use crate::{
    DirectedCrawler, ImprovedDirectedCrawler, ImprovedSimpleCrawler, InteractiveCrawler,
    RandomCrawler, SimpleCrawler,
};

/// Builds a boxed crawler over a borrowed domain.
pub type CrawlerCtor = for<'a> fn(&'a Domain) -> Box<dyn Crawler<'a> + 'a>;

/// Ordered map from strategy name to constructor.
///
/// Names iterate in registration order.
#[derive(Clone, Debug)]
pub struct CrawlerRegistry {
    ctors: IndexMap<String, CrawlerCtor>,
}

fn simple<'a>(domain: &'a Domain) -> Box<dyn Crawler<'a> + 'a> {
    Box::new(SimpleCrawler::new(domain))
}

fn improved_simple<'a>(domain: &'a Domain) -> Box<dyn Crawler<'a> + 'a> {
    Box::new(ImprovedSimpleCrawler::new(domain))
}

fn directed<'a>(domain: &'a Domain) -> Box<dyn Crawler<'a> + 'a> {
    Box::new(DirectedCrawler::new(domain))
}

fn improved_directed<'a>(domain: &'a Domain) -> Box<dyn Crawler<'a> + 'a> {
    Box::new(ImprovedDirectedCrawler::new(domain))
}

fn random<'a>(domain: &'a Domain) -> Box<dyn Crawler<'a> + 'a> {
    Box::new(RandomCrawler::new(domain))
}

fn interactive<'a>(domain: &'a Domain) -> Box<dyn Crawler<'a> + 'a> {
    Box::new(InteractiveCrawler::new(domain))
}

fn steered<'a>(domain: &'a Domain) -> Box<dyn Crawler<'a> + 'a> {
    Box::new(InteractiveCrawler::steered(domain))
}

const DEFAULTS: [(&str, CrawlerCtor); 7] = [
    ("SimpleCrawler", simple as CrawlerCtor),
    ("ImprovedSimpleCrawler", improved_simple as CrawlerCtor),
    ("DirectedCrawler", directed as CrawlerCtor),
    ("ImprovedDirectedCrawler", improved_directed as CrawlerCtor),
    ("RandomCrawler", random as CrawlerCtor),
    ("InteractiveCrawler", interactive as CrawlerCtor),
    ("SteeredCrawler", steered as CrawlerCtor),
];

impl CrawlerRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            ctors: IndexMap::new(),
        }
    }

    /// A registry holding every built-in strategy.
    pub fn with_defaults() -> Self {
        Self {
            ctors: DEFAULTS
                .iter()
                .map(|&(name, ctor)| (name.to_owned(), ctor))
                .collect(),
        }
    }

    /// Add a strategy under `name`.
    ///
    /// # Errors
    ///
    /// [`CrawlerError::DuplicateStrategy`] if `name` is already registered.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        ctor: CrawlerCtor,
    ) -> Result<(), CrawlerError> {
        let name = name.into();
        if self.ctors.contains_key(&name) {
            return Err(CrawlerError::DuplicateStrategy { name });
        }
        self.ctors.insert(name, ctor);
        Ok(())
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.ctors.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ctors.keys().map(String::as_str)
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.ctors.len()
    }

    /// Whether no strategies are registered.
    pub fn is_empty(&self) -> bool {
        self.ctors.is_empty()
    }

    /// Build the strategy registered as `name` over `domain`.
    ///
    /// # Errors
    ///
    /// [`CrawlerError::UnknownStrategy`] if `name` is not registered.
    pub fn create<'a>(
        &self,
        name: &str,
        domain: &'a Domain,
    ) -> Result<Box<dyn Crawler<'a> + 'a>, CrawlerError> {
        let ctor = self
            .ctors
            .get(name)
            .ok_or_else(|| CrawlerError::UnknownStrategy {
                name: name.to_owned(),
            })?;
        Ok(ctor(domain))
    }
}

impl Default for CrawlerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
