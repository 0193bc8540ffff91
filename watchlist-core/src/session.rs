//! Session controller: routes user intents into the catalog and keeps the
//! presenter up to date.

use crate::catalog::Catalog;
use crate::hint::Hint;
use crate::pick::{RandomSource, pick};
use crate::types::{MovieId, MovieRecord, Stats, StatusFilter};

/// Output side of a session. Implementations display what they are given
/// and never call back into the session.
pub trait Presenter {
    /// Show the records that pass the current filters, in order.
    fn render(&mut self, visible: &[&MovieRecord]);

    /// Show counts over the whole catalog.
    fn show_stats(&mut self, stats: Stats);

    /// Show a short status message.
    fn show_hint(&mut self, hint: &Hint);
}

/// A user request coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add { title: String, year: Option<String> },
    Toggle(MovieId),
    Remove(MovieId),
    SetFilter(StatusFilter),
    SetSearch(String),
    Pick,
    /// Redraw without changing anything.
    Refresh,
}

/// One watch-list session: a catalog, its presenter and a random source.
pub struct Session<P, R> {
    catalog: Catalog,
    presenter: P,
    rng: R,
}

impl<P: Presenter, R: RandomSource> Session<P, R> {
    pub fn new(presenter: P, rng: R) -> Self {
        Self::with_catalog(Catalog::new(), presenter, rng)
    }

    /// Start from an existing catalog (and its view filters).
    pub fn with_catalog(catalog: Catalog, presenter: P, rng: R) -> Self {
        Self {
            catalog,
            presenter,
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_parts(self) -> (Catalog, P, R) {
        (self.catalog, self.presenter, self.rng)
    }

    /// Apply one intent. Validation failures are reported as hints, so this
    /// never fails.
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::Add { title, year } => {
                match self.catalog.add(&title, year.as_deref()) {
                    Ok(record) => {
                        let hint = Hint::ok(format!("Added \"{}\".", record.title));
                        self.refresh();
                        self.presenter.show_hint(&hint);
                    }
                    Err(e) => {
                        log::debug!("Add rejected: {:?}", e);
                        self.presenter.show_hint(&e.hint());
                    }
                }
            }
            Intent::Toggle(id) => {
                self.catalog.toggle(id);
                self.refresh();
            }
            Intent::Remove(id) => {
                self.catalog.remove(id);
                self.refresh();
            }
            Intent::SetFilter(status) => {
                self.catalog.set_status_filter(status);
                self.refresh();
            }
            Intent::SetSearch(text) => {
                self.catalog.set_search(text);
                self.refresh();
            }
            Intent::Pick => {
                let visible = self.catalog.visible();
                let hint = pick(&visible, &mut self.rng).hint();
                self.presenter.show_hint(&hint);
            }
            Intent::Refresh => self.refresh(),
        }
    }

    /// Recompute the projection and stats and hand them to the presenter.
    pub fn refresh(&mut self) {
        let visible = self.catalog.visible();
        self.presenter.render(&visible);
        self.presenter.show_stats(self.catalog.stats());
    }
}
