//! Daily quote selection.
//!
//! # Responsibility
//! - Seed the stored quote list on first use.
//! - Pick one quote per calendar day and cache the pick in the store.
//!
//! # Invariants
//! - Within one day (per the injected clock) every call returns the same
//!   quote, as long as the cached index still points into the list.
//! - A new day, a missing index or an out-of-range index triggers a fresh
//!   uniform pick over the full list; earlier picks do not influence it.
//! - The quote list used for picking is never empty.
//! - The cached date and index are read leniently under every policy; an
//!   undecodable value (such as the browser's `toDateString()` text) is a
//!   cold cache and gets overwritten by the next pick.

use crate::clock::Clock;
use crate::model::quote::{built_in_quotes, Quote};
use crate::store::{keys, KeyValueStore, ReadPolicy, StoreAdapter, StoreResult};
use chrono::NaiveDate;
use log::{debug, info};
use rand::Rng;

pub struct DailyQuoteService<'s, S: KeyValueStore + ?Sized> {
    adapter: StoreAdapter<'s, S>,
    clock: &'s dyn Clock,
}

impl<'s, S: KeyValueStore + ?Sized> DailyQuoteService<'s, S> {
    pub fn new(adapter: StoreAdapter<'s, S>, clock: &'s dyn Clock) -> Self {
        Self { adapter, clock }
    }

    /// Writes the built-in list when no quote list is stored yet.
    pub fn initialize_quotes(&self) -> StoreResult<()> {
        if self.adapter.raw().get(keys::QUOTES)?.is_none() {
            self.adapter
                .write_collection(keys::QUOTES, &built_in_quotes())?;
            info!("event=quotes_seed module=quote status=ok");
        }
        Ok(())
    }

    /// Stored quote list, or the built-ins when it is empty or unreadable.
    pub fn quotes(&self) -> StoreResult<Vec<Quote>> {
        match self.adapter.read_value::<Vec<Quote>>(keys::QUOTES)? {
            Some(quotes) if !quotes.is_empty() => Ok(quotes),
            _ => Ok(built_in_quotes()),
        }
    }

    /// Today's quote, picking with the thread-local RNG when needed.
    pub fn daily_quote(&self) -> StoreResult<Quote> {
        self.daily_quote_with(&mut rand::rng())
    }

    /// Today's quote, picking with `rng` when the cache is cold.
    pub fn daily_quote_with<R: Rng>(&self, rng: &mut R) -> StoreResult<Quote> {
        self.initialize_quotes()?;
        let mut quotes = self.quotes()?;
        let today = self.clock.today();

        if let Some(index) = self.cached_index(today)? {
            if index < quotes.len() {
                debug!("event=quote_daily module=quote status=cached index={index}");
                return Ok(quotes.swap_remove(index));
            }
            debug!(
                "event=quote_daily module=quote status=stale_index index={index} len={}",
                quotes.len()
            );
        }

        let index = rng.random_range(0..quotes.len());
        self.adapter.write_value(keys::CURRENT_QUOTE_INDEX, &index)?;
        self.adapter.write_value(keys::LAST_QUOTE_DATE, &today)?;
        info!("event=quote_daily module=quote status=picked index={index} day={today}");
        Ok(quotes.swap_remove(index))
    }

    fn cached_index(&self, today: NaiveDate) -> StoreResult<Option<usize>> {
        let cache = StoreAdapter::with_policy(self.adapter.raw(), ReadPolicy::Lenient);
        let last_day = cache.read_value::<NaiveDate>(keys::LAST_QUOTE_DATE)?;
        if last_day != Some(today) {
            return Ok(None);
        }
        cache.read_value::<usize>(keys::CURRENT_QUOTE_INDEX)
    }
}
