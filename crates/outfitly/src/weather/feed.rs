use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{Location, Resource, WeatherError, WeatherProvider};
use crate::domain::{Conditions, DailyForecast};

/// What a host renders for the weather panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherState {
    /// Last successful fetch; kept when a later fetch fails.
    pub conditions: Option<Conditions>,
    pub loading: bool,
    /// Set when the latest fetch failed.
    pub offline: bool,
    pub error: Option<String>,
}

impl WeatherState {
    pub fn resource(&self) -> Resource<Conditions> {
        if self.loading {
            return Resource::Loading;
        }
        match (&self.error, &self.conditions) {
            (Some(message), _) => Resource::Error(message.clone()),
            (None, Some(conditions)) => Resource::Success(conditions.clone()),
            (None, None) => Resource::Loading,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    /// A newer refresh started while this one was in flight; its result was dropped.
    Superseded,
}

/// Fetches weather on request and publishes it on two channels: the full
/// [`WeatherState`] for display, and successful [`Conditions`] for the orchestrator.
pub struct WeatherFeed<P: ?Sized> {
    provider: Arc<P>,
    include_forecast: bool,
    generation: Mutex<u64>,
    state: watch::Sender<WeatherState>,
    conditions: watch::Sender<Option<Conditions>>,
}

impl<P> WeatherFeed<P>
where
    P: WeatherProvider + ?Sized,
{
    pub fn new(provider: Arc<P>) -> Self {
        let (state, _) = watch::channel(WeatherState::default());
        let (conditions, _) = watch::channel(None);
        Self {
            provider,
            include_forecast: true,
            generation: Mutex::new(0),
            state,
            conditions,
        }
    }

    /// Skip the forecast request and publish current weather only.
    pub fn without_forecast(mut self) -> Self {
        self.include_forecast = false;
        self
    }

    pub fn subscribe_state(&self) -> watch::Receiver<WeatherState> {
        self.state.subscribe()
    }

    pub fn subscribe_conditions(&self) -> watch::Receiver<Option<Conditions>> {
        self.conditions.subscribe()
    }

    pub fn state(&self) -> WeatherState {
        self.state.borrow().clone()
    }

    pub fn dismiss_error(&self) {
        self.state.send_if_modified(|state| state.error.take().is_some());
    }

    /// Fetches for `location`. Only the most recently started refresh may publish.
    pub async fn refresh(&self, location: &Location) -> RefreshOutcome {
        let generation = {
            let mut latest = self.generation.lock().expect("weather feed mutex poisoned");
            *latest += 1;
            *latest
        };
        self.state.send_modify(|state| state.loading = true);

        let mut abandoned = LoadingGuard {
            generation,
            latest: &self.generation,
            state: &self.state,
            armed: true,
        };
        let result = self.fetch(location).await;
        abandoned.armed = false;

        let latest = self.generation.lock().expect("weather feed mutex poisoned");
        if *latest != generation {
            debug!(%location, generation, latest = *latest, "discarding superseded weather fetch");
            return RefreshOutcome::Superseded;
        }

        match result {
            Ok(conditions) => {
                info!(
                    city = %conditions.weather.city_name,
                    temperature = conditions.weather.temperature,
                    "weather updated"
                );
                self.state.send_modify(|state| {
                    state.conditions = Some(conditions.clone());
                    state.loading = false;
                    state.offline = false;
                    state.error = None;
                });
                self.conditions.send_replace(Some(conditions));
            }
            Err(err) => {
                warn!(%location, error = %err, "weather fetch failed");
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.offline = true;
                    state.error = Some(err.to_string());
                });
            }
        }
        RefreshOutcome::Applied
    }

    async fn fetch(&self, location: &Location) -> Result<Conditions, WeatherError> {
        fetch_conditions(self.provider.as_ref(), location, self.include_forecast).await
    }
}

/// Current weather plus, when asked for, the forecast. A failed forecast only
/// skips the forecast-based alerts; a failed current fetch is the error.
pub async fn fetch_conditions<P>(
    provider: &P,
    location: &Location,
    include_forecast: bool,
) -> Result<Conditions, WeatherError>
where
    P: WeatherProvider + ?Sized,
{
    let weather = provider.current(location).await?;
    if !include_forecast {
        return Ok(Conditions::current(weather));
    }

    let forecast = match provider.forecast(location).await {
        Ok(readings) => Some(DailyForecast::from_hourly(readings)),
        Err(err) => {
            warn!(%location, error = %err, "forecast unavailable");
            None
        }
    };

    Ok(Conditions { weather, forecast })
}

/// Clears `loading` when the newest refresh is dropped before its fetch completes;
/// older refreshes would otherwise all return superseded and leave it set.
struct LoadingGuard<'a> {
    generation: u64,
    latest: &'a Mutex<u64>,
    state: &'a watch::Sender<WeatherState>,
    armed: bool,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let still_newest = self
            .latest
            .lock()
            .map(|latest| *latest == self.generation)
            .unwrap_or(false);
        if still_newest {
            debug!(generation = self.generation, "weather refresh abandoned");
            self.state
                .send_if_modified(|state| std::mem::replace(&mut state.loading, false));
        }
    }
}
