//! Submit-profile-then-fetch-advice workflow with observable view state.

use crate::analysis::{classify, handle_error, UserFriendlyError};
use crate::error::{AdviceError, Result};
use crate::profile::HomeProfile;
use crate::ranking::sort_recommendations;
use crate::resources::{AdviceApi, HomeApi};
use crate::traits::ApiTransport;
use crate::types::EnergyAdvice;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

const WORKFLOW_CONTEXT: &str = "generating advice";

/// Coarse phase derived from a `ViewState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// What the view renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub loading: bool,
    /// Display text of the last failure
    pub error: Option<String>,
    /// Structured form of the last failure, for retry hints
    pub failure: Option<UserFriendlyError>,
    pub advice: Option<EnergyAdvice>,
}

impl ViewState {
    fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    fn succeeded(advice: EnergyAdvice) -> Self {
        Self {
            advice: Some(advice),
            ..Self::default()
        }
    }

    fn failed(failure: UserFriendlyError) -> Self {
        Self {
            error: Some(failure.format_for_display()),
            failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.advice.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }
}

/// Drives the advice workflow and publishes its state.
///
/// Each call to `generate_advice` takes a fresh generation number; `reset`
/// and `cancel` advance it too. A workflow only publishes its outcome while
/// its generation is still the latest, so a slow, superseded request can
/// never overwrite newer state.
pub struct AdviceController<T: ApiTransport> {
    homes: HomeApi<T>,
    advice: AdviceApi<T>,
    state: watch::Sender<ViewState>,
    generation: AtomicU64,
}

impl<T: ApiTransport> AdviceController<T> {
    pub fn new(transport: T) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            homes: HomeApi::new(transport.clone()),
            advice: AdviceApi::new(transport),
            state,
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Submit the profile, fetch advice for the new home and publish the
    /// sorted result, or the classified error.
    pub async fn generate_advice(&self, profile: &HomeProfile) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(ViewState::loading());

        let next = match self.run_workflow(profile).await {
            Ok(advice) => {
                tracing::info!(
                    home_id = %advice.home_id,
                    recommendations = advice.recommendations.len(),
                    provider = %advice.llm_provider,
                    "advice generated"
                );
                ViewState::succeeded(advice)
            }
            Err(err) => ViewState::failed(handle_error(&err, WORKFLOW_CONTEXT)),
        };

        self.publish(generation, next);
    }

    async fn run_workflow(&self, profile: &HomeProfile) -> Result<EnergyAdvice> {
        let home = self.homes.create_home(profile).await?;
        tracing::debug!(home_id = %home.id, "home profile created");

        let mut advice = self.advice.get_advice(&home.id).await?;
        advice.recommendations = sort_recommendations(&advice.recommendations);
        Ok(advice)
    }

    fn publish(&self, generation: u64, next: ViewState) {
        self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                tracing::debug!(generation, "discarding result of superseded workflow");
                return false;
            }
            *state = next;
            true
        });
    }

    /// Back to idle without touching the network
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(ViewState::default());
    }

    /// Abandon the in-flight workflow, if any, and report it as cancelled.
    ///
    /// The caller is expected to drop the workflow future; anything it
    /// would still publish is ignored.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_if_modified(|state| {
            if !state.loading {
                return false;
            }
            *state = ViewState::failed(classify(&AdviceError::Cancelled));
            true
        });
    }
}
