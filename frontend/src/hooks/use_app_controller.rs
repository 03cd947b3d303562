use std::cell::{Ref, RefCell};
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use jumat_berkah_backend::{initialize_backend, AppConfig, UiEvent, ViewController};
use yew::prelude::*;

use crate::services::browser_storage::BrowserStorage;

/// The controller is mutated in place; `version` bumps on every event so
/// the reducer handle still triggers a re-render.
pub struct AppState {
    controller: Rc<RefCell<ViewController<BrowserStorage>>>,
    version: u64,
}

impl AppState {
    pub fn controller(&self) -> Ref<'_, ViewController<BrowserStorage>> {
        self.controller.borrow()
    }
}

impl Reducible for AppState {
    type Action = UiEvent;

    fn reduce(self: Rc<Self>, action: UiEvent) -> Rc<Self> {
        self.controller.borrow_mut().handle(action);
        Rc::new(Self {
            controller: Rc::clone(&self.controller),
            version: self.version + 1,
        })
    }
}

pub struct UseAppControllerResult {
    pub state: UseReducerHandle<AppState>,
    pub on_event: Callback<UiEvent>,
}

/// Load the controller from localStorage once and keep the donation
/// timers armed for whatever phase the flow is in.
#[hook]
pub fn use_app_controller(config: &AppConfig) -> UseAppControllerResult {
    let state = {
        let config = config.clone();
        use_reducer(move || AppState {
            controller: Rc::new(RefCell::new(initialize_backend(BrowserStorage, &config))),
            version: 0,
        })
    };

    let on_event = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: UiEvent| dispatcher.dispatch(event))
    };

    // Re-arms whenever the scheduled transition changes; dropping the old
    // Timeout cancels it.
    {
        let dispatcher = state.dispatcher();
        let transition = state.controller().donation().scheduled_transition();
        use_effect_with(transition, move |transition| {
            let timeout = (*transition).map(|scheduled| {
                Timeout::new(scheduled.after_ms, move || {
                    dispatcher.dispatch(UiEvent::DonationTimerElapsed(scheduled.timer));
                })
            });
            move || drop(timeout)
        });
    }

    UseAppControllerResult { state, on_event }
}
