use std::cell::RefCell;
use std::rc::Rc;

use crate::api::{
    ChartAction, ChartEngine, ChartEventKind, ChartOption, EngineFactory, EngineTheme,
    EventDispatcher, EventParams, SetOptionOpts,
};
use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// One recorded call against a [`NullEngine`].
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Init { instance: usize, theme: EngineTheme },
    SetOption { instance: usize, opts: SetOptionOpts },
    On { instance: usize, event: ChartEventKind },
    Off { instance: usize, event: ChartEventKind },
    Resize { instance: usize },
    DispatchAction { instance: usize, action: ChartAction },
    Dispose { instance: usize },
}

#[derive(Debug, Default)]
struct ProbeState {
    calls: Vec<EngineCall>,
    listeners: Vec<(usize, EventDispatcher)>,
    last_option: Option<ChartOption>,
    created: usize,
    disposed: usize,
}

/// Shared recorder observing every [`NullEngine`] a factory creates.
#[derive(Debug, Clone, Default)]
pub struct EngineProbe {
    state: Rc<RefCell<ProbeState>>,
}

impl EngineProbe {
    #[must_use]
    pub fn calls(&self) -> Vec<EngineCall> {
        self.state.borrow().calls.clone()
    }

    #[must_use]
    pub fn actions(&self) -> Vec<ChartAction> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|call| match call {
                EngineCall::DispatchAction { action, .. } => Some(action.clone()),
                _ => None,
            })
            .collect()
    }

    /// Listeners still registered, across every instance.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    #[must_use]
    pub fn listener_kinds(&self) -> Vec<ChartEventKind> {
        self.state
            .borrow()
            .listeners
            .iter()
            .map(|(_, dispatcher)| dispatcher.kind())
            .collect()
    }

    #[must_use]
    pub fn last_option(&self) -> Option<ChartOption> {
        self.state.borrow().last_option.clone()
    }

    #[must_use]
    pub fn instances_created(&self) -> usize {
        self.state.borrow().created
    }

    #[must_use]
    pub fn instances_disposed(&self) -> usize {
        self.state.borrow().disposed
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Fires `kind` at every registered listener, as the engine would on user
    /// input. Returns how many listeners received it.
    pub fn emit(&self, kind: ChartEventKind, params: &EventParams) -> usize {
        let targets: Vec<EventDispatcher> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|(_, dispatcher)| dispatcher.kind() == kind)
            .map(|(_, dispatcher)| dispatcher.clone())
            .collect();
        for dispatcher in &targets {
            dispatcher.dispatch(params);
        }
        targets.len()
    }

    fn record(&self, call: EngineCall) {
        self.state.borrow_mut().calls.push(call);
    }
}

/// Headless engine used by tests and hosts without a rendering surface.
///
/// It renders nothing but records every call and keeps registered listeners
/// so event plumbing can be exercised end to end.
#[derive(Debug)]
pub struct NullEngine {
    instance: usize,
    probe: EngineProbe,
    disposed: bool,
}

impl NullEngine {
    #[must_use]
    pub fn instance(&self) -> usize {
        self.instance
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl ChartEngine for NullEngine {
    fn set_option(&mut self, option: &ChartOption, opts: SetOptionOpts) {
        self.probe.record(EngineCall::SetOption {
            instance: self.instance,
            opts,
        });
        self.probe.state.borrow_mut().last_option = Some(option.clone());
    }

    fn on(&mut self, dispatcher: EventDispatcher) {
        self.probe.record(EngineCall::On {
            instance: self.instance,
            event: dispatcher.kind(),
        });
        self.probe
            .state
            .borrow_mut()
            .listeners
            .push((self.instance, dispatcher));
    }

    fn off(&mut self, dispatcher: &EventDispatcher) {
        self.probe.record(EngineCall::Off {
            instance: self.instance,
            event: dispatcher.kind(),
        });
        let instance = self.instance;
        self.probe
            .state
            .borrow_mut()
            .listeners
            .retain(|(owner, bound)| !(*owner == instance && bound.same_as(dispatcher)));
    }

    fn resize(&mut self) {
        self.probe.record(EngineCall::Resize {
            instance: self.instance,
        });
    }

    fn dispatch_action(&mut self, action: ChartAction) {
        self.probe.record(EngineCall::DispatchAction {
            instance: self.instance,
            action,
        });
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.probe.record(EngineCall::Dispose {
            instance: self.instance,
        });
        self.probe.state.borrow_mut().disposed += 1;
    }
}

/// Creates [`NullEngine`]s sharing one [`EngineProbe`].
#[derive(Debug, Clone, Default)]
pub struct NullEngineFactory {
    probe: EngineProbe,
}

impl NullEngineFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn probe(&self) -> EngineProbe {
        self.probe.clone()
    }
}

impl EngineFactory for NullEngineFactory {
    type Container = Viewport;
    type Engine = NullEngine;

    fn init(&mut self, container: &Viewport, theme: &EngineTheme) -> ChartResult<NullEngine> {
        if !container.is_valid() {
            return Err(ChartError::EngineInit(format!(
                "container has no area: {}x{}",
                container.width, container.height
            )));
        }
        let instance = {
            let mut state = self.probe.state.borrow_mut();
            state.created += 1;
            state.created
        };
        self.probe.record(EngineCall::Init {
            instance,
            theme: theme.clone(),
        });
        Ok(NullEngine {
            instance,
            probe: self.probe.clone(),
            disposed: false,
        })
    }
}
