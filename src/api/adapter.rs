use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info, trace};

use crate::core::Viewport;
use crate::error::ChartResult;

use super::engine::{ChartAction, ChartEngine, EngineFactory, EngineTheme, SetOptionOpts};
use super::events::{ChartEventKind, EventDispatcher, EventHandlers};
use super::option::ChartOption;

pub const DEFAULT_CHART_HEIGHT: u32 = 350;

/// Lifecycle of one adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterState {
    /// No engine instance exists.
    Unmounted,
    /// Engine created, no option applied yet.
    Initializing,
    /// Engine created and configured.
    Ready,
}

/// Inputs of the generic chart component.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartProps {
    pub option: Option<ChartOption>,
    pub dark_mode: bool,
    pub height: u32,
}

impl Default for ChartProps {
    fn default() -> Self {
        Self {
            option: None,
            dark_mode: false,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl ChartProps {
    #[must_use]
    pub fn new(option: ChartOption) -> Self {
        Self {
            option: Some(option),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }
}

/// Caller-side view of the engine owned by a [`ChartAdapter`].
///
/// The view is empty before mount and after unmount.
pub struct EngineHandle<E> {
    slot: Rc<RefCell<Option<E>>>,
}

impl<E> Clone for EngineHandle<E> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<E> fmt::Debug for EngineHandle<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineHandle")
            .field("live", &self.is_live())
            .finish()
    }
}

impl<E> EngineHandle<E> {
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.slot.try_borrow().is_ok_and(|slot| slot.is_some())
    }

    /// Runs `f` against the live engine. Returns `None` when nothing is mounted
    /// or the engine is already borrowed further up the stack.
    pub fn with<R>(&self, f: impl FnOnce(&mut E) -> R) -> Option<R> {
        let mut slot = self.slot.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    }
}

impl<E: ChartEngine> EngineHandle<E> {
    /// Dispatches `action` when an engine is live; returns whether it was delivered.
    pub fn dispatch_action(&self, action: ChartAction) -> bool {
        self.with(|engine| engine.dispatch_action(action)).is_some()
    }
}

/// Binds a declarative [`ChartOption`] to one live engine instance.
///
/// The adapter creates the engine on mount, replaces its option on every prop
/// change, keeps bound events in sync with the caller's handler map, forwards
/// container resizes and disposes the engine exactly once on unmount or
/// before a theme change re-creates it.
pub struct ChartAdapter<F: EngineFactory> {
    factory: F,
    container: Option<F::Container>,
    props: ChartProps,
    state: AdapterState,
    slot: Rc<RefCell<Option<F::Engine>>>,
    handlers: Rc<RefCell<EventHandlers>>,
    dispatchers: IndexMap<ChartEventKind, EventDispatcher>,
    bound: IndexSet<ChartEventKind>,
}

impl<F: EngineFactory> ChartAdapter<F> {
    #[must_use]
    pub fn new(factory: F, props: ChartProps) -> Self {
        Self {
            factory,
            container: None,
            props,
            state: AdapterState::Unmounted,
            slot: Rc::new(RefCell::new(None)),
            handlers: Rc::new(RefCell::new(EventHandlers::new())),
            dispatchers: IndexMap::new(),
            bound: IndexSet::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> AdapterState {
        self.state
    }

    #[must_use]
    pub fn props(&self) -> &ChartProps {
        &self.props
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.state != AdapterState::Unmounted
    }

    #[must_use]
    pub fn handle(&self) -> EngineHandle<F::Engine> {
        EngineHandle {
            slot: Rc::clone(&self.slot),
        }
    }

    #[must_use]
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Event kinds currently registered on the engine, in bind order.
    pub fn bound_events(&self) -> impl Iterator<Item = ChartEventKind> + '_ {
        self.bound.iter().copied()
    }

    /// Attaches `container` (when given) and creates the engine.
    ///
    /// Without any container the call is a no-op and a later `mount` retries.
    /// Mounting an already mounted adapter keeps the current engine; a new
    /// container passed then is only used by the next engine re-init.
    pub fn mount(&mut self, container: Option<F::Container>) -> ChartResult<AdapterState> {
        if let Some(container) = container {
            self.container = Some(container);
        }
        if self.is_mounted() {
            trace!("chart engine already live; container applies on next re-init");
            return Ok(self.state);
        }
        if self.container.is_none() {
            debug!("chart container not available yet; deferring engine init");
            return Ok(self.state);
        }
        self.init_engine()?;
        Ok(self.state)
    }

    /// Replaces the option and pushes it to the live engine.
    pub fn set_option(&mut self, option: ChartOption) {
        if self.props.option.as_ref() == Some(&option) {
            return;
        }
        self.props.option = Some(option);
        self.apply_option();
    }

    pub fn set_height(&mut self, height: u32) {
        self.props.height = height;
    }

    /// Switches theme. A mounted engine is disposed and re-created.
    pub fn set_dark_mode(&mut self, dark_mode: bool) -> ChartResult<()> {
        if self.props.dark_mode == dark_mode {
            return Ok(());
        }
        self.props.dark_mode = dark_mode;
        if !self.is_mounted() {
            return Ok(());
        }
        info!(dark_mode, "theme changed; re-creating chart engine");
        self.teardown_engine();
        self.state = AdapterState::Unmounted;
        self.init_engine()
    }

    /// Replaces the caller's handler map and re-syncs bindings.
    pub fn set_events(&mut self, handlers: EventHandlers) {
        *self.handlers.borrow_mut() = handlers;
        self.sync_events();
    }

    /// Container size observation. Every change relayouts immediately.
    pub fn container_resized(&mut self, viewport: Viewport) -> bool {
        let mut slot = self.slot.borrow_mut();
        let Some(engine) = slot.as_mut() else {
            return false;
        };
        trace!(width = viewport.width, height = viewport.height, "chart container resized");
        engine.resize();
        true
    }

    /// Unbinds every event, clears the handle and disposes the engine.
    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.teardown_engine();
        self.state = AdapterState::Unmounted;
    }

    fn init_engine(&mut self) -> ChartResult<()> {
        let Some(container) = self.container.as_ref() else {
            return Ok(());
        };
        let theme = EngineTheme::for_mode(self.props.dark_mode);
        let engine = self.factory.init(container, &theme)?;
        *self.slot.borrow_mut() = Some(engine);
        self.state = AdapterState::Initializing;
        info!(dark = theme.is_dark(), "chart engine initialized");

        self.apply_option();
        self.sync_events();
        Ok(())
    }

    fn apply_option(&mut self) {
        let Some(option) = self.props.option.as_ref() else {
            return;
        };
        let mut slot = self.slot.borrow_mut();
        let Some(engine) = slot.as_mut() else {
            return;
        };
        engine.set_option(option, SetOptionOpts::REPLACE_LAZY);
        self.state = AdapterState::Ready;
    }

    fn sync_events(&mut self) {
        let mut slot = self.slot.borrow_mut();
        let Some(engine) = slot.as_mut() else {
            return;
        };

        let desired: IndexSet<ChartEventKind> = self.handlers.borrow().kinds().collect();

        for &kind in &desired {
            let dispatcher = self
                .dispatchers
                .entry(kind)
                .or_insert_with(|| EventDispatcher::new(kind, Rc::clone(&self.handlers)));
            if !self.bound.contains(&kind) {
                debug!(event = %kind, "binding chart event");
                engine.on(dispatcher.clone());
            }
        }

        for kind in &self.bound {
            if desired.contains(kind) {
                continue;
            }
            if let Some(dispatcher) = self.dispatchers.get(kind) {
                debug!(event = %kind, "unbinding chart event");
                engine.off(dispatcher);
            }
        }

        self.bound = desired;
    }

    fn teardown_engine(&mut self) {
        let Some(mut engine) = self.slot.borrow_mut().take() else {
            return;
        };
        for kind in self.bound.drain(..) {
            if let Some(dispatcher) = self.dispatchers.get(&kind) {
                engine.off(dispatcher);
            }
        }
        engine.dispose();
        info!("chart engine disposed");
    }
}

impl<F: EngineFactory> Drop for ChartAdapter<F> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<F: EngineFactory> fmt::Debug for ChartAdapter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartAdapter")
            .field("state", &self.state)
            .field("props", &self.props)
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}
