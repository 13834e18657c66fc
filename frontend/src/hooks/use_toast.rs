use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Bumped for every toast so the hide timer restarts even for repeated text
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    next_id: u32,
    pub current: Option<Toast>,
}

pub enum ToastAction {
    Show(String, ToastKind),
    Hide(u32),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show(message, kind) => Rc::new(Self {
                next_id: self.next_id + 1,
                current: Some(Toast {
                    id: self.next_id,
                    message,
                    kind,
                }),
            }),
            // Only hide the toast the timer was started for
            ToastAction::Hide(id) if self.current.as_ref().map(|t| t.id) == Some(id) => {
                Rc::new(Self {
                    next_id: self.next_id,
                    current: None,
                })
            }
            ToastAction::Hide(_) => self,
        }
    }
}

/// Sends messages to the single notification toast
#[derive(Clone, PartialEq)]
pub struct Notifier {
    show: Callback<(String, ToastKind)>,
}

impl Notifier {
    pub fn info(&self, message: impl Into<String>) {
        self.show.emit((message.into(), ToastKind::Info));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show.emit((message.into(), ToastKind::Error));
    }
}

pub struct UseToastResult {
    pub current: Option<Toast>,
    pub notifier: Notifier,
    pub dismiss: Callback<()>,
}

/// Global toast with auto-dismiss after `duration_ms`
#[hook]
pub fn use_toast(duration_ms: u32) -> UseToastResult {
    let state = use_reducer(ToastState::default);

    let show = {
        let state = state.clone();
        use_callback((), move |(message, kind): (String, ToastKind), _| {
            match kind {
                ToastKind::Info => log::info!("toast: {}", message),
                ToastKind::Error => log::warn!("toast: {}", message),
            }
            state.dispatch(ToastAction::Show(message, kind));
        })
    };

    let dismiss = {
        let state = state.clone();
        use_callback(state.current.as_ref().map(|t| t.id), move |_: (), id| {
            if let Some(id) = *id {
                state.dispatch(ToastAction::Hide(id));
            }
        })
    };

    // Restart the hide timer whenever a new toast comes in
    use_effect_with(state.current.as_ref().map(|t| t.id), {
        let state = state.clone();
        move |id| {
            let timeout = id.map(|id| {
                Timeout::new(duration_ms, move || {
                    state.dispatch(ToastAction::Hide(id));
                })
            });
            move || drop(timeout)
        }
    });

    UseToastResult {
        current: state.current.clone(),
        notifier: Notifier { show },
        dismiss,
    }
}
