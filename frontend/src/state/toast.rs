use leptos::*;
use uuid::Uuid;

/// How long a toast stays on screen before it dismisses itself.
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notifications shared by every page through context.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
        }
    }

    pub fn items(&self) -> RwSignal<Vec<Toast>> {
        self.items
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Error, message.into())
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) -> Uuid {
        let id = Uuid::new_v4();
        match kind {
            ToastKind::Success => log::info!("toast: {}", message),
            ToastKind::Error => log::warn!("toast: {}", message),
        }
        self.items.update(|items| items.push(Toast { id, kind, message }));
        self.schedule_dismiss(id);
        id
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid) {
        let toasts = *self;
        gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || toasts.dismiss(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid) {}
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    match use_context::<Toasts>() {
        Some(toasts) => toasts,
        None => provide_toasts(),
    }
}
