use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Login,
    ProfileMenu,
    Calendar,
    Guests,
}

/// Which modal is open. Holding a single value means opening one modal
/// always closes whichever was open before.
#[derive(Clone, PartialEq)]
pub struct ModalHandle {
    open: UseStateHandle<Option<ModalKind>>,
}

impl ModalHandle {
    pub fn is_open(&self, kind: ModalKind) -> bool {
        *self.open == Some(kind)
    }

    pub fn open(&self, kind: ModalKind) {
        log::debug!("opening {:?} modal", kind);
        self.open.set(Some(kind));
    }

    pub fn close(&self) {
        self.open.set(None);
    }

    /// Open `kind`, or close it when it is already the open one
    pub fn toggle(&self, kind: ModalKind) {
        if self.is_open(kind) {
            self.close();
        } else {
            self.open(kind);
        }
    }

    pub fn close_callback(&self) -> Callback<()> {
        let handle = self.clone();
        Callback::from(move |_| handle.close())
    }
}

#[hook]
pub fn use_modal() -> ModalHandle {
    ModalHandle {
        open: use_state(|| None),
    }
}
