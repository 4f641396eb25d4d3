pub mod error;
pub use error::AppError;

pub mod config;
pub use config::Config;

pub mod cli;

pub mod logging;
pub use logging::Logger;

pub mod platform {
    pub mod clipboard;
    pub use clipboard::{ClipboardProvider, MemoryClipboard, SystemClipboard};

    pub mod watcher;
    pub use watcher::OwnerChangeWatcher;
}

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod context;
    pub use context::{AppContext, PastePolicy};

    pub mod monitor;
    pub use monitor::ClipboardMonitor;

    pub mod selection;
    pub use selection::SelectionHandler;

    pub mod dispatcher;
    pub use dispatcher::{Dispatcher, DispatcherStats};

    pub mod event_loop;
    pub use event_loop::EventLoop;
}

pub mod model {
    pub mod ui_state;
    pub use ui_state::{UIMode, UIState};
}

pub mod view {
    pub mod theme;

    pub mod traits;
    pub use traits::HistoryView;

    pub mod ui;
    pub use ui::UIRenderer;

    pub mod snapshots;
    pub use snapshots::{EntryRow, project};

    pub mod components {
        pub mod confirm_overlay;
        pub use confirm_overlay::ConfirmOverlay;
        pub mod history_list;
        pub use history_list::HistoryList;
        pub mod status_bar;
        pub use status_bar::StatusBar;
    }
}
