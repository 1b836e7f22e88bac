pub mod event_list;
pub mod title_bar;
pub mod toast;

pub use event_list::{EventList, EventListState, ListEvent};
pub use title_bar::TitleBar;
pub use toast::{Toast, ToastKind, ToastView};
