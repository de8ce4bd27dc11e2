pub mod changelog_view;
pub mod entry_list;
pub mod error_screen;
pub mod inline;
pub mod live_editor;
pub mod media;

pub use changelog_view::*;
pub use entry_list::*;
pub use error_screen::*;
pub use inline::*;
pub use live_editor::*;
pub use media::*;
