//! # TUI Components
//!
//! All UI components for the template browser.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: Top status line with index name, status, and errors
//! - `TemplateCard`: One result card
//! - `Pager`: Page indicator with prev/next affordances
//! - `Loader`: Spinner shown before the first response
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBox`: Query input, emits raw edits
//! - `CategoryPicker`: Overlay list of catalog categories
//! - `ResultsGrid`: Card grid with row scrolling
//!
//! Components receive external data as props, never by reaching into the
//! core `App`, so each one can be rendered against a `TestBackend` in isolation.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (Top status line)
//! ├── search_box.rs       (Query input)
//! ├── category_picker.rs  (Category overlay)
//! ├── results_grid.rs     (Card layout + scrolling)
//! ├── template_card.rs    (Single result card)
//! ├── pager.rs            (Page control)
//! └── loader.rs           (Loading spinner)
//! ```

pub mod category_picker;
pub mod loader;
pub mod pager;
pub mod results_grid;
pub mod search_box;
pub mod template_card;
mod title_bar;

pub use category_picker::{CategoryEvent, CategoryPicker, CategoryPickerState};
pub use loader::Loader;
pub use pager::Pager;
pub use results_grid::{ResultsGrid, ResultsGridState};
pub use search_box::{SearchBox, SearchBoxEvent};
pub use title_bar::TitleBar;
