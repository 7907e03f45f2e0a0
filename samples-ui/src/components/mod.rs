//! Gallery UI components

pub mod filter_bar;
pub mod icons;
pub mod mobile_filter_drawer;
pub mod option_checkbox;
pub mod sample_grid;
pub mod select_box;

pub use filter_bar::FilterBarView;
pub use icons::{ChevronDownIcon, ChevronUpIcon, FilterIcon, TrashIcon, XIcon};
pub use mobile_filter_drawer::MobileFilterDrawer;
pub use option_checkbox::OptionCheckbox;
pub use sample_grid::SampleGridView;
pub use select_box::SelectBox;
