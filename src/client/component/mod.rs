pub mod breadcrumbs;
pub mod confirmation_modal;
pub mod header;
pub mod layout;
pub mod option_select;
pub mod page;
pub mod param_field;
pub mod searchable_dropdown;
pub mod toast;

pub use breadcrumbs::Breadcrumbs;
pub use confirmation_modal::ConfirmationModal;
pub use header::Header;
pub use layout::Layout;
pub use option_select::OptionMultiSelect;
pub use page::{ErrorPage, LoadingPage, Page};
pub use param_field::ParamFieldInput;
pub use searchable_dropdown::{DropdownItem, SearchableDropdown};
pub use toast::{push_toast, Toasts};
