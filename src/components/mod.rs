//! UI Components for the profile screen.

mod address_book;
mod address_modal;
mod confirm_delete;
mod language_card;
mod personal_details;
mod security_card;
mod toast_stack;

pub use address_book::{AddressBook, AddressCard};
pub use address_modal::AddressFormModal;
pub use confirm_delete::ConfirmDeleteModal;
pub use language_card::LanguageCard;
pub use personal_details::PersonalDetailsCard;
pub use security_card::SecurityCard;
pub use toast_stack::ToastStack;
