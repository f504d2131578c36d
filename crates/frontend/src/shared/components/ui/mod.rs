pub mod badge;
pub mod input;
pub mod modal;
pub mod select;

pub use badge::Badge;
pub use input::Input;
pub use modal::Modal;
pub use select::Select;
