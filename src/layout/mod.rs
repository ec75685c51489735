pub mod layout_type;

pub use layout_type::DLayout;
